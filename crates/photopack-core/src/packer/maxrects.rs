use crate::geometry::FreeRect;
use crate::packer::RectStore;

/// Free-region store for the MaxRects driver (§4.3, §4.6).
///
/// This is the "split host only, then prune" variant rather than canonical
/// MaxRects rectangle-subdivision: only the selected host rect is split, the
/// two candidate children each span the host's *full* width or height, and
/// any free rect (new or pre-existing) that ends up contained in another is
/// pruned afterward. This is an explicit source-fidelity requirement
/// (§4.3 item 2, §9) — not a simplification of convenience.
#[derive(Debug, Clone)]
pub struct MaxRectsStore {
    free: Vec<FreeRect>,
}

impl RectStore for MaxRectsStore {
    fn new(printable: FreeRect) -> Self {
        Self {
            free: vec![printable],
        }
    }

    /// Best-short-side-fit scan (§4.6 steps 2–3): minimize `short_side_fit`,
    /// then `long_side_fit`, then lowest index — no rotation trial.
    fn find_fit(&self, rw: f64, rh: f64) -> Option<(usize, FreeRect)> {
        self.free
            .iter()
            .enumerate()
            .filter(|(_, r)| r.fits(rw, rh))
            .map(|(i, r)| {
                let short = (r.width - rw).min(r.height - rh);
                let long = (r.width - rw).max(r.height - rh);
                (i, *r, short, long)
            })
            .min_by(|a, b| {
                a.2.partial_cmp(&b.2)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.3.partial_cmp(&b.3).unwrap_or(std::cmp::Ordering::Equal))
                    .then_with(|| a.0.cmp(&b.0))
            })
            .map(|(i, r, _, _)| (i, r))
    }

    fn place(&mut self, index: usize, rw: f64, rh: f64) {
        let host = self.free.remove(index);

        let mut candidates = Vec::with_capacity(2);
        if host.width > rw {
            candidates.push(FreeRect::new(
                host.x + rw,
                host.y,
                host.width - rw,
                host.height,
            ));
        }
        if host.height > rh {
            candidates.push(FreeRect::new(
                host.x,
                host.y + rh,
                host.width,
                host.height - rh,
            ));
        }

        for c in candidates {
            if !self.free.iter().any(|existing| c.contained_in(existing)) {
                self.free.push(c);
            }
        }

        prune_contained(&mut self.free);
        sort_area_desc(&mut self.free);
    }
}

/// Removes every free rect strictly (or non-strictly, against a distinct
/// rect) contained in another, per §4.3 item 2's pruning rule.
fn prune_contained(free: &mut Vec<FreeRect>) {
    let mut keep = vec![true; free.len()];
    for i in 0..free.len() {
        if !keep[i] {
            continue;
        }
        for j in 0..free.len() {
            if i == j || !keep[j] {
                continue;
            }
            if free[i].contained_in(&free[j]) {
                keep[i] = false;
                break;
            }
        }
    }
    let mut idx = 0;
    free.retain(|_| {
        let k = keep[idx];
        idx += 1;
        k
    });
}

fn sort_area_desc(free: &mut [FreeRect]) {
    free.sort_by(|a, b| {
        b.area()
            .partial_cmp(&a.area())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_short_side_fit_prefers_tighter_rect() {
        let mut store = MaxRectsStore { free: vec![] };
        store.free.push(FreeRect::new(0.0, 0.0, 10.0, 10.0));
        store.free.push(FreeRect::new(20.0, 0.0, 5.0, 5.0));
        let (idx, r) = store.find_fit(4.0, 4.0).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(r, FreeRect::new(20.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn placing_prunes_contained_free_rects() {
        let mut store = MaxRectsStore::new(FreeRect::new(0.0, 0.0, 10.0, 10.0));
        let (idx, _) = store.find_fit(4.0, 4.0).unwrap();
        store.place(idx, 4.0, 4.0);
        for a in &store.free {
            for b in &store.free {
                if a != b {
                    assert!(!a.contained_in(b));
                }
            }
        }
    }
}
