use crate::geometry::FreeRect;
use crate::packer::RectStore;

/// Free-region store for the Guillotine driver (§4.3, §4.4).
///
/// Splits the *used* rectangle only — the right strip spans the placed
/// item's height, the bottom strip spans the host's full width — and never
/// merges adjacent free rects back together. The two children exactly tile
/// the host with no overlap, so no pruning step is needed.
#[derive(Debug, Clone)]
pub struct GuillotineStore {
    free: Vec<FreeRect>,
}

impl RectStore for GuillotineStore {
    fn new(printable: FreeRect) -> Self {
        Self {
            free: vec![printable],
        }
    }

    /// First-fit scan in current order (§4.4 step 2). Because the store is
    /// kept area-descending after every split, this is effectively
    /// "largest-area free rect that fits" rather than raw insertion order.
    fn find_fit(&self, rw: f64, rh: f64) -> Option<(usize, FreeRect)> {
        self.free
            .iter()
            .enumerate()
            .find(|(_, r)| r.fits(rw, rh))
            .map(|(i, r)| (i, *r))
    }

    fn place(&mut self, index: usize, rw: f64, rh: f64) {
        let host = self.free.remove(index);
        if host.width > rw {
            self.free
                .push(FreeRect::new(host.x + rw, host.y, host.width - rw, rh));
        }
        if host.height > rh {
            self.free.push(FreeRect::new(
                host.x,
                host.y + rh,
                host.width,
                host.height - rh,
            ));
        }
        sort_area_desc(&mut self.free);
    }
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
    fn split_tiles_host_exactly_with_no_gap_or_overlap() {
        let mut store = GuillotineStore::new(FreeRect::new(0.0, 0.0, 10.0, 8.0));
        let (idx, host) = store.find_fit(4.0, 3.0).unwrap();
        store.place(idx, 4.0, 3.0);
        let total_children: f64 = store.free.iter().map(|r| r.area()).sum();
        assert_eq!(host.area(), 80.0);
        assert_eq!(total_children, 80.0 - 4.0 * 3.0);
    }

    #[test]
    fn exact_fit_leaves_no_free_rects() {
        let mut store = GuillotineStore::new(FreeRect::new(0.0, 0.0, 4.0, 3.0));
        let (idx, _) = store.find_fit(4.0, 3.0).unwrap();
        store.place(idx, 4.0, 3.0);
        assert!(store.free.is_empty());
    }

    #[test]
    fn no_fit_returns_none() {
        let store = GuillotineStore::new(FreeRect::new(0.0, 0.0, 4.0, 3.0));
        assert!(store.find_fit(5.0, 3.0).is_none());
    }
}
