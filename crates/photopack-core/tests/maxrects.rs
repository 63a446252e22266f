use photopack_core::{pack, Algorithm, PageConfig, PhotoInput, PhotoSize, Rotation};

fn photo(id: u64, w: f64, h: f64) -> PhotoInput<()> {
    PhotoInput::new(id, PhotoSize::new("p", w, h), Rotation::Deg0, ())
}

/// Best-short-side-fit (§4.6): a item that fits several free rects lands in
/// the tightest one rather than the first or largest.
#[test]
fn best_short_side_fit_chooses_tightest_rect() {
    let cfg = PageConfig::builder().page_size(20.0, 10.0).build();
    // First item splits the page into a tall-narrow rect and a short-wide
    // rect; the second item should land in whichever leaves the smaller
    // leftover rather than overflowing into a new page.
    let inputs = vec![photo(1, 5.0, 10.0), photo(2, 14.0, 9.0)];
    let placements = pack(inputs, cfg, Algorithm::MaxRects).unwrap();
    assert_eq!(placements.len(), 2);
    assert!(placements.iter().all(|p| p.page_index == 0));
}

/// No two placements on the same page overlap, including after the
/// host-only split + containment-prune cycle (§4.3 item 2) runs repeatedly.
#[test]
fn many_small_items_never_overlap_on_a_page() {
    let cfg = PageConfig::builder().page_size(64.0, 64.0).build();
    let inputs: Vec<_> = (0..40).map(|i| photo(i, 4.0, 4.0)).collect();
    let placements = pack(inputs, cfg, Algorithm::MaxRects).unwrap();
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            let a = &placements[i];
            let b = &placements[j];
            if a.page_index != b.page_index {
                continue;
            }
            let overlap = !(a.x + a.effective_width <= b.x
                || b.x + b.effective_width <= a.x
                || a.y + a.effective_height <= b.y
                || b.y + b.effective_height <= a.y);
            assert!(!overlap, "placements {} and {} overlap", a.id, b.id);
        }
    }
}
