use photopack_core::{pack, Algorithm, PageConfig, PhotoInput, PhotoSize, Rotation};

fn photo(id: u64, w: f64, h: f64, rotation: Rotation) -> PhotoInput<()> {
    PhotoInput::new(id, PhotoSize::new("p", w, h), rotation, ())
}

/// S1 — single fit.
#[test]
fn s1_single_fit() {
    let cfg = PageConfig::builder()
        .page_size(4.0, 6.0)
        .uniform_margin(0.25)
        .build();
    let inputs = vec![photo(1, 2.0, 3.0, Rotation::Deg0)];
    let placements = pack(inputs, cfg, Algorithm::MaxRects).unwrap();
    assert_eq!(placements.len(), 1);
    let p = &placements[0];
    assert_eq!((p.x, p.y), (0.25, 0.25));
    assert_eq!(p.page_index, 0);
    assert_eq!((p.effective_width, p.effective_height), (2.0, 3.0));
}

/// S2 — row fill, Shelf.
#[test]
fn s2_row_fill_shelf() {
    let cfg = PageConfig::builder().page_size(6.0, 4.0).build();
    let inputs: Vec<_> = (1..=3).map(|id| photo(id, 2.0, 2.0, Rotation::Deg0)).collect();
    let placements = pack(inputs, cfg, Algorithm::Shelf).unwrap();
    assert_eq!(placements.len(), 3);
    assert_eq!((placements[0].x, placements[0].y), (0.0, 0.0));
    assert_eq!((placements[1].x, placements[1].y), (2.0, 0.0));
    assert_eq!((placements[2].x, placements[2].y), (4.0, 0.0));
    assert!(placements.iter().all(|p| p.page_index == 0));
}

/// S3 — Shelf overflow to new shelf.
#[test]
fn s3_shelf_overflow_to_new_shelf() {
    let cfg = PageConfig::builder().page_size(5.0, 4.0).build();
    let inputs: Vec<_> = (1..=3).map(|id| photo(id, 2.0, 2.0, Rotation::Deg0)).collect();
    let placements = pack(inputs, cfg, Algorithm::Shelf).unwrap();
    assert_eq!((placements[0].x, placements[0].y), (0.0, 0.0));
    assert_eq!((placements[1].x, placements[1].y), (2.0, 0.0));
    assert_eq!((placements[2].x, placements[2].y), (0.0, 2.0));
}

/// S4 — multi-page spill, any algorithm.
#[test]
fn s4_multi_page_spill() {
    let cfg = PageConfig::builder()
        .page_size(4.0, 6.0)
        .multi_page(true)
        .build();
    for algorithm in [Algorithm::Guillotine, Algorithm::Shelf, Algorithm::MaxRects] {
        let inputs = vec![
            photo(1, 4.0, 4.0, Rotation::Deg0),
            photo(2, 4.0, 4.0, Rotation::Deg0),
        ];
        let placements = pack(inputs, cfg.clone(), algorithm).unwrap();
        assert_eq!(placements.len(), 2, "algorithm {algorithm:?}");
        assert_eq!((placements[0].x, placements[0].y, placements[0].page_index), (0.0, 0.0, 0));
        assert_eq!((placements[1].x, placements[1].y, placements[1].page_index), (0.0, 0.0, 1));
    }
}

/// S5 — rotation changes footprint, item dropped.
#[test]
fn s5_rotation_changes_footprint_drops_item() {
    let cfg = PageConfig::builder().page_size(3.0, 5.0).build();
    let inputs = vec![photo(1, 3.0, 5.0, Rotation::Deg90)];
    let placements = pack(inputs, cfg, Algorithm::MaxRects).unwrap();
    assert!(placements.is_empty());
}

/// S6 — priority ordering.
#[test]
fn s6_priority_ordering() {
    let cfg = PageConfig::builder()
        .page_size(4.0, 6.0)
        .multi_page(false)
        .build();
    for algorithm in [Algorithm::Guillotine, Algorithm::Shelf, Algorithm::MaxRects] {
        let a = photo(1, 4.0, 4.0, Rotation::Deg0).with_priority(0);
        let b = photo(2, 4.0, 4.0, Rotation::Deg0).with_priority(10);
        let placements = pack(vec![a, b], cfg.clone(), algorithm).unwrap();
        assert_eq!(placements.len(), 1, "algorithm {algorithm:?}");
        assert_eq!(placements[0].id, 2, "algorithm {algorithm:?}");
    }
}
