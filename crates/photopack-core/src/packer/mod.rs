use crate::geometry::FreeRect;

pub mod guillotine;
pub mod maxrects;
pub mod shelf;

/// A free-region store shared by the two algorithms whose state is a
/// rectangle collection (Guillotine, MaxRects). Shelf's state is a simple
/// cursor pair and is deliberately not forced into this abstraction (§9,
/// "Free-rect stores differ materially between Shelf and the other two").
pub trait RectStore {
    /// A fresh store seeded with a single free rect equal to the printable area.
    fn new(printable: FreeRect) -> Self;

    /// Finds a host rect for a `(rw, rh)` footprint and returns its index
    /// and value, without mutating the store.
    fn find_fit(&self, rw: f64, rh: f64) -> Option<(usize, FreeRect)>;

    /// Splits (and, for MaxRects, prunes) the store after placing an item of
    /// footprint `(rw, rh)` into the free rect at `index`.
    fn place(&mut self, index: usize, rw: f64, rh: f64);
}
