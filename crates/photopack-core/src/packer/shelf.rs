use crate::config::PageConfig;
use crate::geometry::{effective_dims, FreeRect};
use crate::model::{Placement, PhotoInput};

/// Per-page cursor state for the Shelf driver (§4.5).
///
/// Shelf never re-sorts or searches free space; it is a strict
/// left-to-right, top-to-bottom sweep over shelves, each as tall as the
/// tallest item placed in it so far. This state is intentionally not a
/// `RectStore` — packr2's `StripPacker` (`egui`'s atlas strategy) is the
/// same cursor/row-height shape, generalized here to a fractional printable
/// area instead of an integral max_width/max_height texture.
struct ShelfCursor {
    printable: FreeRect,
    cursor_x: f64,
    cursor_y: f64,
    shelf_height: f64,
}

impl ShelfCursor {
    fn new(printable: FreeRect) -> Self {
        Self {
            printable,
            cursor_x: printable.x,
            cursor_y: printable.y,
            shelf_height: 0.0,
        }
    }

    /// Attempts to place a `(rw, rh)` footprint on the current page,
    /// advancing shelves as needed. Returns `None` if the item does not fit
    /// anywhere on the current page (caller decides whether to open a new
    /// page or drop).
    fn try_place(&mut self, rw: f64, rh: f64) -> Option<(f64, f64)> {
        if self.cursor_x + rw > self.printable.right() {
            self.cursor_x = self.printable.x;
            self.cursor_y += self.shelf_height;
            self.shelf_height = 0.0;
        }

        if self.cursor_y + rh > self.printable.bottom() {
            return None;
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += rw;
        self.shelf_height = self.shelf_height.max(rh);
        Some(pos)
    }
}

/// Runs the Shelf driver over already-sorted inputs (§4.5).
pub fn run<Payload: Clone>(
    sorted: Vec<PhotoInput<Payload>>,
    config: &PageConfig,
    printable: FreeRect,
) -> Vec<Placement<Payload>> {
    let mut placements = Vec::with_capacity(sorted.len());
    let mut page_index = 0usize;
    let mut cursor = ShelfCursor::new(printable);

    for input in sorted {
        let (ew, eh) = effective_dims(&input.size, input.rotation);
        let (rw, rh) = (ew + config.spacing, eh + config.spacing);

        // An item whose footprint exceeds the whole printable area can
        // never fit any page; drop it immediately without consuming a page.
        if rw > printable.width || rh > printable.height {
            continue;
        }

        let pos = match cursor.try_place(rw, rh) {
            Some(pos) => pos,
            None => {
                if !config.multi_page {
                    continue;
                }
                page_index += 1;
                cursor = ShelfCursor::new(printable);
                match cursor.try_place(rw, rh) {
                    Some(pos) => pos,
                    None => continue,
                }
            }
        };

        placements.push(Placement {
            id: input.id,
            payload: input.payload,
            size: input.size,
            rotation: input.rotation,
            x: pos.0,
            y: pos.1,
            effective_width: ew,
            effective_height: eh,
            page_index,
        });
    }

    placements
}
