use crate::config::PageConfig;
use crate::error::{PackError, Result};
use crate::model::{PhotoSize, Rotation};

/// An axis-aligned rectangle of free space, in printable-area coordinates.
///
/// FreeRects are transient and exist only for the lifetime of a single
/// `pack` invocation (§3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FreeRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn fits(&self, w: f64, h: f64) -> bool {
        w <= self.width && h <= self.height
    }

    /// True if `self` lies fully inside `other` (§4.3 "strictly contained",
    /// non-strict form used for pruning comparisons).
    pub fn contained_in(&self, other: &FreeRect) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }
}

/// `printable_area(config) → FreeRect` (§4.1).
///
/// Fails with `InvalidGeometry` if the resulting width or height is not
/// strictly positive.
pub fn printable_area(config: &PageConfig) -> Result<FreeRect> {
    let width = config.page_width - config.margin_left - config.margin_right;
    let height = config.page_height - config.margin_top - config.margin_bottom;
    if width <= 0.0 || height <= 0.0 {
        return Err(PackError::InvalidGeometry(format!(
            "margins leave no printable area: {width}x{height}"
        )));
    }
    Ok(FreeRect::new(config.margin_left, config.margin_top, width, height))
}

/// `effective_dims(size, rotation) → (w, h)` (§4.1).
///
/// Swaps width and height for the two rotations that rotate the photo
/// onto its side; otherwise returns the size unchanged.
pub fn effective_dims(size: &PhotoSize, rotation: Rotation) -> (f64, f64) {
    if rotation.swaps_axes() {
        (size.height, size.width)
    } else {
        (size.width, size.height)
    }
}
