//! Deterministic 2D rectangle bin-packing core.
//!
//! Lays out fixed-size photo rectangles onto fixed-size pages, respecting
//! per-page margins and inter-photo spacing, using one of three heuristic
//! algorithms: Guillotine, Shelf, or MaxRects. The core never touches pixel
//! data, never logs, and performs no I/O — see [`pack`] for the only entry
//! point.
//!
//! Quick example:
//! ```
//! use photopack_core::prelude::*;
//!
//! let inputs = vec![PhotoInput::new(
//!     1,
//!     PhotoSize::new("print", 2.0, 3.0),
//!     Rotation::Deg0,
//!     (),
//! )];
//! let config = PageConfig::builder()
//!     .page_size(4.0, 6.0)
//!     .uniform_margin(0.25)
//!     .build();
//! let placements = pack(inputs, config, Algorithm::MaxRects).unwrap();
//! assert_eq!(placements.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod packer;
pub mod pipeline;
pub mod prepare;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use model::*;
pub use pipeline::pack;

/// Convenience prelude for common types and functions.
/// Importing `photopack_core::prelude::*` brings the primary API into scope.
pub mod prelude {
    pub use crate::config::{PageConfig, PageConfigBuilder};
    pub use crate::error::{PackError, Result};
    pub use crate::geometry::{effective_dims, printable_area, FreeRect};
    pub use crate::model::{Algorithm, PhotoInput, PhotoSize, Placement, Rotation};
    pub use crate::pipeline::pack;
}
