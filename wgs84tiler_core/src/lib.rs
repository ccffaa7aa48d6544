//! Geometry of slicing a georeferenced image into slippy map tiles.
//!
//! - [`transform`]: WGS84 degrees ↔ Web Mercator tile indices
//! - [`TargetGeometry`]: resampled size, covered tile grid and pixel shift of one run
//! - [`plan_slices`]: crop rectangle and paste offset for every tile of the grid
//!
//! Nothing in here touches pixels or files.

mod geometry;
pub use geometry::*;

mod plan;
pub use plan::*;

pub mod transform;

pub mod types;
pub use types::*;
