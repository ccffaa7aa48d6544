//! Slices georeferenced images into slippy map tiles.
//!
//! A source image covering a WGS84 rectangle is resampled once to the pixel resolution of the
//! requested zoom level and cut into 256×256 tiles stored as `{out}/{zoom}/{x}/{y}.{ext}`.
//! Tiles that already exist are merged: only the pixels covered by the new image are replaced,
//! so neighbouring images can be sliced into the same folder one after another.
//!
//! ```no_run
//! use std::path::Path;
//! use wgs84tiler::{GeoBounds, SliceParameters, slice_file};
//!
//! let bounds = GeoBounds::new(48.8687073004617, 48.8651234503015, 2.14840505163567, 2.15657022586739)?;
//! let report = slice_file(Path::new("paris.jpg"), &bounds, 15, Path::new("tiles"), &SliceParameters::default())?;
//! println!("{report}");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Runs are meant to be sequential. Two runs writing into the same tile at the same time can lose
//! each other's pixels.

mod parameters;
pub use parameters::*;

mod report;
pub use report::*;

mod slicer;
pub use slicer::*;

mod writer;
pub use writer::*;

pub use wgs84tiler_core::{GeoBounds, SliceCell, TargetGeometry, TileCoord, TileFormat, plan_slices};
pub use wgs84tiler_image::ResampleFilter;
