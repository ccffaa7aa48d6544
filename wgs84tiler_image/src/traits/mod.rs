//! Extensions of [`image::DynamicImage`] used by the slicer.
//!
//! - [`DynamicImageTraitOperation`]: resampling, cropping and pasting
//! - `DynamicImageTraitTest`: deterministic test images (tests and the `test` feature only)

mod operation;

pub use operation::*;
#[cfg(any(test, feature = "test"))]
pub use test::*;
