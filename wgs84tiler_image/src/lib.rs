//! Raster operations used while slicing: resampling, cropping, pasting, and reading and writing
//! tile files.
//!
//! Everything works on `image::DynamicImage` in RGBA8, the pixel layout of every tile.

mod filter;
pub use filter::*;

pub mod format;

pub mod traits;
pub use traits::*;

use image::{DynamicImage, Rgba, RgbaImage};
use wgs84tiler_core::TILE_SIZE;

/// Colour of tile pixels no source image has covered yet: fully transparent grey.
pub const BLANK_COLOR: Rgba<u8> = Rgba([128, 128, 128, 0]);

/// A new, completely blank tile canvas.
pub fn blank_tile() -> DynamicImage {
	DynamicImage::ImageRgba8(RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, BLANK_COLOR))
}
