//! Pixel operations on `DynamicImage` for cutting tiles.
//!
//! - [`get_resampled`](DynamicImageTraitOperation::get_resampled) scales with `fast_image_resize`
//! - [`get_part`](DynamicImageTraitOperation::get_part) crops without resampling
//! - [`paste`](DynamicImageTraitOperation::paste) replaces pixels, no alpha blending

use crate::ResampleFilter;
use anyhow::{Result, ensure};
use fast_image_resize::{ResizeOptions, Resizer};
use image::{ColorType, DynamicImage, imageops};
use wgs84tiler_derive::context;

pub trait DynamicImageTraitOperation {
	/// Returns an RGBA8 copy scaled to exactly `width × height`.
	fn get_resampled(&self, width: u32, height: u32, filter: ResampleFilter) -> Result<DynamicImage>;

	/// Returns the rectangle `(x, y, width, height)`, clipped to the image.
	fn get_part(&self, x: u32, y: u32, width: u32, height: u32) -> DynamicImage;

	/// Writes `part` into `self` with its top-left corner at `(left, top)`.
	///
	/// Pixels under `part` are replaced, including their alpha; everything else stays untouched.
	/// Whatever reaches past the edges of `self` is dropped.
	fn paste(&mut self, part: &DynamicImage, left: u32, top: u32);
}

impl DynamicImageTraitOperation for DynamicImage {
	#[context("resampling {}x{} image to {}x{} ({:?})", self.width(), self.height(), width, height, filter)]
	fn get_resampled(&self, width: u32, height: u32, filter: ResampleFilter) -> Result<DynamicImage> {
		ensure!(width > 0 && height > 0, "target size must not be empty");

		let source = match self {
			DynamicImage::ImageRgba8(_) => self.clone(),
			_ => DynamicImage::ImageRgba8(self.to_rgba8()),
		};

		let mut resampled = DynamicImage::new(width, height, ColorType::Rgba8);
		Resizer::new().resize(
			&source,
			&mut resampled,
			&ResizeOptions::new().resize_alg(filter.as_resize_alg()),
		)?;
		Ok(resampled)
	}

	fn get_part(&self, x: u32, y: u32, width: u32, height: u32) -> DynamicImage {
		self.crop_imm(x, y, width, height)
	}

	fn paste(&mut self, part: &DynamicImage, left: u32, top: u32) {
		imageops::replace(self, part, i64::from(left), i64::from(top));
	}
}
