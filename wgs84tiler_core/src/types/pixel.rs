//! Pixel space types: image sizes, paste offsets and crop rectangles.

use std::fmt::{self, Debug};

/// Size of the resampled image in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelDimension {
	pub width: u32,
	pub height: u32,
}

impl PixelDimension {
	pub fn new(width: u32, height: u32) -> PixelDimension {
		PixelDimension { width, height }
	}
}

/// Offset inside a tile canvas, always in `0..TILE_SIZE`.
///
/// For the whole run it is the position of the bounds' north-west corner inside its tile;
/// per cell it is where the cropped part gets pasted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelShift {
	pub left: u32,
	pub top: u32,
}

impl PixelShift {
	pub fn new(left: u32, top: u32) -> PixelShift {
		PixelShift { left, top }
	}
}

/// Crop rectangle in the pixel space of the resampled image.
///
/// Signed, because the planning arithmetic is allowed to produce rectangles that reach past the
/// image. [`SliceRegion::clip`] yields the part that actually exists.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SliceRegion {
	pub left: i64,
	pub top: i64,
	pub width: i64,
	pub height: i64,
}

impl SliceRegion {
	pub fn new(left: i64, top: i64, width: i64, height: i64) -> SliceRegion {
		SliceRegion {
			left,
			top,
			width,
			height,
		}
	}

	pub fn right(&self) -> i64 {
		self.left + self.width
	}

	pub fn bottom(&self) -> i64 {
		self.top + self.height
	}

	/// Intersects the region with an image of size `dimension` and returns
	/// `(x, y, width, height)`, or `None` when nothing is left.
	///
	/// ```
	/// use wgs84tiler_core::{PixelDimension, SliceRegion};
	///
	/// let image = PixelDimension::new(191, 153);
	/// assert_eq!(SliceRegion::new(115, 0, 76, 153).clip(&image), Some((115, 0, 76, 153)));
	/// assert_eq!(SliceRegion::new(150, -10, 100, 20).clip(&image), Some((150, 0, 41, 10)));
	/// assert_eq!(SliceRegion::new(191, 0, 10, 10).clip(&image), None);
	/// ```
	pub fn clip(&self, dimension: &PixelDimension) -> Option<(u32, u32, u32, u32)> {
		let x0 = self.left.clamp(0, i64::from(dimension.width));
		let y0 = self.top.clamp(0, i64::from(dimension.height));
		let x1 = self.right().clamp(0, i64::from(dimension.width));
		let y1 = self.bottom().clamp(0, i64::from(dimension.height));
		if x1 <= x0 || y1 <= y0 {
			return None;
		}
		Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
	}
}

/// Formats as `SliceRegion(left,top -> right,bottom)`.
impl Debug for SliceRegion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"SliceRegion({},{} -> {},{})",
			self.left,
			self.top,
			self.right(),
			self.bottom()
		)
	}
}
