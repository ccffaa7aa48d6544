use anyhow::{Result, ensure};
use std::fmt::{self, Debug, Display};
use wgs84tiler_derive::context;

/// Northern/southern latitude limit of the Web Mercator projection.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// The rectangle covered by a source image, in WGS84 degrees.
///
/// `top`/`bottom` are latitudes, `left`/`right` are longitudes. Construct it with
/// [`GeoBounds::new`], which enforces `top > bottom`, `right > left` and keeps every edge inside
/// the area the Web Mercator formulas are defined for.
///
/// ```
/// use wgs84tiler_core::GeoBounds;
///
/// let bounds = GeoBounds::new(48.8687073004617, 48.8651234503015, 2.14840505163567, 2.15657022586739).unwrap();
/// assert!(bounds.width() > 0.008);
///
/// assert!(GeoBounds::new(1.0, 2.0, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBounds {
	pub top: f64,
	pub bottom: f64,
	pub left: f64,
	pub right: f64,
}

impl GeoBounds {
	#[context("invalid bounds (top {top}, bottom {bottom}, left {left}, right {right})")]
	pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Result<GeoBounds> {
		for (name, value) in [("top", top), ("bottom", bottom), ("left", left), ("right", right)] {
			ensure!(value.is_finite(), "{name} must be a finite number");
		}
		ensure!(top > bottom, "top ({top}) must be greater than bottom ({bottom})");
		ensure!(right > left, "right ({right}) must be greater than left ({left})");
		ensure!(top <= MAX_MERCATOR_LAT, "top ({top}) must be <= {MAX_MERCATOR_LAT}");
		ensure!(bottom >= -MAX_MERCATOR_LAT, "bottom ({bottom}) must be >= -{MAX_MERCATOR_LAT}");
		ensure!(left >= -180.0, "left ({left}) must be >= -180");
		ensure!(right <= 180.0, "right ({right}) must be <= 180");

		Ok(GeoBounds {
			top,
			bottom,
			left,
			right,
		})
	}

	/// Longitude span in degrees.
	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	/// Latitude span in degrees.
	pub fn height(&self) -> f64 {
		self.top - self.bottom
	}

	/// `[left, bottom, right, top]`, the usual west/south/east/north order.
	pub fn as_array(&self) -> [f64; 4] {
		[self.left, self.bottom, self.right, self.top]
	}
}

impl Debug for GeoBounds {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"GeoBounds(top: {}, bottom: {}, left: {}, right: {})",
			self.top, self.bottom, self.left, self.right
		)
	}
}

impl Display for GeoBounds {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.left, self.bottom, self.right, self.top)
	}
}

impl TryFrom<[f64; 4]> for GeoBounds {
	type Error = anyhow::Error;

	/// Builds bounds from `[top, bottom, left, right]`.
	fn try_from(value: [f64; 4]) -> Result<Self> {
		GeoBounds::new(value[0], value[1], value[2], value[3])
	}
}
