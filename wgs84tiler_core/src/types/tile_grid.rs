//! The rectangle of tiles covering a [`GeoBounds`].

use super::{GeoBounds, TileCoord};
use crate::transform::{latitude_to_tile_y, longitude_to_tile_x};
use std::fmt::{self, Debug};

/// Inclusive tile ranges `left..=right` and `top..=bottom` at one zoom level.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TileGridBounds {
	pub level: u8,
	pub top: u32,
	pub bottom: u32,
	pub left: u32,
	pub right: u32,
}

impl TileGridBounds {
	/// Tiles containing the four edges of `bounds`.
	///
	/// An edge lying exactly on the world border (e.g. `right == 180`) would address the
	/// nonexistent tile `2^level`; such indices are pulled back onto the last column or row.
	pub fn from_geo_bounds(bounds: &GeoBounds, level: u8) -> TileGridBounds {
		let max = (1i64 << level) - 1;
		let clamp = |value: i64| value.clamp(0, max) as u32;
		TileGridBounds {
			level,
			top: clamp(latitude_to_tile_y(bounds.top, level)),
			bottom: clamp(latitude_to_tile_y(bounds.bottom, level)),
			left: clamp(longitude_to_tile_x(bounds.left, level)),
			right: clamp(longitude_to_tile_x(bounds.right, level)),
		}
	}

	/// Number of tile columns.
	pub fn width(&self) -> u32 {
		self.right - self.left + 1
	}

	/// Number of tile rows.
	pub fn height(&self) -> u32 {
		self.bottom - self.top + 1
	}

	pub fn count(&self) -> u64 {
		u64::from(self.width()) * u64::from(self.height())
	}

	pub fn contains(&self, coord: &TileCoord) -> bool {
		coord.level == self.level
			&& (self.left..=self.right).contains(&coord.x)
			&& (self.top..=self.bottom).contains(&coord.y)
	}

	/// Iterates column by column: the outer loop walks `x`, the inner loop walks `y`.
	pub fn iter_coords(&self) -> impl Iterator<Item = TileCoord> + use<> {
		let TileGridBounds {
			level,
			top,
			bottom,
			left,
			right,
		} = *self;
		(left..=right).flat_map(move |x| (top..=bottom).map(move |y| TileCoord { level, x, y }))
	}
}

/// Formats as `TileGridBounds(level, [left, top, right, bottom])`.
impl Debug for TileGridBounds {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileGridBounds({}, [{}, {}, {}, {}])",
			self.level, self.left, self.top, self.right, self.bottom
		)
	}
}
