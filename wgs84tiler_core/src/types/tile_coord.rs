//! Tile addresses in the Web Mercator quad tree.

use super::MAX_LEVEL;
use crate::transform::{latitude_to_tile_y, longitude_to_tile_x, tile_x_to_longitude, tile_y_to_latitude};
use anyhow::{Result, ensure};
use std::fmt::{self, Debug, Display};
use wgs84tiler_derive::context;

/// A tile at zoom `level`, column `x` and row `y`, with `0 <= x, y < 2^level`.
#[derive(Eq, PartialEq, Clone, Copy, Hash)]
pub struct TileCoord {
	pub level: u8,
	pub x: u32,
	pub y: u32,
}

impl TileCoord {
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let max = 1u64 << level;
		ensure!(u64::from(x) < max, "x ({x}) out of bounds for level {level}");
		ensure!(u64::from(y) < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// The tile containing the point `lon`/`lat`.
	///
	/// ```
	/// use wgs84tiler_core::TileCoord;
	///
	/// let coord = TileCoord::from_geo(2.1484, 48.8687, 15).unwrap();
	/// assert_eq!(coord.to_string(), "15/16579/11271");
	/// ```
	#[context("converting ({lon}, {lat}) at level {level} to a tile")]
	pub fn from_geo(lon: f64, lat: f64, level: u8) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let x = longitude_to_tile_x(lon, level);
		let y = latitude_to_tile_y(lat, level);
		TileCoord::new(level, u32::try_from(x)?, u32::try_from(y)?)
	}

	/// `[lon, lat]` of the north-west corner.
	pub fn as_geo(&self) -> [f64; 2] {
		[
			tile_x_to_longitude(i64::from(self.x), self.level),
			tile_y_to_latitude(i64::from(self.y), self.level),
		]
	}

	/// `[lon, lat]` of the opposite, south-east corner.
	pub fn as_geo_south_east(&self) -> [f64; 2] {
		[
			tile_x_to_longitude(i64::from(self.x) + 1, self.level),
			tile_y_to_latitude(i64::from(self.y) + 1, self.level),
		]
	}

	/// `[lon, lat]` halfway between both corners. Unlike the corners it converts back to
	/// exactly this tile.
	pub fn as_geo_center(&self) -> [f64; 2] {
		let [west, north] = self.as_geo();
		let [east, south] = self.as_geo_south_east();
		[(west + east) / 2.0, (north + south) / 2.0]
	}
}

/// Formats as `TileCoord(level, [x, y])`.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}

/// Formats as the `level/x/y` path used on disk.
impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}
