//! Conversions between WGS84 degrees and Web Mercator tile indices.
//!
//! The forward functions floor onto the tile grid, the inverse functions return the
//! north-west corner of a tile. They are plain formulas: nothing is validated or clamped,
//! so latitudes close to ±90° or longitudes outside ±180° produce values outside
//! `[0, 2^zoom)` (or non-finite values). Callers validate their input first, see
//! [`GeoBounds::new`](crate::GeoBounds::new).
//!
//! ```
//! use wgs84tiler_core::transform::*;
//!
//! assert_eq!(longitude_to_tile_x(2.1484, 15), 16579);
//! assert_eq!(latitude_to_tile_y(48.8687, 15), 11271);
//! assert_eq!(tile_x_to_longitude(0, 3), -180.0);
//! ```

use std::f64::consts::PI;

fn tile_count(zoom: u8) -> f64 {
	2f64.powi(i32::from(zoom))
}

/// Column of the tile containing longitude `lon` at `zoom`.
pub fn longitude_to_tile_x(lon: f64, zoom: u8) -> i64 {
	(((lon + 180.0) / 360.0) * tile_count(zoom)).floor() as i64
}

/// Row of the tile containing latitude `lat` at `zoom`.
pub fn latitude_to_tile_y(lat: f64, zoom: u8) -> i64 {
	let rad = lat * PI / 180.0;
	(((1.0 - (rad.tan() + 1.0 / rad.cos()).ln() / PI) / 2.0) * tile_count(zoom)).floor() as i64
}

/// Longitude of the western edge of tile column `x`.
pub fn tile_x_to_longitude(x: i64, zoom: u8) -> f64 {
	(x as f64 / tile_count(zoom)) * 360.0 - 180.0
}

/// Latitude of the northern edge of tile row `y`.
pub fn tile_y_to_latitude(y: i64, zoom: u8) -> f64 {
	(180.0 / PI) * (PI - 2.0 * PI * y as f64 / tile_count(zoom)).sinh().atan()
}
