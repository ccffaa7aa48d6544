//! Target geometry of one slicing run: how large the resampled image must be, which tiles it
//! covers and where its north-west corner sits inside the first tile.
//!
//! The resampled width follows from the longitude resolution of the tile under `bounds.left`.
//! The height keeps the aspect ratio of the source image, which assumes the source already
//! matches the latitude band; no Mercator stretching is applied.

use crate::{GeoBounds, MAX_LEVEL, PixelDimension, PixelShift, TILE_SIZE, TileGridBounds, transform::*};
use anyhow::{Result, ensure};
use wgs84tiler_derive::context;

/// Everything the slicer needs to know, derived once per run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
	pub level: u8,
	pub bounds: GeoBounds,
	/// size of the resampled image
	pub size: PixelDimension,
	/// tiles covered by `bounds`
	pub grid: TileGridBounds,
	/// offset of `bounds`' north-west corner inside the tile `(grid.left, grid.top)`
	pub shift: PixelShift,
}

impl TargetGeometry {
	#[context("computing target geometry for a {source_width}x{source_height} image at level {level}")]
	pub fn new(source_width: u32, source_height: u32, bounds: &GeoBounds, level: u8) -> Result<TargetGeometry> {
		ensure!(source_width > 0 && source_height > 0, "source image is empty");
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");

		let size = target_image_size(source_width, source_height, bounds, level);
		let (grid, shift) = target_tile_bounds(bounds, level);

		log::debug!("target geometry at level {level}: {size:?}, {grid:?}, {shift:?}");

		Ok(TargetGeometry {
			level,
			bounds: *bounds,
			size,
			grid,
			shift,
		})
	}
}

/// Size the source image has to be resampled to, so that one pixel matches one tile pixel.
pub fn target_image_size(source_width: u32, source_height: u32, bounds: &GeoBounds, level: u8) -> PixelDimension {
	let x = longitude_to_tile_x(bounds.left, level);
	let degrees_per_pixel = (tile_x_to_longitude(x + 1, level) - tile_x_to_longitude(x, level)) / f64::from(TILE_SIZE);

	let width = (bounds.width() / degrees_per_pixel).ceil();
	let height = (width * f64::from(source_height) / f64::from(source_width)).ceil();

	PixelDimension::new((width as u32).max(1), (height as u32).max(1))
}

/// Tile grid covering `bounds` and the pixel shift of its north-west corner.
pub fn target_tile_bounds(bounds: &GeoBounds, level: u8) -> (TileGridBounds, PixelShift) {
	let grid = TileGridBounds::from_geo_bounds(bounds, level);

	let top = i64::from(grid.top);
	let tile_top = tile_y_to_latitude(top, level);
	let tile_top_next = tile_y_to_latitude(top + 1, level);

	let left = i64::from(grid.left);
	let tile_left = tile_x_to_longitude(left, level);
	let tile_left_next = tile_x_to_longitude(left + 1, level);

	let shift = PixelShift::new(
		fraction_to_pixel((bounds.left - tile_left) / (tile_left_next - tile_left)),
		fraction_to_pixel((bounds.top - tile_top) / (tile_top_next - tile_top)),
	);

	(grid, shift)
}

// truncates like an integer cast, kept inside the tile
fn fraction_to_pixel(fraction: f64) -> u32 {
	let size = f64::from(TILE_SIZE);
	(fraction * size).trunc().clamp(0.0, size - 1.0) as u32
}
