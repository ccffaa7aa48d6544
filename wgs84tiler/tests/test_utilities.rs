#![allow(unused)]

use assert_cmd::{Command, cargo};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::{Path, PathBuf};
use wgs84tiler::GeoBounds;
use wgs84tiler_core::transform::{tile_x_to_longitude, tile_y_to_latitude};
use wgs84tiler_image::DynamicImageTraitTest;

/// Bounds of the zoom 15 run that covers the tiles 16579 and 16580 of row 11271.
pub fn paris_15() -> GeoBounds {
	GeoBounds::new(48.8687073004617, 48.8651234503015, 2.14840505163567, 2.15657022586739).unwrap()
}

/// Wider bounds that cover 7 × 5 tiles at zoom 18.
pub fn paris_18() -> GeoBounds {
	GeoBounds::new(48.8795479494599, 48.8759617549741, 2.18108416654134, 2.18925349493902).unwrap()
}

/// Bounds inside the tile row `y` of level `level`, from the middle of column `x0` to the middle
/// of column `x1`.
pub fn band(level: u8, y: i64, x0: i64, x1: i64) -> GeoBounds {
	let middle = |x: i64| (tile_x_to_longitude(x, level) + tile_x_to_longitude(x + 1, level)) / 2.0;
	let north = tile_y_to_latitude(y, level);
	let south = tile_y_to_latitude(y + 1, level);
	GeoBounds::new(
		north + (south - north) * 0.25,
		north + (south - north) * 0.75,
		middle(x0),
		middle(x1),
	)
	.unwrap()
}

/// Writes a gradient source image into `dir` and returns its path.
pub fn write_source(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
	let path = dir.join(name);
	DynamicImage::new_test_gradient(width, height)
		.save_with_format(&path, ImageFormat::Png)
		.unwrap();
	path
}

pub fn read_tile(path: &Path) -> DynamicImage {
	let format = ImageFormat::from_path(path).unwrap();
	image::load_from_memory_with_format(&std::fs::read(path).unwrap(), format).unwrap()
}

pub fn pixel(tile: &DynamicImage, x: u32, y: u32) -> [u8; 4] {
	tile.get_pixel(x, y).0
}

/// Helper to create a Command for the wgs84tiler binary.
pub fn wgs84tiler_cmd() -> Command {
	Command::new(cargo::cargo_bin!("wgs84tiler"))
}
