//! Encoding and decoding of tile files and source images.

use anyhow::{Context, Result, anyhow};
use image::{
	DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat, ImageReader,
	codecs::{png::PngEncoder, webp::WebPEncoder},
	load_from_memory_with_format,
};
use std::path::Path;
use wgs84tiler_core::TileFormat;
use wgs84tiler_derive::context;

/// Encodes an image as RGBA8 in the given tile format.
#[context("encoding {}x{} image as {}", image.width(), image.height(), format)]
pub fn image2bytes(image: &DynamicImage, format: TileFormat) -> Result<Vec<u8>> {
	let rgba = image.to_rgba8();
	let mut buffer: Vec<u8> = Vec::new();
	match format {
		TileFormat::PNG => PngEncoder::new(&mut buffer).write_image(
			rgba.as_raw(),
			rgba.width(),
			rgba.height(),
			ExtendedColorType::Rgba8,
		)?,
		TileFormat::WEBP => WebPEncoder::new_lossless(&mut buffer).write_image(
			rgba.as_raw(),
			rgba.width(),
			rgba.height(),
			ExtendedColorType::Rgba8,
		)?,
	}
	Ok(buffer)
}

pub fn bytes2image(bytes: &[u8], format: TileFormat) -> Result<DynamicImage> {
	let image_format = match format {
		TileFormat::PNG => ImageFormat::Png,
		TileFormat::WEBP => ImageFormat::WebP,
	};
	load_from_memory_with_format(bytes, image_format).map_err(|e| anyhow!("failed to decode {format} tile: {e}"))
}

/// Reads and decodes an existing tile file.
pub fn read_tile(path: &Path, format: TileFormat) -> Result<DynamicImage> {
	let bytes = std::fs::read(path).with_context(|| format!("reading tile {path:?}"))?;
	bytes2image(&bytes, format)
}

/// Opens a source image of any supported format, guessing the format from its content.
#[context("decoding source image {path:?}")]
pub fn open_source(path: &Path) -> Result<DynamicImage> {
	let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
	log::debug!("decoded source image {path:?}: {}x{}", image.width(), image.height());
	Ok(image)
}

/// Reads only the header of a source image and returns `(width, height)`.
#[context("reading the size of source image {path:?}")]
pub fn source_dimensions(path: &Path) -> Result<(u32, u32)> {
	Ok(ImageReader::open(path)?.with_guessed_format()?.into_dimensions()?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{blank_tile, traits::*};
	use rstest::rstest;
	use tempfile::TempDir;

	#[rstest]
	#[case::png(TileFormat::PNG)]
	#[case::webp(TileFormat::WEBP)]
	fn lossless_round_trip(#[case] format: TileFormat) -> Result<()> {
		let image = DynamicImage::new_test_gradient(256, 256);
		let bytes = image2bytes(&image, format)?;
		let decoded = bytes2image(&bytes, format)?;
		assert_eq!(decoded.to_rgba8(), image.to_rgba8());
		Ok(())
	}

	#[test]
	fn png_keeps_transparent_pixels() -> Result<()> {
		let bytes = image2bytes(&blank_tile(), TileFormat::PNG)?;
		let decoded = bytes2image(&bytes, TileFormat::PNG)?;
		assert_eq!(decoded.to_rgba8(), blank_tile().to_rgba8());
		Ok(())
	}

	#[test]
	fn decoding_garbage_fails() {
		let err = bytes2image(b"definitely not a png", TileFormat::PNG).unwrap_err();
		assert!(err.to_string().starts_with("failed to decode png tile"), "{err}");
	}

	#[test]
	fn read_missing_tile() {
		let dir = TempDir::new().unwrap();
		let err = read_tile(&dir.path().join("0.png"), TileFormat::PNG).unwrap_err();
		assert!(err.to_string().starts_with("reading tile"), "{err}");
	}

	#[test]
	fn open_source_guesses_format() -> Result<()> {
		let dir = TempDir::new()?;
		// a misleading extension: the content decides
		let path = dir.path().join("source.jpg");
		DynamicImage::new_test_gradient(40, 30).save_with_format(&path, ImageFormat::Png)?;
		let image = open_source(&path)?;
		assert_eq!((image.width(), image.height()), (40, 30));
		Ok(())
	}

	#[test]
	fn source_dimensions_without_decoding() -> Result<()> {
		let dir = TempDir::new()?;
		let path = dir.path().join("source.png");
		DynamicImage::new_test_gradient(17, 9).save_with_format(&path, ImageFormat::Png)?;
		assert_eq!(source_dimensions(&path)?, (17, 9));
		Ok(())
	}

	#[test]
	fn open_source_reports_the_path() {
		let err = open_source(Path::new("/nonexistent/source.jpg")).unwrap_err();
		assert_eq!(err.to_string(), "decoding source image \"/nonexistent/source.jpg\"");
	}
}
