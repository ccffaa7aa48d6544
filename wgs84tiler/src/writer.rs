//! Writing one cell of the plan into its tile file, merging with whatever the file already holds.

use anyhow::Error;
use image::DynamicImage;
use std::{
	fmt::{self, Debug, Display},
	fs,
	path::{Path, PathBuf},
};
use wgs84tiler_core::{PixelDimension, SliceCell, TILE_SIZE, TileCoord, TileFormat};
use wgs84tiler_image::{
	DynamicImageTraitOperation, blank_tile,
	format::{image2bytes, read_tile},
};

/// Whether a tile file existed before it was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileOutcome {
	Created,
	Merged,
}

impl TileOutcome {
	pub fn is_new(&self) -> bool {
		matches!(self, TileOutcome::Created)
	}
}

/// Step of [`TileWriter::write`] that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteStage {
	CreateDirectory,
	Encode,
	Save,
}

impl WriteStage {
	fn as_verb(&self) -> &'static str {
		match self {
			WriteStage::CreateDirectory => "create the directory of",
			WriteStage::Encode => "encode",
			WriteStage::Save => "save",
		}
	}
}

/// A tile that could not be written. Tiles written before it are not affected.
pub struct TileWriteError {
	pub coord: TileCoord,
	pub stage: WriteStage,
	pub source: Error,
}

impl TileWriteError {
	pub fn new(coord: TileCoord, stage: WriteStage, source: impl Into<Error>) -> TileWriteError {
		TileWriteError {
			coord,
			stage,
			source: source.into(),
		}
	}
}

impl Display for TileWriteError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "failed to {} tile {}: {:#}", self.stage.as_verb(), self.coord, self.source)
	}
}

impl Debug for TileWriteError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileWriteError({:?}, {:?}, {:?})", self.coord, self.stage, self.source.to_string())
	}
}

impl std::error::Error for TileWriteError {}

/// Writes tiles below `output_dir` as `{level}/{x}/{y}.{ext}`.
pub struct TileWriter {
	output_dir: PathBuf,
	format: TileFormat,
	blank: DynamicImage,
}

impl TileWriter {
	pub fn new(output_dir: &Path, format: TileFormat) -> TileWriter {
		TileWriter {
			output_dir: output_dir.to_path_buf(),
			format,
			blank: blank_tile(),
		}
	}

	pub fn tile_path(&self, coord: &TileCoord) -> PathBuf {
		self
			.output_dir
			.join(coord.level.to_string())
			.join(coord.x.to_string())
			.join(format!("{}{}", coord.y, self.format.as_extension()))
	}

	/// Crops `cell.region` out of `image` and pastes it into the cell's tile at `cell.shift`.
	///
	/// An existing tile is the base of the paste, so pixels outside the pasted part survive.
	/// Without a usable existing tile the base is a blank canvas and the tile counts as new.
	pub fn write(&self, image: &DynamicImage, cell: &SliceCell) -> Result<TileOutcome, TileWriteError> {
		let coord = cell.coord;
		let path = self.tile_path(&coord);

		if let Some(directory) = path.parent() {
			fs::create_dir_all(directory).map_err(|e| TileWriteError::new(coord, WriteStage::CreateDirectory, e))?;
		}

		let (mut tile, outcome) = match self.load_existing(&path) {
			Some(existing) => (existing, TileOutcome::Merged),
			None => (self.blank.clone(), TileOutcome::Created),
		};

		let dimension = PixelDimension::new(image.width(), image.height());
		if let Some((x, y, width, height)) = cell.region.clip(&dimension) {
			tile.paste(&image.get_part(x, y, width, height), cell.shift.left, cell.shift.top);
		} else {
			log::debug!("{:?} lies outside the image, tile {coord} stays unchanged", cell.region);
		}

		let bytes = image2bytes(&tile, self.format).map_err(|e| TileWriteError::new(coord, WriteStage::Encode, e))?;
		fs::write(&path, bytes).map_err(|e| TileWriteError::new(coord, WriteStage::Save, e))?;

		log::debug!(
			"{} tile {coord}",
			if outcome.is_new() { "created" } else { "merged" }
		);
		Ok(outcome)
	}

	// A missing, undecodable or wrongly sized tile is replaced by a blank one.
	fn load_existing(&self, path: &Path) -> Option<DynamicImage> {
		if !path.is_file() {
			return None;
		}
		match read_tile(path, self.format) {
			Ok(existing) if existing.width() == TILE_SIZE && existing.height() == TILE_SIZE => {
				Some(DynamicImage::ImageRgba8(existing.to_rgba8()))
			}
			Ok(existing) => {
				log::warn!(
					"ignoring existing tile {path:?} of size {}x{}",
					existing.width(),
					existing.height()
				);
				None
			}
			Err(err) => {
				log::warn!("ignoring unreadable tile {path:?}: {err:#}");
				None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::{GenericImageView, ImageFormat};
	use rstest::rstest;
	use tempfile::TempDir;
	use wgs84tiler_core::{PixelShift, SliceRegion};
	use wgs84tiler_image::{BLANK_COLOR, DynamicImageTraitTest, format::bytes2image};

	fn cell(region: (i64, i64, i64, i64), shift: (u32, u32)) -> SliceCell {
		SliceCell {
			coord: TileCoord::new(15, 16579, 11271).unwrap(),
			region: SliceRegion::new(region.0, region.1, region.2, region.3),
			shift: PixelShift::new(shift.0, shift.1),
		}
	}

	fn read(writer: &TileWriter, coord: &TileCoord) -> DynamicImage {
		bytes2image(&fs::read(writer.tile_path(coord)).unwrap(), writer.format).unwrap()
	}

	#[rstest]
	#[case::png(TileFormat::PNG, "15/16579/11271.png")]
	#[case::webp(TileFormat::WEBP, "15/16579/11271.webp")]
	fn tile_path(#[case] format: TileFormat, #[case] expected: &str) {
		let writer = TileWriter::new(Path::new("/tiles"), format);
		let coord = TileCoord::new(15, 16579, 11271).unwrap();
		assert_eq!(writer.tile_path(&coord), Path::new("/tiles").join(expected));
	}

	#[test]
	fn new_tile_is_blank_outside_the_part() {
		let dir = TempDir::new().unwrap();
		let writer = TileWriter::new(dir.path(), TileFormat::PNG);
		let image = DynamicImage::new_test_solid(191, 153, [255, 0, 0, 255]);
		let cell = cell((0, 0, 115, 153), (141, 114));

		assert_eq!(writer.write(&image, &cell).unwrap(), TileOutcome::Created);

		let tile = read(&writer, &cell.coord);
		assert_eq!(tile.dimensions(), (256, 256));
		assert_eq!(tile.get_pixel(0, 0), BLANK_COLOR);
		assert_eq!(tile.get_pixel(140, 255), BLANK_COLOR);
		assert_eq!(tile.get_pixel(141, 114).0, [255, 0, 0, 255]);
		assert_eq!(tile.get_pixel(255, 255).0, [255, 0, 0, 255]);
	}

	#[test]
	fn existing_tile_is_merged() {
		let dir = TempDir::new().unwrap();
		let writer = TileWriter::new(dir.path(), TileFormat::PNG);
		let coord = TileCoord::new(15, 16579, 11271).unwrap();

		let existing = DynamicImage::new_test_gradient(256, 256);
		fs::create_dir_all(writer.tile_path(&coord).parent().unwrap()).unwrap();
		existing
			.save_with_format(writer.tile_path(&coord), ImageFormat::Png)
			.unwrap();

		let image = DynamicImage::new_test_solid(64, 64, [0, 0, 255, 255]);
		let cell = cell((0, 0, 64, 64), (10, 20));
		assert_eq!(writer.write(&image, &cell).unwrap(), TileOutcome::Merged);

		let tile = read(&writer, &coord);
		for (x, y, pixel) in tile.pixels() {
			let covered = (10..74).contains(&x) && (20..84).contains(&y);
			if covered {
				assert_eq!(pixel.0, [0, 0, 255, 255], "pixel {x},{y}");
			} else {
				assert_eq!(pixel, existing.get_pixel(x, y), "pixel {x},{y}");
			}
		}
	}

	#[rstest]
	#[case::garbage(b"not an image".to_vec())]
	#[case::wrong_size(image2bytes(&DynamicImage::new_test_gradient(16, 16), TileFormat::PNG).unwrap())]
	fn unusable_tile_counts_as_new(#[case] content: Vec<u8>) {
		let dir = TempDir::new().unwrap();
		let writer = TileWriter::new(dir.path(), TileFormat::PNG);
		let cell = cell((0, 0, 8, 8), (0, 0));
		let path = writer.tile_path(&cell.coord);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(&path, content).unwrap();

		let image = DynamicImage::new_test_solid(8, 8, [9, 9, 9, 255]);
		assert_eq!(writer.write(&image, &cell).unwrap(), TileOutcome::Created);

		let tile = read(&writer, &cell.coord);
		assert_eq!(tile.get_pixel(0, 0).0, [9, 9, 9, 255]);
		assert_eq!(tile.get_pixel(8, 8), BLANK_COLOR);
	}

	#[test]
	fn region_outside_the_image_writes_a_blank_tile() {
		let dir = TempDir::new().unwrap();
		let writer = TileWriter::new(dir.path(), TileFormat::PNG);
		let image = DynamicImage::new_test_gradient(100, 100);
		let cell = cell((100, 0, 50, 50), (0, 0));

		assert!(writer.write(&image, &cell).unwrap().is_new());
		assert_eq!(read(&writer, &cell.coord).to_rgba8(), blank_tile().to_rgba8());
	}

	#[test]
	fn blocked_directory_is_reported() {
		let dir = TempDir::new().unwrap();
		// a file where the level directory should be
		fs::write(dir.path().join("15"), b"").unwrap();
		let writer = TileWriter::new(dir.path(), TileFormat::PNG);
		let image = DynamicImage::new_test_gradient(10, 10);

		let err = writer.write(&image, &cell((0, 0, 10, 10), (0, 0))).unwrap_err();
		assert_eq!(err.coord, TileCoord::new(15, 16579, 11271).unwrap());
		assert_eq!(err.stage, WriteStage::CreateDirectory);
		assert!(
			err.to_string().starts_with("failed to create the directory of tile 15/16579/11271: "),
			"{err}"
		);
	}

	#[test]
	fn blocked_file_is_reported() {
		let dir = TempDir::new().unwrap();
		let writer = TileWriter::new(dir.path(), TileFormat::PNG);
		let cell = cell((0, 0, 10, 10), (0, 0));
		// a directory where the tile file should be
		fs::create_dir_all(writer.tile_path(&cell.coord)).unwrap();

		let err = writer
			.write(&DynamicImage::new_test_gradient(10, 10), &cell)
			.unwrap_err();
		assert_eq!(err.stage, WriteStage::Save);
		assert!(err.to_string().starts_with("failed to save tile 15/16579/11271: "), "{err}");
	}
}
