//! The slicing run: resample once, then write every planned cell.

use crate::{ErrorPolicy, SliceParameters, SliceReport, TileWriter};
use anyhow::Result;
use image::DynamicImage;
use std::{path::Path, time::Instant};
use wgs84tiler_core::{GeoBounds, TargetGeometry, plan_slices};
use wgs84tiler_derive::context;
use wgs84tiler_image::{DynamicImageTraitOperation, format::open_source};

/// Slices `image`, which covers `bounds`, into the tiles of level `zoom` below `output_dir`.
///
/// Tiles that already exist are merged. Write failures don't end the run as an error; they are
/// collected in [`SliceReport::failures`], and with [`ErrorPolicy::Abort`] the first one stops the
/// loop. Errors are returned only for problems before any tile is touched.
#[context("slicing {}x{} image at zoom {zoom} into {output_dir:?}", image.width(), image.height())]
pub fn slice_image(
	image: &DynamicImage,
	bounds: &GeoBounds,
	zoom: u8,
	output_dir: &Path,
	parameters: &SliceParameters,
) -> Result<SliceReport> {
	let start = Instant::now();

	let geometry = TargetGeometry::new(image.width(), image.height(), bounds, zoom)?;
	let resampled = image.get_resampled(geometry.size.width, geometry.size.height, parameters.filter)?;

	let writer = TileWriter::new(output_dir, parameters.tile_format);
	let mut report = SliceReport::default();

	for cell in plan_slices(&geometry) {
		match writer.write(&resampled, &cell) {
			Ok(outcome) => report.add(outcome),
			Err(failure) => {
				log::warn!("{failure}");
				report.add_failure(failure);
				if parameters.error_policy == ErrorPolicy::Abort {
					log::warn!("aborting after the first failed tile");
					break;
				}
			}
		}
	}

	report.elapsed = start.elapsed();
	log::info!("slicing took {:.2?}", report.elapsed);
	log::info!("{report}");

	Ok(report)
}

/// Decodes the image at `path` and passes it to [`slice_image`].
#[context("slicing {path:?} at zoom {zoom}")]
pub fn slice_file(
	path: &Path,
	bounds: &GeoBounds,
	zoom: u8,
	output_dir: &Path,
	parameters: &SliceParameters,
) -> Result<SliceReport> {
	let image = open_source(path)?;
	slice_image(&image, bounds, zoom, output_dir, parameters)
}
