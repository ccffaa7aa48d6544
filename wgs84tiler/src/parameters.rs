use wgs84tiler_core::TileFormat;
use wgs84tiler_image::ResampleFilter;

/// What happens after a tile could not be written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
	/// record the failure and go on with the next tile
	#[default]
	Continue,
	/// record the failure and stop the run
	Abort,
}

/// Settings of a slicing run that are not part of the geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceParameters {
	pub tile_format: TileFormat,
	pub filter: ResampleFilter,
	pub error_policy: ErrorPolicy,
}

impl SliceParameters {
	pub fn with_tile_format(mut self, tile_format: TileFormat) -> Self {
		self.tile_format = tile_format;
		self
	}

	pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
		self.filter = filter;
		self
	}

	pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
		self.error_policy = error_policy;
		self
	}
}
