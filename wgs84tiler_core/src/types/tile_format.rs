//! Raster formats a tile file can be written in.
//!
//! ```
//! use wgs84tiler_core::TileFormat;
//!
//! assert_eq!(TileFormat::PNG.as_extension(), ".png");
//! assert_eq!(TileFormat::parse_str("WebP").unwrap(), TileFormat::WEBP);
//! ```

use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use std::fmt::{Display, Formatter};

/// Tile file formats. Both keep the alpha channel, so uncovered tile areas stay transparent.
#[allow(clippy::upper_case_acronyms)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TileFormat {
	#[default]
	PNG,
	/// lossless WebP
	WEBP,
}

impl TileFormat {
	pub fn as_str(&self) -> &'static str {
		match self {
			TileFormat::PNG => "png",
			TileFormat::WEBP => "webp",
		}
	}

	/// File extension including the leading dot.
	pub fn as_extension(&self) -> &'static str {
		match self {
			TileFormat::PNG => ".png",
			TileFormat::WEBP => ".webp",
		}
	}

	/// Case-insensitive parsing, with or without a leading dot.
	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.trim_start_matches('.').to_lowercase().as_str() {
			"png" => TileFormat::PNG,
			"webp" => TileFormat::WEBP,
			_ => bail!("unknown tile format '{value}', expected png or webp"),
		})
	}
}

impl Display for TileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
