//! Resampling filters for scaling the source image to the target geometry.
//!
//! - `Nearest`: picks the closest pixel (fastest, blocky)
//! - `Bilinear`: 2×2 neighbourhood
//! - `CatmullRom`: cubic, sharp
//! - `Mitchell`: cubic, softer
//! - `Lanczos3`: windowed sinc over 6×6 pixels (highest quality, default)

#[cfg(feature = "cli")]
use clap::ValueEnum;
use fast_image_resize::{FilterType, ResizeAlg};

#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResampleFilter {
	Nearest,
	Bilinear,
	CatmullRom,
	Mitchell,
	#[default]
	Lanczos3,
}

impl ResampleFilter {
	pub fn as_resize_alg(&self) -> ResizeAlg {
		match self {
			ResampleFilter::Nearest => ResizeAlg::Nearest,
			ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
			ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
			ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
			ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_lanczos() {
		assert_eq!(ResampleFilter::default(), ResampleFilter::Lanczos3);
		assert!(matches!(
			ResampleFilter::default().as_resize_alg(),
			ResizeAlg::Convolution(FilterType::Lanczos3)
		));
	}

	#[test]
	fn nearest_does_not_convolve() {
		assert!(matches!(ResampleFilter::Nearest.as_resize_alg(), ResizeAlg::Nearest));
	}
}
