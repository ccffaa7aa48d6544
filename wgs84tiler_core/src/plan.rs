//! Partitioning of the resampled image into tile-sized parts.
//!
//! Every axis is cut independently. With `n` the 0-based position of the tile on that axis and
//! `shift` the run's pixel shift, a tile is:
//!
//! | position     | crop origin         | crop size                   | paste at |
//! |--------------|---------------------|-----------------------------|----------|
//! | first & last | `0`                 | resampled size              | `shift`  |
//! | first        | `0`                 | `256 - shift`               | `shift`  |
//! | last         | `n*256 - shift`     | `resampled - n*256 + shift` | `0`      |
//! | interior     | `n*256 - shift - 1` | `256`                       | `0`      |
//!
//! The interior origin is one pixel left of/above the running offset. Neighbouring tiles written
//! by earlier runs line up with this exact layout, so it must not be "corrected".

use crate::{PixelShift, SliceRegion, TILE_SIZE, TargetGeometry, TileCoord};

/// One cell of the tile grid: which tile, which part of the resampled image, and where that
/// part goes inside the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceCell {
	pub coord: TileCoord,
	pub region: SliceRegion,
	pub shift: PixelShift,
}

/// Cut of a single axis, see the module documentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSlice {
	pub origin: i64,
	pub size: i64,
	pub paste: u32,
}

pub fn slice_axis(tile: u32, first: u32, last: u32, resampled: u32, shift: u32) -> AxisSlice {
	let tile_size = i64::from(TILE_SIZE);
	let resampled = i64::from(resampled);
	let offset = i64::from(tile - first) * tile_size - i64::from(shift);

	match (tile == first, tile == last) {
		(true, true) => AxisSlice {
			origin: 0,
			size: resampled,
			paste: shift,
		},
		(true, false) => AxisSlice {
			origin: 0,
			size: tile_size - i64::from(shift),
			paste: shift,
		},
		(false, true) => AxisSlice {
			origin: offset,
			size: resampled - offset,
			paste: 0,
		},
		(false, false) => AxisSlice {
			origin: offset - 1,
			size: tile_size,
			paste: 0,
		},
	}
}

/// All cells of `geometry`'s grid, columns first (outer loop over x, inner loop over y).
pub fn plan_slices(geometry: &TargetGeometry) -> Vec<SliceCell> {
	let grid = geometry.grid;
	grid
		.iter_coords()
		.map(|coord| {
			let x = slice_axis(coord.x, grid.left, grid.right, geometry.size.width, geometry.shift.left);
			let y = slice_axis(coord.y, grid.top, grid.bottom, geometry.size.height, geometry.shift.top);
			SliceCell {
				coord,
				region: SliceRegion::new(x.origin, y.origin, x.size, y.size),
				shift: PixelShift::new(x.paste, y.paste),
			}
		})
		.collect()
}
