//! Contains the value types shared by geometry, planning and writing: geographic bounds,
//! tile coordinates, tile grids, pixel sizes and offsets, and tile formats.

mod geo_bounds;
pub use geo_bounds::*;

mod pixel;
pub use pixel::*;

mod tile_coord;
pub use tile_coord::*;

mod tile_format;
pub use tile_format::*;

mod tile_grid;
pub use tile_grid::*;

/// Edge length of a slippy map tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// Highest zoom level whose tile indices still fit into `u32`.
pub const MAX_LEVEL: u8 = 31;
