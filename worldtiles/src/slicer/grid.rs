//! Tile grid arithmetic.
//!
//! A raster of `width × height` pixels cut with tile size `T` yields a grid
//! of `width / T` columns and `height / T` rows (floor division). Pixels in
//! the right and bottom remainder strips belong to no tile.

use std::fmt;
use std::num::NonZeroU32;

use super::error::{SliceError, SliceResult};

/// Default tile edge length in pixels.
///
/// Matches the largest texture edge the target game engine accepts.
pub const DEFAULT_TILE_SIZE: u32 = 1024;

const DEFAULT_TILE_EDGE: NonZeroU32 = match NonZeroU32::new(DEFAULT_TILE_SIZE) {
    Some(edge) => edge,
    None => panic!("DEFAULT_TILE_SIZE must be non-zero"),
};

/// Edge length of a square tile, in pixels. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize(NonZeroU32);

impl TileSize {
    /// Validate a raw tile size.
    ///
    /// Accepts a signed value so that negative sizes coming from
    /// configuration or the command line are rejected here rather than
    /// wrapping around.
    pub fn new(pixels: i64) -> SliceResult<Self> {
        if pixels <= 0 {
            return Err(SliceError::InvalidArgument(format!(
                "tile size must be positive, got {}",
                pixels
            )));
        }
        u32::try_from(pixels)
            .ok()
            .and_then(NonZeroU32::new)
            .map(TileSize)
            .ok_or_else(|| {
                SliceError::InvalidArgument(format!("tile size {} exceeds {}", pixels, u32::MAX))
            })
    }

    /// Tile edge length in pixels.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self(DEFAULT_TILE_EDGE)
    }
}

impl From<NonZeroU32> for TileSize {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Zero-based grid position of a tile: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pixel rectangle of one tile in source coordinates.
///
/// Spans `[x, x + width)` horizontally and `[y, y + height)` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The `cols × rows` arrangement of tiles over a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    source_width: u32,
    source_height: u32,
    tile_size: TileSize,
    cols: u32,
    rows: u32,
}

impl TileGrid {
    /// Compute the grid for a raster of the given dimensions.
    pub fn compute(source_width: u32, source_height: u32, tile_size: TileSize) -> Self {
        let t = tile_size.get();
        Self {
            source_width,
            source_height,
            tile_size,
            cols: source_width / t,
            rows: source_height / t,
        }
    }

    /// Number of tile columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of tile rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Tile edge length.
    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Total number of tiles, `cols * rows`.
    pub fn tile_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Returns true if the raster is smaller than one tile on either axis.
    pub fn is_empty(&self) -> bool {
        self.tile_count() == 0
    }

    /// Returns true if `coord` names a tile inside this grid.
    pub fn contains(&self, coord: TileCoord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    /// Pixels dropped on the right and bottom edges, as `(right, bottom)`.
    pub fn remainder(&self) -> (u32, u32) {
        let t = self.tile_size.get();
        (
            self.source_width - self.cols * t,
            self.source_height - self.rows * t,
        )
    }

    /// Source rectangle covered by the tile at `coord`.
    ///
    /// Returns `None` when the coordinate lies outside the grid.
    pub fn tile_rect(&self, coord: TileCoord) -> Option<TileRect> {
        if !self.contains(coord) {
            return None;
        }
        let t = self.tile_size.get();
        Some(TileRect {
            x: coord.x * t,
            y: coord.y * t,
            width: t,
            height: t,
        })
    }

    /// All tile coordinates in row-major order (outer loop over rows).
    pub fn coords(&self) -> impl Iterator<Item = TileCoord> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| TileCoord::new(x, y)))
    }
}
