//! Raster slicing into fixed-size square tiles.
//!
//! The slicer takes a decoded [`Raster`], partitions it into a
//! [`TileGrid`] and writes the result to `{root}/{name}/`:
//!
//! ```text
//! exported_maps/demo/
//! ├── full_map.png      unmodified source raster
//! ├── demo_0_0.png      tile at column 0, row 0
//! ├── demo_1_0.png
//! └── ...
//! ```
//!
//! Any strip narrower than one tile on the right or bottom edge is dropped,
//! never padded. A raster smaller than one tile produces no tiles at all but
//! still gets its `full_map.png`.
//!
//! Reruns overwrite files in place and never delete. Tiles left over from a
//! run with a smaller tile size are reported with a warning.
//!
//! # Example
//!
//! ```no_run
//! use worldtiles::raster::Raster;
//! use worldtiles::slicer::{Slicer, TileSize};
//!
//! let raster = Raster::open("world.png")?;
//! let report = Slicer::new(TileSize::new(1024)?, "exported_maps")
//!     .with_parallel(true)
//!     .slice("demo", &raster)?;
//! println!("{} × {} tiles in {}", report.cols, report.rows, report.output_dir.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod grid;
mod output;
mod progress;

pub use error::{SliceError, SliceResult};
pub use grid::{TileCoord, TileGrid, TileRect, TileSize, DEFAULT_TILE_SIZE};
pub use output::{output_dir, tile_file_name, FULL_MAP_FILE_NAME};
pub use progress::{NoopProgress, SliceProgress};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::raster::Raster;

/// Default root directory for exported maps.
pub const DEFAULT_EXPORT_DIR: &str = "exported_maps";

/// Outcome of a successful slicing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileReport {
    /// Number of tile columns.
    pub cols: u32,
    /// Number of tile rows.
    pub rows: u32,
    /// Number of tile files written, `cols * rows`.
    pub tile_count: usize,
    /// Directory holding the full map and every tile.
    pub output_dir: PathBuf,
    /// Width of the right edge strip that fit no tile.
    pub dropped_right_px: u32,
    /// Height of the bottom edge strip that fit no tile.
    pub dropped_bottom_px: u32,
    /// Tile files from an earlier run that lie outside this grid.
    pub stale_tiles: Vec<PathBuf>,
}

impl TileReport {
    /// Returns true if part of the raster was not covered by any tile.
    pub fn has_remainder(&self) -> bool {
        self.dropped_right_px > 0 || self.dropped_bottom_px > 0
    }
}

/// Slices rasters into tiles under a fixed root directory.
pub struct Slicer {
    tile_size: TileSize,
    root_dir: PathBuf,
    parallel: bool,
    progress: Arc<dyn SliceProgress>,
}

impl Slicer {
    /// Create a sequential slicer with no progress reporting.
    pub fn new(tile_size: TileSize, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            tile_size,
            root_dir: root_dir.into(),
            parallel: false,
            progress: Arc::new(NoopProgress),
        }
    }

    /// Encode and write tiles on the rayon thread pool.
    ///
    /// The full map is always written first on the calling thread. The
    /// first tile failure stops the remaining work.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Attach a progress observer.
    pub fn with_progress(mut self, progress: Arc<dyn SliceProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Slice `raster` into tiles written under `{root}/{name}/`.
    ///
    /// Arguments are validated before anything touches the filesystem.
    /// Output is not transactional: on an I/O failure the files written so
    /// far stay on disk and a rerun overwrites them.
    ///
    /// # Errors
    ///
    /// - [`SliceError::InvalidArgument`] if `name` is empty or the raster
    ///   has zero width or height
    /// - an I/O variant if the directory or any file cannot be written
    pub fn slice(&self, name: &str, raster: &Raster) -> SliceResult<TileReport> {
        if name.is_empty() {
            return Err(SliceError::InvalidArgument(
                "map name must not be empty".to_string(),
            ));
        }
        let (width, height) = raster.dimensions();
        if width == 0 || height == 0 {
            return Err(SliceError::InvalidArgument(format!(
                "raster must be at least 1×1, got {}×{}",
                width, height
            )));
        }

        let grid = TileGrid::compute(width, height, self.tile_size);
        let dir = output_dir(&self.root_dir, name);

        info!(
            map = name,
            width,
            height,
            tile_size = self.tile_size.get(),
            output = %dir.display(),
            "Slicing map"
        );

        output::ensure_dir(&dir)?;
        output::write_png(raster.as_image(), &dir.join(FULL_MAP_FILE_NAME))?;

        let (dropped_right_px, dropped_bottom_px) = grid.remainder();
        if dropped_right_px > 0 || dropped_bottom_px > 0 {
            warn!(
                map = name,
                dropped_right_px,
                dropped_bottom_px,
                "Raster is not a multiple of the tile size, edge pixels are not tiled"
            );
        }

        let stale = output::stale_tiles(&dir, name, &grid);
        if let Some(first) = stale.first() {
            warn!(
                map = name,
                count = stale.len(),
                example = %first.display(),
                "Tiles from an earlier run lie outside the current grid and are left in place"
            );
        }

        let total = grid.tile_count();
        self.progress.on_start(name, total);

        let completed = AtomicUsize::new(0);
        let write_tile = |coord: TileCoord| -> SliceResult<()> {
            let Some(rect) = grid.tile_rect(coord) else {
                return Ok(());
            };
            let tile = raster.crop(rect.x, rect.y, rect.width, rect.height);
            let path = dir.join(tile_file_name(name, coord));
            output::write_png(&tile, &path)?;

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            debug!(map = name, x = coord.x, y = coord.y, done, total, "Tile written");
            self.progress.on_tile(coord, done, total);
            Ok(())
        };

        if self.parallel {
            let coords: Vec<TileCoord> = grid.coords().collect();
            coords.par_iter().try_for_each(|&coord| write_tile(coord))?;
        } else {
            for coord in grid.coords() {
                write_tile(coord)?;
            }
        }

        let report = TileReport {
            cols: grid.cols(),
            rows: grid.rows(),
            tile_count: total,
            output_dir: dir,
            dropped_right_px,
            dropped_bottom_px,
            stale_tiles: stale,
        };

        info!(
            map = name,
            cols = report.cols,
            rows = report.rows,
            tiles = report.tile_count,
            output = %report.output_dir.display(),
            "Slicing complete"
        );
        self.progress.on_finish(&report);

        Ok(report)
    }
}

impl fmt::Debug for Slicer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slicer")
            .field("tile_size", &self.tile_size)
            .field("root_dir", &self.root_dir)
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

/// Slice `raster` into `tile_size`-pixel tiles under `{root_dir}/{name}/`.
///
/// Sequential convenience wrapper around [`Slicer`]. A `tile_size` of zero
/// or below fails with [`SliceError::InvalidArgument`] and writes nothing.
pub fn slice(
    name: &str,
    raster: &Raster,
    tile_size: i64,
    root_dir: impl AsRef<Path>,
) -> SliceResult<TileReport> {
    let tile_size = TileSize::new(tile_size)?;
    Slicer::new(tile_size, root_dir.as_ref()).slice(name, raster)
}
