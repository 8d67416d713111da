//! worldtiles - slice world map rasters into game-engine texture tiles
//!
//! A high-resolution world map is rendered by a [`raster::Rasterizer`],
//! decoded into a [`raster::Raster`] and cut by a [`slicer::Slicer`] into
//! square tiles small enough for the engine's texture size limit.
//!
//! ```text
//! style ──► RenderConfig ──► Rasterizer ──► Raster ──► Slicer ──► {root}/{name}/*.png
//! ```
//!
//! # Example
//!
//! ```no_run
//! use worldtiles::raster::Raster;
//!
//! let raster = Raster::open("world.png")?;
//! let report = worldtiles::slice("demo", &raster, 1024, "exported_maps")?;
//! assert_eq!(report.tile_count, (report.cols * report.rows) as usize);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod raster;
pub mod slicer;
pub mod style;

pub use slicer::{slice, SliceError, SliceResult, Slicer, TileReport, TileSize};
