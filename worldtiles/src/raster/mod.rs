//! Raster production and decoding.
//!
//! Rendering a world map is delegated to a [`Rasterizer`], which hands back
//! an encoded PNG. [`Raster`] is the decoded RGBA buffer the slicer reads.
//!
//! ```text
//! RenderConfig ──► Rasterizer ──► PNG bytes ──► Raster::decode ──► Slicer
//! ```

mod buffer;
mod error;
mod file;
mod flat;
mod rasterizer;

pub use buffer::Raster;
pub use error::RasterError;
pub use file::ImageFileRasterizer;
pub use flat::FlatRasterizer;
pub use rasterizer::Rasterizer;
