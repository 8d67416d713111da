//! The seam between map rendering and slicing.

use crate::style::RenderConfig;

use super::RasterError;

/// Produces an encoded raster for a render configuration.
///
/// The output is a PNG byte stream sized to `config.size`; the slicer
/// decodes it into a [`Raster`](super::Raster). Implementations must be
/// thread-safe so that one rasterizer can serve several jobs.
///
/// # Implementors
///
/// - [`ImageFileRasterizer`](super::ImageFileRasterizer) - reads a map
///   pre-rendered by an external plotting tool
/// - [`FlatRasterizer`](super::FlatRasterizer) - fills the canvas with the
///   ocean color, for dry runs
pub trait Rasterizer: Send + Sync {
    /// Render the map described by `config` to an encoded PNG.
    fn rasterize(&self, config: &RenderConfig) -> Result<Vec<u8>, RasterError>;

    /// Short human-readable name for logs.
    fn name(&self) -> &str;

    /// Features enabled in `config` that this rasterizer does not draw.
    ///
    /// The pipeline logs a warning naming each one before rendering.
    fn unsupported_features(&self, _config: &RenderConfig) -> Vec<&'static str> {
        Vec::new()
    }
}
