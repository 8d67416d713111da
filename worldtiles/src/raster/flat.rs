//! Ocean-fill rasterizer.

use image::RgbaImage;
use tracing::debug;

use crate::style::RenderConfig;

use super::{Raster, RasterError, Rasterizer};

/// Fills the whole canvas with the resolved ocean color.
///
/// Draws no geography. Useful for checking output layout and tile counts
/// for a configuration without a plotting backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatRasterizer;

impl FlatRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for FlatRasterizer {
    fn rasterize(&self, config: &RenderConfig) -> Result<Vec<u8>, RasterError> {
        let (width, height) = (config.size.width, config.size.height);
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        debug!(width, height, ocean = %config.ocean, "Filling flat raster");
        let image = RgbaImage::from_pixel(width, height, config.ocean.to_rgba());
        Raster::from_image(image).encode_png()
    }

    fn name(&self) -> &str {
        "flat"
    }

    fn unsupported_features(&self, config: &RenderConfig) -> Vec<&'static str> {
        let features = config.features;
        [
            (features.borders, "borders"),
            (features.rivers, "rivers"),
            (features.shaded_relief, "shaded relief"),
            (features.land_cover, "land cover"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, MapStyle, RasterSize, StyleOverrides};

    fn config(width: u32, height: u32) -> RenderConfig {
        let overrides = StyleOverrides {
            ocean: Some(Color::rgba(10, 20, 30, 200)),
            ..StyleOverrides::default()
        };
        RenderConfig::resolve(
            RasterSize {
                width,
                height,
                dpi: 100,
            },
            None,
            &overrides,
        )
    }

    #[test]
    fn test_fills_with_ocean_color() {
        let bytes = FlatRasterizer::new().rasterize(&config(16, 8)).unwrap();
        let raster = Raster::decode(&bytes).unwrap();

        assert_eq!(raster.dimensions(), (16, 8));
        assert!(raster
            .as_image()
            .pixels()
            .all(|p| *p == image::Rgba([10, 20, 30, 200])));
    }

    #[test]
    fn test_reports_enabled_features_as_unsupported() {
        let mut config = config(4, 4);
        config.features.rivers = true;
        config.features.land_cover = true;
        assert_eq!(
            FlatRasterizer::new().unsupported_features(&config),
            vec!["rivers", "land cover"]
        );

        let full = RenderConfig::resolve(
            RasterSize::default(),
            Some(MapStyle::Full),
            &StyleOverrides::default(),
        );
        assert_eq!(FlatRasterizer::new().unsupported_features(&full).len(), 4);
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = FlatRasterizer::new().rasterize(&config(0, 8)).unwrap_err();
        assert!(matches!(err, RasterError::InvalidDimensions { .. }));
    }
}
