//! Fully resolved render configuration.

use super::{Color, MapStyle};

pub const DEFAULT_WIDTH: u32 = 8192;
pub const DEFAULT_HEIGHT: u32 = 4096;
pub const DEFAULT_DPI: u32 = 100;

pub const DEFAULT_OCEAN_COLOR: Color = Color::rgb(0xa0, 0xd1, 0xf1);
pub const DEFAULT_LAND_COLOR: Color = Color::rgb(0x94, 0xc2, 0x7c);
pub const DEFAULT_RIVER_COLOR: Color = Color::rgb(0x6a, 0xb3, 0xf7);
pub const DEFAULT_BORDER_COLOR: Color = Color::rgb(0x80, 0x80, 0x80);

/// Map features drawn on top of the land/ocean base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureFlags {
    pub borders: bool,
    pub rivers: bool,
    pub shaded_relief: bool,
    pub land_cover: bool,
}

impl FeatureFlags {
    pub fn all() -> Self {
        Self {
            borders: true,
            rivers: true,
            shaded_relief: true,
            land_cover: true,
        }
    }
}

/// Pixel size of the raster to render.
///
/// DPI only converts pixels to a physical figure size for the renderer;
/// slicing never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
}

impl Default for RasterSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            dpi: DEFAULT_DPI,
        }
    }
}

/// Caller-supplied overrides applied on top of a preset.
///
/// `None` keeps whatever the preset (or the default) says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleOverrides {
    pub borders: Option<bool>,
    pub rivers: Option<bool>,
    pub shaded_relief: Option<bool>,
    pub land_cover: Option<bool>,
    pub ocean: Option<Color>,
    pub land: Option<Color>,
    pub river: Option<Color>,
    pub border: Option<Color>,
}

impl StyleOverrides {
    pub fn is_empty(&self) -> bool {
        *self == StyleOverrides::default()
    }
}

/// Everything a rasterizer needs to draw one map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub size: RasterSize,
    pub features: FeatureFlags,
    pub ocean: Color,
    pub land: Color,
    pub river: Color,
    pub border: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::resolve(RasterSize::default(), None, &StyleOverrides::default())
    }
}

impl RenderConfig {
    /// Resolve a configuration from an optional preset and overrides.
    ///
    /// Precedence, lowest first: defaults, preset, feature flag overrides,
    /// explicit color overrides.
    pub fn resolve(size: RasterSize, style: Option<MapStyle>, overrides: &StyleOverrides) -> Self {
        let preset = style.map(|s| s.preset()).unwrap_or_default();
        let f = preset.features;

        Self {
            size,
            features: FeatureFlags {
                borders: overrides.borders.unwrap_or(f.borders),
                rivers: overrides.rivers.unwrap_or(f.rivers),
                shaded_relief: overrides.shaded_relief.unwrap_or(f.shaded_relief),
                land_cover: overrides.land_cover.unwrap_or(f.land_cover),
            },
            ocean: overrides
                .ocean
                .or(preset.ocean)
                .unwrap_or(DEFAULT_OCEAN_COLOR),
            land: overrides.land.or(preset.land).unwrap_or(DEFAULT_LAND_COLOR),
            river: overrides
                .river
                .or(preset.river)
                .unwrap_or(DEFAULT_RIVER_COLOR),
            border: overrides
                .border
                .or(preset.border)
                .unwrap_or(DEFAULT_BORDER_COLOR),
        }
    }

    /// Figure size in inches, `(width / dpi, height / dpi)`.
    pub fn figure_size_inches(&self) -> (f64, f64) {
        let dpi = f64::from(self.size.dpi.max(1));
        (
            f64::from(self.size.width) / dpi,
            f64::from(self.size.height) / dpi,
        )
    }
}
