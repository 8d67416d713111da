//! Map styling: colors, presets and the resolved render configuration.
//!
//! A render configuration is resolved once, before rasterization, from
//! three layers with a fixed precedence (lowest first):
//!
//! 1. a [`MapStyle`] preset
//! 2. feature flag overrides
//! 3. explicit color overrides
//!
//! ```
//! use worldtiles::style::{MapStyle, RasterSize, RenderConfig, StyleOverrides};
//!
//! let overrides = StyleOverrides {
//!     land: Some("#c0c0c0".parse().unwrap()),
//!     ..StyleOverrides::default()
//! };
//! let config = RenderConfig::resolve(RasterSize::default(), Some(MapStyle::Blank), &overrides);
//! assert_eq!(config.land.to_string(), "#c0c0c0");
//! assert_eq!(config.ocean.to_string(), "#f0f0f0");
//! ```

mod color;
mod preset;
mod render;

pub use color::{Color, ColorParseError};
pub use preset::{MapStyle, StylePreset, UnknownStyleError};
pub use render::{
    FeatureFlags, RasterSize, RenderConfig, StyleOverrides, DEFAULT_BORDER_COLOR, DEFAULT_DPI,
    DEFAULT_HEIGHT, DEFAULT_LAND_COLOR, DEFAULT_OCEAN_COLOR, DEFAULT_RIVER_COLOR, DEFAULT_WIDTH,
};
