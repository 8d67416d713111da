//! Named style presets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Color, FeatureFlags};

/// Error returned for an unknown preset name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown map style '{0}' (expected one of: blank, simple, satellite, topographic, full)")]
pub struct UnknownStyleError(pub String);

/// A named bundle of feature flags and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapStyle {
    /// Flat gray land and ocean, no features.
    Blank,
    /// Borders and rivers.
    Simple,
    /// Land cover imagery.
    Satellite,
    /// Shaded relief, rivers and borders.
    Topographic,
    /// Every feature enabled.
    Full,
}

/// What a preset contributes to a render configuration.
///
/// Colors left as `None` fall back to the global defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StylePreset {
    pub features: FeatureFlags,
    pub ocean: Option<Color>,
    pub land: Option<Color>,
    pub river: Option<Color>,
    pub border: Option<Color>,
}

impl MapStyle {
    /// Every preset, in the order they are generated by `--all`.
    pub fn all() -> &'static [MapStyle] {
        &[
            MapStyle::Blank,
            MapStyle::Simple,
            MapStyle::Satellite,
            MapStyle::Topographic,
            MapStyle::Full,
        ]
    }

    /// Preset name, also used as the output map name.
    pub fn name(&self) -> &'static str {
        match self {
            MapStyle::Blank => "blank",
            MapStyle::Simple => "simple",
            MapStyle::Satellite => "satellite",
            MapStyle::Topographic => "topographic",
            MapStyle::Full => "full",
        }
    }

    pub fn preset(&self) -> StylePreset {
        match self {
            MapStyle::Blank => StylePreset {
                land: Some(Color::rgb(0xd3, 0xd3, 0xd3)),
                ocean: Some(Color::rgb(0xf0, 0xf0, 0xf0)),
                ..StylePreset::default()
            },
            MapStyle::Simple => StylePreset {
                features: FeatureFlags {
                    borders: true,
                    rivers: true,
                    ..FeatureFlags::default()
                },
                ..StylePreset::default()
            },
            MapStyle::Satellite => StylePreset {
                features: FeatureFlags {
                    land_cover: true,
                    ..FeatureFlags::default()
                },
                ..StylePreset::default()
            },
            MapStyle::Topographic => StylePreset {
                features: FeatureFlags {
                    shaded_relief: true,
                    rivers: true,
                    borders: true,
                    ..FeatureFlags::default()
                },
                ..StylePreset::default()
            },
            MapStyle::Full => StylePreset {
                features: FeatureFlags::all(),
                ..StylePreset::default()
            },
        }
    }
}

impl FromStr for MapStyle {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MapStyle::all()
            .iter()
            .copied()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| UnknownStyleError(s.to_string()))
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
