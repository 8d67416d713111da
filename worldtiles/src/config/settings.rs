//! Settings structs for each configuration section.
//!
//! Each struct represents one `[section]` of `config.ini`.

use std::path::PathBuf;

use crate::slicer::{DEFAULT_EXPORT_DIR, DEFAULT_TILE_SIZE};
use crate::style::{RasterSize, DEFAULT_DPI, DEFAULT_HEIGHT, DEFAULT_WIDTH};

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "worldtiles.log";

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFile {
    /// Raster rendering settings
    pub render: RenderSettings,
    /// Tiling and output settings
    pub tiles: TileSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[render]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            dpi: DEFAULT_DPI,
        }
    }
}

impl RenderSettings {
    pub fn raster_size(&self) -> RasterSize {
        RasterSize {
            width: self.width,
            height: self.height,
            dpi: self.dpi,
        }
    }
}

/// `[tiles]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSettings {
    /// Tile edge length in pixels
    pub size: u32,
    /// Root directory that receives one subdirectory per map
    pub export_dir: PathBuf,
    /// Write tiles on all CPU cores
    pub parallel: bool,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_TILE_SIZE,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            parallel: false,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
