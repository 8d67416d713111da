//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use worldtiles::config::ConfigFile;
use worldtiles::slicer::{Slicer, TileSize};
use worldtiles::style::{MapStyle, RasterSize};

use crate::error::CliError;
use crate::progress::TileProgressBar;

/// Tiling options shared by `slice` and `generate`.
///
/// Each flag overrides the matching `[tiles]` value from config.ini.
#[derive(Debug, Clone, Default, Args)]
pub struct TileArgs {
    /// Tile edge length in pixels [config default: 1024]
    #[arg(long, allow_negative_numbers = true)]
    pub tile_size: Option<i64>,

    /// Root export directory; output goes to <OUTPUT_DIR>/<NAME>/ [config default: exported_maps]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Write tiles on all CPU cores
    #[arg(long)]
    pub parallel: bool,
}

/// Raster size options for `generate`.
#[derive(Debug, Clone, Default, Args)]
pub struct SizeArgs {
    /// Raster width in pixels [config default: 8192]
    #[arg(long)]
    pub width: Option<u32>,

    /// Raster height in pixels [config default: 4096]
    #[arg(long)]
    pub height: Option<u32>,

    /// Rendering DPI [config default: 100]
    #[arg(long)]
    pub dpi: Option<u32>,
}

/// Style preset selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StyleArg {
    /// Gray land and ocean, no features
    Blank,
    /// Borders and rivers
    Simple,
    /// Land cover imagery
    Satellite,
    /// Shaded relief, rivers and borders
    Topographic,
    /// Every feature
    Full,
}

impl From<StyleArg> for MapStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Blank => MapStyle::Blank,
            StyleArg::Simple => MapStyle::Simple,
            StyleArg::Satellite => MapStyle::Satellite,
            StyleArg::Topographic => MapStyle::Topographic,
            StyleArg::Full => MapStyle::Full,
        }
    }
}

/// Build a slicer from CLI args and config.
///
/// CLI takes precedence, then config.
pub fn resolve_slicer(args: &TileArgs, config: &ConfigFile) -> Result<Slicer, CliError> {
    let tile_size = TileSize::new(args.tile_size.unwrap_or(i64::from(config.tiles.size)))?;
    let root = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.tiles.export_dir.clone());

    Ok(Slicer::new(tile_size, root)
        .with_parallel(args.parallel || config.tiles.parallel)
        .with_progress(Arc::new(TileProgressBar::new())))
}

/// Resolve the raster size from CLI args and config.
pub fn resolve_size(args: &SizeArgs, config: &ConfigFile) -> RasterSize {
    let base = config.render.raster_size();
    RasterSize {
        width: args.width.unwrap_or(base.width),
        height: args.height.unwrap_or(base.height),
        dpi: args.dpi.unwrap_or(base.dpi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slicer_uses_config_defaults() {
        let config = ConfigFile::default();
        let slicer = resolve_slicer(&TileArgs::default(), &config).unwrap();
        assert_eq!(slicer.tile_size().get(), 1024);
        assert_eq!(slicer.root_dir(), PathBuf::from("exported_maps").as_path());
        assert!(!slicer.is_parallel());
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = ConfigFile::default();
        config.tiles.size = 2048;
        let args = TileArgs {
            tile_size: Some(512),
            output_dir: Some(PathBuf::from("/tmp/out")),
            parallel: true,
        };

        let slicer = resolve_slicer(&args, &config).unwrap();
        assert_eq!(slicer.tile_size().get(), 512);
        assert_eq!(slicer.root_dir(), PathBuf::from("/tmp/out").as_path());
        assert!(slicer.is_parallel());
    }

    #[test]
    fn test_negative_tile_size_is_rejected() {
        let args = TileArgs {
            tile_size: Some(-5),
            ..TileArgs::default()
        };
        let err = resolve_slicer(&args, &ConfigFile::default()).unwrap_err();
        assert!(matches!(err, CliError::Slice(_)));
    }

    #[test]
    fn test_resolve_size() {
        let args = SizeArgs {
            width: Some(16384),
            height: Some(8192),
            dpi: None,
        };
        let size = resolve_size(&args, &ConfigFile::default());
        assert_eq!((size.width, size.height, size.dpi), (16384, 8192, 100));
    }

    #[test]
    fn test_style_arg_maps_to_preset() {
        for (arg, style) in [
            (StyleArg::Blank, MapStyle::Blank),
            (StyleArg::Simple, MapStyle::Simple),
            (StyleArg::Satellite, MapStyle::Satellite),
            (StyleArg::Topographic, MapStyle::Topographic),
            (StyleArg::Full, MapStyle::Full),
        ] {
            assert_eq!(MapStyle::from(arg), style);
        }
    }
}
