//! worldtiles CLI - Command-line interface
//!
//! Renders world maps and slices them into square texture tiles.

mod commands;
mod error;
mod progress;
mod runner;

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use worldtiles::style::Color;

use commands::common::{SizeArgs, StyleArg, TileArgs};
use commands::generate::GenerateArgs;
use commands::slice::SliceArgs;

#[derive(Parser)]
#[command(name = "worldtiles")]
#[command(version, about = "Generate and slice high-resolution world maps into texture tiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slice an existing map image into tiles
    Slice {
        /// Map image to slice (PNG recommended)
        #[arg(long, short)]
        input: PathBuf,

        /// Output name: subdirectory and tile filename prefix
        #[arg(long, short)]
        name: String,

        #[command(flatten)]
        tiles: TileArgs,
    },

    /// Render one or all style presets and slice them
    #[command(group(ArgGroup::new("which").required(true).args(["style", "all"])))]
    Generate {
        /// Style preset to generate
        #[arg(long, value_enum)]
        style: Option<StyleArg>,

        /// Generate every style preset
        #[arg(long)]
        all: bool,

        /// Output name (defaults to the style name)
        #[arg(long, conflicts_with = "all")]
        name: Option<String>,

        /// Pre-rendered map image to use instead of the flat ocean fill
        #[arg(long)]
        input: Option<PathBuf>,

        /// Require --input to match the configured width and height
        #[arg(long, requires = "input")]
        verify_size: bool,

        /// Draw country borders
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        borders: Option<bool>,

        /// Draw rivers
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        rivers: Option<bool>,

        /// Draw shaded relief
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        shaded_relief: Option<bool>,

        /// Draw land cover imagery
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        land_cover: Option<bool>,

        /// Ocean color (#rrggbb or name)
        #[arg(long)]
        ocean_color: Option<Color>,

        /// Land color (#rrggbb or name)
        #[arg(long)]
        land_color: Option<Color>,

        /// River color (#rrggbb or name)
        #[arg(long)]
        river_color: Option<Color>,

        /// Border color (#rrggbb or name)
        #[arg(long)]
        border_color: Option<Color>,

        #[command(flatten)]
        size: SizeArgs,

        #[command(flatten)]
        tiles: TileArgs,
    },

    /// List the available style presets
    Styles,

    /// Create the configuration file with defaults
    Init,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Slice { input, name, tiles } => {
            commands::slice::run(SliceArgs { input, name, tiles })
        }
        Commands::Generate {
            style,
            all,
            name,
            input,
            verify_size,
            borders,
            rivers,
            shaded_relief,
            land_cover,
            ocean_color,
            land_color,
            river_color,
            border_color,
            size,
            tiles,
        } => commands::generate::run(GenerateArgs {
            style,
            all,
            name,
            input,
            verify_size,
            borders,
            rivers,
            shaded_relief,
            land_cover,
            ocean_color,
            land_color,
            river_color,
            border_color,
            size,
            tiles,
        }),
        Commands::Styles => commands::styles::run(),
        Commands::Init => commands::init::run(),
    };

    if let Err(e) = result {
        e.exit();
    }
}
