//! Slice command - cut an existing map image into tiles.

use std::path::PathBuf;

use worldtiles::raster::Raster;

use super::common::{resolve_slicer, TileArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the slice command.
pub struct SliceArgs {
    pub input: PathBuf,
    pub name: String,
    pub tiles: TileArgs,
}

/// Run the slice command.
pub fn run(args: SliceArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("slice");

    let slicer = resolve_slicer(&args.tiles, runner.config())?;
    let raster = Raster::open(&args.input)?;

    let report = slicer.slice(&args.name, &raster)?;

    println!(
        "Sliced '{}' into {} × {} = {} tiles of {}",
        args.name,
        report.cols,
        report.rows,
        report.tile_count,
        slicer.tile_size()
    );
    println!("Output: {}", report.output_dir.display());
    if report.has_remainder() {
        println!(
            "Note: {}px on the right and {}px on the bottom did not fill a whole tile and were not tiled",
            report.dropped_right_px, report.dropped_bottom_px
        );
    }
    if !report.stale_tiles.is_empty() {
        println!(
            "Note: {} tile(s) from an earlier run lie outside this grid and were left in place",
            report.stale_tiles.len()
        );
    }
    Ok(())
}
