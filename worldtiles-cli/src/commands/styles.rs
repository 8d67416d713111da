//! Styles command - list the available presets.

use worldtiles::style::{MapStyle, RasterSize, RenderConfig, StyleOverrides};

use crate::error::CliError;

/// Run the styles command.
pub fn run() -> Result<(), CliError> {
    println!(
        "{:<12} {:<8} {:<8} {:<8} {:<10} {:<9} {:<9}",
        "STYLE", "BORDERS", "RIVERS", "RELIEF", "LANDCOVER", "OCEAN", "LAND"
    );
    for style in MapStyle::all() {
        println!("{}", describe(*style));
    }
    Ok(())
}

fn describe(style: MapStyle) -> String {
    let config = RenderConfig::resolve(RasterSize::default(), Some(style), &StyleOverrides::default());
    let f = config.features;
    let flag = |on: bool| if on { "yes" } else { "-" };
    format!(
        "{:<12} {:<8} {:<8} {:<8} {:<10} {:<9} {:<9}",
        style.name(),
        flag(f.borders),
        flag(f.rivers),
        flag(f.shaded_relief),
        flag(f.land_cover),
        config.ocean.to_string(),
        config.land.to_string()
    )
}
