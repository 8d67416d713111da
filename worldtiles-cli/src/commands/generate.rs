//! Generate command - render one or all style presets and slice them.

use std::path::PathBuf;

use tracing::{info, warn};
use worldtiles::pipeline::{run_jobs, MapJob};
use worldtiles::raster::{FlatRasterizer, ImageFileRasterizer, Rasterizer};
use worldtiles::style::{Color, MapStyle, RasterSize, StyleOverrides};

use super::common::{resolve_size, resolve_slicer, SizeArgs, StyleArg, TileArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the generate command.
#[derive(Debug, Default)]
pub struct GenerateArgs {
    pub style: Option<StyleArg>,
    pub all: bool,
    pub name: Option<String>,
    pub input: Option<PathBuf>,
    pub verify_size: bool,
    pub borders: Option<bool>,
    pub rivers: Option<bool>,
    pub shaded_relief: Option<bool>,
    pub land_cover: Option<bool>,
    pub ocean_color: Option<Color>,
    pub land_color: Option<Color>,
    pub river_color: Option<Color>,
    pub border_color: Option<Color>,
    pub size: SizeArgs,
    pub tiles: TileArgs,
}

impl GenerateArgs {
    fn overrides(&self) -> StyleOverrides {
        StyleOverrides {
            borders: self.borders,
            rivers: self.rivers,
            shaded_relief: self.shaded_relief,
            land_cover: self.land_cover,
            ocean: self.ocean_color,
            land: self.land_color,
            river: self.river_color,
            border: self.border_color,
        }
    }

    /// Explicit style flags the chosen rasterizer has no use for.
    ///
    /// A pre-rendered `--input` map already carries its styling, so every
    /// style flag is ignored. The flat fill only honors the ocean color;
    /// feature flags are reported by the pipeline.
    fn ignored_flags(&self) -> Vec<&'static str> {
        let colors = [
            (self.ocean_color.is_some(), "--ocean-color"),
            (self.land_color.is_some(), "--land-color"),
            (self.river_color.is_some(), "--river-color"),
            (self.border_color.is_some(), "--border-color"),
        ];
        let features = [
            (self.borders.is_some(), "--borders"),
            (self.rivers.is_some(), "--rivers"),
            (self.shaded_relief.is_some(), "--shaded-relief"),
            (self.land_cover.is_some(), "--land-cover"),
        ];

        let candidates: Vec<_> = if self.input.is_some() {
            features.into_iter().chain(colors).collect()
        } else {
            colors.into_iter().skip(1).collect()
        };
        candidates
            .into_iter()
            .filter_map(|(set, flag)| set.then_some(flag))
            .collect()
    }

    /// Styles to generate, in order.
    fn styles(&self) -> Result<Vec<MapStyle>, CliError> {
        match (self.all, self.style) {
            (true, _) => Ok(MapStyle::all().to_vec()),
            (false, Some(style)) => Ok(vec![style.into()]),
            (false, None) => Err(CliError::InvalidArgs(
                "No action requested. Please specify a --style or use --all.".to_string(),
            )),
        }
    }
}

/// Build the job list for the requested styles.
fn build_jobs(args: &GenerateArgs, size: RasterSize) -> Result<Vec<MapJob>, CliError> {
    let styles = args.styles()?;
    if args.name.is_some() && styles.len() > 1 {
        return Err(CliError::InvalidArgs(
            "--name can only be used with a single --style".to_string(),
        ));
    }

    let overrides = args.overrides();
    Ok(styles
        .into_iter()
        .map(|style| {
            let mut job = MapJob::for_style(style, size, &overrides);
            if let Some(name) = &args.name {
                job.name = name.clone();
            }
            job
        })
        .collect())
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("generate");
    let config = runner.config();

    let size = resolve_size(&args.size, config);
    let jobs = build_jobs(&args, size)?;
    let slicer = resolve_slicer(&args.tiles, config)?;

    let rasterizer: Box<dyn Rasterizer> = match &args.input {
        Some(path) => Box::new(ImageFileRasterizer::new(path).with_verify_size(args.verify_size)),
        None => Box::new(FlatRasterizer::new()),
    };
    info!(rasterizer = rasterizer.name(), jobs = jobs.len(), "Generating maps");
    let ignored = args.ignored_flags();
    if !ignored.is_empty() {
        warn!(
            rasterizer = rasterizer.name(),
            flags = %ignored.join(" "),
            "Style flags have no effect with this rasterizer"
        );
    }

    let reports = run_jobs(rasterizer.as_ref(), &jobs, &slicer)?;

    for (job, report) in jobs.iter().zip(&reports) {
        println!(
            "{:<12} {} × {} = {:>3} tiles  {}",
            job.name,
            report.cols,
            report.rows,
            report.tile_count,
            report.output_dir.display()
        );
    }
    println!();
    println!("All map generation tasks are complete!");
    Ok(())
}
