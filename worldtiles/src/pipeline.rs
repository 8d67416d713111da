//! Render-then-slice jobs.
//!
//! A [`MapJob`] pairs an output name with a resolved [`RenderConfig`].
//! Running it asks a [`Rasterizer`] for the encoded map, decodes it and
//! hands the raster to a [`Slicer`].

use thiserror::Error;
use tracing::{error, info, warn};

use crate::raster::{Raster, RasterError, Rasterizer};
use crate::slicer::{SliceError, Slicer, TileReport};
use crate::style::{MapStyle, RasterSize, RenderConfig, StyleOverrides};

/// Errors from a render-then-slice job.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The rasterizer failed or produced an undecodable image.
    #[error("map '{name}' could not be rendered: {source}")]
    Raster { name: String, source: RasterError },

    /// Slicing or writing the tiles failed.
    #[error("map '{name}' could not be sliced: {source}")]
    Slice { name: String, source: SliceError },
}

/// One map to render and slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapJob {
    /// Output name: the subdirectory and tile filename prefix.
    pub name: String,
    pub config: RenderConfig,
}

impl MapJob {
    pub fn new(name: impl Into<String>, config: RenderConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// A job for a preset, named after the preset.
    pub fn for_style(style: MapStyle, size: RasterSize, overrides: &StyleOverrides) -> Self {
        Self::new(
            style.name(),
            RenderConfig::resolve(size, Some(style), overrides),
        )
    }
}

/// Render, decode and slice a single map.
pub fn run_job(
    rasterizer: &dyn Rasterizer,
    job: &MapJob,
    slicer: &Slicer,
) -> Result<TileReport, PipelineError> {
    let features = job.config.features;
    info!(
        map = %job.name,
        rasterizer = rasterizer.name(),
        width = job.config.size.width,
        height = job.config.size.height,
        borders = features.borders,
        rivers = features.rivers,
        shaded_relief = features.shaded_relief,
        land_cover = features.land_cover,
        ocean = %job.config.ocean,
        land = %job.config.land,
        "Rendering map"
    );

    let unsupported = rasterizer.unsupported_features(&job.config);
    if !unsupported.is_empty() {
        warn!(
            map = %job.name,
            rasterizer = rasterizer.name(),
            features = %unsupported.join(", "),
            "Requested features are not drawn by this rasterizer"
        );
    }

    let raster_err = |source: RasterError| PipelineError::Raster {
        name: job.name.clone(),
        source,
    };
    let encoded = rasterizer.rasterize(&job.config).map_err(raster_err)?;
    let raster = Raster::decode(&encoded).map_err(raster_err)?;
    drop(encoded);

    slicer
        .slice(&job.name, &raster)
        .map_err(|source| PipelineError::Slice {
            name: job.name.clone(),
            source,
        })
}

/// Run jobs in order, stopping at the first failure.
pub fn run_jobs(
    rasterizer: &dyn Rasterizer,
    jobs: &[MapJob],
    slicer: &Slicer,
) -> Result<Vec<TileReport>, PipelineError> {
    let mut reports = Vec::with_capacity(jobs.len());
    for (i, job) in jobs.iter().enumerate() {
        info!(map = %job.name, job = i + 1, total = jobs.len(), "Starting map job");
        match run_job(rasterizer, job, slicer) {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!(map = %job.name, error = %e, "Map job failed");
                return Err(e);
            }
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::FlatRasterizer;
    use crate::slicer::TileSize;
    use tempfile::TempDir;

    fn small() -> RasterSize {
        RasterSize {
            width: 8,
            height: 4,
            dpi: 100,
        }
    }

    struct BrokenRasterizer;

    impl Rasterizer for BrokenRasterizer {
        fn rasterize(&self, _config: &RenderConfig) -> Result<Vec<u8>, RasterError> {
            Ok(b"not an image".to_vec())
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_job_for_style_uses_style_name() {
        let job = MapJob::for_style(MapStyle::Topographic, small(), &StyleOverrides::default());
        assert_eq!(job.name, "topographic");
        assert!(job.config.features.shaded_relief);
    }

    #[test]
    fn test_run_job_slices_rendered_map() {
        let temp = TempDir::new().unwrap();
        let slicer = Slicer::new(TileSize::new(4).unwrap(), temp.path());
        let job = MapJob::for_style(MapStyle::Blank, small(), &StyleOverrides::default());

        let report = run_job(&FlatRasterizer::new(), &job, &slicer).unwrap();
        assert_eq!((report.cols, report.rows), (2, 1));
        assert!(temp.path().join("blank").join("blank_1_0.png").exists());
    }

    #[test]
    fn test_run_job_renders_despite_unsupported_features() {
        let temp = TempDir::new().unwrap();
        let slicer = Slicer::new(TileSize::new(4).unwrap(), temp.path());
        let job = MapJob::for_style(MapStyle::Full, small(), &StyleOverrides::default());
        assert!(!FlatRasterizer::new().unsupported_features(&job.config).is_empty());

        let report = run_job(&FlatRasterizer::new(), &job, &slicer).unwrap();
        assert_eq!(report.tile_count, 2);
    }

    #[test]
    fn test_run_jobs_all_styles() {
        let temp = TempDir::new().unwrap();
        let slicer = Slicer::new(TileSize::new(2).unwrap(), temp.path());
        let jobs: Vec<_> = MapStyle::all()
            .iter()
            .map(|s| MapJob::for_style(*s, small(), &StyleOverrides::default()))
            .collect();

        let reports = run_jobs(&FlatRasterizer::new(), &jobs, &slicer).unwrap();
        assert_eq!(reports.len(), 5);
        for style in MapStyle::all() {
            assert!(temp.path().join(style.name()).join("full_map.png").exists());
        }
    }

    #[test]
    fn test_undecodable_output_is_a_raster_error() {
        let temp = TempDir::new().unwrap();
        let slicer = Slicer::new(TileSize::default(), temp.path());
        let job = MapJob::new("broken", RenderConfig::default());

        let err = run_job(&BrokenRasterizer, &job, &slicer).unwrap_err();
        assert!(matches!(err, PipelineError::Raster { .. }));
        assert!(!temp.path().join("broken").exists());
    }

    #[test]
    fn test_run_jobs_stops_at_first_failure() {
        let temp = TempDir::new().unwrap();
        let slicer = Slicer::new(TileSize::new(2).unwrap(), temp.path());
        let jobs = vec![
            MapJob::new("", RenderConfig::resolve(small(), None, &StyleOverrides::default())),
            MapJob::new("second", RenderConfig::resolve(small(), None, &StyleOverrides::default())),
        ];

        let err = run_jobs(&FlatRasterizer::new(), &jobs, &slicer).unwrap_err();
        assert!(matches!(err, PipelineError::Slice { .. }));
        assert!(!temp.path().join("second").exists());
    }
}
