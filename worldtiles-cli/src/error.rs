//! CLI error handling with user-friendly messages.
//!
//! Centralizes error reporting for the CLI, providing consistent formatting
//! and a non-zero exit code.

use std::fmt;
use std::process;

use worldtiles::config::ConfigFileError;
use worldtiles::pipeline::PipelineError;
use worldtiles::raster::RasterError;
use worldtiles::slicer::SliceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be loaded or saved
    Config(ConfigFileError),
    /// Invalid combination of arguments
    InvalidArgs(String),
    /// Failed to read the input map
    Raster(RasterError),
    /// Failed to slice the map
    Slice(SliceError),
    /// A render-then-slice job failed
    Pipeline(PipelineError),
}

impl CliError {
    /// Exit the process with an error message and status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }

        if let Some(
            SliceError::WriteFailed { path, .. } | SliceError::EncodeFailed { path, .. },
        ) = self.slice_error()
        {
            let dir = path.parent().unwrap_or(path.as_path());
            eprintln!();
            eprintln!("Files written before the failure were left in place:");
            eprintln!("  {}", dir.display());
            eprintln!("Rerunning the same command overwrites them.");
        }

        process::exit(1)
    }

    fn slice_error(&self) -> Option<&SliceError> {
        match self {
            CliError::Slice(e) => Some(e),
            CliError::Pipeline(PipelineError::Slice { source, .. }) => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidArgs(msg) => write!(f, "{}", msg),
            CliError::Raster(_) => write!(f, "Failed to load map"),
            CliError::Slice(_) => write!(f, "Failed to slice map"),
            CliError::Pipeline(_) => write!(f, "Map generation failed"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Raster(e) => Some(e),
            CliError::Slice(e) => Some(e),
            CliError::Pipeline(e) => Some(e),
            CliError::LoggingInit(_) | CliError::InvalidArgs(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<RasterError> for CliError {
    fn from(e: RasterError) -> Self {
        CliError::Raster(e)
    }
}

impl From<SliceError> for CliError {
    fn from(e: SliceError) -> Self {
        CliError::Slice(e)
    }
}

impl From<PipelineError> for CliError {
    fn from(e: PipelineError) -> Self {
        CliError::Pipeline(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_slice_error_keeps_cause() {
        let err: CliError = SliceError::InvalidArgument("tile size must be positive, got 0".into()).into();
        assert_eq!(err.to_string(), "Failed to slice map");
        assert!(err
            .source()
            .unwrap()
            .to_string()
            .contains("tile size must be positive"));
    }

    #[test]
    fn test_invalid_args_display() {
        let err = CliError::InvalidArgs("--name cannot be used with --all".into());
        assert_eq!(err.to_string(), "--name cannot be used with --all");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_pipeline_slice_error_is_found() {
        let err: CliError = PipelineError::Slice {
            name: "demo".into(),
            source: SliceError::InvalidArgument("x".into()),
        }
        .into();
        assert!(err.slice_error().is_some());
    }
}
