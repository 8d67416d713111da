//! Error types for raster decoding and production.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing or decoding a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The encoded byte stream could not be decoded.
    #[error("failed to decode raster: {0}")]
    Decode(#[source] image::ImageError),

    /// The source image file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The raster could not be encoded.
    #[error("failed to encode raster: {0}")]
    Encode(#[source] image::ImageError),

    /// The produced raster does not have the configured size.
    #[error(
        "raster is {}×{}, expected {}×{}",
        actual.0, actual.1, expected.0, expected.1
    )]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Requested raster dimensions cannot be rendered.
    #[error("invalid raster dimensions {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = RasterError::DimensionMismatch {
            expected: (8192, 4096),
            actual: (8190, 4096),
        };
        assert_eq!(err.to_string(), "raster is 8190×4096, expected 8192×4096");
    }

    #[test]
    fn test_read_error_mentions_path() {
        let err = RasterError::Read {
            path: PathBuf::from("maps/world.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("maps/world.png"));
    }

    #[test]
    fn test_invalid_dimensions_display() {
        let err = RasterError::InvalidDimensions {
            width: 0,
            height: 4096,
        };
        assert_eq!(err.to_string(), "invalid raster dimensions 0×4096");
    }
}
