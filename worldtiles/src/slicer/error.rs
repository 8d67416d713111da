//! Error types for the slicer module.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for slicing operations.
pub type SliceResult<T> = Result<T, SliceError>;

/// Errors that can occur while slicing a raster into tiles.
///
/// Variants fall into two kinds: argument errors, raised before any
/// filesystem access, and I/O failures, raised while writing output.
#[derive(Debug, Error)]
pub enum SliceError {
    /// A caller-supplied argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to create the output directory.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirectoryFailed { path: PathBuf, source: io::Error },

    /// Failed to write an output file.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },

    /// Failed to encode an image before writing it.
    #[error("failed to encode {}: {source}", path.display())]
    EncodeFailed {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl SliceError {
    /// Returns true if the error was caused by bad input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SliceError::InvalidArgument(_))
    }

    /// Returns true if the error happened while producing output files.
    pub fn is_io_failure(&self) -> bool {
        !self.is_invalid_argument()
    }

    /// The path the failing operation was working on, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            SliceError::InvalidArgument(_) => None,
            SliceError::CreateDirectoryFailed { path, .. }
            | SliceError::WriteFailed { path, .. }
            | SliceError::EncodeFailed { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SliceError::InvalidArgument("tile size must be positive, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "invalid argument: tile size must be positive, got 0"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_io_failure());
        assert!(err.path().is_none());
    }

    #[test]
    fn test_write_failed_includes_path_and_cause() {
        let err = SliceError::WriteFailed {
            path: PathBuf::from("/out/demo/demo_0_0.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/out/demo/demo_0_0.png"));
        assert!(msg.contains("permission denied"));
        assert!(err.is_io_failure());
        assert_eq!(err.path(), Some(&PathBuf::from("/out/demo/demo_0_0.png")));
    }

    #[test]
    fn test_source_chain_is_preserved() {
        use std::error::Error as _;

        let err = SliceError::CreateDirectoryFailed {
            path: PathBuf::from("/readonly/demo"),
            source: io::Error::new(io::ErrorKind::Other, "read-only file system"),
        };
        let source = err.source().expect("io error should be the source");
        assert_eq!(source.to_string(), "read-only file system");
    }
}
