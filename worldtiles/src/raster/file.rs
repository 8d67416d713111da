//! Rasterizer backed by a pre-rendered image file.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::style::RenderConfig;

use super::{Raster, RasterError, Rasterizer};

/// Supplies a map rendered ahead of time by an external plotting tool.
///
/// The file is returned as PNG regardless of its on-disk format. When
/// `verify_size` is set the image must match `config.size` exactly.
#[derive(Debug, Clone)]
pub struct ImageFileRasterizer {
    path: PathBuf,
    verify_size: bool,
}

impl ImageFileRasterizer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            verify_size: false,
        }
    }

    /// Reject images whose dimensions differ from the configured size.
    pub fn with_verify_size(mut self, verify: bool) -> Self {
        self.verify_size = verify;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Rasterizer for ImageFileRasterizer {
    fn rasterize(&self, config: &RenderConfig) -> Result<Vec<u8>, RasterError> {
        info!(path = %self.path.display(), "Loading pre-rendered map");
        let bytes = std::fs::read(&self.path).map_err(|source| RasterError::Read {
            path: self.path.clone(),
            source,
        })?;

        let actual = Raster::read_dimensions(&bytes)?;
        let expected = (config.size.width, config.size.height);
        if self.verify_size && actual != expected {
            return Err(RasterError::DimensionMismatch { expected, actual });
        }
        debug!(width = actual.0, height = actual.1, "Pre-rendered map header read");

        // Already PNG: hand the original bytes through undecoded.
        if bytes.starts_with(PNG_SIGNATURE) {
            return Ok(bytes);
        }
        Raster::decode(&bytes)?.encode_png()
    }

    fn name(&self) -> &str {
        "image-file"
    }
}

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{RasterSize, StyleOverrides};
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn config(width: u32, height: u32) -> RenderConfig {
        RenderConfig::resolve(
            RasterSize {
                width,
                height,
                dpi: 100,
            },
            None,
            &StyleOverrides::default(),
        )
    }

    fn write_map(dir: &TempDir, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join("map.png");
        RgbaImage::from_pixel(width, height, Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_passes_png_through() {
        let temp = TempDir::new().unwrap();
        let path = write_map(&temp, 8, 4);

        let bytes = ImageFileRasterizer::new(&path)
            .rasterize(&config(8, 4))
            .unwrap();
        assert_eq!(bytes, std::fs::read(&path).unwrap());
    }

    #[test]
    fn test_size_is_not_checked_by_default() {
        let temp = TempDir::new().unwrap();
        let path = write_map(&temp, 8, 4);

        assert!(ImageFileRasterizer::new(&path)
            .rasterize(&config(8192, 4096))
            .is_ok());
    }

    #[test]
    fn test_verify_size_rejects_mismatch() {
        let temp = TempDir::new().unwrap();
        let path = write_map(&temp, 8, 4);

        let err = ImageFileRasterizer::new(&path)
            .with_verify_size(true)
            .rasterize(&config(16, 8))
            .unwrap_err();
        assert!(matches!(
            err,
            RasterError::DimensionMismatch {
                expected: (16, 8),
                actual: (8, 4)
            }
        ));
    }

    #[test]
    fn test_unreadable_image_is_a_decode_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("map.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = ImageFileRasterizer::new(&path)
            .rasterize(&config(8, 4))
            .unwrap_err();
        assert!(matches!(err, RasterError::Decode(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ImageFileRasterizer::new("/nonexistent/map.png")
            .rasterize(&config(8, 4))
            .unwrap_err();
        assert!(matches!(err, RasterError::Read { .. }));
    }
}
