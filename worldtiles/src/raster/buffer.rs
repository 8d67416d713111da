//! Decoded RGBA raster buffer.

use std::io::Cursor;
use std::path::Path;

use image::{imageops, ImageFormat, ImageReader, RgbaImage};

use super::RasterError;

/// A decoded RGBA pixel buffer.
///
/// Immutable once constructed; slicing only ever reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    /// Wrap an already decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decode an encoded image (PNG canonically) into RGBA8.
    ///
    /// Decoder allocation limits are lifted: world map rasters of
    /// 16384×8192 RGBA exceed the default cap.
    pub fn decode(bytes: &[u8]) -> Result<Self, RasterError> {
        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| RasterError::Decode(image::ImageError::IoError(e)))?;
        reader.no_limits();
        let decoded = reader.decode().map_err(RasterError::Decode)?;
        Ok(Self::from_image(decoded.to_rgba8()))
    }

    /// Read `(width, height)` from an encoded image's header without
    /// decoding the pixel data.
    pub fn read_dimensions(bytes: &[u8]) -> Result<(u32, u32), RasterError> {
        ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| RasterError::Decode(image::ImageError::IoError(e)))?
            .into_dimensions()
            .map_err(RasterError::Decode)
    }

    /// Read and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| RasterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Copy the `width × height` rectangle whose top-left pixel is `(x, y)`.
    ///
    /// Pixels are copied verbatim; there is no resampling. The rectangle is
    /// clamped to the raster bounds.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
        imageops::crop_imm(&self.image, x, y, width, height).to_image()
    }

    /// Encode the raster as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        let mut buf = Cursor::new(Vec::new());
        self.image
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(RasterError::Encode)?;
        Ok(buf.into_inner())
    }
}

impl From<RgbaImage> for Raster {
    fn from(image: RgbaImage) -> Self {
        Self::from_image(image)
    }
}
