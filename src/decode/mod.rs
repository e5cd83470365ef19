//! # Image Decoding
//!
//! Adapter between encoded image files and the 1-bit raster model.
//!
//! ```text
//! bytes ─► ByteReader ─► image decoder ─► 8-bit grayscale ─► BitmapPacker
//!                        (ImageReader)     (to_luma8)          (row by row)
//! ```
//!
//! Decoding is delegated to the `image` crate. Palette, color and 16-bit
//! inputs are reduced to 8-bit luma and alpha is dropped before packing.
//! Any decoder failure, including truncated data, aborts the conversion.
//! The partly built bitmap is dropped with it.

pub mod reader;

use std::fmt;
use std::str::FromStr;

use image::{ImageFormat, ImageReader};

use crate::error::{BlockgraphError, Result};
use crate::raster::{BitmapPacker, Dimensions, PackedBitmap};

pub use reader::ByteReader;

/// Inputs this short can't carry a container signature.
pub const SIGNATURE_BYTES: usize = 8;

/// Declared media type of the input, e.g. `image/png`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType(ImageFormat);

impl ContentType {
    pub const PNG: ContentType = ContentType(ImageFormat::Png);

    /// Resolve a MIME type to a decodable format.
    pub fn from_mime(mime: &str) -> Result<Self> {
        match ImageFormat::from_mime_type(mime) {
            Some(format) if format.reading_enabled() => Ok(Self(format)),
            _ => Err(BlockgraphError::UnsupportedContentType(mime.to_string())),
        }
    }

    pub fn format(&self) -> ImageFormat {
        self.0
    }

    pub fn mime(&self) -> &'static str {
        self.0.to_mime_type()
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::PNG
    }
}

impl FromStr for ContentType {
    type Err = BlockgraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_mime(s)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Decode `bytes` as `content_type` and pack the result into a bitmap.
pub fn decode(bytes: &[u8], content_type: ContentType) -> Result<PackedBitmap> {
    if bytes.len() <= SIGNATURE_BYTES {
        return Err(BlockgraphError::Decode(format!(
            "image data too short ({} bytes)",
            bytes.len()
        )));
    }

    let format = content_type.format();
    if let Ok(found) = image::guess_format(bytes)
        && found != format
    {
        return Err(BlockgraphError::Decode(format!(
            "data is {} but was declared as {}",
            found.to_mime_type(),
            content_type
        )));
    }

    let image = ImageReader::with_format(ByteReader::new(bytes), format)
        .decode()
        .map_err(|e| BlockgraphError::Decode(format!("Failed to decode image: {}", e)))?;

    let gray = image.to_luma8();
    let dims = Dimensions::new(gray.width() as usize, gray.height() as usize);
    tracing::debug!(
        width = dims.width,
        height = dims.height,
        content_type = %content_type,
        "decoded image"
    );

    let mut packer = BitmapPacker::new(dims);
    if !dims.is_empty() {
        for scanline in gray.as_raw().chunks_exact(dims.width) {
            packer.push_row(scanline)?;
        }
    }
    Ok(packer.finish())
}
