//! # Packed 1-bit Bitmaps
//!
//! Decoded grayscale scanlines are reduced to one bit per pixel and stored
//! eight pixels per byte.
//!
//! ## Bit Packing
//!
//! - Bit 7 (MSB) = leftmost pixel
//! - Bit 0 (LSB) = rightmost pixel
//! - 0 = dark (foreground), 1 = light (background)
//!
//! ```text
//! Grayscale: 00 00 FF FF 00 00 FF FF
//! Top bits:   0  0  1  1  0  0  1  1
//! Packed:    0x33 = 00110011
//! ```
//!
//! ## Padding
//!
//! Rows whose width is not a multiple of 8 leave the low-order bits of the
//! last byte at zero. The sampler never reads them: columns past the edge are
//! clamped to `width - 1`.

use crate::error::{BlockgraphError, Result};

/// Immutable image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Bytes per packed row (`ceil(width / 8)`).
    pub const fn row_bytes(&self) -> usize {
        self.width.div_ceil(8)
    }

    /// True when either side is zero. Such bitmaps render to empty text.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A 1-bit-per-pixel raster in a contiguous `height × row_bytes` buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    dims: Dimensions,
    data: Vec<u8>,
}

impl PackedBitmap {
    /// Build a bitmap from rows that are already packed MSB-first.
    pub fn from_packed(dims: Dimensions, data: Vec<u8>) -> Result<Self> {
        let expected = dims.row_bytes() * dims.height;
        if data.len() != expected {
            return Err(BlockgraphError::Geometry(format!(
                "packed buffer for {}x{} must be {} bytes, got {}",
                dims.width,
                dims.height,
                expected,
                data.len()
            )));
        }
        Ok(Self { dims, data })
    }

    /// Build a bitmap from per-pixel bits (`true` = light), row-major.
    ///
    /// Convenience for callers that already hold a thresholded image.
    pub fn from_bits(dims: Dimensions, bits: &[bool]) -> Result<Self> {
        if bits.len() != dims.width * dims.height {
            return Err(BlockgraphError::Geometry(format!(
                "expected {} pixels for {}x{}, got {}",
                dims.width * dims.height,
                dims.width,
                dims.height,
                bits.len()
            )));
        }
        let mut packer = BitmapPacker::new(dims);
        if dims.width > 0 {
            for row in bits.chunks_exact(dims.width) {
                let scanline: Vec<u8> = row.iter().map(|&b| if b { 0xFF } else { 0x00 }).collect();
                packer.push_row(&scanline)?;
            }
        }
        Ok(packer.finish())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Raw packed bytes, `row_bytes()` per row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Packed bytes of one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.dims.height {
            return None;
        }
        let stride = self.dims.row_bytes();
        self.data.get(row * stride..(row + 1) * stride)
    }

    /// Read the bit at `(row, col)`, clamping both coordinates to the image.
    ///
    /// Coordinates below zero map to the first row/column, coordinates at or
    /// past the edge map to the last. Returns 0 (dark) or 1 (light).
    ///
    /// The bitmap must not be empty.
    #[inline]
    pub fn sample(&self, row: isize, col: isize) -> u8 {
        debug_assert!(!self.dims.is_empty(), "sampling an empty bitmap");
        let row = row.clamp(0, self.dims.height as isize - 1) as usize;
        let col = col.clamp(0, self.dims.width as isize - 1) as usize;
        let byte = self.data[row * self.dims.row_bytes() + col / 8];
        (byte >> (7 - (col % 8))) & 0x01
    }
}

/// Incremental builder that packs grayscale scanlines into a [`PackedBitmap`].
///
/// The buffer is zero-filled up front, so rows never pushed read as dark.
#[derive(Debug)]
pub struct BitmapPacker {
    dims: Dimensions,
    data: Vec<u8>,
    rows_written: usize,
}

impl BitmapPacker {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            data: vec![0u8; dims.row_bytes() * dims.height],
            rows_written: 0,
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Pack the next scanline of 8-bit grayscale samples.
    ///
    /// Only the top bit of each sample is kept. Samples past `width` are
    /// ignored.
    pub fn push_row(&mut self, scanline: &[u8]) -> Result<()> {
        if self.rows_written >= self.dims.height {
            return Err(BlockgraphError::Geometry(format!(
                "bitmap already holds {} rows",
                self.dims.height
            )));
        }
        if scanline.len() < self.dims.width {
            return Err(BlockgraphError::Geometry(format!(
                "scanline has {} samples, width is {}",
                scanline.len(),
                self.dims.width
            )));
        }

        let stride = self.dims.row_bytes();
        let start = self.rows_written * stride;
        pack_scanline(
            &scanline[..self.dims.width],
            &mut self.data[start..start + stride],
        );
        self.rows_written += 1;
        Ok(())
    }

    pub fn finish(self) -> PackedBitmap {
        PackedBitmap {
            dims: self.dims,
            data: self.data,
        }
    }
}

/// Pack the top bit of each grayscale sample into `out`, MSB first.
fn pack_scanline(samples: &[u8], out: &mut [u8]) {
    for (byte, group) in out.iter_mut().zip(samples.chunks(8)) {
        let mut b = 0u8;
        for (k, &sample) in group.iter().enumerate() {
            b |= (sample >> 7) << (7 - k);
        }
        *byte = b;
    }
}
