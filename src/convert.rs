//! # Conversion Pipeline
//!
//! One call per image: decode, pack, detect scale, composite, serialize.
//! A conversion returns the complete text or an error, never partial output.

use crate::decode::{self, ContentType};
use crate::error::Result;
use crate::raster::{PackedBitmap, scale};
use crate::render::{GlyphSet, OutputText, compose};

/// Render an already packed bitmap with automatically detected scale.
pub fn render_bitmap(bitmap: &PackedBitmap) -> OutputText {
    if bitmap.is_empty() {
        return OutputText::default();
    }
    compose(bitmap, scale::detect(bitmap))
}

/// Decode an encoded image and render it as block-graphics text.
pub fn convert(bytes: &[u8], content_type: ContentType, glyphs: &GlyphSet<'_>) -> Result<String> {
    let bitmap = decode::decode(bytes, content_type)?;
    Ok(render_bitmap(&bitmap).render(glyphs))
}
