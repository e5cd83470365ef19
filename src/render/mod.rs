//! # Rendering Module
//!
//! Turns a packed bitmap into block-graphics text.
//!
//! ## Modules
//!
//! - [`glyph`]: the four block glyphs and their display strings
//! - [`compose`]: the scale-stepped walk that pairs pixels into glyphs
//!
//! ## Usage Example
//!
//! ```
//! use blockgraph::raster::{scale, Dimensions, PackedBitmap};
//! use blockgraph::render::{compose, GlyphSet};
//!
//! // 2x2: light top row over a dark bottom row
//! let bitmap = PackedBitmap::from_bits(Dimensions::new(2, 2), &[true, true, false, false])?;
//! let text = compose::compose(&bitmap, scale::detect(&bitmap));
//! assert_eq!(text.render(&GlyphSet::UTF8), "▄▄\n");
//! # Ok::<(), blockgraph::BlockgraphError>(())
//! ```

pub mod compose;
pub mod glyph;

pub use compose::{OutputText, compose};
pub use glyph::{Charset, Glyph, GlyphSet};
