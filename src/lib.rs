//! # Blockgraph - Block-Graphics Image Renderer
//!
//! Blockgraph renders monochrome images as text built from four block
//! glyphs (`█`, `▀`, `▄` and an empty cell). Every output character covers a
//! pair of vertically stacked pixels. When the image was drawn at an integer
//! pixel-replication factor, that factor is detected from the image itself
//! and each replicated block collapses back into a single cell.
//!
//! It provides:
//!
//! - **Decoding**: encoded images to 8-bit grayscale via the `image` crate
//! - **Packing**: grayscale scanlines to an MSB-first 1-bit bitmap
//! - **Scale detection**: GCD of light/dark transition distances per axis
//! - **Compositing**: pixel pairs to glyphs, serialized with a caller-chosen
//!   glyph mapping
//!
//! ## Quick Start
//!
//! ```no_run
//! use blockgraph::{convert, decode::ContentType, render::GlyphSet};
//!
//! let png = std::fs::read("logo.png")?;
//! let text = convert::convert(&png, ContentType::PNG, &GlyphSet::UTF8)?;
//! print!("{}", text);
//! # Ok::<(), blockgraph::BlockgraphError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`decode`] | Content types, byte reader, image decoding |
//! | [`raster`] | Packed bitmaps, clamped sampling, scale detection |
//! | [`render`] | Glyphs and compositing |
//! | [`convert`] | End-to-end conversion |
//! | [`error`] | Error types |

pub mod convert;
pub mod decode;
pub mod error;
pub mod raster;
pub mod render;

// Re-exports for convenience
pub use error::BlockgraphError;
pub use raster::{Dimensions, PackedBitmap, Scale};
pub use render::{Charset, Glyph, GlyphSet, OutputText};
