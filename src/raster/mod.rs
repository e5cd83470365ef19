//! # Raster Module
//!
//! The 1-bit image model and the analysis run over it.
//!
//! ## Modules
//!
//! - [`bitmap`]: MSB-first packed bitmaps, the scanline packer and the
//!   edge-clamped sampler
//! - [`scale`]: pixel-replication (scale) detection via GCD of transition
//!   distances

pub mod bitmap;
pub mod scale;

pub use bitmap::{BitmapPacker, Dimensions, PackedBitmap};
pub use scale::Scale;
