//! # Error Types
//!
//! This module defines error types used throughout the blockgraph library.

use thiserror::Error;

/// Main error type for blockgraph operations
#[derive(Debug, Error)]
pub enum BlockgraphError {
    /// Malformed or truncated source image
    #[error("Decode error: {0}")]
    Decode(String),

    /// A strict read asked for more bytes than the source holds
    #[error("Premature end-of-data: requested {requested} bytes, {remaining} remaining")]
    PrematureEnd { requested: usize, remaining: usize },

    /// Content type has no decoder
    #[error("Content type '{0}' is not supported")]
    UnsupportedContentType(String),

    /// Scanlines or packed rows that don't fit the declared dimensions
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BlockgraphError>;
