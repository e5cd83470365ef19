//! # Scale Detection
//!
//! Images drawn at an integer pixel-replication factor (every logical cell
//! painted as an N×M block of identical pixels) have all of their light/dark
//! transitions at distances divisible by that factor. Folding the transition
//! distances through a GCD recovers the factor, so the compositor can collapse
//! each block back into a single glyph cell.
//!
//! ```text
//! Row:          ████░░░░████░░░░
//! Transitions:      ^   ^   ^        columns 4, 8, 12
//! Distances from first: 4, 8   →   gcd = 4
//! ```
//!
//! The horizontal pass scans every row left to right, the vertical pass every
//! column top to bottom. Both share one anchor for the whole bitmap: the first
//! transition seen seeds it, later transitions contribute their distance to
//! it, and a transition at a smaller index than the anchor contributes its
//! distance and then becomes the new anchor.

use std::num::NonZeroUsize;

use super::bitmap::PackedBitmap;

/// Greatest common divisor of two natural numbers.
///
/// `gcd(a, 0) = a` and `gcd(0, b) = b`, so 0 works as an "unconstrained"
/// starting value when folding.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Per-axis pixel repeat period. Both components are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub horizontal: NonZeroUsize,
    pub vertical: NonZeroUsize,
}

impl Scale {
    /// Every pixel is its own cell.
    pub const UNIT: Scale = Scale {
        horizontal: NonZeroUsize::MIN,
        vertical: NonZeroUsize::MIN,
    };

    /// Build a scale, treating 0 on either axis as 1.
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal: NonZeroUsize::new(horizontal).unwrap_or(NonZeroUsize::MIN),
            vertical: NonZeroUsize::new(vertical).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Detect both axes. Empty bitmaps report [`Scale::UNIT`].
pub fn detect(bitmap: &PackedBitmap) -> Scale {
    if bitmap.is_empty() {
        return Scale::UNIT;
    }
    let scale = Scale {
        horizontal: horizontal(bitmap),
        vertical: vertical(bitmap),
    };
    tracing::debug!(
        horizontal = scale.horizontal.get(),
        vertical = scale.vertical.get(),
        "detected scale"
    );
    scale
}

/// Horizontal period, scanning each row left to right.
pub fn horizontal(bitmap: &PackedBitmap) -> NonZeroUsize {
    if bitmap.is_empty() {
        return NonZeroUsize::MIN;
    }
    scan_period(bitmap.height(), bitmap.width(), |row, col| {
        bitmap.sample(row as isize, col as isize)
    })
}

/// Vertical period, scanning each column top to bottom.
pub fn vertical(bitmap: &PackedBitmap) -> NonZeroUsize {
    if bitmap.is_empty() {
        return NonZeroUsize::MIN;
    }
    scan_period(bitmap.width(), bitmap.height(), |col, row| {
        bitmap.sample(row as isize, col as isize)
    })
}

/// Fold transition distances along `lines` scan lines of `len` pixels each.
///
/// `pixel(line, pos)` reads one bit. The anchor persists across lines.
fn scan_period<F>(lines: usize, len: usize, pixel: F) -> NonZeroUsize
where
    F: Fn(usize, usize) -> u8,
{
    let mut scale = 0;
    let mut anchor: Option<usize> = None;

    for line in 0..lines {
        let mut prev = pixel(line, 0);
        for pos in 1..len {
            let cur = pixel(line, pos);
            if cur == prev {
                continue;
            }
            prev = cur;

            let Some(start) = anchor else {
                anchor = Some(pos);
                continue;
            };
            if pos > start {
                scale = gcd(pos - start, scale);
            } else if pos < start {
                scale = gcd(start - pos, scale);
                anchor = Some(pos);
            }
            if scale == 1 {
                return NonZeroUsize::MIN;
            }
        }
    }

    // Still 0 means fewer than two distinct transition positions
    NonZeroUsize::new(scale).unwrap_or(NonZeroUsize::MIN)
}
