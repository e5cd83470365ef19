//! # Glyph Compositing
//!
//! Walks a [`PackedBitmap`] in scale-sized steps and turns each vertical pixel
//! pair into a [`Glyph`].
//!
//! ```text
//! column step = horizontal scale (h)
//! row step    = 2 × vertical scale (v)
//!
//!   j      j+h
//!   ▼      ▼
//!   ┌──────┬──────┐ ◄ i       top    = sample(i, j)
//!   │      │      │
//!   ├──────┼──────┤ ◄ i+v     bottom = sample(i + v, j)
//!   │      │      │
//!   └──────┴──────┘ ◄ i+2v    next output line
//! ```
//!
//! On an odd final row the bottom sample lands one row past the image and is
//! clamped back onto the last row.

use std::fmt;

use super::glyph::{Glyph, GlyphSet};
use crate::raster::{PackedBitmap, Scale};

/// Line terminator appended after every output line.
pub const LINE_TERMINATOR: char = '\n';

/// Composited picture: one `Vec<Glyph>` per output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputText {
    lines: Vec<Vec<Glyph>>,
}

impl OutputText {
    pub fn lines(&self) -> &[Vec<Glyph>] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Serialize with `glyphs`, terminating every line with `\n`.
    pub fn render(&self, glyphs: &GlyphSet<'_>) -> String {
        let capacity: usize = self
            .lines
            .iter()
            .map(|line| {
                line.iter().map(|&g| glyphs.symbol(g).len()).sum::<usize>()
                    + LINE_TERMINATOR.len_utf8()
            })
            .sum();

        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            for &glyph in line {
                out.push_str(glyphs.symbol(glyph));
            }
            out.push(LINE_TERMINATOR);
        }
        out
    }
}

impl fmt::Display for OutputText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&GlyphSet::UTF8))
    }
}

/// Composite `bitmap` at the given scale.
///
/// Produces `ceil(height / 2v)` lines of `ceil(width / h)` glyphs. Empty
/// bitmaps produce an empty [`OutputText`].
pub fn compose(bitmap: &PackedBitmap, scale: Scale) -> OutputText {
    if bitmap.is_empty() {
        return OutputText::default();
    }

    let h = scale.horizontal.get();
    let v = scale.vertical.get();
    let row_step = 2 * v;
    let columns = bitmap.width().div_ceil(h);
    let rows = bitmap.height().div_ceil(row_step);

    let mut lines = Vec::with_capacity(rows);
    for i in (0..bitmap.height()).step_by(row_step) {
        let mut line = Vec::with_capacity(columns);
        for j in (0..bitmap.width()).step_by(h) {
            let top = bitmap.sample(i as isize, j as isize);
            let bottom = bitmap.sample((i + v) as isize, j as isize);
            line.push(Glyph::from_pair(top, bottom));
        }
        lines.push(line);
    }

    tracing::debug!(lines = lines.len(), columns, "composited glyphs");
    OutputText { lines }
}
