//! # Block Glyphs
//!
//! Each output cell covers two vertically stacked pixels. The pair selects one
//! of four glyphs:
//!
//! ```text
//! top bottom  index  glyph
//!  0    0       0    █  full block        (both dark)
//!  0    1       1    ▀  upper half block  (top dark)
//!  1    0       2    ▄  lower half block  (bottom dark)
//!  1    1       3       empty             (both light)
//! ```
//!
//! The strings printed for each glyph come from a [`GlyphSet`] supplied by
//! the caller. [`GlyphSet::UTF8`] holds the Unicode block elements and a
//! no-break space for the empty cell.

/// One of the four block-graphics cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    FullBlock,
    UpperHalfBlock,
    LowerHalfBlock,
    Empty,
}

impl Glyph {
    /// All glyphs, ordered by [`Glyph::index`].
    pub const ALL: [Glyph; 4] = [
        Glyph::FullBlock,
        Glyph::UpperHalfBlock,
        Glyph::LowerHalfBlock,
        Glyph::Empty,
    ];

    /// Glyph for a sampled pixel pair (0 = dark, 1 = light).
    ///
    /// Only the lowest bit of each argument is used.
    #[inline]
    pub fn from_pair(top: u8, bottom: u8) -> Self {
        Self::ALL[(2 * (top & 1) + (bottom & 1)) as usize]
    }

    /// The 2-bit index `2 × top + bottom`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Glyph::FullBlock => 0,
            Glyph::UpperHalfBlock => 1,
            Glyph::LowerHalfBlock => 2,
            Glyph::Empty => 3,
        }
    }
}

/// Target text encoding of the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Utf8,
    Ascii,
}

impl Charset {
    /// Whether `s` survives output in this charset unchanged.
    pub fn can_represent(self, s: &str) -> bool {
        match self {
            Charset::Utf8 => true,
            Charset::Ascii => s.is_ascii(),
        }
    }
}

/// Substitute printed for glyph strings the target charset can't hold.
pub const FALLBACK_SYMBOL: &str = "?";

/// Display strings for the four glyphs, indexed by [`Glyph::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet<'a> {
    symbols: [&'a str; 4],
}

impl GlyphSet<'static> {
    /// Unicode block elements: `█`, `▀`, `▄` and U+00A0 for empty cells.
    pub const UTF8: GlyphSet<'static> = GlyphSet {
        symbols: ["\u{2588}", "\u{2580}", "\u{2584}", "\u{00A0}"],
    };
}

impl Default for GlyphSet<'static> {
    fn default() -> Self {
        Self::UTF8
    }
}

impl<'a> GlyphSet<'a> {
    /// Strings for full, upper half, lower half and empty, in that order.
    pub const fn new(symbols: [&'a str; 4]) -> Self {
        Self { symbols }
    }

    #[inline]
    pub fn symbol(&self, glyph: Glyph) -> &'a str {
        self.symbols[glyph.index()]
    }

    /// Replace every symbol `charset` can't represent with `?`.
    pub fn for_charset(self, charset: Charset) -> Self {
        let mut symbols = self.symbols;
        for (glyph, symbol) in Glyph::ALL.iter().zip(symbols.iter_mut()) {
            if !charset.can_represent(symbol) {
                tracing::warn!(
                    ?glyph,
                    ?charset,
                    "glyph {:?} not representable, replacing with '{}'",
                    symbol,
                    FALLBACK_SYMBOL
                );
                *symbol = FALLBACK_SYMBOL;
            }
        }
        Self { symbols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_table() {
        assert_eq!(Glyph::from_pair(0, 0), Glyph::FullBlock);
        assert_eq!(Glyph::from_pair(0, 1), Glyph::UpperHalfBlock);
        assert_eq!(Glyph::from_pair(1, 0), Glyph::LowerHalfBlock);
        assert_eq!(Glyph::from_pair(1, 1), Glyph::Empty);
    }

    #[test]
    fn test_index_matches_pair() {
        for top in 0..2u8 {
            for bottom in 0..2u8 {
                let glyph = Glyph::from_pair(top, bottom);
                assert_eq!(glyph.index(), (2 * top + bottom) as usize);
                assert_eq!(Glyph::ALL[glyph.index()], glyph);
            }
        }
    }

    #[test]
    fn test_utf8_symbols() {
        let set = GlyphSet::UTF8;
        assert_eq!(set.symbol(Glyph::FullBlock), "█");
        assert_eq!(set.symbol(Glyph::UpperHalfBlock), "▀");
        assert_eq!(set.symbol(Glyph::LowerHalfBlock), "▄");
        assert_eq!(set.symbol(Glyph::Empty), "\u{a0}");
        assert_eq!(GlyphSet::default(), set);
    }

    #[test]
    fn test_ascii_fallback() {
        let set = GlyphSet::UTF8.for_charset(Charset::Ascii);
        for glyph in Glyph::ALL {
            assert_eq!(set.symbol(glyph), FALLBACK_SYMBOL);
        }
    }

    #[test]
    fn test_fallback_keeps_representable() {
        let set = GlyphSet::new(["#", "\u{2580}", ",", " "]).for_charset(Charset::Ascii);
        assert_eq!(set.symbol(Glyph::FullBlock), "#");
        assert_eq!(set.symbol(Glyph::UpperHalfBlock), "?");
        assert_eq!(set.symbol(Glyph::LowerHalfBlock), ",");
        assert_eq!(set.symbol(Glyph::Empty), " ");

        let utf8 = GlyphSet::UTF8.for_charset(Charset::Utf8);
        assert_eq!(utf8, GlyphSet::UTF8);
    }
}
