#![forbid(unsafe_code)]

//! Text measurement capability.

use unicode_width::UnicodeWidthStr;

/// Horizontal and vertical extent of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f32,
    /// Distance from the baseline to the top of the tallest glyph (positive).
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyph (positive).
    pub descent: f32,
}

/// Measures text at a given size.
pub trait TextMeasurer {
    fn measure(&self, text: &str, size: f32) -> TextMetrics;
}

/// Measures text by display cells.
///
/// Each cell advances `size * advance_ratio`; wide glyphs (CJK, most emoji)
/// take two cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTextMeasurer {
    advance_ratio: f32,
    ascent_ratio: f32,
    descent_ratio: f32,
}

impl CellTextMeasurer {
    #[must_use]
    pub const fn new(advance_ratio: f32, ascent_ratio: f32, descent_ratio: f32) -> Self {
        Self {
            advance_ratio,
            ascent_ratio,
            descent_ratio,
        }
    }

    /// Display width of `text` in cells.
    #[inline]
    pub fn cells(text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }
}

impl Default for CellTextMeasurer {
    fn default() -> Self {
        Self::new(0.6, 0.8, 0.2)
    }
}

impl TextMeasurer for CellTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        TextMetrics {
            width: Self::cells(text) as f32 * size * self.advance_ratio,
            ascent: size * self.ascent_ratio,
            descent: size * self.descent_ratio,
        }
    }
}
