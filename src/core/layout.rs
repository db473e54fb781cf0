//! Text layout shared by the frontends.
//!
//! Lays the buffer out as lines of glyphs using a frontend-supplied metric
//! (pixels for the GUI, cells for the terminal) and answers "where is the
//! character at offset N", which is how the caret visual is placed.

use unicode_width::UnicodeWidthChar;

/// Default number of spaces a tab advances by
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Horizontal and vertical measures of rendered text.
pub trait GlyphMetrics {
    /// Horizontal advance of `ch`
    fn advance(&self, ch: char) -> f32;
    /// Distance between consecutive baselines
    fn line_height(&self) -> f32;
}

/// Monospace terminal cells: one unit per column, one unit per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl GlyphMetrics for CellMetrics {
    fn advance(&self, ch: char) -> f32 {
        ch.width().unwrap_or(0) as f32
    }

    fn line_height(&self) -> f32 {
        1.0
    }
}

/// Top-left corner of a character's box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A visible character and where it sits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub index: usize,
    pub position: Point,
}

/// Walks text and tracks the pen position.
#[derive(Debug, Clone)]
pub struct TextLayout<'m, M: GlyphMetrics> {
    metrics: &'m M,
    tab_width: usize,
}

impl<'m, M: GlyphMetrics> TextLayout<'m, M> {
    pub fn new(metrics: &'m M, tab_width: usize) -> Self {
        Self { metrics, tab_width }
    }

    fn advance_pen(&self, pen: &mut Point, ch: char) {
        match ch {
            '\n' => {
                pen.x = 0.0;
                pen.y += self.metrics.line_height();
            }
            '\t' => pen.x += self.metrics.advance(' ') * self.tab_width as f32,
            _ => pen.x += self.metrics.advance(ch),
        }
    }

    /// Position of the character at `index`; indices past the end map to the
    /// position just after the last character.
    pub fn character_position<I>(&self, text: I, index: usize) -> Point
    where
        I: IntoIterator<Item = char>,
    {
        let mut pen = Point::default();
        for ch in text.into_iter().take(index) {
            self.advance_pen(&mut pen, ch);
        }
        pen
    }

    /// Every drawable glyph in `text`. Newlines and tabs only move the pen.
    pub fn glyphs<I>(&self, text: I) -> Vec<PlacedGlyph>
    where
        I: IntoIterator<Item = char>,
    {
        let mut pen = Point::default();
        let mut placed = Vec::new();
        for (index, ch) in text.into_iter().enumerate() {
            if !matches!(ch, '\n' | '\t') {
                placed.push(PlacedGlyph {
                    ch,
                    index,
                    position: pen,
                });
            }
            self.advance_pen(&mut pen, ch);
        }
        placed
    }
}
