//! CPU-side frame composition
//!
//! Each frame is painted into an RGBA8 pixel buffer (clear, glyph coverage
//! masks, caret rectangle) which the renderer then uploads and blits.

use crate::core::editor::Editor;
use crate::core::layout::{GlyphMetrics, TextLayout};

pub type Rgba = [u8; 4];

pub const BACKGROUND: Rgba = [0, 0, 0, 255];
pub const FOREGROUND: Rgba = [255, 255, 255, 255];

/// Caret rectangle width in pixels
pub const CARET_WIDTH: u32 = 2;

/// A rasterized glyph: a coverage mask plus its offset from the pen.
///
/// `ymin` is the distance from the baseline up to the bottom of the mask.
#[derive(Debug, Clone, Copy)]
pub struct GlyphBitmap<'a> {
    pub width: usize,
    pub height: usize,
    pub xmin: i32,
    pub ymin: i32,
    pub coverage: &'a [u8],
}

/// A font the canvas can draw with.
pub trait GlyphRasterizer: GlyphMetrics {
    /// Text size in pixels
    fn size(&self) -> f32;
    /// Distance from the top of a line to its baseline
    fn ascent(&self) -> f32;
    fn rasterize(&mut self, ch: char) -> GlyphBitmap<'_>;
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA rows
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.resize(width as usize * height as usize * 4, 0);
    }

    pub fn clear(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Fill a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width as usize, height as usize) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                let i = self.offset(px, py);
                self.pixels[i..i + 4].copy_from_slice(&color);
            }
        }
    }

    /// Blend `color` through a `width` x `height` coverage mask placed at (x, y)
    pub fn blend_mask(
        &mut self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        coverage: &[u8],
        color: Rgba,
    ) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width, height) else {
            return;
        };
        for py in y0..y1 {
            let my = (i64::from(py) - i64::from(y)) as usize;
            for px in x0..x1 {
                let mx = (i64::from(px) - i64::from(x)) as usize;
                let Some(&alpha) = coverage.get(my * width + mx) else {
                    continue;
                };
                if alpha == 0 {
                    continue;
                }
                let i = self.offset(px, py);
                for c in 0..3 {
                    let src = u32::from(color[c]) * u32::from(alpha);
                    let dst = u32::from(self.pixels[i + c]) * (255 - u32::from(alpha));
                    self.pixels[i + c] = ((src + dst) / 255) as u8;
                }
                self.pixels[i + 3] = 255;
            }
        }
    }

    /// Draw the buffer text and the caret, white on black.
    pub fn paint_editor<F: GlyphRasterizer>(
        &mut self,
        editor: &Editor,
        tab_width: usize,
        font: &mut F,
    ) {
        self.clear(BACKGROUND);

        let (glyphs, caret) = {
            let layout = TextLayout::new(&*font, tab_width);
            (
                layout.glyphs(editor.buffer().chars()),
                layout.character_position(editor.buffer().chars(), editor.caret()),
            )
        };

        let ascent = font.ascent();
        for glyph in glyphs {
            let bitmap = font.rasterize(glyph.ch);
            if bitmap.width == 0 || bitmap.height == 0 {
                continue;
            }
            let x = glyph.position.x.round() as i32 + bitmap.xmin;
            let baseline = (glyph.position.y + ascent).round() as i32;
            let y = baseline - bitmap.ymin - bitmap.height as i32;
            self.blend_mask(
                x,
                y,
                bitmap.width,
                bitmap.height,
                bitmap.coverage,
                FOREGROUND,
            );
        }

        self.fill_rect(
            caret.x.round() as i32,
            caret.y.round() as i32,
            CARET_WIDTH,
            font.size().round() as u32,
            FOREGROUND,
        );
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Visible part of a rectangle as (x0, y0, x1, y1), end-exclusive
    fn clip(&self, x: i32, y: i32, width: usize, height: usize) -> Option<(u32, u32, u32, u32)> {
        let clamp = |v: i64, max: u32| v.clamp(0, i64::from(max)) as u32;
        let x0 = clamp(i64::from(x), self.width);
        let y0 = clamp(i64::from(y), self.height);
        let x1 = clamp(i64::from(x).saturating_add(width as i64), self.width);
        let y1 = clamp(i64::from(y).saturating_add(height as i64), self.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}
