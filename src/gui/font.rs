//! Font loading and glyph rasterization with fontdue

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings, Metrics};

use crate::core::layout::GlyphMetrics;
use crate::gui::canvas::{GlyphBitmap, GlyphRasterizer};

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// A font at one pixel size, with rasterized glyphs cached per character.
pub struct FontResource {
    font: Font,
    size: f32,
    ascent: f32,
    line_height: f32,
    glyphs: HashMap<char, (Metrics, Vec<u8>)>,
}

impl FontResource {
    /// Read and parse the font at `path` for drawing at `size` pixels.
    pub fn load(path: &Path, size: f32) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, bytes, size)
    }

    fn from_bytes(path: &Path, bytes: Vec<u8>, size: f32) -> Result<Self, FontError> {
        let settings = FontSettings {
            scale: size,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(|message| FontError::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        })?;

        let (ascent, line_height) = match font.horizontal_line_metrics(size) {
            Some(line) => (line.ascent, line.new_line_size),
            None => (size * 0.8, size * 1.2),
        };

        Ok(Self {
            font,
            size,
            ascent,
            line_height,
            glyphs: HashMap::new(),
        })
    }
}

impl GlyphMetrics for FontResource {
    fn advance(&self, ch: char) -> f32 {
        self.font.metrics(ch, self.size).advance_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl GlyphRasterizer for FontResource {
    fn size(&self) -> f32 {
        self.size
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn rasterize(&mut self, ch: char) -> GlyphBitmap<'_> {
        let (font, size) = (&self.font, self.size);
        let (metrics, coverage) = self
            .glyphs
            .entry(ch)
            .or_insert_with(|| font.rasterize(ch, size));
        GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_font_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");

        let err = FontResource::load(&path, 30.0).err().unwrap();
        assert!(matches!(err, FontError::Read { .. }));
        assert!(err.to_string().contains("missing.ttf"));
    }

    #[test]
    fn test_corrupt_font_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let err = FontResource::load(file.path(), 30.0).err().unwrap();
        assert!(matches!(err, FontError::Parse { .. }));
    }
}
