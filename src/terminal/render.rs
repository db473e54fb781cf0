//! Terminal rendering
//!
//! Redraws the whole buffer each frame: one row per line, tabs expanded to
//! spaces, and the terminal cursor parked on the caret cell.

use std::io::{self, Write};

use crossterm::style::Print;
use crossterm::{cursor, queue, terminal};
use unicode_width::UnicodeWidthChar;

use crate::core::editor::Editor;
use crate::core::layout::{CellMetrics, TextLayout};

/// Draw `editor` into a terminal of `size` (columns, rows).
pub fn render_editor<W: Write>(
    out: &mut W,
    editor: &Editor,
    tab_width: usize,
    size: (u16, u16),
) -> io::Result<()> {
    let (cols, rows) = size;

    queue!(
        out,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    )?;

    let text = editor.text();
    for (row, line) in text.split('\n').take(usize::from(rows)).enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(
            out,
            cursor::MoveTo(0, row),
            Print(visible_line(line, tab_width, usize::from(cols)))
        )?;
    }

    let (x, y) = caret_cell(editor, tab_width, size);
    queue!(out, cursor::MoveTo(x, y), cursor::Show)?;
    out.flush()
}

/// The part of `line` that fits in `cols` cells, with tabs expanded.
fn visible_line(line: &str, tab_width: usize, cols: usize) -> String {
    let mut visible = String::with_capacity(line.len());
    let mut used = 0;
    for ch in line.chars() {
        let (glyph, count, width) = if ch == '\t' {
            (' ', tab_width, tab_width)
        } else {
            (ch, 1, ch.width().unwrap_or(0))
        };
        if used + width > cols {
            break;
        }
        visible.extend(std::iter::repeat_n(glyph, count));
        used += width;
    }
    visible
}

/// Terminal cell under the caret, kept on screen.
fn caret_cell(editor: &Editor, tab_width: usize, size: (u16, u16)) -> (u16, u16) {
    let layout = TextLayout::new(&CellMetrics, tab_width);
    let position = layout.character_position(editor.buffer().chars(), editor.caret());

    let clamp = |value: f32, limit: u16| -> u16 {
        let max = limit.saturating_sub(1);
        if value >= f32::from(max) {
            max
        } else {
            value as u16
        }
    };
    (clamp(position.x, size.0), clamp(position.y, size.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(editor: &Editor, size: (u16, u16)) -> String {
        let mut out = Vec::new();
        render_editor(&mut out, editor, 4, size).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_text_and_caret() {
        let editor = Editor::default();
        let output = render(&editor, (80, 24));

        assert!(output.contains("Hello, World!"));
        // Caret at offset 2 sits on row 1, column 3 (1-based)
        assert!(output.ends_with("\x1b[1;3H\x1b[?25h"));
    }

    #[test]
    fn test_lines_are_placed_on_rows() {
        let editor = Editor::new("one\ntwo", 4);
        let output = render(&editor, (80, 24));

        assert!(output.contains("\x1b[1;1Hone"));
        assert!(output.contains("\x1b[2;1Htwo"));
        assert!(output.ends_with("\x1b[2;1H\x1b[?25h"));
    }

    #[test]
    fn test_tabs_expand_to_spaces() {
        assert_eq!(visible_line("\tx", 4, 80), "    x");
        let editor = Editor::new("\tx", 1);
        assert_eq!(caret_cell(&editor, 4, (80, 24)), (4, 0));
    }

    #[test]
    fn test_long_lines_are_cut_at_the_edge() {
        assert_eq!(visible_line("abcdef", 4, 3), "abc");
        assert_eq!(visible_line("a\tb", 4, 3), "a");
    }

    #[test]
    fn test_caret_is_kept_on_screen() {
        let editor = Editor::new("abcdefghij", 10);
        assert_eq!(caret_cell(&editor, 4, (5, 3)), (4, 0));

        let editor = Editor::new("a\nb\nc\nd", 7);
        assert_eq!(caret_cell(&editor, 4, (80, 2)), (1, 1));
    }

    #[test]
    fn test_rows_past_the_screen_are_skipped() {
        let editor = Editor::new("a\nb\nc", 0);
        let output = render(&editor, (80, 2));
        assert!(!output.contains("\x1b[3;1H"));
    }
}
