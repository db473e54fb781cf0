//! Editor: one text buffer plus the caret that edits it.
//!
//! The caret is a character offset meaning "insert before this position" and
//! always stays within `0..=buffer.len()`. Newlines are ordinary characters;
//! vertical movement is a scan for the nearest delimiter, and the caret lands
//! on the delimiter itself rather than past it.

use tracing::warn;

use crate::core::buffer::TextBuffer;
use crate::core::error::{EditError, EditOp};

/// Text shown when no initial text is configured
pub const DEFAULT_TEXT: &str = "Hello, World!\n";

/// Caret offset into [`DEFAULT_TEXT`] at startup
pub const DEFAULT_CARET: usize = 2;

#[derive(Debug, Clone)]
pub struct Editor {
    buffer: TextBuffer,
    caret: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT, DEFAULT_CARET)
    }
}

impl Editor {
    /// Create an editor over `text` with the caret at `caret`.
    ///
    /// A caret past the end of `text` is clamped to the end.
    pub fn new(text: &str, caret: usize) -> Self {
        let buffer = TextBuffer::from_string(text);
        let len = buffer.len();
        if caret > len {
            warn!(caret, len, "initial caret past end of text, clamping");
        }
        Self {
            caret: caret.min(len),
            buffer,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    // ==================== Editing ====================

    /// Insert `ch` at the caret and advance the caret past it.
    pub fn insert(&mut self, ch: char) -> Result<(), EditError> {
        if !self.buffer.insert_char(self.caret, ch) {
            return Err(self.out_of_range(EditOp::Insert));
        }
        self.move_right();
        Ok(())
    }

    /// Remove the character before the caret. Does nothing at offset 0.
    pub fn delete_before_caret(&mut self) -> Result<(), EditError> {
        if self.caret == 0 {
            return Ok(());
        }
        if self.caret > self.buffer.len() {
            return Err(self.out_of_range(EditOp::DeleteBackward));
        }
        self.buffer.remove_char(self.caret - 1);
        self.move_left();
        Ok(())
    }

    fn out_of_range(&self, op: EditOp) -> EditError {
        EditError::OutOfRange {
            op,
            caret: self.caret,
            len: self.buffer.len(),
        }
    }

    // ==================== Movement ====================

    /// Returns true if moved, false if already at start
    pub fn move_left(&mut self) -> bool {
        if self.caret > 0 {
            self.caret -= 1;
            return true;
        }
        false
    }

    /// Returns true if moved, false if already at end
    pub fn move_right(&mut self) -> bool {
        if self.caret < self.buffer.len() {
            self.caret += 1;
            return true;
        }
        false
    }

    /// Put the caret on the nearest `delimiter` left of it.
    pub fn move_to_line_start(&mut self, delimiter: char) -> bool {
        match self.buffer.find_backward(delimiter, self.caret) {
            Some(index) => {
                self.caret = index;
                true
            }
            None => false,
        }
    }

    /// Put the caret on the nearest `delimiter` right of it.
    ///
    /// The character under the caret is not considered.
    pub fn move_to_line_end(&mut self, delimiter: char) -> bool {
        match self.buffer.find_forward(delimiter, self.caret) {
            Some(index) => {
                self.caret = index;
                true
            }
            None => false,
        }
    }

    pub fn jump_to_buffer_start(&mut self) {
        self.caret = 0;
    }

    /// Put the caret before the last character. No-op on an empty buffer.
    pub fn jump_to_buffer_end(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.caret = self.buffer.len() - 1;
    }
}
