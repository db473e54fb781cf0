//! TextBuffer: the single ordered character sequence being edited.
//! No caret state (that belongs to Editor).
//!
//! Backed by a ropey Rope and addressed by character index, so callers never
//! see byte offsets or the rope itself.

use ropey::Rope;

/// The edited text, one contiguous sequence of characters.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from a string
    pub fn from_string(content: impl AsRef<str>) -> Self {
        Self {
            rope: Rope::from_str(content.as_ref()),
        }
    }

    // ==================== Content Access ====================

    /// Number of characters in the buffer
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Character at `index`, or `None` past the end
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.rope.get_char(index)
    }

    /// Iterate over every character in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rope.chars()
    }

    // ==================== Editing Operations ====================

    /// Insert `ch` so that it ends up at `index`.
    /// Returns false (and leaves the buffer untouched) if `index > len`.
    pub fn insert_char(&mut self, index: usize, ch: char) -> bool {
        if index > self.rope.len_chars() {
            return false;
        }
        self.rope.insert_char(index, ch);
        true
    }

    /// Remove the character at `index` and return it.
    pub fn remove_char(&mut self, index: usize) -> Option<char> {
        let ch = self.rope.get_char(index)?;
        self.rope.remove(index..index + 1);
        Some(ch)
    }

    // ==================== Search ====================

    /// Nearest offset strictly before `from` holding `needle`.
    pub fn find_backward(&self, needle: char, from: usize) -> Option<usize> {
        let end = from.min(self.rope.len_chars());
        let mut chars = self.rope.chars_at(end);
        let mut index = end;
        while let Some(ch) = chars.prev() {
            index -= 1;
            if ch == needle {
                return Some(index);
            }
        }
        None
    }

    /// Nearest offset strictly after `from` holding `needle`.
    pub fn find_forward(&self, needle: char, from: usize) -> Option<usize> {
        let start = from.checked_add(1)?;
        if start >= self.rope.len_chars() {
            return None;
        }
        self.rope
            .chars_at(start)
            .position(|ch| ch == needle)
            .map(|pos| start + pos)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
