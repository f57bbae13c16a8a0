//! Single-line text buffer shared by the search bar and the command bar.
//!
//! The cursor is kept as a character index, so it never lands inside a
//! multi-byte character.

use crate::event::{AppEvent, Direction};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    /// Characters before the cursor.
    cursor: usize,
}

impl LineInput {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply an editing event. Returns `true` when the text changed; cursor
    /// moves and unrelated events return `false`.
    pub fn edit(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, *c);
                self.cursor += 1;
                true
            }
            AppEvent::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.text.remove(at);
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                false
            }
            _ => false,
        }
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
