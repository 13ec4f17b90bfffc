//! Search input handling (pure state transitions).
//!
//! The cursor counts characters, not bytes, so multi-byte input never
//! splits a code point. All functions take and return the input by value.

/// Text typed into the search bar plus the cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    /// Input holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters, `0..=char_count`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True if nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

/// Insert `ch` at the cursor and advance the cursor.
pub fn handle_char_input(mut input: SearchInput, ch: char) -> SearchInput {
    let at = input.byte_offset(input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: SearchInput) -> SearchInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_offset(input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut input: SearchInput) -> SearchInput {
    if input.cursor < input.text.chars().count() {
        let at = input.byte_offset(input.cursor);
        input.text.remove(at);
    }
    input
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(mut input: SearchInput) -> SearchInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one character. Saturates at the end.
pub fn handle_cursor_right(mut input: SearchInput) -> SearchInput {
    input.cursor = (input.cursor + 1).min(input.text.chars().count());
    input
}

/// Move cursor to the start.
pub fn handle_home(mut input: SearchInput) -> SearchInput {
    input.cursor = 0;
    input
}

/// Move cursor to the end.
pub fn handle_end(input: SearchInput) -> SearchInput {
    SearchInput::new(input.text)
}

/// Drop all text.
pub fn clear_search(_input: SearchInput) -> SearchInput {
    SearchInput::default()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
