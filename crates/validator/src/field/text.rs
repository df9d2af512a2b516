//! Text input value: the text plus the editor selection.

use std::fmt;

/// Selection or cursor inside a text value, in chars.
///
/// `start` may be greater than `end` for a selection made backwards. A
/// collapsed range (`start == end`) is a plain cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    /// Anchor of the selection.
    pub start: usize,
    /// Active end of the selection.
    pub end: usize,
}

impl TextRange {
    /// Range from `start` to `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed range at `offset`.
    #[must_use]
    pub const fn cursor(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// `true` for a plain cursor.
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        self.start == self.end
    }
}

/// Contents of a text input.
///
/// Rules only ever see [`text`](Self::text); the selection exists so the UI
/// can round-trip editor state through the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextFieldValue {
    /// The text.
    pub text: String,
    /// Current selection or cursor.
    pub selection: TextRange,
}

impl TextFieldValue {
    /// Text with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            text,
            selection: TextRange::cursor(end),
        }
    }

    /// Same selection, different text. The selection is clamped to the new
    /// text.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            selection: TextRange::new(self.selection.start.min(len), self.selection.end.min(len)),
            text,
        }
    }

    /// Same text, different selection.
    #[must_use]
    pub fn with_selection(&self, selection: TextRange) -> Self {
        Self {
            text: self.text.clone(),
            selection,
        }
    }

    /// Length of the text in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<&str> for TextFieldValue {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextFieldValue {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TextFieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_puts_cursor_at_end() {
        let value = TextFieldValue::new("héllo");
        assert_eq!(value.selection, TextRange::cursor(5));
        assert!(value.selection.is_collapsed());
    }

    #[test]
    fn with_text_keeps_and_clamps_selection() {
        let value = TextFieldValue::new("hello").with_selection(TextRange::new(1, 4));
        assert_eq!(value.with_text("howdy").selection, TextRange::new(1, 4));
        assert_eq!(value.with_text("hi").selection, TextRange::new(1, 2));
    }

    #[test]
    fn displays_text_only() {
        assert_eq!(TextFieldValue::from("abc").to_string(), "abc");
    }
}
