//! Text length rules.
//!
//! Length is measured in Unicode scalar values (chars), never bytes.

use crate::foundation::{
    Live, ValidationMessage, ValidationResult, ValidationRule, combined_revision, templates,
};

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Fails when the text is shorter than `min` characters.
///
/// By default the text is trimmed before counting and whitespace inside it
/// counts. With [`exclude_whitespace`](Self::exclude_whitespace) only
/// non-whitespace characters count, and failures use the
/// [`MIN_LENGTH_NO_WHITESPACE`](templates::MIN_LENGTH_NO_WHITESPACE)
/// template so the user knows spaces were ignored.
///
/// Blank text passes.
#[derive(Debug, Clone)]
pub struct MinLength {
    /// Minimum number of characters.
    pub min: Live<usize>,
    /// Trim surrounding whitespace before counting.
    pub trim: Live<bool>,
    /// Count whitespace characters.
    pub include_whitespace: Live<bool>,
}

impl MinLength {
    /// Fixed minimum, trimming, whitespace counted.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self::tracking(Live::Fixed(min))
    }

    /// Minimum re-read on every pass.
    #[must_use]
    pub fn tracking(min: Live<usize>) -> Self {
        Self {
            min,
            trim: Live::Fixed(true),
            include_whitespace: Live::Fixed(true),
        }
    }

    /// Counts the text as typed, surrounding whitespace included.
    #[must_use = "builder methods must be chained or built"]
    pub fn no_trim(mut self) -> Self {
        self.trim = Live::Fixed(false);
        self
    }

    /// Counts only non-whitespace characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn exclude_whitespace(mut self) -> Self {
        self.include_whitespace = Live::Fixed(false);
        self
    }

    /// Sets the trim flag from a live source.
    #[must_use = "builder methods must be chained or built"]
    pub fn trim_when(mut self, trim: Live<bool>) -> Self {
        self.trim = trim;
        self
    }

    /// Sets the whitespace flag from a live source.
    #[must_use = "builder methods must be chained or built"]
    pub fn include_whitespace_when(mut self, include: Live<bool>) -> Self {
        self.include_whitespace = include;
        self
    }
}

impl ValidationRule<str> for MinLength {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            return ValidationResult::success();
        }
        let min = self.min.get();
        let text = if self.trim.get() { value.trim() } else { value };
        let include_whitespace = self.include_whitespace.get();
        let len = if include_whitespace {
            text.chars().count()
        } else {
            text.chars().filter(|c| !c.is_whitespace()).count()
        };
        ValidationResult::check(len >= min, || {
            let id = if include_whitespace {
                templates::MIN_LENGTH
            } else {
                templates::MIN_LENGTH_NO_WHITESPACE
            };
            ValidationMessage::template(id).with_arg(min)
        })
    }

    fn revision(&self) -> u64 {
        combined_revision(&[
            self.min.revision(),
            self.trim.revision(),
            self.include_whitespace.revision(),
        ])
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Fails when the text is longer than `max` characters.
#[derive(Debug, Clone)]
pub struct MaxLength {
    /// Maximum number of characters.
    pub max: Live<usize>,
}

impl MaxLength {
    /// Fixed maximum.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self::tracking(Live::Fixed(max))
    }

    /// Maximum re-read on every pass.
    #[must_use]
    pub fn tracking(max: Live<usize>) -> Self {
        Self { max }
    }
}

impl ValidationRule<str> for MaxLength {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            return ValidationResult::success();
        }
        let max = self.max.get();
        ValidationResult::check(value.chars().count() <= max, || {
            ValidationMessage::template(templates::MAX_LENGTH).with_arg(max)
        })
    }

    fn revision(&self) -> u64 {
        self.max.revision()
    }
}

// ============================================================================
// TESTS
// ============================================================================
