//! Rules that read another field's current value.
//!
//! Cross-field rules hold a [`FieldHandle`], never the other validator. They
//! read its *value*, not its results, so two fields that reference each other
//! never recurse into each other's rule evaluation.

use std::fmt;

use crate::foundation::{
    AsRuleInput, FieldHandle, ValidationMessage, ValidationResult, ValidationRule, templates,
};

/// Fails when the text differs from the other field's current text.
///
/// Blank values are compared like any other. If the other field has been
/// dropped the rule fails.
pub struct PasswordMatches<V> {
    other: FieldHandle<V>,
}

impl<V> PasswordMatches<V>
where
    V: AsRuleInput<str>,
{
    /// Compares against the field behind `other`.
    #[must_use]
    pub fn new(other: FieldHandle<V>) -> Self {
        Self { other }
    }
}

impl<V> ValidationRule<str> for PasswordMatches<V>
where
    V: AsRuleInput<str>,
{
    fn validate(&self, value: &str) -> ValidationResult {
        let matches = self
            .other
            .with(|other| AsRuleInput::<str>::as_rule_input(other) == value)
            .unwrap_or(false);
        ValidationResult::check(matches, || ValidationMessage::template(templates::PASSWORDS))
    }

    fn revision(&self) -> u64 {
        self.other.revision()
    }
}

impl<V> Clone for PasswordMatches<V> {
    fn clone(&self) -> Self {
        Self {
            other: self.other.clone(),
        }
    }
}

impl<V> fmt::Debug for PasswordMatches<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordMatches")
            .field("other", &self.other)
            .finish()
    }
}
