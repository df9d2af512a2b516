//! The rule contract.
//!
//! A rule is a pure function from a value to a [`ValidationResult`]. It may
//! read other fields through [`FieldHandle`](super::FieldHandle)s or live
//! thresholds, but it never mutates anything.

use super::result::ValidationResult;
use crate::field::TextFieldValue;

// ============================================================================
// VALIDATION RULE
// ============================================================================

/// A single validation rule over values of type `T`.
///
/// Implementors must be pure: the same input and the same live dependencies
/// must produce the same result.
///
/// # Live dependencies
///
/// Rules whose behaviour depends on values that can change between
/// validation passes (live thresholds, other fields) report a
/// [`revision`](Self::revision) that moves whenever one of those values
/// changes. Validators use it to decide whether cached results are stale.
/// Rules without live inputs keep the default of `0`.
///
/// # Closures
///
/// Any `Fn(&T) -> ValidationResult` is a rule:
///
/// ```rust,ignore
/// use form_validator::prelude::*;
///
/// let no_admin = |name: &str| {
///     ValidationResult::check(name != "admin", || ValidationMessage::literal("Reserved"))
/// };
/// assert!(!no_admin.validate("admin").is_passing());
/// ```
pub trait ValidationRule<T: ?Sized> {
    /// Evaluates the rule against `value`.
    fn validate(&self, value: &T) -> ValidationResult;

    /// Revision of the rule's live dependencies.
    fn revision(&self) -> u64 {
        0
    }
}

impl<T, F> ValidationRule<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> ValidationResult,
{
    fn validate(&self, value: &T) -> ValidationResult {
        self(value)
    }
}

/// Boxed rule, the element type of a validator's rule list.
pub type BoxedRule<R> = Box<dyn ValidationRule<R>>;

// ============================================================================
// RULE INPUT
// ============================================================================

/// Projects a stored field value onto the type its rules inspect.
///
/// A text field stores a [`TextFieldValue`] (text plus selection) but its
/// rules only ever see the text, so `TextFieldValue: AsRuleInput<str>`.
/// Every type is trivially its own rule input.
pub trait AsRuleInput<R: ?Sized> {
    /// Borrows the part of `self` that rules look at.
    fn as_rule_input(&self) -> &R;
}

impl<T> AsRuleInput<T> for T {
    fn as_rule_input(&self) -> &T {
        self
    }
}

impl AsRuleInput<str> for String {
    fn as_rule_input(&self) -> &str {
        self
    }
}

impl AsRuleInput<str> for TextFieldValue {
    fn as_rule_input(&self) -> &str {
        &self.text
    }
}
