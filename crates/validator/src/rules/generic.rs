//! Rules for non-text values: optionals, lists and checkboxes.

use std::fmt;

use crate::foundation::{Live, ValidationMessage, ValidationResult, ValidationRule, templates};

// ============================================================================
// NOT NULL
// ============================================================================

/// Fails on `None`. The same rule as [`Required`](super::Required) on
/// `Option<T>`, under the name generic fields usually use.
pub use super::text::Required as NotNull;

// ============================================================================
// LISTS
// ============================================================================

/// Fails when the list is absent or empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListNotEmpty;

impl<T> ValidationRule<Vec<T>> for ListNotEmpty {
    fn validate(&self, value: &Vec<T>) -> ValidationResult {
        ValidationResult::check(!value.is_empty(), || {
            ValidationMessage::template(templates::NOT_EMPTY_LIST)
        })
    }
}

impl<T> ValidationRule<Option<Vec<T>>> for ListNotEmpty {
    fn validate(&self, value: &Option<Vec<T>>) -> ValidationResult {
        ValidationResult::check(value.as_ref().is_some_and(|list| !list.is_empty()), || {
            ValidationMessage::template(templates::NOT_EMPTY_LIST)
        })
    }
}

/// Fails when the value is not one of `allowed`.
///
/// For `Option<T>` fields `None` passes; pair with
/// [`NotNull`] when a selection is mandatory.
pub struct InList<T> {
    /// Permitted values, re-read on every pass when live.
    pub allowed: Live<Vec<T>>,
}

impl<T: Clone + PartialEq> InList<T> {
    /// Fixed set of permitted values.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = T>) -> Self {
        Self::tracking(Live::Fixed(allowed.into_iter().collect()))
    }

    /// Permitted values re-read on every pass.
    #[must_use]
    pub fn tracking(allowed: Live<Vec<T>>) -> Self {
        Self { allowed }
    }

    fn check(&self, value: &T) -> ValidationResult {
        let found = match &self.allowed {
            Live::Fixed(list) => list.contains(value),
            Live::Tracked(_) => self.allowed.get().contains(value),
        };
        ValidationResult::check(found, || ValidationMessage::template(templates::IN_LIST))
    }
}

impl<T: Clone + PartialEq> ValidationRule<T> for InList<T> {
    fn validate(&self, value: &T) -> ValidationResult {
        self.check(value)
    }

    fn revision(&self) -> u64 {
        self.allowed.revision()
    }
}

impl<T: Clone + PartialEq> ValidationRule<Option<T>> for InList<T> {
    fn validate(&self, value: &Option<T>) -> ValidationResult {
        value
            .as_ref()
            .map_or_else(ValidationResult::success, |v| self.check(v))
    }

    fn revision(&self) -> u64 {
        self.allowed.revision()
    }
}

impl<T: Clone> Clone for InList<T> {
    fn clone(&self) -> Self {
        Self {
            allowed: self.allowed.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for InList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InList")
            .field("allowed", &self.allowed)
            .finish()
    }
}

// ============================================================================
// CHECKBOXES
// ============================================================================

crate::rule! {
    /// Fails unless the box is checked.
    pub IsChecked for bool;
    check(input) { *input }
    message(input) { ValidationMessage::template(templates::IS_CHECKED) }
}

impl ValidationRule<Option<bool>> for IsChecked {
    fn validate(&self, value: &Option<bool>) -> ValidationResult {
        ValidationResult::check(*value == Some(true), || {
            ValidationMessage::template(templates::IS_CHECKED)
        })
    }
}

crate::rule! {
    /// Fails when the box is checked.
    pub IsNotChecked for bool;
    check(input) { !*input }
    message(input) { ValidationMessage::template(templates::IS_NOT_CHECKED) }
}

impl ValidationRule<Option<bool>> for IsNotChecked {
    fn validate(&self, value: &Option<bool>) -> ValidationResult {
        ValidationResult::check(*value != Some(true), || {
            ValidationMessage::template(templates::IS_NOT_CHECKED)
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{LiveCell, Outcome};

    #[test]
    fn not_null() {
        assert_eq!(NotNull.validate(&None::<i32>).outcome, Outcome::Error);
        assert!(NotNull.validate(&Some(1)).is_passing());
    }

    #[test]
    fn list_not_empty() {
        assert!(!ListNotEmpty.validate(&Vec::<u8>::new()).is_passing());
        assert!(ListNotEmpty.validate(&vec![1]).is_passing());
        assert!(!ListNotEmpty.validate(&None::<Vec<u8>>).is_passing());
        assert!(!ListNotEmpty.validate(&Some(Vec::<u8>::new())).is_passing());
        assert!(ListNotEmpty.validate(&Some(vec![1])).is_passing());
    }

    #[test]
    fn in_list_requires_membership() {
        let rule = InList::new(["red", "green"]);
        assert!(rule.validate(&"red").is_passing());
        let missing = rule.validate(&"blue");
        assert_eq!(missing.outcome, Outcome::Error);
        assert_eq!(
            missing.message.unwrap().template_id(),
            Some(templates::IN_LIST)
        );
    }

    #[test]
    fn in_list_lets_absence_through() {
        let rule = InList::new([1, 2, 3]);
        assert!(rule.validate(&None::<i32>).is_passing());
        assert!(rule.validate(&Some(2i32)).is_passing());
        assert!(!rule.validate(&Some(9i32)).is_passing());
    }

    #[test]
    fn in_list_tracks_live_list() {
        let allowed = LiveCell::new(vec![1]);
        let rule = InList::tracking(allowed.live());
        assert!(!rule.validate(&2i32).is_passing());
        allowed.update(|list| list.push(2));
        assert!(rule.validate(&2i32).is_passing());
    }

    #[test]
    fn checkboxes() {
        assert!(IsChecked.validate(&true).is_passing());
        assert!(!IsChecked.validate(&false).is_passing());
        assert!(!IsChecked.validate(&None::<bool>).is_passing());
        assert!(IsNotChecked.validate(&false).is_passing());
        assert!(IsNotChecked.validate(&None::<bool>).is_passing());
        assert!(!IsNotChecked.validate(&Some(true)).is_passing());
    }
}
