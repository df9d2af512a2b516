//! Validating a whole form at once.
//!
//! Forms mix field types (`TextFieldValidator`, `GenericValidator<bool>`,
//! ...), so the batch helpers work over the object-safe [`FieldValidation`]
//! trait:
//!
//! ```rust,ignore
//! let fields: [&mut dyn FieldValidation; 3] = [&mut email, &mut password, &mut terms];
//! if !validate_all(fields) {
//!     return;
//! }
//! ```

use super::validator::Validator;
use crate::foundation::{AsRuleInput, Outcome, combine};

/// Type-erased view of a field, enough to validate and query it.
pub trait FieldValidation {
    /// Validates the current value with errors shown (and shaking, when
    /// configured). Returns the worst outcome.
    fn validate_field(&mut self) -> Outcome;

    /// See [`Validator::is_valid`].
    fn is_valid(&self) -> bool;

    /// See [`Validator::is_error`].
    fn is_error(&self) -> bool;

    /// See [`Validator::outcome`].
    fn outcome(&self) -> Option<Outcome>;

    /// See [`Validator::reset`].
    fn reset(&mut self);
}

impl<V, R> FieldValidation for Validator<V, R>
where
    V: AsRuleInput<R>,
    R: ?Sized,
{
    fn validate_field(&mut self) -> Outcome {
        self.validate_with_result(None)
    }

    fn is_valid(&self) -> bool {
        Validator::is_valid(self)
    }

    fn is_error(&self) -> bool {
        Validator::is_error(self)
    }

    fn outcome(&self) -> Option<Outcome> {
        Validator::outcome(self)
    }

    fn reset(&mut self) {
        Validator::reset(self);
    }
}

impl<T: FieldValidation + ?Sized> FieldValidation for &mut T {
    fn validate_field(&mut self) -> Outcome {
        (**self).validate_field()
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }

    fn is_error(&self) -> bool {
        (**self).is_error()
    }

    fn outcome(&self) -> Option<Outcome> {
        (**self).outcome()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

impl<T: FieldValidation + ?Sized> FieldValidation for Box<T> {
    fn validate_field(&mut self) -> Outcome {
        (**self).validate_field()
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }

    fn is_error(&self) -> bool {
        (**self).is_error()
    }

    fn outcome(&self) -> Option<Outcome> {
        (**self).outcome()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Validates every field, without stopping at the first failure, and
/// returns `true` when all pass.
pub fn validate_all<I>(fields: I) -> bool
where
    I: IntoIterator,
    I::Item: FieldValidation,
{
    fields
        .into_iter()
        .fold(true, |all_passed, mut field| {
            field.validate_field().is_passing() && all_passed
        })
}

/// Validates every field and returns the worst outcome (`Success` for no
/// fields).
pub fn validate_all_with_result<I>(fields: I) -> Outcome
where
    I: IntoIterator,
    I::Item: FieldValidation,
{
    combine(fields.into_iter().map(|mut field| field.validate_field()))
}

/// Hides feedback on every field.
pub fn reset_all<I>(fields: I)
where
    I: IntoIterator,
    I::Item: FieldValidation,
{
    for mut field in fields {
        field.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{GenericValidator, StringValidator};
    use crate::rules::{IsChecked, Required};

    #[test]
    fn validates_every_field() {
        let mut a = StringValidator::new("ok".into(), vec![Box::new(Required)]);
        let mut b = StringValidator::new(String::new(), vec![Box::new(Required)]);
        let mut c = GenericValidator::new(false, vec![Box::new(IsChecked)]);
        let fields: [&mut dyn FieldValidation; 3] = [&mut a, &mut b, &mut c];
        assert!(!validate_all(fields));
        assert!(a.is_valid());
        assert!(b.is_error());
        assert!(c.is_error(), "validated after an earlier failure");
    }

    #[test]
    fn worst_outcome() {
        let mut fields: Vec<Box<dyn FieldValidation>> = vec![
            Box::new(StringValidator::new("x".into(), vec![Box::new(Required)])),
            Box::new(GenericValidator::new(true, vec![Box::new(IsChecked)])),
        ];
        assert_eq!(validate_all_with_result(&mut fields), Outcome::Success);
        fields.push(Box::new(StringValidator::new(String::new(), vec![Box::new(Required)])));
        assert_eq!(validate_all_with_result(&mut fields), Outcome::Error);
        reset_all(&mut fields);
        assert!(fields.iter().all(|f| f.outcome().is_none()));
    }

    #[test]
    fn empty_form() {
        let none: Vec<&mut dyn FieldValidation> = Vec::new();
        assert!(validate_all(none));
        assert_eq!(
            validate_all_with_result(Vec::<Box<dyn FieldValidation>>::new()),
            Outcome::Success
        );
    }
}
