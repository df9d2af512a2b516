//! # form-validator
//!
//! Reactive validation for form fields: a value, an ordered list of rules,
//! and the state that decides when the user gets to see the result.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use form_validator::prelude::*;
//!
//! let mut email = TextFieldValidator::from_text("", vec![Box::new(Required), Box::new(Email)]);
//! let mut password = TextFieldValidator::from_text("", vec![Box::new(MinLength::new(8))]);
//! let mut confirm = TextFieldValidator::from_text("", vec![])
//!     .rule(PasswordMatches::new(password.handle()));
//!
//! // Bind `on_text_change`, `is_error()` and `supporting_text(..)` to the UI,
//! // then on submit:
//! let fields: [&mut dyn FieldValidation; 3] = [&mut email, &mut password, &mut confirm];
//! if validate_all(fields) {
//!     // submit
//! }
//! ```
//!
//! ## Writing Rules
//!
//! Implement [`ValidationRule`](foundation::ValidationRule), pass a closure
//! `Fn(&T) -> ValidationResult`, or use the [`rule!`] macro for stateless
//! rules.
//!
//! ## Built-in Rules
//!
//! - **Text**: [`Required`](rules::Required), [`Numeric`](rules::Numeric),
//!   [`Decimal`](rules::Decimal), [`MinValue`](rules::MinValue),
//!   [`MaxValue`](rules::MaxValue), [`Email`](rules::Email),
//!   [`Phone`](rules::Phone)
//! - **Length**: [`MinLength`](rules::MinLength), [`MaxLength`](rules::MaxLength)
//! - **Dates**: [`DayOfMonth`](rules::DayOfMonth),
//!   [`MonthOfYear`](rules::MonthOfYear), [`Year`](rules::Year)
//! - **Cross-field**: [`PasswordMatches`](rules::PasswordMatches)
//! - **Generic**: [`NotNull`](rules::NotNull), [`ListNotEmpty`](rules::ListNotEmpty),
//!   [`InList`](rules::InList), [`IsChecked`](rules::IsChecked),
//!   [`IsNotChecked`](rules::IsNotChecked)
//!
//! ## Threading
//!
//! Fields are `!Send` and belong to the UI thread. The only background work is
//! the shake animation, spawned on tokio through a
//! [`ShakeScope`](shake::ShakeScope).

pub mod field;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
pub mod rules;
pub mod shake;
