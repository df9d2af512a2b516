//! The value a rule returns for one input.

use super::message::ValidationMessage;
use super::outcome::Outcome;

/// Outcome of one rule against one value, with an optional message.
///
/// `ValidationResult::default()` is an error without a message. Custom rules
/// that build a result field by field rely on this: forgetting to set the
/// outcome fails closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    /// Severity of the result.
    pub outcome: Outcome,
    /// Message shown to the user, if any.
    pub message: Option<ValidationMessage>,
}

impl ValidationResult {
    /// Builds a result from its parts.
    #[must_use]
    pub fn new(outcome: Outcome, message: Option<ValidationMessage>) -> Self {
        Self { outcome, message }
    }

    /// A passing result without a message.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            outcome: Outcome::Success,
            message: None,
        }
    }

    /// A failing result.
    pub fn error(message: impl Into<ValidationMessage>) -> Self {
        Self::new(Outcome::Error, Some(message.into()))
    }

    /// A non-blocking warning.
    pub fn warning(message: impl Into<ValidationMessage>) -> Self {
        Self::new(Outcome::Warning, Some(message.into()))
    }

    /// An informational note.
    pub fn info(message: impl Into<ValidationMessage>) -> Self {
        Self::new(Outcome::Info, Some(message.into()))
    }

    /// Passes when `ok`, otherwise fails with `message`.
    ///
    /// The message is built lazily.
    pub fn check(ok: bool, message: impl FnOnce() -> ValidationMessage) -> Self {
        if ok {
            Self::success()
        } else {
            Self::error(message())
        }
    }

    /// `true` when the outcome is below [`Outcome::Error`].
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.outcome.is_passing()
    }
}

impl From<ValidationMessage> for ValidationResult {
    fn from(message: ValidationMessage) -> Self {
        Self::error(message)
    }
}
