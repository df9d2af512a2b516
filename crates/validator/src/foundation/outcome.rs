//! Severity model used to summarise rule results.
//!
//! Every [`ValidationResult`](crate::foundation::ValidationResult) carries an
//! [`Outcome`]. Outcomes are totally ordered by their numeric severity, and
//! whenever several results have to be summarised the most severe one wins.

use std::fmt;

// ============================================================================
// OUTCOME
// ============================================================================

/// Ranked classification of a validation result.
///
/// `Success < Info < Warning < Error`. The derived ordering follows the
/// declaration order, which matches [`Outcome::severity`].
///
/// The default is [`Outcome::Error`]: a rule that does not say otherwise is
/// treated as failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Outcome {
    /// The value passed the rule.
    Success,
    /// Informational note, never blocks.
    Info,
    /// Should be addressed but does not make the field invalid.
    Warning,
    /// The value is invalid.
    #[default]
    Error,
}

impl Outcome {
    /// Numeric severity of this outcome.
    #[must_use]
    pub const fn severity(self) -> u16 {
        match self {
            Self::Success => 10,
            Self::Info => 20,
            Self::Warning => 30,
            Self::Error => 40,
        }
    }

    /// `true` for outcomes below [`Outcome::Error`].
    #[must_use]
    pub fn is_passing(self) -> bool {
        self < Self::Error
    }

    /// `true` for [`Outcome::Error`].
    #[must_use]
    pub fn is_error(self) -> bool {
        self >= Self::Error
    }

    /// Returns the more severe of two outcomes.
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

// ============================================================================
// COMBINE
// ============================================================================

/// Summarises a set of outcomes: the maximum severity, or
/// [`Outcome::Success`] when the set is empty.
pub fn combine<I>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    outcomes
        .into_iter()
        .max()
        .unwrap_or(Outcome::Success)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_ranked() {
        assert!(Outcome::Success < Outcome::Info);
        assert!(Outcome::Info < Outcome::Warning);
        assert!(Outcome::Warning < Outcome::Error);
        assert_eq!(Outcome::Success.severity(), 10);
        assert_eq!(Outcome::Error.severity(), 40);
    }

    #[test]
    fn ordering_matches_severity() {
        let all = [
            Outcome::Error,
            Outcome::Success,
            Outcome::Warning,
            Outcome::Info,
        ];
        for a in all {
            for b in all {
                assert_eq!(a.cmp(&b), a.severity().cmp(&b.severity()));
            }
        }
    }

    #[test]
    fn combine_picks_most_severe() {
        assert_eq!(
            combine([Outcome::Success, Outcome::Error, Outcome::Warning]),
            Outcome::Error
        );
        assert_eq!(combine([Outcome::Info, Outcome::Success]), Outcome::Info);
    }

    #[test]
    fn combine_of_nothing_is_success() {
        assert_eq!(combine([]), Outcome::Success);
    }

    #[test]
    fn default_is_error() {
        assert_eq!(Outcome::default(), Outcome::Error);
    }

    #[test]
    fn warning_still_passes() {
        assert!(Outcome::Warning.is_passing());
        assert!(!Outcome::Error.is_passing());
        assert!(Outcome::Error.is_error());
    }
}
