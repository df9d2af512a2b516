//! Content-shape rules for text fields.
//!
//! Apart from [`Required`], every rule here treats a blank value as a
//! success: "is this present" is `Required`'s job, "is this well-formed" is
//! theirs. Stack both when a field is mandatory.

use crate::foundation::{
    Live, ValidationMessage, ValidationResult, ValidationRule, templates,
};
use crate::predicates::{DEFAULT_REGION, is_email, is_phone_number, parse_decimal};

// ============================================================================
// REQUIRED
// ============================================================================

crate::rule! {
    /// Fails when the text is blank (empty or whitespace only).
    ///
    /// Also implemented for `Option<T>`, where it fails on `None`; see
    /// [`NotNull`](crate::rules::NotNull).
    pub Required for str;
    check(input) { !input.trim().is_empty() }
    message(input) { ValidationMessage::template(templates::REQUIRED) }
}

impl<T> ValidationRule<Option<T>> for Required {
    fn validate(&self, value: &Option<T>) -> ValidationResult {
        ValidationResult::check(value.is_some(), || {
            ValidationMessage::template(templates::NOT_NULL)
        })
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

crate::rule! {
    /// Fails when the text is not a whole number (`i64`).
    pub Numeric for str;
    skip_blank;
    check(input) { input.parse::<i64>().is_ok() }
    message(input) { ValidationMessage::template(templates::NUMERIC) }
}

crate::rule! {
    /// Fails when the text is not a decimal number.
    ///
    /// Surrounding whitespace is allowed; see [`parse_decimal`].
    pub Decimal for str;
    skip_blank;
    check(input) { parse_decimal(input).is_some() }
    message(input) { ValidationMessage::template(templates::DECIMAL) }
}

/// Fails when the text is not a number or is below `min`.
#[derive(Debug, Clone)]
pub struct MinValue {
    /// Inclusive lower bound.
    pub min: Live<f64>,
}

impl MinValue {
    /// Fixed lower bound.
    #[must_use]
    pub fn new(min: f64) -> Self {
        Self::tracking(Live::Fixed(min))
    }

    /// Lower bound re-read on every pass.
    #[must_use]
    pub fn tracking(min: Live<f64>) -> Self {
        Self { min }
    }
}

impl ValidationRule<str> for MinValue {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            return ValidationResult::success();
        }
        let min = self.min.get();
        let ok = parse_decimal(value).is_some_and(|n| n >= min);
        ValidationResult::check(ok, || {
            ValidationMessage::template(templates::MIN_VALUE).with_arg(min)
        })
    }

    fn revision(&self) -> u64 {
        self.min.revision()
    }
}

/// Fails when the text is not a number or is above `max`.
#[derive(Debug, Clone)]
pub struct MaxValue {
    /// Inclusive upper bound.
    pub max: Live<f64>,
}

impl MaxValue {
    /// Fixed upper bound.
    #[must_use]
    pub fn new(max: f64) -> Self {
        Self::tracking(Live::Fixed(max))
    }

    /// Upper bound re-read on every pass.
    #[must_use]
    pub fn tracking(max: Live<f64>) -> Self {
        Self { max }
    }
}

impl ValidationRule<str> for MaxValue {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            return ValidationResult::success();
        }
        let max = self.max.get();
        let ok = parse_decimal(value).is_some_and(|n| n <= max);
        ValidationResult::check(ok, || {
            ValidationMessage::template(templates::MAX_VALUE).with_arg(max)
        })
    }

    fn revision(&self) -> u64 {
        self.max.revision()
    }
}

// ============================================================================
// EMAIL / PHONE
// ============================================================================

crate::rule! {
    /// Fails when the text is not shaped like an email address.
    pub Email for str;
    skip_blank;
    check(input) { is_email(input) }
    message(input) { ValidationMessage::template(templates::EMAIL) }
}

/// Fails when the text is not a valid phone number.
///
/// National numbers are interpreted in `region` (two-letter country code,
/// `"US"` by default). With no region only international `+` numbers pass.
/// The region can be live, e.g. bound to a country picker.
#[derive(Debug, Clone)]
pub struct Phone {
    /// Region for numbers without a country prefix.
    pub region: Live<Option<String>>,
}

impl Phone {
    /// Phone rule for the default region (`"US"`).
    #[must_use]
    pub fn new() -> Self {
        Self::region(DEFAULT_REGION)
    }

    /// Phone rule for a specific region, e.g. `"GB"`.
    #[must_use]
    pub fn region(region: impl Into<String>) -> Self {
        Self::tracking(Live::Fixed(Some(region.into())))
    }

    /// Only numbers in international `+` form pass.
    #[must_use]
    pub fn international() -> Self {
        Self::tracking(Live::Fixed(None))
    }

    /// Region re-read on every pass.
    #[must_use]
    pub fn tracking(region: Live<Option<String>>) -> Self {
        Self { region }
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<str> for Phone {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            return ValidationResult::success();
        }
        let region = self.region.get();
        ValidationResult::check(is_phone_number(value, region.as_deref()), || {
            ValidationMessage::template(templates::PHONE)
        })
    }

    fn revision(&self) -> u64 {
        self.region.revision()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{LiveCell, Outcome};

    fn template_of(result: &ValidationResult) -> Option<&str> {
        result.message.as_ref().and_then(ValidationMessage::template_id)
    }

    #[test]
    fn required_rejects_blank() {
        assert_eq!(Required.validate("").outcome, Outcome::Error);
        assert_eq!(Required.validate("  ").outcome, Outcome::Error);
        assert_eq!(Required.validate("x").outcome, Outcome::Success);
    }

    #[test]
    fn required_on_options() {
        assert!(!Required.validate(&None::<u8>).is_passing());
        assert!(Required.validate(&Some(0u8)).is_passing());
        assert_eq!(
            template_of(&Required.validate(&None::<u8>)),
            Some(templates::NOT_NULL)
        );
    }

    #[test]
    fn numeric_and_decimal() {
        assert!(Numeric.validate("42").is_passing());
        assert!(Numeric.validate("-7").is_passing());
        assert!(!Numeric.validate("4.2").is_passing());
        assert!(Decimal.validate("4.2").is_passing());
        assert!(!Decimal.validate("four").is_passing());
        assert!(Numeric.validate("").is_passing());
        assert!(Decimal.validate(" ").is_passing());
    }

    #[test]
    fn decimal_reads_form_input() {
        assert!(Decimal.validate(" 1.5").is_passing());
        assert!(Decimal.validate("2.5e3 ").is_passing());
        assert!(Decimal.validate("NaN").is_passing());
        assert!(Decimal.validate("-Infinity").is_passing());
        assert!(!Decimal.validate("inf").is_passing());
        assert!(!Decimal.validate("nan").is_passing());
        assert!(!MaxValue::new(10.0).validate("-inf").is_passing());
    }

    #[test]
    fn min_value_bounds() {
        let rule = MinValue::new(18.0);
        assert!(rule.validate("18").is_passing());
        assert!(!rule.validate("17.5").is_passing());
        assert!(!rule.validate("abc").is_passing());
        assert!(rule.validate("").is_passing());
        assert!(rule.validate(" 20 ").is_passing());
        assert!(!rule.validate("NaN").is_passing());
        let failed = rule.validate("3");
        assert_eq!(failed.message.unwrap().args(), ["18"]);
    }

    #[test]
    fn max_value_bounds() {
        let rule = MaxValue::new(10.5);
        assert!(rule.validate("10.5").is_passing());
        assert!(!rule.validate("11").is_passing());
        assert!(!rule.validate("x").is_passing());
        assert!(rule.validate("").is_passing());
    }

    #[test]
    fn live_bound_is_reread() {
        let limit = LiveCell::new(5.0);
        let rule = MaxValue::tracking(limit.live());
        assert!(!rule.validate("7").is_passing());
        let before = rule.revision();
        limit.set(10.0);
        assert_ne!(rule.revision(), before);
        assert!(rule.validate("7").is_passing());
    }

    #[test]
    fn email_skips_blank() {
        assert!(Email.validate("").is_passing());
        assert!(!Email.validate("not-an-email").is_passing());
        assert!(!Email.validate("43435").is_passing());
        assert!(Email.validate("me@me.com").is_passing());
    }

    #[test]
    fn phone_regions() {
        assert!(!Phone::new().validate("07745973912").is_passing());
        assert!(Phone::region("GB").validate("07740973910").is_passing());
        assert!(!Phone::new().validate("43435").is_passing());
        assert!(Phone::new().validate("6508991234").is_passing());
        assert!(Phone::new().validate("+16508991234").is_passing());
        assert!(Phone::international().validate("+16508991234").is_passing());
        assert!(Phone::new().validate("").is_passing());
    }

    #[test]
    fn phone_region_can_follow_a_picker() {
        let country = LiveCell::new(Some("US".to_owned()));
        let rule = Phone::tracking(country.live());
        assert!(!rule.validate("07740973910").is_passing());

        let before = rule.revision();
        country.set(Some("GB".to_owned()));
        assert_ne!(rule.revision(), before);
        assert!(rule.validate("07740973910").is_passing());

        country.set(None);
        assert!(!rule.validate("07740973910").is_passing());
        assert!(rule.validate("+447740973910").is_passing());
    }
}
