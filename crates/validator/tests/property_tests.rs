//! Property-based tests for form-validator.

use form_validator::prelude::*;
use proptest::prelude::*;

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Success),
        Just(Outcome::Info),
        Just(Outcome::Warning),
        Just(Outcome::Error),
    ]
}

fn blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn text_rules() -> Vec<BoxedRule<str>> {
    vec![
        Box::new(Numeric),
        Box::new(Decimal),
        Box::new(MinValue::new(10.0)),
        Box::new(MaxValue::new(-10.0)),
        Box::new(MinLength::new(50)),
        Box::new(Email),
    ]
}

fn shape_rules() -> Vec<BoxedRule<str>> {
    let mut rules = text_rules();
    rules.push(Box::new(Phone::new()));
    rules
}

// ============================================================================
// COMBINE: worst outcome wins
// ============================================================================

proptest! {
    #[test]
    fn combine_is_the_maximum(outcomes in prop::collection::vec(outcome(), 0..8)) {
        let expected = outcomes.iter().copied().max().unwrap_or(Outcome::Success);
        prop_assert_eq!(combine(outcomes.iter().copied()), expected);
    }

    #[test]
    fn combine_ignores_order(mut outcomes in prop::collection::vec(outcome(), 0..8)) {
        let forward = combine(outcomes.iter().copied());
        outcomes.reverse();
        prop_assert_eq!(combine(outcomes), forward);
    }

    #[test]
    fn one_error_fails_the_lot(outcomes in prop::collection::vec(outcome(), 0..8)) {
        let with_error = outcomes.iter().copied().chain([Outcome::Error]);
        prop_assert!(combine(with_error).is_error());
    }
}

// ============================================================================
// BLANK INPUT: shape and bound rules leave it to Required
// ============================================================================

proptest! {
    #[test]
    fn blank_skips_shape_rules(input in blank()) {
        for rule in shape_rules() {
            prop_assert!(rule.validate(input.as_str()).is_passing());
        }
    }

    #[test]
    fn blank_fails_required(input in blank()) {
        prop_assert_eq!(Required.validate(input.as_str()).outcome, Outcome::Error);
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn rules_are_idempotent(input in ".{0,40}") {
        for rule in text_rules() {
            prop_assert_eq!(rule.validate(input.as_str()), rule.validate(input.as_str()));
        }
    }

    #[test]
    fn field_reads_are_stable(input in ".{0,40}") {
        let mut field = StringValidator::new(String::new(), text_rules());
        field.on_value_change(input);
        let first = (field.outcome(), field.error_text());
        let second = (field.outcome(), field.error_text());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn min_length_agrees_with_char_count(input in "[a-z]{0,12}", min in 1usize..10) {
        let passes = MinLength::new(min).validate(input.as_str()).is_passing();
        prop_assert_eq!(passes, input.is_empty() || input.chars().count() >= min);
    }
}
