//! Date-part rules for split day / month / year inputs.
//!
//! Each rule validates one component typed into its own field and checks
//! that, combined with the other two components of a reference date, it
//! forms a real calendar date.

use chrono::{Datelike, NaiveDate};

use crate::foundation::{Live, ValidationMessage, ValidationResult, ValidationRule, templates};
use crate::predicates::construct_date;

/// Which component of the reference date the field replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Day,
    Month,
    Year,
}

fn validate_part(part: Part, reference: &Live<NaiveDate>, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::success();
    }
    let Ok(component) = value.trim().parse::<i64>() else {
        let id = match part {
            Part::Day => templates::DAY,
            Part::Month => templates::MONTH,
            Part::Year => templates::YEAR,
        };
        return ValidationResult::error(ValidationMessage::template(id));
    };
    let current = reference.get();
    let (year, month, day) = (
        i64::from(current.year()),
        i64::from(current.month()),
        i64::from(current.day()),
    );
    let built = match part {
        Part::Day => construct_date(year, month, component),
        Part::Month => construct_date(year, component, day),
        Part::Year => construct_date(component, month, day),
    };
    match built {
        Ok(_) => ValidationResult::success(),
        Err(err) => ValidationResult::error(
            ValidationMessage::template(templates::INVALID_DATE).with_arg(err),
        ),
    }
}

macro_rules! date_part_rule {
    ($(#[$meta:meta])* $name:ident => $part:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            /// Date supplying the other two components.
            pub reference: Live<NaiveDate>,
        }

        impl $name {
            /// Rule against a fixed or live reference date.
            pub fn new(reference: impl Into<Live<NaiveDate>>) -> Self {
                Self {
                    reference: reference.into(),
                }
            }
        }

        impl ValidationRule<str> for $name {
            fn validate(&self, value: &str) -> ValidationResult {
                validate_part($part, &self.reference, value)
            }

            fn revision(&self) -> u64 {
                self.reference.revision()
            }
        }
    };
}

date_part_rule! {
    /// Validates a day-of-month against the reference date's year and month.
    DayOfMonth => Part::Day
}

date_part_rule! {
    /// Validates a month against the reference date's year and day.
    MonthOfYear => Part::Month
}

date_part_rule! {
    /// Validates a year against the reference date's month and day.
    Year => Part::Year
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{DefaultCatalog, LiveCell};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_within_month() {
        let rule = DayOfMonth::new(date(2023, 2, 1));
        assert!(rule.validate("28").is_passing());
        assert!(!rule.validate("29").is_passing());
        assert!(rule.validate("").is_passing());
    }

    #[test]
    fn non_numeric_component_gets_its_own_message() {
        let day = DayOfMonth::new(date(2023, 1, 1)).validate("x");
        let month = MonthOfYear::new(date(2023, 1, 1)).validate("x");
        let year = Year::new(date(2023, 1, 1)).validate("x");
        assert_eq!(day.message.unwrap().template_id(), Some(templates::DAY));
        assert_eq!(month.message.unwrap().template_id(), Some(templates::MONTH));
        assert_eq!(year.message.unwrap().template_id(), Some(templates::YEAR));
    }

    #[test]
    fn invalid_date_carries_reason() {
        let result = MonthOfYear::new(date(2023, 1, 31)).validate("4");
        let message = result.message.unwrap();
        assert_eq!(message.template_id(), Some(templates::INVALID_DATE));
        assert_eq!(
            message.format(&DefaultCatalog),
            "Invalid date: day 31 is out of range 1..=30 for 2023-04"
        );
    }

    #[test]
    fn leap_day_depends_on_year() {
        let rule = Year::new(date(2024, 2, 29));
        assert!(rule.validate("2028").is_passing());
        assert!(!rule.validate("2027").is_passing());
    }

    #[test]
    fn reference_can_be_live() {
        let reference = LiveCell::new(date(2023, 1, 1));
        let rule = DayOfMonth::new(reference.live());
        assert!(rule.validate("31").is_passing());
        reference.set(date(2023, 6, 1));
        assert!(!rule.validate("31").is_passing());
        assert_eq!(rule.revision(), 1);
    }
}
