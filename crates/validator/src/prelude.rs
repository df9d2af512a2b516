//! Prelude module for convenient imports.
//!
//! Provides a single `use form_validator::prelude::*;` import that brings in
//! the field types, the rule contract and every built-in rule.
//!
//! # Examples
//!
//! ```rust,ignore
//! use form_validator::prelude::*;
//!
//! let mut age = StringValidator::new(String::new(), vec![
//!     Box::new(Required),
//!     Box::new(Numeric),
//!     Box::new(MinValue::new(18.0)),
//! ]);
//! age.on_value_change("17".into());
//! assert_eq!(age.error_text().as_deref(), Some("Must be at least 18"));
//! ```

// ============================================================================
// FOUNDATION: Outcomes, messages, rule contract, live values
// ============================================================================

pub use crate::foundation::{
    AsRuleInput, BoxedRule, DefaultCatalog, FieldHandle, Live, LiveCell, MessageFormatter,
    Observable, Outcome, ValidationMessage, ValidationResult, ValidationRule, combine, templates,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// FIELDS: Validators, config, batch helpers
// ============================================================================

pub use crate::field::{
    ConfigError, FieldConfig, FieldValidation, GenericValidator, ShakeConfig, StringValidator,
    TextFieldValidator, TextFieldValue, TextRange, Validator, VisibilityState, reset_all,
    validate_all, validate_all_with_result,
};

// ============================================================================
// SHAKE
// ============================================================================

pub use crate::shake::{ShakeDirection, ShakeScope, ShakeState, ShakeStrength};
