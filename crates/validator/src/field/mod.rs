//! Form fields
//!
//! - [`Validator`] and its aliases [`TextFieldValidator`],
//!   [`StringValidator`], [`GenericValidator`]
//! - [`FieldConfig`]: when feedback shows, whether the field shakes
//! - [`VisibilityState`]: the `Hidden` / `Visible` state machine
//! - [`validate_all`] / [`validate_all_with_result`]: whole-form helpers

pub mod batch;
pub mod config;
pub mod state;
pub mod text;
pub mod validator;

pub use batch::{FieldValidation, reset_all, validate_all, validate_all_with_result};
pub use config::{ConfigError, DEFAULT_SEPARATOR, FieldConfig, ShakeConfig};
pub use state::VisibilityState;
pub use text::{TextFieldValue, TextRange};
pub use validator::{GenericValidator, StringValidator, TextFieldValidator, Validator};
