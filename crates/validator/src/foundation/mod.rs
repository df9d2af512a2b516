//! Core validation types and traits.
//!
//! This module contains the building blocks every field is made of:
//!
//! - **Severity**: [`Outcome`] and [`combine`]
//! - **Messages**: [`ValidationMessage`], [`MessageFormatter`], [`DefaultCatalog`]
//! - **Results**: [`ValidationResult`]
//! - **Rules**: [`ValidationRule`], [`AsRuleInput`]
//! - **Live values**: [`Live`], [`LiveCell`], [`FieldHandle`]
//!
//! # Architecture
//!
//! ## 1. Failures are values
//!
//! A rule never returns `Err`. It returns a [`ValidationResult`] whose
//! [`Outcome`] says how bad things are, and the field summarises all of its
//! results by taking the most severe one:
//!
//! ```rust,ignore
//! use form_validator::foundation::{combine, Outcome};
//!
//! assert_eq!(combine([Outcome::Success, Outcome::Error, Outcome::Warning]), Outcome::Error);
//! assert_eq!(combine([]), Outcome::Success);
//! ```
//!
//! ## 2. Messages are rendered late
//!
//! Rules return template ids with arguments. Text is produced only when the
//! UI asks for it, through a [`MessageFormatter`]:
//!
//! ```rust,ignore
//! let msg = ValidationMessage::template(templates::MIN_LENGTH).with_arg(8);
//! assert_eq!(msg.format(&DefaultCatalog), "Must be at least 8 characters");
//! ```
//!
//! ## 3. Thresholds can be live
//!
//! A rule parameter is a [`Live`] value. Fixed parameters never change;
//! tracked ones are re-read on every pass and carry a revision so cached
//! results can be invalidated.

pub mod live;
pub mod message;
pub mod outcome;
pub mod result;
pub mod rule;

pub use live::{FieldHandle, Live, LiveCell, Observable, combined_revision};
pub use message::{
    DefaultCatalog, MessageArgs, MessageFormatter, ValidationMessage, substitute, templates,
};
pub use outcome::{Outcome, combine};
pub use result::ValidationResult;
pub use rule::{AsRuleInput, BoxedRule, ValidationRule};
