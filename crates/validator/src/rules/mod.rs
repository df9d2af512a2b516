//! Built-in rules
//!
//! # Categories
//!
//! - **Text content**: [`Required`], [`Numeric`], [`Decimal`], [`MinValue`],
//!   [`MaxValue`], [`Email`], [`Phone`]
//! - **Text length**: [`MinLength`], [`MaxLength`]
//! - **Dates**: [`DayOfMonth`], [`MonthOfYear`], [`Year`]
//! - **Cross-field**: [`PasswordMatches`]
//! - **Generic values**: [`NotNull`], [`ListNotEmpty`], [`InList`],
//!   [`IsChecked`], [`IsNotChecked`]
//!
//! # Blank input
//!
//! Shape and bounds rules pass on blank text. Only [`Required`] and
//! [`PasswordMatches`] look at blank values, so a mandatory email field is
//! `[Required, Email]`, not just `[Email]`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use form_validator::prelude::*;
//!
//! let email = StringValidator::new(String::new(), vec![
//!     Box::new(Required),
//!     Box::new(Email),
//! ]);
//!
//! let age = StringValidator::new(String::new(), vec![
//!     Box::new(Numeric),
//!     Box::new(MinValue::new(18.0)),
//!     Box::new(MaxValue::new(130.0)),
//! ]);
//! ```

pub mod cross_field;
pub mod date;
pub mod generic;
pub mod length;
pub mod text;

pub use cross_field::PasswordMatches;
pub use date::{DayOfMonth, MonthOfYear, Year};
pub use generic::{InList, IsChecked, IsNotChecked, ListNotEmpty, NotNull};
pub use length::{MaxLength, MinLength};
pub use text::{Decimal, Email, MaxValue, MinValue, Numeric, Phone, Required};
