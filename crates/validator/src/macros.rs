//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a stateless rule (struct + `ValidationRule` impl)
//!
//! # Examples
//!
//! ```rust,ignore
//! use form_validator::rule;
//! use form_validator::foundation::{ValidationMessage, templates};
//!
//! // Always evaluated, blank input included.
//! rule! {
//!     pub NoSpaces for str;
//!     check(input) { !input.contains(' ') }
//!     message(input) { ValidationMessage::literal("No spaces allowed") }
//! }
//!
//! // Blank input passes without running the check.
//! rule! {
//!     pub Numeric for str;
//!     skip_blank;
//!     check(input) { input.parse::<i64>().is_ok() }
//!     message(input) { ValidationMessage::template(templates::NUMERIC) }
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a stateless rule: a unit struct and its `ValidationRule`
/// implementation.
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied. The `check` block decides pass or fail; the `message` block builds
/// the [`ValidationMessage`](crate::foundation::ValidationMessage) for a
/// failure and only runs when the check fails.
///
/// # Variants
///
/// **Always evaluated**:
/// ```rust,ignore
/// rule! {
///     pub Required for str;
///     check(input) { !input.trim().is_empty() }
///     message(input) { ValidationMessage::template(templates::REQUIRED) }
/// }
/// ```
///
/// **Blank skipped** (only for `str` inputs): a blank value is a success and
/// the check never sees it.
/// ```rust,ignore
/// rule! {
///     pub Email for str;
///     skip_blank;
///     check(input) { is_email(input) }
///     message(input) { ValidationMessage::template(templates::EMAIL) }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1: blank input short-circuits to success ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for str;
        skip_blank;
        check($inp:ident) $check:block
        message($minp:ident) $msg:block
    ) => {
        $crate::rule! {
            @emit
            $(#[$meta])*
            $vis $name for str;
            guard(value) { value.trim().is_empty() }
            check($inp) $check
            message($minp) $msg
        }
    };

    // ── Variant 2: always evaluated ─────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        check($inp:ident) $check:block
        message($minp:ident) $msg:block
    ) => {
        $crate::rule! {
            @emit
            $(#[$meta])*
            $vis $name for $input;
            guard(value) { false }
            check($inp) $check
            message($minp) $msg
        }
    };

    // ── Internal: struct + impl ─────────────────────────────────────────
    (
        @emit
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        guard($ginp:ident) $guard:block
        check($inp:ident) $check:block
        message($minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::ValidationRule<$input> for $name {
            #[allow(unused_variables)]
            fn validate(&self, value: &$input) -> $crate::foundation::ValidationResult {
                let $ginp = value;
                if $guard {
                    return $crate::foundation::ValidationResult::success();
                }
                let $inp = value;
                if $check {
                    $crate::foundation::ValidationResult::success()
                } else {
                    let $minp = value;
                    $crate::foundation::ValidationResult::error($msg)
                }
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
