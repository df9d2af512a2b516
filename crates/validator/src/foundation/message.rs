//! Formattable validation messages.
//!
//! Rules never produce display strings directly. They return a
//! [`ValidationMessage`] that is either a template id plus positional
//! arguments, or a literal string. Rendering is deferred to a
//! [`MessageFormatter`], which is only consulted when the UI asks for text.
//!
//! Template ids double as stable codes for i18n lookup, in the same spirit as
//! error codes: a localisation layer implements [`MessageFormatter`] and maps
//! the ids below to its own resources.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// TEMPLATE IDS
// ============================================================================

/// Template ids used by the built-in rules.
pub mod templates {
    /// Text is blank.
    pub const REQUIRED: &str = "rule_required";
    /// Text is not an integer.
    pub const NUMERIC: &str = "rule_numeric";
    /// Text is not a decimal number.
    pub const DECIMAL: &str = "rule_decimal";
    /// Number below the minimum. Args: `[min]`.
    pub const MIN_VALUE: &str = "rule_min_value";
    /// Number above the maximum. Args: `[max]`.
    pub const MAX_VALUE: &str = "rule_max_value";
    /// Text shorter than the minimum. Args: `[min]`.
    pub const MIN_LENGTH: &str = "rule_min_length";
    /// Text has too few non-whitespace characters. Args: `[min]`.
    pub const MIN_LENGTH_NO_WHITESPACE: &str = "rule_min_length_no_whitespace";
    /// Text longer than the maximum. Args: `[max]`.
    pub const MAX_LENGTH: &str = "rule_max_length";
    /// Text is not shaped like an email address.
    pub const EMAIL: &str = "rule_email";
    /// Text is not a valid phone number.
    pub const PHONE: &str = "rule_phone";
    /// Day component is not a number.
    pub const DAY: &str = "rule_day";
    /// Month component is not a number.
    pub const MONTH: &str = "rule_month";
    /// Year component is not a number.
    pub const YEAR: &str = "rule_year";
    /// Date could not be constructed. Args: `[reason]`.
    pub const INVALID_DATE: &str = "rule_invalid_date";
    /// Confirmation does not match.
    pub const PASSWORDS: &str = "rule_passwords";
    /// Value is absent.
    pub const NOT_NULL: &str = "rule_not_null";
    /// Value is not one of the allowed values.
    pub const IN_LIST: &str = "rule_in_list";
    /// List is absent or empty.
    pub const NOT_EMPTY_LIST: &str = "rule_not_empty_list";
    /// Box must be checked.
    pub const IS_CHECKED: &str = "rule_is_checked";
    /// Box must not be checked.
    pub const IS_NOT_CHECKED: &str = "rule_is_not_checked";
}

// ============================================================================
// VALIDATION MESSAGE
// ============================================================================

/// Positional arguments of a templated message (typically zero or one).
pub type MessageArgs = SmallVec<[Cow<'static, str>; 2]>;

/// An immutable, formattable message returned by a rule.
///
/// Equality is structural: template id plus arguments, or the literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationMessage {
    /// Reference to a localisable template with positional arguments.
    Template {
        /// Template id, see [`templates`].
        id: Cow<'static, str>,
        /// Positional arguments substituted into `{0}`, `{1}`, ...
        args: MessageArgs,
    },
    /// Already-rendered text.
    Literal(Cow<'static, str>),
}

impl ValidationMessage {
    /// Creates a template message without arguments.
    pub fn template(id: impl Into<Cow<'static, str>>) -> Self {
        Self::Template {
            id: id.into(),
            args: SmallVec::new(),
        }
    }

    /// Creates a literal message.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Literal(text.into())
    }

    /// Appends a positional argument to a template message.
    ///
    /// Literal messages have no placeholders; the argument is ignored.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl fmt::Display) -> Self {
        if let Self::Template { args, .. } = &mut self {
            args.push(Cow::Owned(arg.to_string()));
        }
        self
    }

    /// Template id, or `None` for literal messages.
    #[must_use]
    pub fn template_id(&self) -> Option<&str> {
        match self {
            Self::Template { id, .. } => Some(id),
            Self::Literal(_) => None,
        }
    }

    /// Positional arguments (empty for literals).
    #[must_use]
    pub fn args(&self) -> &[Cow<'static, str>] {
        match self {
            Self::Template { args, .. } => args,
            Self::Literal(_) => &[],
        }
    }

    /// Renders the message through `formatter`.
    pub fn format(&self, formatter: &dyn MessageFormatter) -> String {
        match self {
            Self::Template { id, args } => formatter.format(id, args),
            Self::Literal(text) => text.to_string(),
        }
    }
}

impl From<&'static str> for ValidationMessage {
    fn from(text: &'static str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for ValidationMessage {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

// ============================================================================
// FORMATTER
// ============================================================================

/// Renders template messages into display strings.
///
/// This is the localisation seam. Implementations look `template` up in their
/// resources and substitute `args` positionally.
pub trait MessageFormatter {
    /// Formats `template` with positional `args`.
    fn format(&self, template: &str, args: &[Cow<'static, str>]) -> String;
}

impl<F> MessageFormatter for F
where
    F: Fn(&str, &[Cow<'static, str>]) -> String,
{
    fn format(&self, template: &str, args: &[Cow<'static, str>]) -> String {
        self(template, args)
    }
}

/// Built-in English catalog for the [`templates`] ids.
///
/// Unknown ids are treated as the pattern itself, so ad-hoc templates such as
/// `"Must be {0} or later"` work without registering anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl DefaultCatalog {
    /// English pattern for a built-in template id.
    #[must_use]
    pub fn pattern(id: &str) -> Option<&'static str> {
        let pattern = match id {
            templates::REQUIRED => "Required",
            templates::NUMERIC => "Must be a whole number",
            templates::DECIMAL => "Must be a number",
            templates::MIN_VALUE => "Must be at least {0}",
            templates::MAX_VALUE => "Must be at most {0}",
            templates::MIN_LENGTH => "Must be at least {0} characters",
            templates::MIN_LENGTH_NO_WHITESPACE => {
                "Must be at least {0} characters, not counting spaces"
            }
            templates::MAX_LENGTH => "Must be at most {0} characters",
            templates::EMAIL => "Invalid email address",
            templates::PHONE => "Invalid phone number",
            templates::DAY => "Invalid day",
            templates::MONTH => "Invalid month",
            templates::YEAR => "Invalid year",
            templates::INVALID_DATE => "Invalid date: {0}",
            templates::PASSWORDS => "Passwords do not match",
            templates::NOT_NULL => "Required",
            templates::IN_LIST => "Not an allowed value",
            templates::NOT_EMPTY_LIST => "Select at least one item",
            templates::IS_CHECKED => "Must be checked",
            templates::IS_NOT_CHECKED => "Must not be checked",
            _ => return None,
        };
        Some(pattern)
    }
}

impl MessageFormatter for DefaultCatalog {
    fn format(&self, template: &str, args: &[Cow<'static, str>]) -> String {
        let pattern = Self::pattern(template).unwrap_or(template);
        substitute(pattern, args)
    }
}

/// Replaces `{0}`, `{1}`, ... in `pattern` with `args`.
///
/// Placeholders without a matching argument are left untouched. The scan
/// is a single pass, so braces inside an argument are copied verbatim.
#[must_use]
pub fn substitute(pattern: &str, args: &[Cow<'static, str>]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let arg = (digits > 0 && after[digits..].starts_with('}'))
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|index| args.get(index));
        match arg {
            Some(arg) => {
                out.push_str(arg);
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================
