//! The field validator: a value, its rules and the visibility state machine.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use smallvec::SmallVec;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::config::FieldConfig;
use super::state::VisibilityState;
use super::text::{TextFieldValue, TextRange};
use crate::foundation::{
    AsRuleInput, BoxedRule, DefaultCatalog, FieldHandle, LiveCell, MessageFormatter, Outcome,
    ValidationResult, ValidationRule, combine,
};
use crate::rules::Required;
use crate::shake::{ShakeScope, ShakeState};

/// Revisions of everything an evaluation depended on: the field value first,
/// then one entry per rule.
type RevisionKey = SmallVec<[u64; 4]>;

struct Evaluation {
    key: RevisionKey,
    results: Rc<[ValidationResult]>,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A form field: current value, ordered rules and feedback visibility.
///
/// `V` is the stored value, `R` what the rules inspect (`V` projected through
/// [`AsRuleInput`]). A text field stores a [`TextFieldValue`] and validates
/// `str`; a checkbox stores and validates `bool`.
///
/// # Lifecycle
///
/// A field starts *hidden*: [`is_valid`](Self::is_valid) is `false`,
/// [`outcome`](Self::outcome) is `None` and nothing is flagged. Typing
/// ([`on_value_change`](Self::on_value_change)) or an explicit
/// [`validate`](Self::validate) makes it visible. [`reset`](Self::reset)
/// hides it again. Fields configured with `initial_validate` start visible
/// and never hide; fields without rules are always valid.
///
/// # Results
///
/// [`validation_results`](Self::validation_results) is always the result of
/// running every rule against the current value. Results are cached and only
/// recomputed when the value or a rule's live dependency changed.
///
/// ```rust,ignore
/// use form_validator::prelude::*;
///
/// let mut email = TextFieldValidator::from_text("", vec![Box::new(Required), Box::new(Email)]);
/// assert!(!email.is_error());
///
/// email.on_text_change("me@");
/// assert!(email.is_error());
/// assert_eq!(email.error_text().as_deref(), Some("Invalid email address"));
/// ```
pub struct Validator<V, R: ?Sized = V> {
    cell: LiveCell<V>,
    rules: Vec<BoxedRule<R>>,
    config: FieldConfig,
    state: VisibilityState,
    cache: RefCell<Option<Evaluation>>,
    formatter: Rc<dyn MessageFormatter>,
    shaking: Option<Arc<ShakeState>>,
    shake_scope: Option<ShakeScope>,
    shake_task: Option<JoinHandle<()>>,
    had_focus: bool,
}

/// Text input field; rules see the text only.
pub type TextFieldValidator = Validator<TextFieldValue, str>;

/// Plain string field.
pub type StringValidator = Validator<String, str>;

/// Field whose rules see the stored value itself.
pub type GenericValidator<T> = Validator<T, T>;

const fn initial_state(config: &FieldConfig, has_rules: bool) -> VisibilityState {
    if config.initial_validate || !has_rules {
        VisibilityState::Visible { show_error: true }
    } else {
        VisibilityState::Hidden
    }
}

impl<V, R> Validator<V, R>
where
    V: AsRuleInput<R>,
    R: ?Sized,
{
    // ── construction ────────────────────────────────────────────────────

    /// Field with default configuration.
    pub fn new(value: V, rules: Vec<BoxedRule<R>>) -> Self {
        Self::with_config(value, rules, FieldConfig::default())
    }

    /// Field with explicit configuration.
    pub fn with_config(value: V, rules: Vec<BoxedRule<R>>, config: FieldConfig) -> Self {
        let state = initial_state(&config, !rules.is_empty());
        Self {
            cell: LiveCell::new(value),
            rules,
            config,
            state,
            cache: RefCell::new(None),
            formatter: Rc::new(DefaultCatalog),
            shaking: None,
            shake_scope: None,
            shake_task: None,
            had_focus: false,
        }
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl ValidationRule<R> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self.state = initial_state(&self.config, true);
        self.cache.get_mut().take();
        self
    }

    /// Renders messages through `formatter` instead of the English catalog.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_formatter(mut self, formatter: Rc<dyn MessageFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Launches shakes through `scope` instead of the ambient runtime.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shake_scope(mut self, scope: ShakeScope) -> Self {
        self.shake_scope = Some(scope);
        self
    }

    // ── value ───────────────────────────────────────────────────────────

    /// Borrows the current value.
    pub fn value(&self) -> Ref<'_, V> {
        self.cell.borrow()
    }

    /// Stores a value without touching visibility.
    ///
    /// Results follow the new value; whether they are shown does not change.
    pub fn set_value(&mut self, value: V) {
        self.cell.set(value);
    }

    /// Non-owning handle for cross-field rules and live thresholds.
    #[must_use]
    pub fn handle(&self) -> FieldHandle<V> {
        self.cell.handle()
    }

    /// Field configuration.
    #[must_use]
    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Current visibility.
    #[must_use]
    pub const fn visibility(&self) -> VisibilityState {
        self.state
    }

    /// Number of rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    // ── state transitions ───────────────────────────────────────────────

    /// UI write path: stores the value and makes feedback visible.
    ///
    /// Errors are flagged according to `show_error_on_interaction`. Never
    /// shakes.
    pub fn on_value_change(&mut self, value: V) {
        let show_error = self.config.show_error_on_interaction;
        self.apply(Some(value), Some(show_error), false);
    }

    /// Optionally stores `value`, shows errors and reports whether the field
    /// passes.
    ///
    /// Shakes on error when `shake_on_invalid` is set.
    pub fn validate(&mut self, value: Option<V>) -> bool {
        self.validate_with_result(value).is_passing()
    }

    /// Like [`validate`](Self::validate) but returns the worst outcome.
    pub fn validate_with_result(&mut self, value: Option<V>) -> Outcome {
        let shake = self.config.shake_on_invalid;
        self.apply(value, Some(true), shake)
    }

    /// Hides feedback again. Does nothing for `initial_validate` fields.
    pub fn reset(&mut self) {
        if self.config.initial_validate {
            return;
        }
        if self.state != VisibilityState::Hidden {
            debug!(from = ?self.state, "field reset");
        }
        self.state = VisibilityState::Hidden;
    }

    /// Focus notification from the UI.
    ///
    /// With `validate_on_focus_lost`, losing focus validates with errors
    /// shown, without shaking.
    pub fn on_focus_changed(&mut self, has_focus: bool) {
        if self.config.validate_on_focus_lost && self.had_focus && !has_focus {
            self.apply(None, Some(true), false);
        }
        self.had_focus = has_focus;
    }

    fn apply(&mut self, value: Option<V>, show_error: Option<bool>, shake: bool) -> Outcome {
        if let Some(value) = value {
            self.cell.set(value);
        }
        let next = self.state.to_visible(show_error);
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "field visibility changed");
            self.state = next;
        }
        let outcome = self.combined();
        if shake && outcome.is_error() {
            self.trigger_shake();
        }
        outcome
    }

    fn trigger_shake(&mut self) {
        let shake = self.config.shake;
        let state = Arc::clone(
            self.shaking
                .get_or_insert_with(|| Arc::new(ShakeState::new(shake.strength, shake.direction))),
        );
        if self.shake_scope.is_none() {
            self.shake_scope = ShakeScope::current();
        }
        match &self.shake_scope {
            Some(scope) => {
                if let Some(previous) = self.shake_task.take() {
                    previous.abort();
                }
                self.shake_task = Some(scope.launch(state, shake.step()));
            }
            None => debug!("shake requested outside a tokio runtime; skipped"),
        }
    }

    // ── derived reads ───────────────────────────────────────────────────

    /// One result per rule, in rule order, for the current value.
    ///
    /// The returned slice is a snapshot: it stays valid (and unchanged)
    /// while the field or its dependencies move on.
    pub fn validation_results(&self) -> Rc<[ValidationResult]> {
        let key = self.revision_key();
        if let Some(evaluation) = self.cache.borrow().as_ref() {
            if evaluation.key == key {
                return Rc::clone(&evaluation.results);
            }
        }
        let results: Rc<[ValidationResult]> = {
            let value = self.cell.borrow();
            let input = AsRuleInput::<R>::as_rule_input(&*value);
            self.rules.iter().map(|rule| rule.validate(input)).collect()
        };
        trace!(rules = self.rules.len(), revision = key[0], "rules evaluated");
        *self.cache.borrow_mut() = Some(Evaluation {
            key,
            results: Rc::clone(&results),
        });
        results
    }

    fn revision_key(&self) -> RevisionKey {
        let mut key = RevisionKey::with_capacity(self.rules.len() + 1);
        key.push(self.cell.revision());
        key.extend(self.rules.iter().map(|rule| rule.revision()));
        key
    }

    fn combined(&self) -> Outcome {
        combine(self.validation_results().iter().map(|r| r.outcome))
    }

    /// `true` once visible with no error. Always `true` without rules.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.rules.is_empty() {
            return true;
        }
        self.state.is_visible() && self.combined().is_passing()
    }

    /// `true` when errors are shown and at least one rule fails.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.shows_error() && self.combined().is_error()
    }

    /// Worst outcome, or `None` while hidden. Always `Success` without rules.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.rules.is_empty() {
            return Some(Outcome::Success);
        }
        self.state.is_visible().then(|| self.combined())
    }

    /// Messages of results at least as severe as `min`, joined with the
    /// configured separator. `None` when nothing qualifies.
    ///
    /// Independent of visibility.
    #[must_use]
    pub fn validation_result_string(&self, min: Outcome) -> Option<String> {
        let results = self.validation_results();
        let messages: Vec<String> = results
            .iter()
            .filter(|result| result.outcome >= min)
            .filter_map(|result| result.message.as_ref())
            .map(|message| message.format(&*self.formatter))
            .collect();
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(self.config.validation_separator.as_str()))
        }
    }

    /// Text for the field's supporting line: the joined messages when the
    /// field is visible or `always_show_rule` is set.
    #[must_use]
    pub fn supporting_text(&self, min: Outcome) -> Option<String> {
        if self.config.always_show_rule || self.state.is_visible() {
            self.validation_result_string(min)
        } else {
            None
        }
    }

    /// Error messages only, and only while errors are shown.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        if self.state.shows_error() {
            self.validation_result_string(Outcome::Error)
        } else {
            None
        }
    }

    /// Horizontal offset the UI should apply; `0.0` when not shaking.
    #[must_use]
    pub fn shake_offset(&self) -> f32 {
        self.shaking.as_ref().map_or(0.0, |state| state.position())
    }

    /// Shake state, once the field has shaken at least once.
    #[must_use]
    pub fn shake_state(&self) -> Option<&Arc<ShakeState>> {
        self.shaking.as_ref()
    }
}

// ============================================================================
// TEXT FIELDS
// ============================================================================

impl Validator<TextFieldValue, str> {
    /// Text field with the cursor at the end of `text`.
    pub fn from_text(text: impl Into<String>, rules: Vec<BoxedRule<str>>) -> Self {
        Self::new(TextFieldValue::new(text), rules)
    }

    /// Current text.
    pub fn text(&self) -> Ref<'_, str> {
        Ref::map(self.value(), |value| value.text.as_str())
    }

    /// [`on_value_change`](Self::on_value_change) for a plain string; the
    /// selection is kept.
    pub fn on_text_change(&mut self, text: &str) {
        let next = self.value().with_text(text);
        self.on_value_change(next);
    }

    /// [`validate`](Self::validate) for a plain string; the selection is
    /// kept.
    pub fn validate_text(&mut self, text: Option<&str>) -> bool {
        let next = text.map(|text| self.value().with_text(text));
        self.validate(next)
    }

    /// Moves the cursor to the end, e.g. when the field gains focus.
    ///
    /// With `highlight` the whole text is selected, anchored at the end.
    pub fn move_cursor_to_end(&mut self, highlight: bool) {
        let next = {
            let value = self.value();
            let len = value.char_len();
            let selection = if highlight {
                TextRange::new(len, 0)
            } else {
                TextRange::cursor(len)
            };
            value.with_selection(selection)
        };
        self.set_value(next);
    }
}

impl Default for Validator<TextFieldValue, str> {
    /// Empty, required text field.
    fn default() -> Self {
        Self::from_text("", vec![Box::new(Required)])
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

impl<V: fmt::Debug, R: ?Sized> fmt::Debug for Validator<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("value", &*self.cell.borrow())
            .field("rules", &self.rules.len())
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<V: fmt::Display, R: ?Sized> fmt::Display for Validator<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.cell.borrow(), f)
    }
}

// ============================================================================
// EQUALITY
// ============================================================================

/// Two fields are equal when they hold equal values, are in the same
/// visibility state and currently produce the same results.
///
/// Rules are opaque, so only their count is compared.
impl<V, R> PartialEq for Validator<V, R>
where
    V: AsRuleInput<R> + PartialEq,
    R: ?Sized,
{
    fn eq(&self, other: &Self) -> bool {
        *self.cell.borrow() == *other.cell.borrow()
            && self.state == other.state
            && self.rules.len() == other.rules.len()
            && self.validation_results() == other.validation_results()
    }
}

// ============================================================================
// TESTS
// ============================================================================
