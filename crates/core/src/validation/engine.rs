//! Per-field validation state: rules, length bounds and the last outcome.

use std::fmt;
use std::sync::Arc;

use super::messages::{MessageCatalog, MessageKey};
use super::rules::{self, PredicateRule, Rule};
use super::value::FieldValue;

/// Classification of the most recent validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorState {
    #[default]
    None,
    /// Shorter than the minimum length.
    TooShort,
    /// Longer than a non-zero maximum length.
    TooLong,
    /// The rule with this identifier failed.
    Rule(String),
    /// A caller forced an error message onto the field.
    Custom,
}

impl ErrorState {
    /// Stable code used in logs and API payloads.
    ///
    /// A rule's code is its identifier, so a pattern literally named `min`,
    /// `max`, `none` or `custom` shares a code with the built-in states.
    /// Compare [`ErrorState`] values, not codes, when that matters.
    pub fn code(&self) -> &str {
        match self {
            Self::None => "none",
            Self::TooShort => "min",
            Self::TooLong => "max",
            Self::Rule(id) => id,
            Self::Custom => "custom",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ErrorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Validation configuration and state owned by one form field.
///
/// Builder methods chain through `&mut Self`:
///
/// ```
/// use formkit_core::validation::ValidationEngine;
///
/// let mut engine = ValidationEngine::new();
/// engine.not_empty().integer_value().max(4);
///
/// assert!(engine.check("2024"));
/// assert!(!engine.check("20245"));
/// assert_eq!(engine.error_message(), "length must be less than 4");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    rules: Vec<Rule>,
    min_length: i64,
    max_length: i64,
    state: ErrorState,
    custom_error: Option<String>,
    message_override: Option<String>,
    catalog: Arc<MessageCatalog>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            min_length: 0,
            max_length: 0,
            state: ErrorState::None,
            custom_error: None,
            message_override: None,
            catalog: MessageCatalog::shared_default(),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<MessageCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn set_catalog(&mut self, catalog: Arc<MessageCatalog>) -> &mut Self {
        self.catalog = catalog;
        self
    }

    // -- Rule registration ------------------------------------------------

    /// Append a rule by identifier. Duplicates are kept.
    pub fn add_rule(&mut self, rule_id: &str) -> &mut Self {
        self.push_rule(Rule::parse(rule_id))
    }

    pub fn push_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Append a named caller-supplied check. Its failure message is the
    /// catalog's fallback text.
    pub fn add_predicate<F>(&mut self, name: &str, check: F) -> &mut Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        self.push_rule(Rule::Predicate(PredicateRule::new(name, check)))
    }

    pub fn not_empty(&mut self) -> &mut Self {
        self.add_rule(rules::NOT_EMPTY)
    }

    pub fn integer_value(&mut self) -> &mut Self {
        self.add_rule(rules::INTEGER)
    }

    pub fn numeric_value(&mut self) -> &mut Self {
        self.add_rule(rules::NUMERIC)
    }

    pub fn url_value(&mut self) -> &mut Self {
        self.add_rule(rules::URL)
    }

    pub fn email_value(&mut self) -> &mut Self {
        self.add_rule(rules::EMAIL)
    }

    /// Minimum length in bytes. Not range-checked.
    pub fn min(&mut self, min_length: i64) -> &mut Self {
        self.min_length = min_length;
        self
    }

    /// Maximum length in bytes; `0` (or less) disables the upper bound.
    pub fn max(&mut self, max_length: i64) -> &mut Self {
        self.max_length = max_length;
        self
    }

    // -- Error overrides --------------------------------------------------

    /// Force the field into an error with this message.
    ///
    /// The message sticks across later [`check_rules`](Self::check_rules)
    /// calls until [`clear_custom_error`](Self::clear_custom_error) or
    /// another `set_custom_error`. It overlays the recorded check result
    /// without replacing it.
    pub fn set_custom_error(&mut self, message: impl Into<String>) {
        self.custom_error = Some(message.into());
    }

    /// Drop the custom message; the last check result shows through again.
    pub fn clear_custom_error(&mut self) {
        self.custom_error = None;
    }

    /// Replace the catalog text for whatever failure the next checks record.
    /// Has no effect while the field is valid.
    pub fn set_error_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message_override = Some(message.into());
        self
    }

    // -- Evaluation -------------------------------------------------------

    /// Validate a value: minimum length, then maximum length, then each rule
    /// in insertion order. The first failure is recorded and stops the check.
    pub fn check_rules(&mut self, value: &FieldValue) -> bool {
        self.state = self.evaluate(value);
        self.state.is_none()
    }

    /// Convenience wrapper around [`check_rules`](Self::check_rules).
    pub fn check<V: Into<FieldValue>>(&mut self, value: V) -> bool {
        self.check_rules(&value.into())
    }

    fn evaluate(&self, value: &FieldValue) -> ErrorState {
        let len = i64::try_from(value.text_len()).unwrap_or(i64::MAX);
        if len < self.min_length {
            return ErrorState::TooShort;
        }
        if self.max_length > 0 && len > self.max_length {
            return ErrorState::TooLong;
        }
        self.rules
            .iter()
            .find(|rule| !rule.check(value))
            .map_or(ErrorState::None, |rule| ErrorState::Rule(rule.id().to_string()))
    }

    /// Human-readable message for the current state; empty when valid.
    pub fn error_message(&self) -> String {
        if let Some(custom) = &self.custom_error {
            return custom.clone();
        }
        let Some(key) = MessageKey::for_state(&self.state) else {
            return String::new();
        };
        if let Some(message) = &self.message_override {
            return message.clone();
        }
        self.catalog.render(key, self.min_length, self.max_length)
    }

    pub fn has_error(&self) -> bool {
        self.custom_error.is_some() || !self.state.is_none()
    }

    // -- Accessors --------------------------------------------------------

    /// Outcome of the last check, ignoring any custom error.
    pub fn error_state(&self) -> &ErrorState {
        &self.state
    }

    /// State reported to callers: [`ErrorState::Custom`] while a custom
    /// error is set, otherwise the outcome of the last check.
    pub fn reported_state(&self) -> ErrorState {
        match self.custom_error {
            Some(_) => ErrorState::Custom,
            None => self.state.clone(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn min_length(&self) -> i64 {
        self.min_length
    }

    pub fn max_length(&self) -> i64 {
        self.max_length
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }
}

/// The validation contract consumed by rendering widgets and forms.
pub trait Validatable {
    fn validation(&self) -> &ValidationEngine;
    fn validation_mut(&mut self) -> &mut ValidationEngine;

    fn add_rule(&mut self, rule_id: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.validation_mut().add_rule(rule_id);
        self
    }

    fn min(&mut self, min_length: i64) -> &mut Self
    where
        Self: Sized,
    {
        self.validation_mut().min(min_length);
        self
    }

    fn max(&mut self, max_length: i64) -> &mut Self
    where
        Self: Sized,
    {
        self.validation_mut().max(max_length);
        self
    }

    fn check_rules(&mut self, value: &FieldValue) -> bool {
        self.validation_mut().check_rules(value)
    }

    fn error_message(&self) -> String {
        self.validation().error_message()
    }

    fn set_custom_error(&mut self, message: &str) {
        self.validation_mut().set_custom_error(message);
    }
}

impl Validatable for ValidationEngine {
    fn validation(&self) -> &ValidationEngine {
        self
    }

    fn validation_mut(&mut self) -> &mut ValidationEngine {
        self
    }
}
