//! Localized error message templates.
//!
//! Templates may contain `{min}` and `{max}`, replaced with the field's
//! configured length bounds when a message is rendered.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use super::engine::ErrorState;
use super::rules;
use crate::error::CoreError;

static DEFAULT_CATALOG: LazyLock<Arc<MessageCatalog>> =
    LazyLock::new(|| Arc::new(MessageCatalog::english()));

/// Which template to use for a failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    TooShort,
    TooLong,
    NotEmpty,
    Integer,
    Numeric,
    Url,
    Email,
    Fallback,
}

impl MessageKey {
    /// Key for a rule identifier; unrecognized identifiers use the fallback.
    pub fn for_rule(rule_id: &str) -> Self {
        match rule_id {
            rules::NOT_EMPTY => Self::NotEmpty,
            rules::INTEGER => Self::Integer,
            rules::NUMERIC => Self::Numeric,
            rules::URL => Self::Url,
            rules::EMAIL => Self::Email,
            _ => Self::Fallback,
        }
    }

    /// Key for an error state, or `None` when the state carries no error.
    pub fn for_state(state: &ErrorState) -> Option<Self> {
        match state {
            ErrorState::None => None,
            ErrorState::TooShort => Some(Self::TooShort),
            ErrorState::TooLong => Some(Self::TooLong),
            ErrorState::Rule(id) => Some(Self::for_rule(id)),
            ErrorState::Custom => Some(Self::Fallback),
        }
    }
}

/// Message templates for every [`MessageKey`].
///
/// Deserializing fills any missing key from [`MessageCatalog::english`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageCatalog {
    pub too_short: String,
    pub too_long: String,
    pub not_empty: String,
    pub integer: String,
    pub numeric: String,
    pub url: String,
    pub email: String,
    pub fallback: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl MessageCatalog {
    pub fn english() -> Self {
        Self {
            too_short: "length must be greater than {min}".to_string(),
            too_long: "length must be less than {max}".to_string(),
            not_empty: "must not be empty".to_string(),
            integer: "must be an integer".to_string(),
            numeric: "must be a number".to_string(),
            url: "must be a URL".to_string(),
            email: "must be an Email".to_string(),
            fallback: "format error".to_string(),
        }
    }

    pub fn chinese() -> Self {
        Self {
            too_short: "长度必须大于{min}".to_string(),
            too_long: "长度必须小于{max}".to_string(),
            not_empty: "不能为空".to_string(),
            integer: "必须是整数".to_string(),
            numeric: "必须是数字".to_string(),
            url: "必须是网址".to_string(),
            email: "必须是Email".to_string(),
            fallback: "格式错误".to_string(),
        }
    }

    /// Built-in catalog for a locale tag such as `en`, `en-US` or `zh_CN`.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Self::english()),
            "zh" => Some(Self::chinese()),
            _ => None,
        }
    }

    /// Parse a catalog from JSON, e.g. `{"not_empty": "is required"}`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Invalid message catalog: {e}")))
    }

    /// The process-wide English catalog used by fields that were not given one.
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_CATALOG)
    }

    pub fn template(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::TooShort => &self.too_short,
            MessageKey::TooLong => &self.too_long,
            MessageKey::NotEmpty => &self.not_empty,
            MessageKey::Integer => &self.integer,
            MessageKey::Numeric => &self.numeric,
            MessageKey::Url => &self.url,
            MessageKey::Email => &self.email,
            MessageKey::Fallback => &self.fallback,
        }
    }

    /// Render the template for `key` with the given length bounds.
    pub fn render(&self, key: MessageKey, min: i64, max: i64) -> String {
        self.template(key)
            .replace("{min}", &min.to_string())
            .replace("{max}", &max.to_string())
    }
}
