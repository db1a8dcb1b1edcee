//! Ordered form container: binds a submission to its fields, validates them
//! and renders the whole form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::validation::{FieldValue, Validatable};
use crate::widgets::{escape, FieldBase, FormControl};

/// Raw request parameters from a form post.
///
/// Inputs submit under `n_{key}`; [`Submission::get`] also accepts the bare
/// key so JSON clients can send `{"email": ".."}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Submission(HashMap<String, String>);

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Value submitted for the field `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(&format!("n_{key}"))
            .or_else(|| self.0.get(key))
            .map(String::as_str)
    }
}

impl From<HashMap<String, String>> for Submission {
    fn from(params: HashMap<String, String>) -> Self {
        Self(params)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Aggregated result of validating every field of a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormReport {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

/// A single field-level failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

/// A form: an action URL and an ordered list of controls.
#[derive(Default)]
pub struct Form {
    pub action: String,
    controls: Vec<Box<dyn FormControl>>,
}

impl Form {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            controls: Vec::new(),
        }
    }

    /// Append a control, builder style.
    pub fn control<C: FormControl + 'static>(mut self, control: C) -> Self {
        self.controls.push(Box::new(control));
        self
    }

    pub fn push<C: FormControl + 'static>(&mut self, control: C) -> &mut Self {
        self.controls.push(Box::new(control));
        self
    }

    pub fn controls(&self) -> &[Box<dyn FormControl>] {
        &self.controls
    }

    pub fn field(&self, key: &str) -> Option<&FieldBase> {
        self.controls
            .iter()
            .filter_map(|c| c.field())
            .find(|f| f.key == key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut FieldBase> {
        self.controls
            .iter_mut()
            .filter_map(|c| c.field_mut())
            .find(|f| f.key == key)
    }

    /// Store each submitted value on its field and validate it.
    ///
    /// Every field is checked; within a field the first failing condition
    /// wins. Fields absent from the submission are checked as null.
    pub fn validate(&mut self, submission: &Submission) -> FormReport {
        let mut errors = Vec::new();

        for field in self.controls.iter_mut().filter_map(|c| c.field_mut()) {
            let value = submission
                .get(&field.key)
                .map_or(FieldValue::Null, FieldValue::from);
            field.check_rules(&value);
            field.value = value;

            if field.validation.has_error() {
                let state = field.validation.reported_state();
                tracing::debug!(field = %field.key, state = %state, "Field failed validation");
                errors.push(FieldViolation {
                    field: field.key.clone(),
                    rule_type: state.code().to_string(),
                    message: field.error_message(),
                });
            }
        }

        FormReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            "<form method=\"post\" action=\"{}\"> \n",
            escape(&self.action)
        );
        for control in &self.controls {
            html.push_str(&control.render());
        }
        html.push_str("</form> \n");
        html
    }
}
