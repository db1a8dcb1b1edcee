//! Form widgets.
//!
//! Static controls ([`Html`], [`Script`], [`Button`]) render fixed markup.
//! Value widgets ([`Hidden`], [`TextInput`], [`Textarea`], [`Select`]) own a
//! [`FieldBase`] carrying the submitted value and its [`ValidationEngine`],
//! and are configured through the consuming [`FieldBuilder`] methods:
//!
//! ```
//! use formkit_core::widgets::{FieldBuilder, FormControl, TextInput};
//!
//! let name = TextInput::new("name").label("Name").not_empty().max(40);
//! assert!(name.render().contains(r#"name="n_name""#));
//! ```

mod basic;
mod input;

use std::sync::Arc;

pub use basic::{Button, Hidden, Html, Script};
pub use input::{Select, SelectOption, TextInput, Textarea};

use crate::validation::{FieldValue, MessageCatalog, Validatable, ValidationEngine};

/// Anything that can be placed in a form.
pub trait FormControl: Send + Sync {
    fn render(&self) -> String;

    /// The value-carrying part of the control, if it has one.
    fn field(&self) -> Option<&FieldBase> {
        None
    }

    fn field_mut(&mut self) -> Option<&mut FieldBase> {
        None
    }
}

/// State shared by every value widget.
#[derive(Debug, Clone, Default)]
pub struct FieldBase {
    pub key: String,
    pub label: String,
    pub value: FieldValue,
    pub readonly: bool,
    pub remark: String,
    pub validation: ValidationEngine,
}

impl FieldBase {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// DOM id of the rendered input.
    pub fn input_id(&self) -> String {
        format!("i_{}", self.key)
    }

    /// Request parameter name the input submits under.
    pub fn input_name(&self) -> String {
        format!("n_{}", self.key)
    }

    fn readonly_attr(&self) -> &'static str {
        if self.readonly {
            r#" readonly="readonly""#
        } else {
            ""
        }
    }
}

impl Validatable for FieldBase {
    fn validation(&self) -> &ValidationEngine {
        &self.validation
    }

    fn validation_mut(&mut self) -> &mut ValidationEngine {
        &mut self.validation
    }
}

/// Chained configuration for value widgets. Each call consumes and returns
/// the widget.
pub trait FieldBuilder: Sized {
    fn base_mut(&mut self) -> &mut FieldBase;

    fn key(mut self, key: impl Into<String>) -> Self {
        self.base_mut().key = key.into();
        self
    }

    fn label(mut self, label: impl Into<String>) -> Self {
        self.base_mut().label = label.into();
        self
    }

    fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.base_mut().value = value.into();
        self
    }

    fn readonly(mut self, readonly: bool) -> Self {
        self.base_mut().readonly = readonly;
        self
    }

    fn remark(mut self, remark: impl Into<String>) -> Self {
        self.base_mut().remark = remark.into();
        self
    }

    fn not_empty(mut self) -> Self {
        self.base_mut().validation.not_empty();
        self
    }

    fn integer_value(mut self) -> Self {
        self.base_mut().validation.integer_value();
        self
    }

    fn numeric_value(mut self) -> Self {
        self.base_mut().validation.numeric_value();
        self
    }

    fn url_value(mut self) -> Self {
        self.base_mut().validation.url_value();
        self
    }

    fn email_value(mut self) -> Self {
        self.base_mut().validation.email_value();
        self
    }

    fn min(mut self, min_length: i64) -> Self {
        self.base_mut().validation.min(min_length);
        self
    }

    fn max(mut self, max_length: i64) -> Self {
        self.base_mut().validation.max(max_length);
        self
    }

    fn add_rule(mut self, rule_id: &str) -> Self {
        self.base_mut().validation.add_rule(rule_id);
        self
    }

    /// Message shown instead of the catalog text when validation fails.
    fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.base_mut().validation.set_error_message(message);
        self
    }

    fn catalog(mut self, catalog: Arc<MessageCatalog>) -> Self {
        self.base_mut().validation.set_catalog(catalog);
        self
    }
}

/// Wrap an input in the labelled control-group markup, adding the error
/// class and message when the field has an error.
pub(crate) fn render_group(base: &FieldBase, input: &str) -> String {
    let error = base.error_message();
    let error_class = if error.is_empty() { "" } else { " error" };

    let mut html = format!("<div class=\"control-group{error_class}\"> \n");
    html.push_str(&format!(
        "<label class=\"control-label\" for=\"{}\">{}</label> \n",
        escape(&base.input_id()),
        escape(&base.label)
    ));
    html.push_str("<div class=\"controls\"> \n");
    html.push_str(input);
    if !error.is_empty() {
        html.push_str(&format!(
            "<span class=\"help-inline\">{}</span> \n",
            escape(&error)
        ));
    }
    if !base.remark.is_empty() {
        html.push_str(&format!(
            "<span class=\"tip\">{}</span> \n",
            escape(&base.remark)
        ));
    }
    html.push_str("</div> \n");
    html.push_str("</div> \n");
    html
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
