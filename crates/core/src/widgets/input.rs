//! Labelled input widgets rendered inside a control group.

use serde::{Deserialize, Serialize};

use super::{escape, render_group, FieldBase, FieldBuilder, FormControl};

/// Class applied to every labelled input.
const INPUT_CLASS: &str = "input-xlarge";

/// Single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub base: FieldBase,
    pub placeholder: String,
}

impl TextInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(key),
            placeholder: String::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn render_input(&self) -> String {
        format!(
            "<input id=\"{}\" type=\"text\" name=\"{}\" placeholder=\"{}\" value=\"{}\" class=\"{INPUT_CLASS}\"{} /> \n",
            escape(&self.base.input_id()),
            escape(&self.base.input_name()),
            escape(&self.placeholder),
            escape(&self.base.value.to_string()),
            self.base.readonly_attr(),
        )
    }
}

/// Multi-line text input.
#[derive(Debug, Clone, Default)]
pub struct Textarea {
    pub base: FieldBase,
    pub placeholder: String,
}

impl Textarea {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(key),
            placeholder: String::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn render_input(&self) -> String {
        format!(
            "<textarea id=\"{}\" name=\"{}\" placeholder=\"{}\" class=\"{INPUT_CLASS}\"{}>{}</textarea> \n",
            escape(&self.base.input_id()),
            escape(&self.base.input_name()),
            escape(&self.placeholder),
            self.base.readonly_attr(),
            escape(&self.base.value.to_string()),
        )
    }
}

/// One `<option>` of a [`Select`].
///
/// Deserializes from `{"name": .., "value": ..}`; `key` is accepted in place
/// of `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(alias = "key")]
    pub name: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Drop-down list. The option whose value equals the field value is selected.
#[derive(Debug, Clone, Default)]
pub struct Select {
    pub base: FieldBase,
    pub options: Vec<SelectOption>,
}

impl Select {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(key),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(name, value));
        self
    }

    /// Append `(value, name)` pairs in iteration order.
    pub fn options<I, V, N>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        V: Into<String>,
        N: Into<String>,
    {
        self.options.extend(
            options
                .into_iter()
                .map(|(value, name)| SelectOption::new(name, value)),
        );
        self
    }

    pub fn render_input(&self) -> String {
        let current = self.base.value.to_string();
        let mut html = format!(
            "<select id=\"{}\" name=\"{}\" class=\"{INPUT_CLASS}\"{}> \n",
            escape(&self.base.input_id()),
            escape(&self.base.input_name()),
            self.base.readonly_attr(),
        );
        for option in &self.options {
            let selected = if option.value == current {
                r#" selected="selected""#
            } else {
                ""
            };
            html.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>\n",
                escape(&option.value),
                escape(&option.name)
            ));
        }
        html.push_str("</select> \n");
        html
    }
}

macro_rules! labelled_widget {
    ($($widget:ty),+ $(,)?) => {$(
        impl FieldBuilder for $widget {
            fn base_mut(&mut self) -> &mut FieldBase {
                &mut self.base
            }
        }

        impl FormControl for $widget {
            fn render(&self) -> String {
                render_group(&self.base, &self.render_input())
            }

            fn field(&self) -> Option<&FieldBase> {
                Some(&self.base)
            }

            fn field_mut(&mut self) -> Option<&mut FieldBase> {
                Some(&mut self.base)
            }
        }
    )+};
}

labelled_widget!(TextInput, Textarea, Select);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldValue, Validatable};

    #[test]
    fn text_input_markup() {
        let input = TextInput::new("title")
            .label("Title")
            .placeholder("Untitled")
            .value("Hello")
            .readonly(true);

        assert_eq!(
            input.render_input(),
            "<input id=\"i_title\" type=\"text\" name=\"n_title\" placeholder=\"Untitled\" value=\"Hello\" class=\"input-xlarge\" readonly=\"readonly\" /> \n"
        );
        assert!(input.render().contains("<div class=\"control-group\">"));
    }

    #[test]
    fn text_input_shows_validation_error() {
        let mut input = TextInput::new("age").label("Age").integer_value();
        input.base.check_rules(&FieldValue::from("abc"));

        let html = input.render();
        assert!(html.contains("control-group error"));
        assert!(html.contains("must be an integer"));
    }

    #[test]
    fn textarea_escapes_content() {
        let area = Textarea::new("bio").value("<b>hi</b>");
        assert_eq!(
            area.render_input(),
            "<textarea id=\"i_bio\" name=\"n_bio\" placeholder=\"\" class=\"input-xlarge\">&lt;b&gt;hi&lt;/b&gt;</textarea> \n"
        );
    }

    #[test]
    fn select_marks_current_value() {
        let select = Select::new("color")
            .options([("r", "Red"), ("g", "Green")])
            .option("Blue", "b")
            .value("g");

        let html = select.render_input();
        assert!(html.starts_with("<select id=\"i_color\" name=\"n_color\" class=\"input-xlarge\"> \n"));
        assert!(html.contains("<option value=\"r\">Red</option>\n"));
        assert!(html.contains("<option value=\"g\" selected=\"selected\">Green</option>\n"));
        assert!(html.contains("<option value=\"b\">Blue</option>\n"));
        assert!(html.ends_with("</select> \n"));
    }

    #[test]
    fn select_matches_numeric_values() {
        let select = Select::new("count").options([("1", "One"), ("2", "Two")]).value(2);
        assert!(select
            .render_input()
            .contains("<option value=\"2\" selected=\"selected\">Two</option>"));
    }

    #[test]
    fn select_option_accepts_key_alias() {
        let option: SelectOption =
            serde_json::from_str(r#"{"key": "Red", "value": "r"}"#).unwrap();
        assert_eq!(option, SelectOption::new("Red", "r"));
    }

    #[test]
    fn builder_configures_validation() {
        let input = TextInput::new("site").url_value().min(5).max(100);
        let engine = input.base.validation();
        assert_eq!(engine.rules().len(), 1);
        assert_eq!(engine.min_length(), 5);
        assert_eq!(engine.max_length(), 100);
    }
}
