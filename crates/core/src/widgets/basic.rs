//! Controls with fixed markup, plus the hidden value field.

use super::{escape, FieldBase, FieldBuilder, FormControl};

/// Raw HTML, emitted verbatim.
#[derive(Debug, Clone, Default)]
pub struct Html {
    pub html: String,
}

impl Html {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl FormControl for Html {
    fn render(&self) -> String {
        self.html.clone()
    }
}

/// An inline JavaScript block.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub body: String,
}

impl Script {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl FormControl for Script {
    fn render(&self) -> String {
        format!(
            "<script type=\"text/javascript\">\n{}\n</script>\n",
            self.body
        )
    }
}

/// A submit button or a link styled as one.
///
/// Renders nothing until it is made [`primary`](Button::primary) or given a
/// [`link`](Button::link).
#[derive(Debug, Clone, Default)]
pub struct Button {
    pub name: String,
    pub href: Option<String>,
    pub primary: bool,
}

impl Button {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Render as an anchor to `href`. Clears [`primary`](Button::primary).
    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.primary = false;
        self.href = Some(href.into());
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

impl FormControl for Button {
    fn render(&self) -> String {
        let name = escape(&self.name);
        if self.primary {
            return format!(
                "<button class=\"btn btn-primary\"><i class=\"fa fa-save\"></i> {name}</button> \n"
            );
        }
        match &self.href {
            Some(href) if !href.is_empty() => {
                format!("<a href=\"{}\" class=\"btn\">{name}</a> \n", escape(href))
            }
            _ => String::new(),
        }
    }
}

/// A hidden input; validated like any other value field.
#[derive(Debug, Clone, Default)]
pub struct Hidden {
    pub base: FieldBase,
}

impl Hidden {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(key),
        }
    }
}

impl FieldBuilder for Hidden {
    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }
}

impl FormControl for Hidden {
    fn render(&self) -> String {
        format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\" /> \n",
            escape(&self.base.input_name()),
            escape(&self.base.value.to_string())
        )
    }

    fn field(&self) -> Option<&FieldBase> {
        Some(&self.base)
    }

    fn field_mut(&mut self) -> Option<&mut FieldBase> {
        Some(&mut self.base)
    }
}
