//! Form-level attributes and final form assembly.

use crate::html::Tag;
use crate::style::RenderContext;

/// Attributes of the `<form>` element and its submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAttrs {
    /// Submission URL.
    pub action: String,
    /// HTTP method.
    pub method: String,
    /// CSS class of the form element.
    pub class: Option<String>,
    /// Encoding type.
    pub enctype: Option<String>,
    /// Label of the submit button.
    pub submit: String,
    /// Hidden inputs (name, value).
    pub hidden: Vec<(String, String)>,
}

impl Default for FormAttrs {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "POST".to_string(),
            class: None,
            enctype: None,
            submit: "Submit".to_string(),
            hidden: Vec::new(),
        }
    }
}

impl FormAttrs {
    /// Creates attributes for a form posting to `action`.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the submit button label.
    #[must_use]
    pub fn submit(mut self, label: impl Into<String>) -> Self {
        self.submit = label.into();
        self
    }

    /// Adds a hidden input.
    #[must_use]
    pub fn hidden(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.hidden.push((name.into(), value.into()));
        self
    }
}

/// Wraps the rendered container in a `<form>` element.
pub fn assemble_form(ctx: RenderContext) -> String {
    let RenderContext { attrs, parent } = ctx;

    let mut form = Tag::new("form")
        .attr("action", attrs.action)
        .attr("method", attrs.method);
    if let Some(class) = attrs.class {
        form = form.class(class);
    }
    if let Some(enctype) = attrs.enctype {
        form = form.attr("enctype", enctype);
    }

    let mut form = form.child(parent);
    for (name, value) in attrs.hidden {
        form.push(
            Tag::new("input")
                .attr("type", "hidden")
                .attr("name", name)
                .attr("value", value),
        );
    }
    form.render()
}
