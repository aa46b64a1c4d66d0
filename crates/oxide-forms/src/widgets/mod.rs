//! Default widgets for each field kind.
//!
//! Every widget carries its field kind as the first class token. Form
//! styles use that token to decide how to decorate the widget.

use crate::fields::{FieldKind, FormField};
use crate::html::Tag;

/// Builds a text-like `<input>`.
pub fn widget_input(
    field: &FormField,
    input_type: &str,
    class: &str,
    value: Option<&str>,
    id: Option<&str>,
) -> Tag {
    Tag::new("input")
        .attr("type", input_type)
        .attr("name", &field.name)
        .id(id.unwrap_or_else(|| field.widget_id()))
        .class(class)
        .attr("value", value.unwrap_or(""))
}

/// Builds a `<textarea>`.
pub fn widget_text(field: &FormField, value: Option<&str>, id: Option<&str>) -> Tag {
    Tag::new("textarea")
        .attr("name", &field.name)
        .id(id.unwrap_or_else(|| field.widget_id()))
        .class(FieldKind::Text.as_str())
        .text(value.unwrap_or(""))
}

/// Builds a checkbox with the given class.
pub fn widget_bool(field: &FormField, value: Option<&str>, class: &str, id: Option<&str>) -> Tag {
    let mut tag = Tag::new("input")
        .attr("type", "checkbox")
        .attr("name", &field.name)
        .id(id.unwrap_or_else(|| field.widget_id()))
        .class(class);
    if value.is_some_and(is_truthy) {
        tag.set_attr("checked", "checked");
    }
    tag
}

/// Builds a file input inside an `upload_wrap` container.
pub fn widget_upload(field: &FormField, id: Option<&str>) -> Tag {
    Tag::new("div").class("upload_wrap").child(
        Tag::new("input")
            .attr("type", "file")
            .attr("name", &field.name)
            .id(id.unwrap_or_else(|| field.widget_id()))
            .class(FieldKind::Upload.as_str()),
    )
}

/// Builds the default widget for a field.
pub fn default_widget(field: &FormField, value: Option<&str>) -> Tag {
    let class = field.kind.as_str();
    match field.kind {
        FieldKind::Bool => widget_bool(field, value, class, None),
        FieldKind::Text => widget_text(field, value, None),
        FieldKind::Upload => widget_upload(field, None),
        FieldKind::Password => widget_input(field, "password", class, value, None),
        FieldKind::Date
        | FieldKind::Time
        | FieldKind::DateTime
        | FieldKind::String
        | FieldKind::Int
        | FieldKind::Float => widget_input(field, "text", class, value, None),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "true" | "True" | "on" | "1")
}
