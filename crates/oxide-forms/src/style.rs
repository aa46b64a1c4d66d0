//! Pluggable form styles.
//!
//! A form style turns field descriptors into markup. [`render_form`] drives
//! the phases in order; styles override only the steps they care about.

use tracing::debug;

use crate::error::{Result, ValidationErrors};
use crate::fields::{FieldKind, FormField, FormValues};
use crate::form::{assemble_form, FormAttrs};
use crate::html::{Node, Tag};
use crate::widgets;

/// State of a single render pass.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Form-level attributes.
    pub attrs: FormAttrs,
    /// Container collecting the field rows.
    pub parent: Tag,
}

impl RenderContext {
    /// Creates a context with an empty `div` container.
    pub fn new(attrs: FormAttrs) -> Self {
        Self {
            attrs,
            parent: Tag::new("div"),
        }
    }
}

/// The pieces rendered for one field.
#[derive(Debug, Clone)]
pub struct FieldElement {
    /// The styled widget.
    pub widget: Node,
    /// The label.
    pub label: Node,
    /// Help text, if the field has any.
    pub comment: Option<Node>,
    /// Validation error, if the field has one.
    pub error: Option<Node>,
}

/// A strategy producing the markup of a whole form.
pub trait FormStyle: Send + Sync {
    /// Called once before any field is added.
    fn on_start(&self, ctx: &mut RenderContext) {
        let _ = ctx;
    }

    /// Builds the base widget for a field.
    fn widget_for(&self, field: &FormField, value: Option<&str>) -> Result<Node> {
        Ok(widgets::default_widget(field, value).into())
    }

    /// Decorates a freshly built widget.
    fn style_widget(&self, widget: &mut Node) {
        let _ = widget;
    }

    /// Builds the label pointing at `widget_id`.
    fn create_label(&self, label: &str, widget_id: &str) -> Node {
        Tag::new("label").attr("for", widget_id).text(label).into()
    }

    /// Builds the help text node.
    fn create_comment(&self, comment: &str) -> Node {
        Tag::new("p").class("help").text(comment).into()
    }

    /// Builds the error node.
    fn create_error(&self, error: &str) -> Node {
        Tag::new("div").class("error").text(error).into()
    }

    /// Appends a field row to the container.
    fn add_widget(&self, ctx: &mut RenderContext, element: FieldElement) {
        let mut row = Tag::new("div").class("form-row");
        row.push(element.label);
        row.push(element.widget);
        if let Some(error) = element.error {
            row.push(error);
        }
        if let Some(comment) = element.comment {
            row.push(comment);
        }
        ctx.parent.push(row);
    }

    /// Appends the submit button row.
    fn add_buttons(&self, ctx: &mut RenderContext) {
        let submit = Tag::new("input")
            .attr("type", "submit")
            .attr("value", &ctx.attrs.submit);
        ctx.parent.push(Tag::new("div").class("form-buttons").child(submit));
    }

    /// Produces the final markup.
    fn render(&self, ctx: RenderContext) -> String {
        assemble_form(ctx)
    }
}

/// The style used when nothing else is registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormStyle;

impl FormStyle for DefaultFormStyle {}

/// Renders a complete form with the given style.
pub fn render_form(
    style: &dyn FormStyle,
    fields: &[FormField],
    values: &FormValues,
    errors: &ValidationErrors,
    mut attrs: FormAttrs,
) -> Result<String> {
    if attrs.enctype.is_none() && fields.iter().any(|f| f.kind == FieldKind::Upload) {
        attrs.enctype = Some("multipart/form-data".to_string());
    }

    let mut ctx = RenderContext::new(attrs);
    style.on_start(&mut ctx);

    for field in fields {
        let mut widget = style.widget_for(field, values.get(&field.name))?;
        style.style_widget(&mut widget);

        let widget_id = widget
            .as_tag()
            .and_then(|tag| tag.get_attr("id"))
            .unwrap_or_else(|| field.widget_id())
            .to_string();
        let label = style.create_label(&field.label_text(), &widget_id);
        let comment = field.comment.as_deref().map(|c| style.create_comment(c));
        let error = errors.first(&field.name).map(|e| style.create_error(e));

        style.add_widget(
            &mut ctx,
            FieldElement {
                widget,
                label,
                comment,
                error,
            },
        );
    }

    style.add_buttons(&mut ctx);
    debug!(fields = fields.len(), "rendered form");
    Ok(style.render(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<FormField> {
        vec![
            FormField::string("name").comment("Your full name"),
            FormField::boolean("active"),
        ]
    }

    #[test]
    fn test_default_style_renders_rows() {
        let values = FormValues::new().with("name", "Ada");
        let html = render_form(
            &DefaultFormStyle,
            &sample_fields(),
            &values,
            &ValidationErrors::new(),
            FormAttrs::new("/save"),
        )
        .unwrap();

        assert!(html.contains(r#"<label for="name">Name</label>"#));
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains(r#"<p class="help">Your full name</p>"#));
        assert!(html.contains(r#"type="submit""#));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_default_style_renders_errors() {
        let errors = ValidationErrors::new().with("name", "Cannot be empty");
        let html = render_form(
            &DefaultFormStyle,
            &sample_fields(),
            &FormValues::new(),
            &errors,
            FormAttrs::new("/save"),
        )
        .unwrap();

        assert!(html.contains(r#"<div class="error">Cannot be empty</div>"#));
    }

    #[test]
    fn test_upload_sets_enctype() {
        let fields = vec![FormField::new("avatar", FieldKind::Upload)];
        let html = render_form(
            &DefaultFormStyle,
            &fields,
            &FormValues::new(),
            &ValidationErrors::new(),
            FormAttrs::new("/upload"),
        )
        .unwrap();

        assert!(html.contains("multipart/form-data"));
    }
}
