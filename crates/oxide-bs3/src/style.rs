//! Bootstrap 3 horizontal form style.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use oxide_forms::{
    assemble_form, widgets, FieldElement, FieldKind, FormError, FormField, FormStyle, Node,
    RenderContext, Tag,
};

use crate::config::{Bs3Config, Bs3Overrides};
use crate::error::{Bs3Error, Result};
use crate::widgets::Bs3Widgets;

/// Widget type classes that already carry their Bootstrap markup.
const UNSTYLED_WIDGETS: &[&str] = &["bool", "upload_wrap", "input-group"];

/// Renders forms in the Bootstrap 3 `form-horizontal` grid.
///
/// Labels take two grid columns, widgets the remaining ten. Date, time and
/// datetime fields get an input group wired to bootstrap-datetimepicker.
#[derive(Debug)]
pub struct Bs3FormStyle {
    widgets: Bs3Widgets,
    overrides: Bs3Overrides,
    field_overrides: HashMap<String, Bs3Overrides>,
}

impl Bs3FormStyle {
    /// Creates the style from the extension configuration.
    pub fn new(config: Arc<Bs3Config>) -> Result<Self> {
        Ok(Self {
            widgets: Bs3Widgets::new(config)?,
            overrides: Bs3Overrides::default(),
            field_overrides: HashMap::new(),
        })
    }

    /// Sets overrides applying to every field of the form.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Bs3Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets overrides for a single field, layered over the form ones.
    #[must_use]
    pub fn with_field_overrides(
        mut self,
        field: impl Into<String>,
        overrides: Bs3Overrides,
    ) -> Self {
        self.field_overrides.insert(field.into(), overrides);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Bs3Config {
        self.widgets.config()
    }

    fn overrides_for(&self, field: &str) -> Cow<'_, Bs3Overrides> {
        match self.field_overrides.get(field) {
            Some(own) => Cow::Owned(own.layered_over(&self.overrides)),
            None => Cow::Borrowed(&self.overrides),
        }
    }

    fn temporal_widget(&self, field: &FormField, value: Option<&str>) -> Result<Tag> {
        let attr = self.overrides_for(&field.name);
        let id = field.widget_id.as_deref();
        match field.kind {
            FieldKind::Date => self.widgets.widget_date(&attr, field, value, id),
            FieldKind::Time => self.widgets.widget_time(&attr, field, value, id),
            _ => self.widgets.widget_datetime(&attr, field, value, id),
        }
    }
}

impl FormStyle for Bs3FormStyle {
    fn on_start(&self, ctx: &mut RenderContext) {
        ctx.parent = Tag::new("fieldset");
    }

    fn widget_for(&self, field: &FormField, value: Option<&str>) -> oxide_forms::Result<Node> {
        let widget = match field.kind {
            FieldKind::Bool => self
                .widgets
                .widget_bool(field, value, field.widget_id.as_deref()),
            kind if kind.is_temporal() => {
                self.temporal_widget(field, value)
                    .map_err(|e: Bs3Error| FormError::Render {
                        field: field.name.clone(),
                        message: e.to_string(),
                    })?
            }
            _ => widgets::default_widget(field, value),
        };
        Ok(widget.into())
    }

    fn style_widget(&self, widget: &mut Node) {
        let Some(tag) = widget.as_tag_mut() else {
            return;
        };
        let exempt = tag
            .primary_class()
            .is_some_and(|class| UNSTYLED_WIDGETS.contains(&class));
        if !exempt {
            tag.add_class("form-control");
        }
    }

    fn create_label(&self, label: &str, widget_id: &str) -> Node {
        Tag::new("label")
            .attr("for", widget_id)
            .class("col-sm-2 control-label")
            .text(label)
            .into()
    }

    fn create_comment(&self, comment: &str) -> Node {
        Tag::new("p").class("help-block").text(comment).into()
    }

    fn create_error(&self, error: &str) -> Node {
        Tag::new("p").class("text-danger").text(error).into()
    }

    fn add_widget(&self, ctx: &mut RenderContext, element: FieldElement) {
        let mut row = Tag::new("div").class("form-group");
        let mut wrapper = Tag::new("div").class("col-sm-10").child(element.widget);
        if let Some(error) = element.error {
            wrapper.push(error);
            row.add_class("has-error");
        }
        if let Some(comment) = element.comment {
            wrapper.push(comment);
        }
        row.push(element.label);
        row.push(wrapper);
        ctx.parent.push(row);
    }

    fn add_buttons(&self, ctx: &mut RenderContext) {
        let submit = Tag::new("input")
            .attr("type", "submit")
            .attr("value", &ctx.attrs.submit)
            .class("btn btn-primary");
        let buttons = Tag::new("div")
            .class("col-sm-10 col-sm-offset-2")
            .child(submit);
        ctx.parent
            .push(Tag::new("div").class("form-group").child(buttons));
    }

    fn render(&self, mut ctx: RenderContext) -> String {
        ctx.attrs
            .class
            .get_or_insert_with(|| "form-horizontal".to_string());
        assemble_form(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_forms::{render_form, FormAttrs, FormValues, ValidationErrors};

    fn style() -> Bs3FormStyle {
        Bs3FormStyle::new(Arc::new(Bs3Config::default())).unwrap()
    }

    fn styled(kind_field: FormField, value: Option<&str>) -> Tag {
        let style = style();
        let mut widget = style.widget_for(&kind_field, value).unwrap();
        style.style_widget(&mut widget);
        widget.as_tag().cloned().unwrap()
    }

    #[test]
    fn test_style_widget_appends_form_control() {
        let tag = styled(FormField::string("name"), None);
        assert_eq!(tag.get_attr("class"), Some("string form-control"));
    }

    #[test]
    fn test_style_widget_exemptions() {
        let bool_tag = styled(FormField::boolean("active"), None);
        assert_eq!(bool_tag.get_attr("class"), Some("bool checkbox"));

        let date_tag = styled(FormField::date("day"), None);
        assert_eq!(date_tag.get_attr("class"), Some("input-group date"));

        let upload = styled(FormField::new("avatar", FieldKind::Upload), None);
        assert_eq!(upload.get_attr("class"), Some("upload_wrap"));
    }

    #[test]
    fn test_style_widget_without_class() {
        let mut node = Node::from(Tag::new("select"));
        style().style_widget(&mut node);
        assert_eq!(
            node.as_tag().and_then(|t| t.get_attr("class")),
            Some("form-control")
        );
    }

    #[test]
    fn test_field_overrides_win() {
        let style = style()
            .with_overrides(Bs3Overrides::new().icon_date("form-icon"))
            .with_field_overrides("end", Bs3Overrides::new().icon_date("field-icon"));

        let start = style.widget_for(&FormField::date("start"), None).unwrap();
        let end = style.widget_for(&FormField::date("end"), None).unwrap();

        assert!(start.render().contains(r#"<span class="form-icon"></span>"#));
        assert!(end.render().contains(r#"<span class="field-icon"></span>"#));
    }

    #[test]
    fn test_explicit_id() {
        let tag = styled(FormField::time("alarm").id("wake"), Some("07:00:00"));
        assert_eq!(tag.get_attr("id"), Some("wake_cat"));
        assert!(tag.find_by_id("wake").is_some());
    }

    #[test]
    fn test_render_layout() {
        let fields = vec![FormField::string("title").comment("Shown in lists")];
        let html = render_form(
            &style(),
            &fields,
            &FormValues::new(),
            &ValidationErrors::new(),
            FormAttrs::new("/posts").submit("Save"),
        )
        .unwrap();

        assert!(html.contains(r#"class="form-horizontal""#));
        assert!(html.contains("<fieldset><div class=\"form-group\">"));
        assert!(html.contains(
            r#"<label for="title" class="col-sm-2 control-label">Title</label><div class="col-sm-10">"#
        ));
        assert!(html.contains(r#"<p class="help-block">Shown in lists</p>"#));
        assert!(html.contains(
            r#"<div class="form-group"><div class="col-sm-10 col-sm-offset-2"><input type="submit" value="Save" class="btn btn-primary"></div></div></fieldset>"#
        ));
    }

    #[test]
    fn test_render_keeps_explicit_class() {
        let html = render_form(
            &style(),
            &[],
            &FormValues::new(),
            &ValidationErrors::new(),
            FormAttrs::new("/").class("form-inline"),
        )
        .unwrap();

        assert!(html.contains(r#"class="form-inline""#));
        assert!(!html.contains("form-horizontal"));
    }

    #[test]
    fn test_error_before_comment() {
        let fields = vec![FormField::string("title").comment("help")];
        let errors = ValidationErrors::new().with("title", "Cannot be empty");
        let html = render_form(
            &style(),
            &fields,
            &FormValues::new(),
            &errors,
            FormAttrs::new("/"),
        )
        .unwrap();

        assert!(html.contains(r#"<div class="form-group has-error">"#));
        assert!(html.contains(
            r#"<p class="text-danger">Cannot be empty</p><p class="help-block">help</p>"#
        ));
    }
}
