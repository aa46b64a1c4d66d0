//! Bootstrap 3 widgets for booleans and temporal fields.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use oxide_forms::{widgets, FormField, Node, Tag};

use crate::config::{Bs3Config, Bs3Overrides};
use crate::error::Result;
use crate::scripts::{PickerKind, PickerParams, PickerScripts};
use regex::Regex;

/// Class list forced onto checkboxes.
pub const BOOL_CLASS: &str = "bool checkbox";

/// Builds the boolean and date/time widgets from the configuration.
#[derive(Debug)]
pub struct Bs3Widgets {
    config: Arc<Bs3Config>,
    scripts: PickerScripts,
}

impl Bs3Widgets {
    /// Creates the widget builders, compiling the picker scripts.
    pub fn new(config: Arc<Bs3Config>) -> Result<Self> {
        Ok(Self {
            config,
            scripts: PickerScripts::new()?,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Bs3Config {
        &self.config
    }

    /// A host checkbox carrying exactly `bool checkbox`.
    pub fn widget_bool(&self, field: &FormField, value: Option<&str>, id: Option<&str>) -> Tag {
        widgets::widget_bool(field, value, BOOL_CLASS, id)
    }

    /// A text input with a calendar addon and a date picker.
    pub fn widget_date(
        &self,
        attr: &Bs3Overrides,
        field: &FormField,
        value: Option<&str>,
        id: Option<&str>,
    ) -> Result<Tag> {
        let settings = attr.resolve(&self.config);
        let fid = id.unwrap_or_else(|| field.widget_id());
        let params = PickerParams::new(&picker_id(fid), settings.date_format)
            .bounds(settings.min_date, settings.max_date)
            .icons(
                settings.icon_date,
                settings.icon_time,
                settings.icon_up,
                settings.icon_down,
            );
        let script = self.scripts.render(PickerKind::Date, &params)?;

        Ok(input_group(
            field,
            fid,
            value.unwrap_or(""),
            "date",
            settings.icon_date,
            script,
        ))
    }

    /// A text input with a clock addon and a time picker.
    pub fn widget_time(
        &self,
        attr: &Bs3Overrides,
        field: &FormField,
        value: Option<&str>,
        id: Option<&str>,
    ) -> Result<Tag> {
        let settings = attr.resolve(&self.config);
        let fid = id.unwrap_or_else(|| field.widget_id());
        let params = PickerParams::new(&picker_id(fid), settings.time_format)
            .use_seconds(settings.pick_seconds)
            .icons(
                settings.icon_date,
                settings.icon_time,
                settings.icon_up,
                settings.icon_down,
            );
        let script = self.scripts.render(PickerKind::Time, &params)?;

        Ok(input_group(
            field,
            fid,
            &displayed_time(value, settings.pick_seconds),
            "time",
            settings.icon_time,
            script,
        ))
    }

    /// A text input with a calendar addon and a combined picker.
    pub fn widget_datetime(
        &self,
        attr: &Bs3Overrides,
        field: &FormField,
        value: Option<&str>,
        id: Option<&str>,
    ) -> Result<Tag> {
        let settings = attr.resolve(&self.config);
        let fid = id.unwrap_or_else(|| field.widget_id());
        let params = PickerParams::new(&picker_id(fid), settings.datetime_format)
            .use_seconds(settings.pick_seconds)
            .bounds(settings.min_date, settings.max_date)
            .icons(
                settings.icon_date,
                settings.icon_time,
                settings.icon_up,
                settings.icon_down,
            );
        let script = self.scripts.render(PickerKind::DateTime, &params)?;

        Ok(input_group(
            field,
            fid,
            &displayed_time(value, settings.pick_seconds),
            "datetime",
            settings.icon_date,
            script,
        ))
    }
}

/// Id of the container the picker attaches to.
fn picker_id(fid: &str) -> String {
    format!("{fid}_cat")
}

fn input_group(
    field: &FormField,
    fid: &str,
    value: &str,
    group: &str,
    icon: &str,
    script: String,
) -> Tag {
    Tag::new("div")
        .id(picker_id(fid))
        .class(format!("input-group {group}"))
        .child(
            Tag::new("input")
                .attr("name", &field.name)
                .attr("type", "text")
                .id(fid)
                .class("form-control")
                .attr("value", value),
        )
        .child(
            Tag::new("span")
                .class("input-group-addon")
                .child(Tag::new("span").class(icon)),
        )
        .child(Node::raw(script))
}

fn displayed_time(value: Option<&str>, pick_seconds: bool) -> Cow<'_, str> {
    let value = value.unwrap_or("");
    if pick_seconds {
        Cow::Borrowed(value)
    } else {
        strip_seconds(value)
    }
}

/// `HH:MM` followed by seconds, optional fraction and optional UTC offset.
static SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*\d:\d{2}):\d{2}(?:\.\d+)?(Z|[+-]\d{2}(?::?\d{2})?)?$")
        .expect("Invalid seconds regex")
});

/// Drops the `:SS` (or `:SS.ffffff`) component of a time or datetime value.
///
/// A trailing UTC offset is kept. Values without a seconds component are
/// returned unchanged.
pub fn strip_seconds(value: &str) -> Cow<'_, str> {
    SECONDS.replace(value, "${1}${2}")
}
