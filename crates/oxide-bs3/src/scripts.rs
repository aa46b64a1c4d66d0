//! Inline initialization scripts for bootstrap-datetimepicker.
//!
//! The three templates follow the datetimepicker v3 options API. Values are
//! escaped for a JavaScript string context before interpolation, so the
//! templates themselves run with autoescaping off.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;

/// Picker-side default bounds, used when a form sets none.
pub const DEFAULT_MIN_DATE: &str = "$.fn.datetimepicker.defaults.minDate";
pub const DEFAULT_MAX_DATE: &str = "$.fn.datetimepicker.defaults.maxDate";

const DATE_PICKER: &str = r#"
<script type="text/javascript">
    $(function() {
        $('#{{ divid }}').datetimepicker({
            pickTime: false,
            format: '{{ format }}',
            minDate: {{ min_date }},
            maxDate: {{ max_date }},
            icons: {
                date: "{{ icon_date }}",
                up: "{{ icon_up }}",
                down: "{{ icon_down }}"
            }
        });
    });
</script>"#;

const TIME_PICKER: &str = r#"
<script type="text/javascript">
    $(function() {
        $('#{{ divid }}').datetimepicker({
            pickDate: false,
            useSeconds: {{ use_seconds }},
            format: '{{ format }}',
            icons: {
                time: "{{ icon_time }}",
                up: "{{ icon_up }}",
                down: "{{ icon_down }}"
            }
        });
    });
</script>"#;

const DATETIME_PICKER: &str = r#"
<script type="text/javascript">
    $(function() {
        $('#{{ divid }}').datetimepicker({
            useSeconds: {{ use_seconds }},
            format: '{{ format }}',
            minDate: {{ min_date }},
            maxDate: {{ max_date }},
            icons: {
                date: "{{ icon_date }}",
                time: "{{ icon_time }}",
                up: "{{ icon_up }}",
                down: "{{ icon_down }}"
            }
        });
    });
</script>"#;

/// Which picker flavour to initialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Date,
    Time,
    DateTime,
}

impl PickerKind {
    fn template_name(self) -> &'static str {
        match self {
            Self::Date => "datepicker.js",
            Self::Time => "timepicker.js",
            Self::DateTime => "datetimepicker.js",
        }
    }
}

/// Values interpolated into a picker script.
///
/// Construct through [`PickerParams::new`] so every string is escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerParams {
    divid: String,
    format: String,
    use_seconds: bool,
    min_date: String,
    max_date: String,
    icon_date: String,
    icon_time: String,
    icon_up: String,
    icon_down: String,
}

impl PickerParams {
    /// Creates parameters for the element with id `divid`.
    pub fn new(divid: &str, format: &str) -> Self {
        Self {
            divid: js_escape(divid),
            format: js_escape(format),
            use_seconds: false,
            min_date: DEFAULT_MIN_DATE.to_string(),
            max_date: DEFAULT_MAX_DATE.to_string(),
            icon_date: String::new(),
            icon_time: String::new(),
            icon_up: String::new(),
            icon_down: String::new(),
        }
    }

    /// Sets whether the picker shows seconds.
    #[must_use]
    pub fn use_seconds(mut self, use_seconds: bool) -> Self {
        self.use_seconds = use_seconds;
        self
    }

    /// Sets the selectable range; `None` keeps the picker default.
    #[must_use]
    pub fn bounds(mut self, min_date: Option<&str>, max_date: Option<&str>) -> Self {
        self.min_date = bound_expr(min_date, DEFAULT_MIN_DATE);
        self.max_date = bound_expr(max_date, DEFAULT_MAX_DATE);
        self
    }

    /// Sets the icon classes.
    #[must_use]
    pub fn icons(mut self, date: &str, time: &str, up: &str, down: &str) -> Self {
        self.icon_date = js_escape(date);
        self.icon_time = js_escape(time);
        self.icon_up = js_escape(up);
        self.icon_down = js_escape(down);
        self
    }
}

/// The compiled picker templates.
pub struct PickerScripts {
    tera: Tera,
}

impl std::fmt::Debug for PickerScripts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerScripts").finish_non_exhaustive()
    }
}

impl PickerScripts {
    /// Compiles the three templates.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            (PickerKind::Date.template_name(), DATE_PICKER),
            (PickerKind::Time.template_name(), TIME_PICKER),
            (PickerKind::DateTime.template_name(), DATETIME_PICKER),
        ])?;
        Ok(Self { tera })
    }

    /// Renders the script of a picker.
    pub fn render(&self, kind: PickerKind, params: &PickerParams) -> Result<String> {
        let context = Context::from_serialize(params)?;
        Ok(self.tera.render(kind.template_name(), &context)?)
    }
}

/// A quoted date literal, or a reference to the picker's own default.
fn bound_expr(value: Option<&str>, default: &str) -> String {
    match value {
        Some(date) if !date.is_empty() => format!("\"{}\"", js_escape(date)),
        _ => default.to_string(),
    }
}

/// Escapes a value for use inside a quoted JavaScript string that lives in
/// an HTML `<script>` element.
pub fn js_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}
