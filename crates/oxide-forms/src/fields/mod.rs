//! Form field descriptors.

mod values;

pub use values::FormValues;

use crate::error::{FormError, Result};

/// The type of a form field, which selects its widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Checkbox.
    Bool,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    DateTime,
    /// Single-line text.
    String,
    /// Multi-line text.
    Text,
    /// Masked text.
    Password,
    /// Integer.
    Int,
    /// Floating point number.
    Float,
    /// File upload.
    Upload,
}

impl FieldKind {
    /// Returns the name used as the widget's type class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::String => "string",
            Self::Text => "text",
            Self::Password => "password",
            Self::Int => "int",
            Self::Float => "float",
            Self::Upload => "upload",
        }
    }

    /// Returns whether the field renders a date/time picker.
    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }
}

/// Definition of a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Field type.
    pub kind: FieldKind,
    /// Field label.
    pub label: Option<String>,
    /// Help text shown below the widget.
    pub comment: Option<String>,
    /// Explicit widget id.
    pub widget_id: Option<String>,
}

impl FormField {
    /// Creates a new field definition.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            comment: None,
            widget_id: None,
        }
    }

    /// Creates a boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    /// Creates a date field.
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Creates a time field.
    pub fn time(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Time)
    }

    /// Creates a datetime field.
    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::DateTime)
    }

    /// Creates a single-line text field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Overrides the widget id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.widget_id = Some(id.into());
        self
    }

    /// Returns the widget id: the explicit one, else the field name.
    pub fn widget_id(&self) -> &str {
        self.widget_id.as_deref().unwrap_or(&self.name)
    }

    /// Returns the label text, derived from the name when unset.
    pub fn label_text(&self) -> String {
        self.label.clone().unwrap_or_else(|| humanize(&self.name))
    }
}

/// Turns `start_date` into `Start date`.
fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormField>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field definitions.
    ///
    /// Widget ids derive from field names, so names must be unique.
    pub fn build(self) -> Result<Vec<FormField>> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }
        Ok(self.fields)
    }
}
