//! Extension configuration and per-form overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Bs3Error, Result};

/// Process-wide settings of the extension.
///
/// Every key is optional in the serialized form; missing keys take the
/// values of [`Bs3Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bs3Config {
    /// Register the Bootstrap 3 style as the application's form style.
    pub set_as_default_style: bool,
    /// Sub-folder of the static directory receiving the assets.
    pub static_folder: String,
    /// moment.js format of date fields.
    pub date_format: String,
    /// moment.js format of time fields.
    pub time_format: String,
    /// moment.js format of datetime fields.
    pub datetime_format: String,
    /// Whether time pickers include seconds.
    pub time_pickseconds: bool,
    /// Icon class of the time addon.
    pub icon_time: String,
    /// Icon class of the date addon.
    pub icon_date: String,
    /// Icon class of the picker's up arrow.
    pub icon_up: String,
    /// Icon class of the picker's down arrow.
    pub icon_down: String,
}

impl Default for Bs3Config {
    fn default() -> Self {
        Self {
            set_as_default_style: true,
            static_folder: "bs3".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            time_format: "HH:mm:ss".to_string(),
            datetime_format: "DD/MM/YYYY HH:mm:ss".to_string(),
            time_pickseconds: true,
            icon_time: "fa fa-clock-o".to_string(),
            icon_date: "fa fa-calendar".to_string(),
            icon_up: "fa fa-arrow-up".to_string(),
            icon_down: "fa fa-arrow-down".to_string(),
        }
    }
}

impl Bs3Config {
    /// Parses a JSON object, filling missing keys with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Bs3Error::io(path, e))?;
        Self::from_json(&json)
    }

    /// Returns the public URL of a bundled asset.
    pub fn static_url(&self, asset: &str) -> String {
        format!("/static/{}/{}", self.static_folder, asset)
    }
}

/// Optional replacements for configuration values.
///
/// Overrides are given per form and per field; unset entries fall back to
/// the process configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bs3Overrides {
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub datetime_format: Option<String>,
    pub time_pickseconds: Option<bool>,
    pub icon_time: Option<String>,
    pub icon_date: Option<String>,
    pub icon_up: Option<String>,
    pub icon_down: Option<String>,
    /// Earliest selectable date, as a literal the picker understands.
    pub min_date: Option<String>,
    /// Latest selectable date.
    pub max_date: Option<String>,
}

macro_rules! override_setters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Sets `", stringify!($name), "`.")]
            #[must_use]
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl Bs3Overrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    override_setters! {
        date_format: String,
        time_format: String,
        datetime_format: String,
        time_pickseconds: bool,
        icon_time: String,
        icon_date: String,
        icon_up: String,
        icon_down: String,
        min_date: String,
        max_date: String,
    }

    /// Returns `self` with unset entries taken from `base`.
    #[must_use]
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            date_format: self.date_format.clone().or_else(|| base.date_format.clone()),
            time_format: self.time_format.clone().or_else(|| base.time_format.clone()),
            datetime_format: self
                .datetime_format
                .clone()
                .or_else(|| base.datetime_format.clone()),
            time_pickseconds: self.time_pickseconds.or(base.time_pickseconds),
            icon_time: self.icon_time.clone().or_else(|| base.icon_time.clone()),
            icon_date: self.icon_date.clone().or_else(|| base.icon_date.clone()),
            icon_up: self.icon_up.clone().or_else(|| base.icon_up.clone()),
            icon_down: self.icon_down.clone().or_else(|| base.icon_down.clone()),
            min_date: self.min_date.clone().or_else(|| base.min_date.clone()),
            max_date: self.max_date.clone().or_else(|| base.max_date.clone()),
        }
    }

    /// Resolves every setting against the configuration.
    pub fn resolve<'a>(&'a self, config: &'a Bs3Config) -> PickerSettings<'a> {
        PickerSettings {
            date_format: self.date_format.as_deref().unwrap_or(&config.date_format),
            time_format: self.time_format.as_deref().unwrap_or(&config.time_format),
            datetime_format: self
                .datetime_format
                .as_deref()
                .unwrap_or(&config.datetime_format),
            pick_seconds: self.time_pickseconds.unwrap_or(config.time_pickseconds),
            icon_time: self.icon_time.as_deref().unwrap_or(&config.icon_time),
            icon_date: self.icon_date.as_deref().unwrap_or(&config.icon_date),
            icon_up: self.icon_up.as_deref().unwrap_or(&config.icon_up),
            icon_down: self.icon_down.as_deref().unwrap_or(&config.icon_down),
            min_date: self.min_date.as_deref().filter(|d| !d.is_empty()),
            max_date: self.max_date.as_deref().filter(|d| !d.is_empty()),
        }
    }
}

/// Fully resolved picker settings for one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSettings<'a> {
    pub date_format: &'a str,
    pub time_format: &'a str,
    pub datetime_format: &'a str,
    pub pick_seconds: bool,
    pub icon_time: &'a str,
    pub icon_date: &'a str,
    pub icon_up: &'a str,
    pub icon_down: &'a str,
    /// `None` when unset or empty.
    pub min_date: Option<&'a str>,
    /// `None` when unset or empty.
    pub max_date: Option<&'a str>,
}
