//! Current field values.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Current values of a form, stringified the way widgets display them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    /// Creates an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Builder variant of [`FormValues::set`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a date value as `YYYY-MM-DD`.
    #[must_use]
    pub fn date(self, field: impl Into<String>, value: NaiveDate) -> Self {
        self.with(field, value.format("%Y-%m-%d").to_string())
    }

    /// Sets a time value as `HH:MM:SS`.
    #[must_use]
    pub fn time(self, field: impl Into<String>, value: NaiveTime) -> Self {
        self.with(field, value.format("%H:%M:%S").to_string())
    }

    /// Sets a datetime value as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn datetime(self, field: impl Into<String>, value: NaiveDateTime) -> Self {
        self.with(field, value.format("%Y-%m-%d %H:%M:%S").to_string())
    }

    /// Sets a boolean value.
    #[must_use]
    pub fn boolean(self, field: impl Into<String>, value: bool) -> Self {
        self.with(field, value.to_string())
    }

    /// Returns the value of a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

impl From<HashMap<String, String>> for FormValues {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrono_values() {
        let date = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        let time = NaiveTime::from_hms_opt(12, 30, 45).unwrap();
        let values = FormValues::new()
            .date("day", date)
            .time("at", time)
            .datetime("when", date.and_time(time))
            .boolean("active", true);

        assert_eq!(values.get("day"), Some("2015-01-01"));
        assert_eq!(values.get("at"), Some("12:30:45"));
        assert_eq!(values.get("when"), Some("2015-01-01 12:30:45"));
        assert_eq!(values.get("active"), Some("true"));
        assert_eq!(values.get("missing"), None);
    }
}
