use std::fmt;

use chrono::{NaiveDateTime, Timelike};

/// Opaque identifier assigned by the store when a reminder is saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReminderId(String);

impl ReminderId {
    pub fn new(inner: impl Into<String>) -> Self {
        Self(inner.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReminderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Date and time a reminder is about. No timezone is attached.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReminderTime(NaiveDateTime);

impl ReminderTime {
    pub const DISPLAY_FORMAT: &'static str = "%Y-%m-%d %H:%M";

    pub fn new(inner: NaiveDateTime) -> Self {
        let normalized_time = inner.with_nanosecond(0).unwrap_or(inner);
        Self(normalized_time)
    }

    pub fn datetime(&self) -> &NaiveDateTime {
        &self.0
    }

    pub fn into_datetime(self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::DISPLAY_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub text: String,
    pub time: ReminderTime,
}
