use chrono::{DateTime, Utc};

/// A timestamp display input: an epoch value in milliseconds, the raw text
/// form of one, or an already-typed UTC datetime.
#[derive(Debug, Clone)]
pub enum DateInput {
    EpochMillis(i64),
    Text(String),
    DateTime(DateTime<Utc>),
}

impl DateInput {
    fn resolve(self) -> Option<DateTime<Utc>> {
        match self {
            DateInput::EpochMillis(millis) => DateTime::from_timestamp_millis(millis),
            DateInput::Text(text) => {
                let millis = text.trim().parse::<i64>().ok()?;
                DateTime::from_timestamp_millis(millis)
            }
            DateInput::DateTime(datetime) => Some(datetime),
        }
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::EpochMillis(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(datetime: DateTime<Utc>) -> Self {
        DateInput::DateTime(datetime)
    }
}

/// Renders a timestamp as `"{Mon} {day}, {hour}:{minute} {AM|PM}"` in UTC
/// with fixed English month and meridiem names (`Jan 5, 3:07 PM`).
///
/// Unparseable input renders as the empty string.
pub fn format_date(input: impl Into<DateInput>) -> String {
    match input.into().resolve() {
        Some(datetime) => datetime.format("%b %-d, %-I:%M %p").to_string(),
        None => String::new(),
    }
}
