use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Cumulative practice time as `"{h}h {m}m"`.
#[must_use]
pub fn format_hours_minutes(total_minutes: u32) -> String {
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Short calendar date in the local time zone, e.g. `11/14/2023`.
#[must_use]
pub fn format_local_date(value: DateTime<Utc>) -> String {
    format_date_in(value, &Local)
}

#[must_use]
pub fn format_date_in<Tz>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.with_timezone(tz).format("%-m/%-d/%Y").to_string()
}
