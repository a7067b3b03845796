//! Date rendering for the table and the form's date-time input.

use std::fmt::Display;

use chrono::{DateTime, Local, Locale, NaiveDateTime, TimeZone, Utc};

/// Long Indonesian date used in the table, e.g.
/// `Senin, 19 Oktober 2026 pukul 9.05.03 +07:00`. The hour is not padded.
pub const DATE_DISPLAY_FORMAT: &str = "%A, %-d %B %Y pukul %-H.%M.%S %:z";

/// Layout of the expiration input, minute precision in local time.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats an expiration date for display in the local timezone.
pub fn date_format(date: &DateTime<Utc>) -> String {
    date_format_in(date, &Local)
}

pub fn date_format_in<Tz>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz)
        .format_localized(DATE_DISPLAY_FORMAT, Locale::id_ID)
        .to_string()
}

/// Renders a timestamp the way the form's expiration input expects it.
pub fn datetime_local(date: &DateTime<Utc>) -> String {
    datetime_local_in(date, &Local)
}

pub fn datetime_local_in<Tz>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz)
        .format(DATETIME_LOCAL_FORMAT)
        .to_string()
}

/// Parses the expiration input back to UTC. `None` for malformed input or a
/// local time that does not exist (DST gap).
pub fn parse_datetime_local(input: &str) -> Option<DateTime<Utc>> {
    parse_datetime_local_in(input, &Local)
}

pub fn parse_datetime_local_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), DATETIME_LOCAL_FORMAT).ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|date| date.with_timezone(&Utc))
}
