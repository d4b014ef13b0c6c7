//! Date inputs and UTC / local wall-clock conversion.
//!
//! Formatting calls accept anything convertible into a [`DateInput`]:
//! chrono values, ISO strings, or nothing at all. Strings carrying an offset
//! are instants; strings without one are wall-clock values in the settings
//! timezone.
//!
//! [`utc_to_local_date`] and [`local_to_utc_date`] shift an instant so that
//! one zone's wall clock reads what the other zone's did. They are useful
//! when a value has been stored "as UTC" but means a local calendar date.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{DateError, Result};

/// Layouts with a trailing offset (`+04`, `+0400`, `+04:00`) that RFC 3339
/// parsing rejects.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Wall-clock layouts accepted for strings without an offset.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A date value handed to a formatting or conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// A fixed instant.
    Instant(DateTime<FixedOffset>),
    /// A wall-clock value with no zone attached.
    Local(NaiveDateTime),
    /// Unparsed text, interpreted lazily.
    Text(String),
    /// No value.
    Missing,
}

/// The result of reading a [`DateInput`] before any zone is applied.
enum Parsed {
    Instant(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

impl DateInput {
    fn parse(&self) -> Option<Parsed> {
        match self {
            DateInput::Instant(dt) => Some(Parsed::Instant(*dt)),
            DateInput::Local(naive) => Some(Parsed::Local(*naive)),
            DateInput::Text(s) => parse_text(s),
            DateInput::Missing => None,
        }
    }

    /// The wall clock this input shows in `tz`, or `None` if it is missing
    /// or unparseable.
    pub fn resolve(&self, tz: &Tz) -> Option<NaiveDateTime> {
        match self.parse()? {
            Parsed::Instant(dt) => Some(dt.with_timezone(tz).naive_local()),
            Parsed::Local(naive) => Some(naive),
        }
    }

    /// The instant this input denotes, reading offset-less values as `tz` local time.
    ///
    /// A wall clock skipped by a DST gap yields `None`; an ambiguous one
    /// picks the earlier instant.
    pub fn resolve_instant(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        match self.parse()? {
            Parsed::Instant(dt) => Some(dt.with_timezone(tz)),
            Parsed::Local(naive) => tz.from_local_datetime(&naive).earliest(),
        }
    }
}

fn parse_text(s: &str) -> Option<Parsed> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Parsed::Instant(dt));
    }
    let zoned = match s.strip_suffix(['Z', 'z']) {
        Some(wall) => format!("{wall}+00:00"),
        None => s.to_string(),
    };
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&zoned, fmt).ok())
    {
        return Some(Parsed::Instant(dt));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| parse_hour_only(s))
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
        .map(Parsed::Local)
}

/// `YYYY-MM-DDTHH`, which chrono will not parse without minutes.
fn parse_hour_only(s: &str) -> Option<NaiveDateTime> {
    if s.len() != 13 || s.as_bytes()[10] != b'T' {
        return None;
    }
    NaiveDateTime::parse_from_str(&format!("{s}:00"), "%Y-%m-%dT%H:%M").ok()
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
            DateInput::Local(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
            DateInput::Text(s) => write!(f, "'{s}'"),
            DateInput::Missing => write!(f, "missing value"),
        }
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for DateInput {
    fn from(dt: DateTime<Z>) -> Self {
        DateInput::Instant(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(naive: NaiveDateTime) -> Self {
        DateInput::Local(naive)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Local(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Missing, Into::into)
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

/// Reinterpret the input's UTC wall clock as wall-clock time in `tz`.
///
/// Input without an offset is read as UTC. The result is the instant at
/// which `tz` shows the same wall clock.
///
/// # Errors
///
/// Returns [`DateError::InvalidDatetime`] if the input cannot be parsed or
/// its wall clock does not exist in `tz` (a DST gap).
///
/// # Examples
///
/// ```
/// use chrono_tz::Tz;
/// use period_engine::utc_to_local_date;
///
/// let shifted = utc_to_local_date("2023-11-21T00:00:00Z", &Tz::America__New_York).unwrap();
/// assert_eq!(shifted.to_rfc3339(), "2023-11-21T05:00:00+00:00");
/// ```
pub fn utc_to_local_date(input: impl Into<DateInput>, tz: &Tz) -> Result<DateTime<Utc>> {
    let input = input.into();
    let wall = match input.parse() {
        Some(Parsed::Instant(dt)) => dt.naive_utc(),
        Some(Parsed::Local(naive)) => naive,
        None => return Err(DateError::InvalidDatetime(input.to_string())),
    };
    tz.from_local_datetime(&wall)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            DateError::InvalidDatetime(format!("{wall} does not exist in {}", tz.name()))
        })
}

/// Reinterpret the input's wall clock in `tz` as UTC wall-clock time.
///
/// Input without an offset is read as `tz` local time. The result is the
/// instant at which UTC shows the same wall clock.
///
/// # Errors
///
/// Returns [`DateError::InvalidDatetime`] if the input cannot be parsed.
pub fn local_to_utc_date(input: impl Into<DateInput>, tz: &Tz) -> Result<DateTime<Utc>> {
    let input = input.into();
    let wall = match input.parse() {
        Some(Parsed::Instant(dt)) => dt.with_timezone(tz).naive_local(),
        Some(Parsed::Local(naive)) => naive,
        None => return Err(DateError::InvalidDatetime(input.to_string())),
    };
    Ok(Utc.from_utc_datetime(&wall))
}

/// ISO-8601 with seconds and a numeric offset, or `Z` at offset zero.
pub fn to_iso_string<Z: TimeZone>(dt: &DateTime<Z>) -> String {
    let offset = dt.offset().fix();
    let wall = dt.naive_local().format("%Y-%m-%dT%H:%M:%S");
    if offset.local_minus_utc() == 0 {
        format!("{wall}Z")
    } else {
        format!("{wall}{offset}")
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
