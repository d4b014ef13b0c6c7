//! Calendar period resolution.
//!
//! Maps a point in time plus a [`PeriodType`] onto the concrete date or date
//! range the period covers: weeks honour a configurable [`DayOfWeek`] start,
//! bi-weeks are anchored to a fixed epoch, and fiscal years begin in October.
//!
//! # Functions
//!
//! - [`resolve_period`] — Resolve a date to the period containing it
//! - [`month_days_by_week`] — Calendar grid of a month as week rows
//! - [`start_of_week`] / [`end_of_week`] — Week boundaries for a week start
//! - [`is_same_period`] — Whether two dates fall in the same period
//! - [`shift_period`] — Move a date by whole periods
//!
//! All functions are pure and operate on naive (wall-clock) dates. Resolving
//! a wall clock from an instant is the job of [`crate::convert`].

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

// ── Day of week ─────────────────────────────────────────────────────────────

/// A day of the week, numbered from Sunday (0) to Saturday (6).
///
/// Serializes by name and deserializes from a name, an abbreviation or the
/// 0-6 index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "DayOfWeekRepr")]
pub enum DayOfWeek {
    #[default]
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// Every day, Sunday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Look up a day by its index (Sunday = 0).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn to_weekday(self) -> Weekday {
        match self {
            DayOfWeek::Sunday => Weekday::Sun,
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl FromStr for DayOfWeek {
    type Err = DateError;

    /// Accepts full or abbreviated English names (case-insensitive) or an index 0-6.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" | "0" => DayOfWeek::Sunday,
            "monday" | "mon" | "1" => DayOfWeek::Monday,
            "tuesday" | "tue" | "tues" | "2" => DayOfWeek::Tuesday,
            "wednesday" | "wed" | "3" => DayOfWeek::Wednesday,
            "thursday" | "thu" | "thurs" | "4" => DayOfWeek::Thursday,
            "friday" | "fri" | "5" => DayOfWeek::Friday,
            "saturday" | "sat" | "6" => DayOfWeek::Saturday,
            _ => {
                return Err(DateError::InvalidSettings(format!(
                    "unknown day of week: '{s}'"
                )))
            }
        };
        Ok(day)
    }
}

/// Wire forms accepted for a [`DayOfWeek`].
#[derive(Deserialize)]
#[serde(untagged)]
enum DayOfWeekRepr {
    Index(u8),
    Name(String),
}

impl TryFrom<DayOfWeekRepr> for DayOfWeek {
    type Error = DateError;

    fn try_from(repr: DayOfWeekRepr) -> Result<Self, Self::Error> {
        match repr {
            DayOfWeekRepr::Index(index) => DayOfWeek::from_index(index).ok_or_else(|| {
                DateError::InvalidSettings(format!("day of week index out of range: {index}"))
            }),
            DayOfWeekRepr::Name(name) => name.parse(),
        }
    }
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: DayOfWeek) -> u64 {
    let offset = i64::from(weekday.num_days_from_sunday()) - i64::from(week_start.index());
    offset.rem_euclid(7).unsigned_abs()
}

/// The most recent `week_starts_on` day at or before `date`.
pub fn start_of_week(date: NaiveDate, week_starts_on: DayOfWeek) -> NaiveDate {
    let back = days_from_week_start(date.weekday(), week_starts_on);
    date.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

/// The last day of the week containing `date` (start + 6 days).
pub fn end_of_week(date: NaiveDate, week_starts_on: DayOfWeek) -> NaiveDate {
    let ahead = 6 - days_from_week_start(date.weekday(), week_starts_on);
    date.checked_add_days(Days::new(ahead)).unwrap_or(NaiveDate::MAX)
}

// ── Period type ─────────────────────────────────────────────────────────────

/// A named calendar granularity.
///
/// `Week`, `BiWeek1` and `BiWeek2` take their week start from the caller; the
/// day-suffixed variants fix it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    Day,
    DayTime,
    TimeOnly,

    Week,
    WeekSun,
    WeekMon,
    WeekTue,
    WeekWed,
    WeekThu,
    WeekFri,
    WeekSat,

    BiWeek1,
    BiWeek1Sun,
    BiWeek1Mon,
    BiWeek1Tue,
    BiWeek1Wed,
    BiWeek1Thu,
    BiWeek1Fri,
    BiWeek1Sat,

    BiWeek2,
    BiWeek2Sun,
    BiWeek2Mon,
    BiWeek2Tue,
    BiWeek2Wed,
    BiWeek2Thu,
    BiWeek2Fri,
    BiWeek2Sat,

    Month,
    MonthYear,
    Quarter,
    CalendarYear,
    FiscalYearOctober,
}

/// The shape of a period, independent of its fixed or caller-supplied week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Granularity {
    Instant,
    Week(Option<DayOfWeek>),
    BiWeek {
        week_start: Option<DayOfWeek>,
        offset_weeks: u64,
    },
    Month,
    Quarter,
    CalendarYear,
    FiscalYearOctober,
}

impl PeriodType {
    pub const ALL: [PeriodType; 32] = [
        PeriodType::Day,
        PeriodType::DayTime,
        PeriodType::TimeOnly,
        PeriodType::Week,
        PeriodType::WeekSun,
        PeriodType::WeekMon,
        PeriodType::WeekTue,
        PeriodType::WeekWed,
        PeriodType::WeekThu,
        PeriodType::WeekFri,
        PeriodType::WeekSat,
        PeriodType::BiWeek1,
        PeriodType::BiWeek1Sun,
        PeriodType::BiWeek1Mon,
        PeriodType::BiWeek1Tue,
        PeriodType::BiWeek1Wed,
        PeriodType::BiWeek1Thu,
        PeriodType::BiWeek1Fri,
        PeriodType::BiWeek1Sat,
        PeriodType::BiWeek2,
        PeriodType::BiWeek2Sun,
        PeriodType::BiWeek2Mon,
        PeriodType::BiWeek2Tue,
        PeriodType::BiWeek2Wed,
        PeriodType::BiWeek2Thu,
        PeriodType::BiWeek2Fri,
        PeriodType::BiWeek2Sat,
        PeriodType::Month,
        PeriodType::MonthYear,
        PeriodType::Quarter,
        PeriodType::CalendarYear,
        PeriodType::FiscalYearOctober,
    ];

    /// The identifier used for parsing and serialization (e.g. `"WeekSun"`).
    pub fn code(self) -> &'static str {
        match self {
            PeriodType::Day => "Day",
            PeriodType::DayTime => "DayTime",
            PeriodType::TimeOnly => "TimeOnly",
            PeriodType::Week => "Week",
            PeriodType::WeekSun => "WeekSun",
            PeriodType::WeekMon => "WeekMon",
            PeriodType::WeekTue => "WeekTue",
            PeriodType::WeekWed => "WeekWed",
            PeriodType::WeekThu => "WeekThu",
            PeriodType::WeekFri => "WeekFri",
            PeriodType::WeekSat => "WeekSat",
            PeriodType::BiWeek1 => "BiWeek1",
            PeriodType::BiWeek1Sun => "BiWeek1Sun",
            PeriodType::BiWeek1Mon => "BiWeek1Mon",
            PeriodType::BiWeek1Tue => "BiWeek1Tue",
            PeriodType::BiWeek1Wed => "BiWeek1Wed",
            PeriodType::BiWeek1Thu => "BiWeek1Thu",
            PeriodType::BiWeek1Fri => "BiWeek1Fri",
            PeriodType::BiWeek1Sat => "BiWeek1Sat",
            PeriodType::BiWeek2 => "BiWeek2",
            PeriodType::BiWeek2Sun => "BiWeek2Sun",
            PeriodType::BiWeek2Mon => "BiWeek2Mon",
            PeriodType::BiWeek2Tue => "BiWeek2Tue",
            PeriodType::BiWeek2Wed => "BiWeek2Wed",
            PeriodType::BiWeek2Thu => "BiWeek2Thu",
            PeriodType::BiWeek2Fri => "BiWeek2Fri",
            PeriodType::BiWeek2Sat => "BiWeek2Sat",
            PeriodType::Month => "Month",
            PeriodType::MonthYear => "MonthYear",
            PeriodType::Quarter => "Quarter",
            PeriodType::CalendarYear => "CalendarYear",
            PeriodType::FiscalYearOctober => "FiscalYearOctober",
        }
    }

    /// The week start fixed by this period type, if any.
    pub fn fixed_week_start(self) -> Option<DayOfWeek> {
        match self.granularity() {
            Granularity::Week(start) => start,
            Granularity::BiWeek { week_start, .. } => week_start,
            _ => None,
        }
    }

    /// Whether the period resolves to a single instant rather than a range.
    pub fn is_instant(self) -> bool {
        self.granularity() == Granularity::Instant
    }

    fn granularity(self) -> Granularity {
        use DayOfWeek::*;
        let biweek = |week_start, offset_weeks| Granularity::BiWeek {
            week_start,
            offset_weeks,
        };
        match self {
            PeriodType::Day | PeriodType::DayTime | PeriodType::TimeOnly => Granularity::Instant,
            PeriodType::Week => Granularity::Week(None),
            PeriodType::WeekSun => Granularity::Week(Some(Sunday)),
            PeriodType::WeekMon => Granularity::Week(Some(Monday)),
            PeriodType::WeekTue => Granularity::Week(Some(Tuesday)),
            PeriodType::WeekWed => Granularity::Week(Some(Wednesday)),
            PeriodType::WeekThu => Granularity::Week(Some(Thursday)),
            PeriodType::WeekFri => Granularity::Week(Some(Friday)),
            PeriodType::WeekSat => Granularity::Week(Some(Saturday)),
            PeriodType::BiWeek1 => biweek(None, 0),
            PeriodType::BiWeek1Sun => biweek(Some(Sunday), 0),
            PeriodType::BiWeek1Mon => biweek(Some(Monday), 0),
            PeriodType::BiWeek1Tue => biweek(Some(Tuesday), 0),
            PeriodType::BiWeek1Wed => biweek(Some(Wednesday), 0),
            PeriodType::BiWeek1Thu => biweek(Some(Thursday), 0),
            PeriodType::BiWeek1Fri => biweek(Some(Friday), 0),
            PeriodType::BiWeek1Sat => biweek(Some(Saturday), 0),
            PeriodType::BiWeek2 => biweek(None, 1),
            PeriodType::BiWeek2Sun => biweek(Some(Sunday), 1),
            PeriodType::BiWeek2Mon => biweek(Some(Monday), 1),
            PeriodType::BiWeek2Tue => biweek(Some(Tuesday), 1),
            PeriodType::BiWeek2Wed => biweek(Some(Wednesday), 1),
            PeriodType::BiWeek2Thu => biweek(Some(Thursday), 1),
            PeriodType::BiWeek2Fri => biweek(Some(Friday), 1),
            PeriodType::BiWeek2Sat => biweek(Some(Saturday), 1),
            PeriodType::Month | PeriodType::MonthYear => Granularity::Month,
            PeriodType::Quarter => Granularity::Quarter,
            PeriodType::CalendarYear => Granularity::CalendarYear,
            PeriodType::FiscalYearOctober => Granularity::FiscalYearOctober,
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day_suffix = |d: Option<DayOfWeek>| match d {
            Some(DayOfWeek::Sunday) => " (Sun)",
            Some(DayOfWeek::Monday) => " (Mon)",
            Some(DayOfWeek::Tuesday) => " (Tue)",
            Some(DayOfWeek::Wednesday) => " (Wed)",
            Some(DayOfWeek::Thursday) => " (Thu)",
            Some(DayOfWeek::Friday) => " (Fri)",
            Some(DayOfWeek::Saturday) => " (Sat)",
            None => "",
        };
        match self.granularity() {
            Granularity::Week(start) => write!(f, "Week{}", day_suffix(start)),
            Granularity::BiWeek {
                week_start,
                offset_weeks: 0,
            } => write!(f, "Bi-Week{}", day_suffix(week_start)),
            Granularity::BiWeek { week_start, .. } => {
                write!(f, "Bi-Week 2{}", day_suffix(week_start))
            }
            _ => f.write_str(match self {
                PeriodType::Day => "Day",
                PeriodType::DayTime => "Day Time",
                PeriodType::TimeOnly => "Time",
                PeriodType::Month => "Month",
                PeriodType::MonthYear => "Month Year",
                PeriodType::Quarter => "Quarter",
                PeriodType::CalendarYear => "Calendar Year",
                _ => "Fiscal Year (Oct)",
            }),
        }
    }
}

impl FromStr for PeriodType {
    type Err = DateError;

    /// Parse a period code case-insensitively, ignoring `-` and `_` (`"week-sun"`, `"WEEK_SUN"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !matches!(c, '-' | '_')).collect();
        Self::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(wanted.trim()))
            .ok_or_else(|| DateError::InvalidSettings(format!("unknown period type: '{s}'")))
    }
}

// ── Resolved periods ────────────────────────────────────────────────────────

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days covered, counting both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// The outcome of [`resolve_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedPeriod {
    /// Day-like periods keep the original instant.
    Instant(NaiveDateTime),
    Range(DateRange),
}

impl ResolvedPeriod {
    pub fn start(&self) -> NaiveDate {
        match self {
            ResolvedPeriod::Instant(dt) => dt.date(),
            ResolvedPeriod::Range(range) => range.start,
        }
    }

    pub fn end(&self) -> NaiveDate {
        match self {
            ResolvedPeriod::Instant(dt) => dt.date(),
            ResolvedPeriod::Range(range) => range.end,
        }
    }
}

// ── resolve_period ──────────────────────────────────────────────────────────

/// First Sunday after the Unix epoch; bi-week blocks are counted from here.
const BIWEEK_EPOCH: (i32, u32, u32) = (1970, 1, 4);

/// Resolve `date` to the period of type `period_type` that contains it.
///
/// `week_starts_on` applies to `Week`, `BiWeek1` and `BiWeek2`; period types
/// with a fixed week start ignore it.
///
/// Returns `None` only when the period would extend past the range chrono
/// can represent.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::period::{resolve_period, DayOfWeek, PeriodType};
///
/// let date = NaiveDate::from_ymd_opt(2023, 11, 21).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let week = resolve_period(date, PeriodType::Week, DayOfWeek::Sunday).unwrap();
/// assert_eq!(week.start(), NaiveDate::from_ymd_opt(2023, 11, 19).unwrap());
/// assert_eq!(week.end(), NaiveDate::from_ymd_opt(2023, 11, 25).unwrap());
/// ```
pub fn resolve_period(
    date: NaiveDateTime,
    period_type: PeriodType,
    week_starts_on: DayOfWeek,
) -> Option<ResolvedPeriod> {
    let day = date.date();
    let range = match period_type.granularity() {
        Granularity::Instant => return Some(ResolvedPeriod::Instant(date)),
        Granularity::Week(fixed) => {
            let start = start_of_week(day, fixed.unwrap_or(week_starts_on));
            DateRange::new(start, start.checked_add_days(Days::new(6))?)
        }
        Granularity::BiWeek {
            week_start,
            offset_weeks,
        } => biweek_range(day, week_start.unwrap_or(week_starts_on), offset_weeks)?,
        Granularity::Month => DateRange::new(first_of_month(day), last_of_month(day)?),
        Granularity::Quarter => {
            let start = first_of_month(day).checked_sub_months(Months::new(day.month0() % 3))?;
            let end = start.checked_add_months(Months::new(3))?.pred_opt()?;
            DateRange::new(start, end)
        }
        Granularity::CalendarYear => DateRange::new(
            NaiveDate::from_ymd_opt(day.year(), 1, 1)?,
            NaiveDate::from_ymd_opt(day.year(), 12, 31)?,
        ),
        Granularity::FiscalYearOctober => {
            let fiscal_year = fiscal_year_october(day);
            DateRange::new(
                NaiveDate::from_ymd_opt(fiscal_year - 1, 10, 1)?,
                NaiveDate::from_ymd_opt(fiscal_year, 9, 30)?,
            )
        }
    };
    Some(ResolvedPeriod::Range(range))
}

/// The October fiscal year containing `date`, labelled by its ending calendar year.
pub fn fiscal_year_october(date: NaiveDate) -> i32 {
    if date.month() >= 10 {
        date.year() + 1
    } else {
        date.year()
    }
}

/// The 14-day block containing `date`, counted from the epoch week start.
fn biweek_range(date: NaiveDate, week_start: DayOfWeek, offset_weeks: u64) -> Option<DateRange> {
    let (y, m, d) = BIWEEK_EPOCH;
    let anchor = NaiveDate::from_ymd_opt(y, m, d)?
        .checked_add_days(Days::new(u64::from(week_start.index()) + 7 * offset_weeks))?;
    let elapsed = (date - anchor).num_days();
    let block_start = elapsed.div_euclid(14) * 14;
    let start = if block_start >= 0 {
        anchor.checked_add_days(Days::new(block_start.unsigned_abs()))?
    } else {
        anchor.checked_sub_days(Days::new(block_start.unsigned_abs()))?
    };
    Some(DateRange::new(start, start.checked_add_days(Days::new(13))?))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // day0 < 31, so this never leaves the month
    date - Days::new(u64::from(date.day0()))
}

fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date)
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

// ── Period comparison and shifting ──────────────────────────────────────────

/// Whether `a` and `b` fall in the same period.
///
/// Day-like periods compare calendar days.
pub fn is_same_period(
    a: NaiveDateTime,
    b: NaiveDateTime,
    period_type: PeriodType,
    week_starts_on: DayOfWeek,
) -> bool {
    if period_type.is_instant() {
        return a.date() == b.date();
    }
    match (
        resolve_period(a, period_type, week_starts_on),
        resolve_period(b, period_type, week_starts_on),
    ) {
        (Some(pa), Some(pb)) => pa == pb,
        _ => false,
    }
}

/// Move `date` by `amount` whole periods (negative moves backwards).
///
/// Day-like periods move by days, weeks by 7 days, bi-weeks by 14 days,
/// months by calendar months (clamping the day), quarters by 3 months and
/// years by 12 months.
pub fn shift_period(
    date: NaiveDateTime,
    period_type: PeriodType,
    amount: i32,
) -> Option<NaiveDateTime> {
    let steps = u64::from(amount.unsigned_abs());
    let forward = amount >= 0;
    let shift_days = |days: u64| {
        if forward {
            date.checked_add_days(Days::new(days))
        } else {
            date.checked_sub_days(Days::new(days))
        }
    };
    let shift_months = |months: u64| {
        let months = Months::new(u32::try_from(months).ok()?);
        if forward {
            date.checked_add_months(months)
        } else {
            date.checked_sub_months(months)
        }
    };
    match period_type.granularity() {
        Granularity::Instant => shift_days(steps),
        Granularity::Week(_) => shift_days(steps * 7),
        Granularity::BiWeek { .. } => shift_days(steps * 14),
        Granularity::Month => shift_months(steps),
        Granularity::Quarter => shift_months(steps * 3),
        Granularity::CalendarYear | Granularity::FiscalYearOctober => shift_months(steps * 12),
    }
}

// ── month_days_by_week ──────────────────────────────────────────────────────

/// Week rows covering a month's calendar grid.
///
/// Produced by [`month_days_by_week`]. The iterator is finite and cheap to
/// clone, so a clone restarts from the current row.
#[derive(Debug, Clone)]
pub struct MonthWeeks {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

/// The calendar grid of the month containing `date`, one row per week.
///
/// The first row starts on the week start at or before the 1st; the last
/// row ends on the week end at or after the month's last day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::period::{month_days_by_week, DayOfWeek};
///
/// let date = NaiveDate::from_ymd_opt(2023, 11, 21).unwrap();
/// let rows: Vec<_> = month_days_by_week(date, DayOfWeek::Sunday).collect();
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[0][0], NaiveDate::from_ymd_opt(2023, 10, 29).unwrap());
/// assert_eq!(rows[4][6], NaiveDate::from_ymd_opt(2023, 12, 2).unwrap());
/// ```
pub fn month_days_by_week(date: NaiveDate, week_starts_on: DayOfWeek) -> MonthWeeks {
    let first = first_of_month(date);
    let last = last_of_month(date).unwrap_or(NaiveDate::MAX);
    MonthWeeks {
        next: Some(start_of_week(first, week_starts_on)),
        last: end_of_week(last, week_starts_on),
    }
}

impl MonthWeeks {
    fn remaining(&self) -> usize {
        match self.next {
            Some(start) if start <= self.last => {
                usize::try_from((self.last - start).num_days() / 7 + 1).unwrap_or(0)
            }
            _ => 0,
        }
    }
}

impl Iterator for MonthWeeks {
    type Item = [NaiveDate; 7];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next.filter(|start| *start <= self.last)?;
        let mut row = [start; 7];
        for (offset, slot) in (0u64..).zip(row.iter_mut()) {
            *slot = start.checked_add_days(Days::new(offset))?;
        }
        self.next = start.checked_add_days(Days::new(7));
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for MonthWeeks {}

impl FusedIterator for MonthWeeks {}

// ── Tests ───────────────────────────────────────────────────────────────────
