//! Period-aware date formatting.
//!
//! [`format_date`] resolves a date to the period that contains it and
//! renders the period with a fixed token layout per period type and
//! [`Variant`]. Without a period type it falls back to a zone-qualified
//! ISO-8601 string.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::convert::{to_iso_string, DateInput};
use crate::error::{DateError, Result};
use crate::intl::IntlFormatter;
use crate::period::{resolve_period, PeriodType, ResolvedPeriod};
use crate::settings::{FormatDateOptions, Settings, Variant};
use crate::token::{DateToken, IntlOptions};

/// Joins the two endpoints of a rendered range.
pub const RANGE_SEPARATOR: &str = " - ";

/// Which part of a resolved period is rendered, and with which tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Layout {
    /// The original instant (day-like periods).
    Instant(Vec<DateToken>),
    /// The first day of the period.
    Start(Vec<DateToken>),
    /// The last day of the period.
    End(Vec<DateToken>),
    /// Both endpoints, joined by [`RANGE_SEPARATOR`].
    Range(Vec<DateToken>, Vec<DateToken>),
}

fn layout(period_type: PeriodType, variant: Variant) -> Layout {
    use DateToken as T;
    use PeriodType as P;
    use Variant as V;

    let month_day = || vec![T::MonthNumeric, T::DayOfMonthNumeric];
    let month_day_year = || vec![T::MonthNumeric, T::DayOfMonthNumeric, T::YearNumeric];

    match (period_type, variant) {
        (P::Day, V::Short) => Layout::Instant(month_day()),
        (P::Day, V::Default) => Layout::Instant(vec![T::MonthShort, T::DayOfMonthNumeric]),
        (P::Day, V::Long) => {
            Layout::Instant(vec![T::MonthShort, T::DayOfMonthNumeric, T::YearNumeric])
        }

        (P::DayTime, V::Short) => {
            let mut tokens = month_day_year();
            tokens.extend([T::HourNumeric, T::MinuteNumeric]);
            Layout::Instant(tokens)
        }
        (P::DayTime, V::Default) => {
            let mut tokens = month_day_year();
            tokens.extend([T::Hour2Digit, T::Minute2Digit]);
            Layout::Instant(tokens)
        }
        (P::DayTime, V::Long) => {
            let mut tokens = month_day_year();
            tokens.extend([T::Hour2Digit, T::Minute2Digit, T::Second2Digit]);
            Layout::Instant(tokens)
        }

        (P::TimeOnly, V::Short) => Layout::Instant(vec![T::HourNumeric, T::MinuteNumeric]),
        (P::TimeOnly, V::Default) => {
            Layout::Instant(vec![T::Hour2Digit, T::Minute2Digit, T::Second2Digit])
        }
        (P::TimeOnly, V::Long) => Layout::Instant(vec![
            T::Hour2Digit,
            T::Minute2Digit,
            T::Second2Digit,
            T::Millisecond3,
        ]),

        (P::Month, V::Short) => Layout::Start(vec![T::MonthShort]),
        (P::Month, V::Default | V::Long) => Layout::Start(vec![T::MonthLong]),

        (P::MonthYear, V::Short) => Layout::Start(vec![T::MonthShort, T::Year2Digit]),
        (P::MonthYear, V::Default | V::Long) => {
            Layout::Start(vec![T::MonthLong, T::YearNumeric])
        }

        (P::Quarter, V::Short) => {
            Layout::Range(vec![T::MonthShort], vec![T::MonthShort, T::Year2Digit])
        }
        (P::Quarter, V::Default | V::Long) => {
            Layout::Range(vec![T::MonthLong], vec![T::MonthLong, T::YearNumeric])
        }

        (P::CalendarYear, V::Short) => Layout::Start(vec![T::Year2Digit]),
        (P::CalendarYear, V::Default | V::Long) => Layout::Start(vec![T::YearNumeric]),

        (P::FiscalYearOctober, V::Short) => Layout::End(vec![T::Year2Digit]),
        (P::FiscalYearOctober, V::Default | V::Long) => Layout::End(vec![T::YearNumeric]),

        // Every week and bi-week variant.
        (_, V::Short) => Layout::Range(month_day(), month_day()),
        (_, V::Default | V::Long) => Layout::Range(month_day_year(), month_day_year()),
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Render `date` as the period of type `period_type` that contains it.
///
/// With `period_type` of `None` the result is an ISO-8601 string in the
/// settings timezone. Missing or unparseable dates render as an empty
/// string; use [`try_format_date`] to see why.
///
/// # Examples
///
/// ```
/// use period_engine::{format_date, FormatDateOptions, PeriodType, Settings, Variant};
///
/// let settings = Settings::default();
/// let short = FormatDateOptions::variant(Variant::Short);
/// assert_eq!(
///     format_date(&settings, "2023-11-21", Some(PeriodType::Week), &short),
///     "11/19 - 11/25"
/// );
/// assert_eq!(format_date(&settings, None::<&str>, Some(PeriodType::Day), &short), "");
/// ```
pub fn format_date(
    settings: &Settings,
    date: impl Into<DateInput>,
    period_type: Option<PeriodType>,
    options: &FormatDateOptions,
) -> String {
    try_format_date(settings, date, period_type, options).unwrap_or_else(|e| {
        debug!("format_date rendered empty output: {}", e);
        String::new()
    })
}

/// Fallible form of [`format_date`].
///
/// # Errors
///
/// Returns [`DateError::InvalidDatetime`] if the date is missing, cannot be
/// parsed, or its period cannot be represented.
pub fn try_format_date(
    settings: &Settings,
    date: impl Into<DateInput>,
    period_type: Option<PeriodType>,
    options: &FormatDateOptions,
) -> Result<String> {
    let input = date.into();
    let tz = &settings.timezone;

    let Some(period_type) = period_type else {
        let instant = input
            .resolve_instant(tz)
            .ok_or_else(|| DateError::InvalidDatetime(input.to_string()))?;
        return Ok(to_iso_string(&instant));
    };

    let local = input
        .resolve(tz)
        .ok_or_else(|| DateError::InvalidDatetime(input.to_string()))?;
    let resolved = resolve_period(local, period_type, settings.week_starts_on(options))
        .ok_or_else(|| {
            DateError::InvalidDatetime(format!("{period_type} containing {local} is out of range"))
        })?;

    let formatter = IntlFormatter::for_call(settings, options);
    let render = |at: NaiveDateTime, tokens: &[DateToken]| {
        let intl: IntlOptions = tokens.iter().copied().collect();
        formatter.format(at, &intl)
    };

    let text = match layout(period_type, options.variant) {
        Layout::Instant(tokens) => {
            let at = match resolved {
                ResolvedPeriod::Instant(dt) => dt,
                ResolvedPeriod::Range(range) => midnight(range.start),
            };
            render(at, &tokens)
        }
        Layout::Start(tokens) => render(midnight(resolved.start()), &tokens),
        Layout::End(tokens) => render(midnight(resolved.end()), &tokens),
        Layout::Range(start_tokens, end_tokens) => format!(
            "{}{RANGE_SEPARATOR}{}",
            render(midnight(resolved.start()), &start_tokens),
            render(midnight(resolved.end()), &end_tokens),
        ),
    };
    Ok(text)
}

// ── Tests ───────────────────────────────────────────────────────────────────
