//! Intl-style date rendering.
//!
//! [`IntlFormatter`] turns an [`IntlOptions`] bag into text using a
//! [`LocaleData`] and an [`OrdinalSuffixes`] table: field order, padding,
//! the 12/24-hour cycle and separators all come from the locale. The
//! public entry points are [`format_intl`] and [`try_format_intl`].

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

use crate::convert::DateInput;
use crate::error::{DateError, Result};
use crate::locale::{HourCycle, LocaleData, NumericOrder, OrdinalSuffixes, TextOrder};
use crate::settings::{FormatDateOptions, Settings};
use crate::token::{
    DateFormat, DateStyle, IntlOptions, MonthWidth, NumericWidth, TextWidth, TimeStyle,
};

/// Renders dates for one locale and suffix table.
#[derive(Debug, Clone, Copy)]
pub struct IntlFormatter<'a> {
    locale: &'a LocaleData,
    suffixes: &'a OrdinalSuffixes,
}

impl<'a> IntlFormatter<'a> {
    pub fn new(locale: &'a LocaleData, suffixes: &'a OrdinalSuffixes) -> Self {
        Self { locale, suffixes }
    }

    /// The formatter for the locale in effect for a call.
    pub fn for_call(settings: &'a Settings, options: &'a FormatDateOptions) -> Self {
        let tag = settings.active_locale(options);
        Self::new(settings.locale_data(tag), settings.ordinal_suffixes(tag, options))
    }

    /// Render `date` according to `options`.
    ///
    /// An empty options bag renders a numeric date, as Intl does.
    pub fn format(&self, date: NaiveDateTime, options: &IntlOptions) -> String {
        let options = self.expand_styles(options);
        let date_part = self.date_part(date, &options);
        let time_part = self.time_part(date, &options);
        match (date_part, time_part) {
            (Some(d), Some(t)) => format!("{d}{}{t}", self.locale.date_time_separator),
            (Some(d), None) => d,
            (None, Some(t)) => t,
            (None, None) => String::new(),
        }
    }

    /// Replace `dateStyle` / `timeStyle` (and an empty bag) with explicit fields.
    fn expand_styles(&self, options: &IntlOptions) -> IntlOptions {
        let mut o = *options;
        if o.is_empty() {
            o.year = Some(NumericWidth::Numeric);
            o.month = Some(MonthWidth::Numeric);
            o.day = Some(NumericWidth::Numeric);
        }
        if let Some(style) = o.date_style {
            o.day = Some(NumericWidth::Numeric);
            o.year = Some(NumericWidth::Numeric);
            match style {
                DateStyle::Full => {
                    o.weekday = Some(TextWidth::Long);
                    o.month = Some(MonthWidth::Long);
                }
                DateStyle::Long => o.month = Some(MonthWidth::Long),
                DateStyle::Medium => o.month = Some(MonthWidth::Short),
                DateStyle::Short => {
                    o.month = Some(MonthWidth::Numeric);
                    if self.locale.short_date_two_digit_year {
                        o.year = Some(NumericWidth::TwoDigit);
                    }
                }
            }
        }
        if let Some(style) = o.time_style {
            o.hour = Some(NumericWidth::Numeric);
            o.minute = Some(NumericWidth::TwoDigit);
            if style == TimeStyle::Medium {
                o.second = Some(NumericWidth::TwoDigit);
            }
        }
        o
    }

    // ── Date fields ─────────────────────────────────────────────────────

    fn date_part(&self, date: NaiveDateTime, o: &IntlOptions) -> Option<String> {
        let body = match o.month {
            Some(MonthWidth::Short | MonthWidth::Long) => Some(self.text_date(date, o)),
            _ => self.numeric_date(date, o),
        };
        let weekday = o.weekday.map(|width| self.weekday(date, width));
        match (weekday, body) {
            (Some(w), Some(b)) => Some(format!("{w}{}{b}", self.locale.weekday_separator)),
            (w, b) => w.or(b),
        }
    }

    /// `Nov 21, 2023` / `21 nov. 2023` style dates.
    fn text_date(&self, date: NaiveDateTime, o: &IntlOptions) -> String {
        let month0 = date.month0() as usize;
        let month = match o.month {
            Some(MonthWidth::Long) => &self.locale.months_long[month0],
            _ => &self.locale.months_short[month0],
        };
        let day = o.day.map(|width| self.day(date, width, o.with_ordinal));
        let year = o.year.map(|width| format_year(date, width));

        match self.locale.text_order {
            TextOrder::MonthFirst => {
                let mut out = month.clone();
                if let Some(day) = &day {
                    out.push(' ');
                    out.push_str(day);
                }
                if let Some(year) = year {
                    out.push_str(if day.is_some() { ", " } else { " " });
                    out.push_str(&year);
                }
                out
            }
            TextOrder::DayFirst => [day, Some(month.clone()), year]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// `11/21/2023` / `21/11/2023` style dates.
    fn numeric_date(&self, date: NaiveDateTime, o: &IntlOptions) -> Option<String> {
        let pad = self.locale.pad_numeric_date;
        let month = o.month.map(|width| {
            let two_digit = pad || width == MonthWidth::TwoDigit;
            pad_number(date.month(), two_digit)
        });
        let day = o.day.map(|width| {
            let width = if pad && o.month == Some(MonthWidth::Numeric) {
                NumericWidth::TwoDigit
            } else {
                width
            };
            self.day(date, width, o.with_ordinal)
        });
        let year = o.year.map(|width| format_year(date, width));

        let ordered = match self.locale.numeric_order {
            NumericOrder::MonthDayYear => [month, day, year],
            NumericOrder::DayMonthYear => [day, month, year],
            NumericOrder::YearMonthDay => [year, month, day],
        };
        let fields: Vec<String> = ordered.into_iter().flatten().collect();
        (!fields.is_empty()).then(|| fields.join(&self.locale.date_separator))
    }

    fn day(&self, date: NaiveDateTime, width: NumericWidth, with_ordinal: bool) -> String {
        let mut out = pad_number(date.day(), width == NumericWidth::TwoDigit);
        if with_ordinal {
            let category = self.locale.ordinal_rule.category(date.day());
            out.push_str(self.suffixes.suffix(category));
        }
        out
    }

    fn weekday(&self, date: NaiveDateTime, width: TextWidth) -> String {
        let index = date.weekday().num_days_from_sunday() as usize;
        let names = match width {
            TextWidth::Long => &self.locale.weekdays_long,
            TextWidth::Short => &self.locale.weekdays_short,
            TextWidth::Narrow => &self.locale.weekdays_narrow,
        };
        names[index].clone()
    }

    // ── Time fields ─────────────────────────────────────────────────────

    fn time_part(&self, date: NaiveDateTime, o: &IntlOptions) -> Option<String> {
        let time_fields = [o.hour, o.minute, o.second].iter().flatten().count();
        if time_fields == 0 && o.fractional_second_digits.is_none() {
            return None;
        }
        let combined = time_fields > 1;

        let cycle = match o.hour12 {
            Some(true) => HourCycle::H12,
            Some(false) => HourCycle::H23,
            None => self.locale.hour_cycle,
        };

        let mut fields = Vec::with_capacity(3);
        if let Some(width) = o.hour {
            fields.push(match cycle {
                HourCycle::H12 => {
                    let hour = match date.hour() % 12 {
                        0 => 12,
                        h => h,
                    };
                    pad_number(hour, width == NumericWidth::TwoDigit)
                }
                HourCycle::H23 => pad_number(date.hour(), true),
            });
        }
        if let Some(width) = o.minute {
            fields.push(pad_number(date.minute(), combined || width == NumericWidth::TwoDigit));
        }
        if let Some(width) = o.second {
            fields.push(pad_number(date.second(), combined || width == NumericWidth::TwoDigit));
        }

        let mut out = fields.join(":");
        if let Some(digits) = o.fractional_second_digits {
            if !out.is_empty() {
                out.push_str(&self.locale.decimal_separator);
            }
            out.push_str(&fraction(date.nanosecond(), digits));
        }
        if cycle == HourCycle::H12 && o.hour.is_some() {
            let period = if date.hour() < 12 {
                &self.locale.am
            } else {
                &self.locale.pm
            };
            out.push(' ');
            out.push_str(period);
        }
        Some(out)
    }
}

fn pad_number(n: u32, two_digit: bool) -> String {
    if two_digit {
        format!("{n:02}")
    } else {
        n.to_string()
    }
}

fn format_year(date: NaiveDateTime, width: NumericWidth) -> String {
    match width {
        NumericWidth::Numeric => date.year().to_string(),
        NumericWidth::TwoDigit => format!("{:02}", date.year().rem_euclid(100)),
    }
}

/// The first `digits` digits of the fractional second (truncated, 1-9).
fn fraction(nanosecond: u32, digits: u8) -> String {
    let digits = usize::from(digits.clamp(1, 9));
    let nanos = format!("{:09}", nanosecond % 1_000_000_000);
    nanos[..digits].to_string()
}

// ── format_intl ─────────────────────────────────────────────────────────────

/// Render `date` with a pattern string, token sequence or options bag.
///
/// Invalid dates and unparseable patterns render as an empty string; use
/// [`try_format_intl`] to see the error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::{format_intl, FormatDateOptions, Settings};
///
/// let date = NaiveDate::from_ymd_opt(2023, 3, 7).unwrap();
/// let options = FormatDateOptions::default();
/// let text = format_intl(&Settings::default(), date, "MMM do, yyyy", &options);
/// assert_eq!(text, "Mar 7th, 2023");
/// ```
pub fn format_intl(
    settings: &Settings,
    date: impl Into<DateInput>,
    format: impl Into<DateFormat>,
    options: &FormatDateOptions,
) -> String {
    try_format_intl(settings, date, format, options).unwrap_or_else(|e| {
        debug!("format_intl rendered empty output: {}", e);
        String::new()
    })
}

/// Fallible form of [`format_intl`].
///
/// # Errors
///
/// Returns [`DateError::InvalidDatetime`] if the date is missing or cannot be
/// parsed, or [`DateError::InvalidPattern`] if a pattern string is invalid.
pub fn try_format_intl(
    settings: &Settings,
    date: impl Into<DateInput>,
    format: impl Into<DateFormat>,
    options: &FormatDateOptions,
) -> Result<String> {
    let input = date.into();
    let local = input
        .resolve(&settings.timezone)
        .ok_or_else(|| DateError::InvalidDatetime(input.to_string()))?;
    let intl_options = format.into().to_options()?;
    Ok(IntlFormatter::for_call(settings, options).format(local, &intl_options))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::DateToken as T;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_milli_opt(h, min, s, ms)
            .unwrap()
    }

    fn en() -> IntlFormatter<'static> {
        IntlFormatter::new(LocaleData::fallback(), &crate::locale::ENGLISH_SUFFIXES)
    }

    fn render(f: &IntlFormatter<'_>, date: NaiveDateTime, format: impl Into<DateFormat>) -> String {
        f.format(date, &format.into().to_options().unwrap())
    }

    // ── Dates ───────────────────────────────────────────────────────────

    #[test]
    fn test_numeric_dates_en() {
        let f = en();
        assert_eq!(render(&f, dt(2023, 3, 7, 0, 0, 0, 0), "MM/dd/yyyy"), "03/07/2023");
        assert_eq!(render(&f, dt(2023, 3, 7, 0, 0, 0, 0), "M/d/yyyy"), "3/7/2023");
        assert_eq!(render(&f, dt(2023, 3, 7, 0, 0, 0, 0), "MM/d/yyyy"), "03/7/2023");
        assert_eq!(render(&f, dt(2023, 11, 7, 0, 0, 0, 0), "M/dd/yyyy"), "11/07/2023");
        assert_eq!(render(&f, dt(2023, 11, 21, 0, 0, 0, 0), "M/d"), "11/21");
    }

    #[test]
    fn test_text_dates_en() {
        let f = en();
        let date = dt(2023, 11, 21, 0, 0, 0, 0);
        assert_eq!(render(&f, date, "MMM d, yyyy"), "Nov 21, 2023");
        assert_eq!(render(&f, date, "MMM"), "Nov");
        assert_eq!(render(&f, date, "MMMM"), "November");
        assert_eq!(render(&f, date, "MMM yy"), "Nov 23");
        assert_eq!(render(&f, date, "MMMM yyyy"), "November 2023");
        assert_eq!(render(&f, date, "MMM d"), "Nov 21");
        assert_eq!(render(&f, date, "yy"), "23");
        assert_eq!(render(&f, date, "yyyy"), "2023");
    }

    #[test]
    fn test_weekday_prefix() {
        let f = en();
        let date = dt(2023, 11, 21, 0, 0, 0, 0);
        assert_eq!(render(&f, date, "EEEE"), "Tuesday");
        assert_eq!(render(&f, date, "EEE M/d"), "Tue, 11/21");
    }

    #[test]
    fn test_ordinal_suffixes_en() {
        let f = en();
        assert_eq!(render(&f, dt(2023, 11, 7, 0, 0, 0, 0), "MMM do, yyyy"), "Nov 7th, 2023");
        assert_eq!(render(&f, dt(2023, 11, 1, 0, 0, 0, 0), "MMM do"), "Nov 1st");
        assert_eq!(render(&f, dt(2023, 11, 22, 0, 0, 0, 0), "MMM do"), "Nov 22nd");
        assert_eq!(render(&f, dt(2023, 11, 23, 0, 0, 0, 0), "MMM do"), "Nov 23rd");
        assert_eq!(render(&f, dt(2023, 11, 11, 0, 0, 0, 0), "MMM do"), "Nov 11th");
    }

    #[test]
    fn test_date_styles_en() {
        let f = en();
        let date = dt(2023, 11, 21, 0, 0, 0, 0);
        let style = |s| IntlOptions::date_style(s);
        assert_eq!(render(&f, date, style(DateStyle::Full)), "Tuesday, November 21, 2023");
        assert_eq!(render(&f, date, style(DateStyle::Long)), "November 21, 2023");
        assert_eq!(render(&f, date, style(DateStyle::Medium)), "Nov 21, 2023");
        assert_eq!(render(&f, date, style(DateStyle::Short)), "11/21/23");
        assert_eq!(
            render(&f, date, style(DateStyle::Medium).with_ordinal()),
            "Nov 21st, 2023"
        );
    }

    #[test]
    fn test_empty_options_render_numeric_date() {
        assert_eq!(render(&en(), dt(2023, 3, 7, 0, 0, 0, 0), IntlOptions::default()), "3/7/2023");
    }

    // ── Times ───────────────────────────────────────────────────────────

    #[test]
    fn test_times_en_default_12_hour() {
        let f = en();
        let pm = dt(2023, 3, 7, 14, 2, 3, 4);
        let am = dt(2023, 3, 7, 1, 2, 3, 4);
        assert_eq!(render(&f, pm, [T::HourNumeric, T::MinuteNumeric]), "2:02 PM");
        assert_eq!(render(&f, am, [T::HourNumeric, T::MinuteNumeric]), "1:02 AM");
        assert_eq!(
            render(&f, am, [T::HourNumeric, T::MinuteNumeric, T::SecondNumeric, T::Millisecond3]),
            "1:02:03.004 AM"
        );
    }

    #[test]
    fn test_times_forced_24_hour() {
        let f = en();
        let am = dt(2023, 3, 7, 1, 2, 3, 4);
        assert_eq!(
            render(&f, am, [T::Hour2Digit, T::Minute2Digit, T::HourWithoutAmPm]),
            "01:02"
        );
        assert_eq!(render(&f, am, "HH:mm"), "01:02");
    }

    #[test]
    fn test_noon_and_midnight_12_hour() {
        let f = en();
        assert_eq!(render(&f, dt(2023, 3, 7, 0, 5, 0, 0), "h:mm"), "12:05 AM");
        assert_eq!(render(&f, dt(2023, 3, 7, 12, 5, 0, 0), "h:mm"), "12:05 PM");
    }

    #[test]
    fn test_time_styles_en() {
        let f = en();
        let pm = dt(2023, 3, 7, 14, 2, 3, 4);
        assert_eq!(render(&f, pm, IntlOptions::time_style(TimeStyle::Short)), "2:02 PM");
        assert_eq!(render(&f, pm, IntlOptions::time_style(TimeStyle::Medium)), "2:02:03 PM");
    }

    #[test]
    fn test_date_and_time_joined() {
        let f = en();
        let pm = dt(2023, 3, 7, 14, 2, 3, 4);
        assert_eq!(render(&f, pm, "M/d/yyyy h:mm"), "3/7/2023, 2:02 PM");
    }

    #[test]
    fn test_fraction_truncates() {
        assert_eq!(fraction(4_567_000, 3), "004");
        assert_eq!(fraction(999_999_999, 3), "999");
        assert_eq!(fraction(123_456_789, 1), "1");
    }

    // ── French ──────────────────────────────────────────────────────────

    #[test]
    fn test_french_rendering() {
        let fr_suffixes = OrdinalSuffixes::new("er", "", "", "");
        let f = IntlFormatter::new(LocaleData::builtin("fr").unwrap(), &fr_suffixes);
        let date = dt(2023, 11, 21, 0, 0, 0, 0);
        assert_eq!(render(&f, date, "M/d/yyyy"), "21/11/2023");
        assert_eq!(render(&f, date, "MMM d, yyyy"), "21 nov. 2023");
        assert_eq!(render(&f, dt(2023, 11, 1, 0, 0, 0, 0), "do MMMM"), "1er novembre");
        assert_eq!(
            render(&f, date, IntlOptions::date_style(DateStyle::Full)),
            "mardi 21 novembre 2023"
        );
        assert_eq!(render(&f, dt(2023, 3, 7, 14, 2, 3, 4), "h:mm:ss.SSS"), "14:02:03,004");
    }

    // ── format_intl ─────────────────────────────────────────────────────

    #[test]
    fn test_format_intl_invalid_inputs_render_empty() {
        let settings = Settings::default();
        let options = FormatDateOptions::default();
        assert_eq!(format_intl(&settings, "not a date", "yyyy", &options), "");
        assert_eq!(format_intl(&settings, None::<&str>, "yyyy", &options), "");
        assert_eq!(format_intl(&settings, "2023-11-21", "Q", &options), "");
    }

    #[test]
    fn test_try_format_intl_errors() {
        let settings = Settings::default();
        let options = FormatDateOptions::default();
        let err = try_format_intl(&settings, "2023-11-21", "Q", &options)
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid pattern"), "got: {err}");
        let err = try_format_intl(&settings, "garbage", "yyyy", &options)
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid datetime"), "got: {err}");
    }
}
