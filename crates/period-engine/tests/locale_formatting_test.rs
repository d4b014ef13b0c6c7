//! Locale tables for format_date and format_intl, English against French.

use chrono::{NaiveDate, NaiveDateTime};
use period_engine::token::{DateStyle, DateToken as T};
use period_engine::{
    format_date, format_intl, DayOfWeek, FormatDateOptions, IntlOptions, OrdinalSuffixes,
    PeriodType, Settings, Variant,
};

/// UTC-4 all year.
fn settings() -> Settings {
    Settings::default().with_timezone("Etc/GMT+4").unwrap()
}

fn fr_suffixes() -> OrdinalSuffixes {
    OrdinalSuffixes::new("er", "", "", "")
}

fn options(locale: &str, variant: Variant) -> FormatDateOptions {
    FormatDateOptions::variant(variant)
        .with_locale(locale)
        .with_ordinal_suffixes("fr", fr_suffixes())
}

/// Render `date` for `period` in en and fr.
fn both(date: impl Into<String>, period: PeriodType, variant: Variant) -> (String, String) {
    let date = date.into();
    let s = settings();
    (
        format_date(&s, date.as_str(), Some(period), &options("en", variant)),
        format_date(&s, date.as_str(), Some(period), &options("fr", variant)),
    )
}

fn intl_both(
    date: NaiveDateTime,
    format: impl Into<period_engine::DateFormat> + Clone,
) -> (String, String) {
    let s = settings();
    (
        format_intl(&s, date, format.clone(), &options("en", Variant::Default)),
        format_intl(&s, date, format, &options("fr", Variant::Default)),
    )
}

fn pair(en: &str, fr: &str) -> (String, String) {
    (en.to_string(), fr.to_string())
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_milli_opt(h, min, s, ms)
        .unwrap()
}

const NOV_21: &str = "2023-11-21T00:00:00";
const MAR_7_PM: &str = "2023-03-07T14:02:03.004";

// ── format_date ─────────────────────────────────────────────────────────────

#[test]
fn test_missing_and_invalid_dates_render_empty() {
    let s = settings();
    let opts = FormatDateOptions::default();
    assert_eq!(format_date(&s, None::<&str>, Some(PeriodType::Day), &opts), "");
    assert_eq!(format_date(&s, "invalid date", Some(PeriodType::Day), &opts), "");
    assert_eq!(format_date(&s, "invalid date", None, &opts), "");
}

#[test]
fn test_no_period_type_is_iso_with_offset() {
    let text = format_date(&settings(), NOV_21, None, &FormatDateOptions::default());
    assert_eq!(text, "2023-11-21T00:00:00-04:00");
}

#[test]
fn test_day() {
    assert_eq!(both(NOV_21, PeriodType::Day, Variant::Short), pair("11/21", "21/11"));
    assert_eq!(both(NOV_21, PeriodType::Day, Variant::Default), pair("Nov 21", "21 nov."));
    assert_eq!(
        both(NOV_21, PeriodType::Day, Variant::Long),
        pair("Nov 21, 2023", "21 nov. 2023")
    );
}

#[test]
fn test_day_time() {
    assert_eq!(
        both(MAR_7_PM, PeriodType::DayTime, Variant::Short),
        pair("3/7/2023, 2:02 PM", "07/03/2023 14:02")
    );
    assert_eq!(
        both(MAR_7_PM, PeriodType::DayTime, Variant::Default),
        pair("3/7/2023, 02:02 PM", "07/03/2023 14:02")
    );
    assert_eq!(
        both(MAR_7_PM, PeriodType::DayTime, Variant::Long),
        pair("3/7/2023, 02:02:03 PM", "07/03/2023 14:02:03")
    );
}

#[test]
fn test_time_only() {
    assert_eq!(
        both(MAR_7_PM, PeriodType::TimeOnly, Variant::Short),
        pair("2:02 PM", "14:02")
    );
    assert_eq!(
        both(MAR_7_PM, PeriodType::TimeOnly, Variant::Default),
        pair("02:02:03 PM", "14:02:03")
    );
    assert_eq!(
        both(MAR_7_PM, PeriodType::TimeOnly, Variant::Long),
        pair("02:02:03.004 PM", "14:02:03,004")
    );
}

#[test]
fn test_week_with_default_week_start() {
    assert_eq!(
        both(NOV_21, PeriodType::Week, Variant::Short),
        pair("11/19 - 11/25", "19/11 - 25/11")
    );
    assert_eq!(
        both(NOV_21, PeriodType::Week, Variant::Default),
        pair("11/19/2023 - 11/25/2023", "19/11/2023 - 25/11/2023")
    );
    assert_eq!(
        both(NOV_21, PeriodType::Week, Variant::Long),
        pair("11/19/2023 - 11/25/2023", "19/11/2023 - 25/11/2023")
    );
}

#[test]
fn test_week_with_monday_from_settings() {
    let s = settings().with_week_start(DayOfWeek::Monday);
    let opts = options("en", Variant::Short);
    assert_eq!(format_date(&s, NOV_21, Some(PeriodType::Week), &opts), "11/20 - 11/26");
}

#[test]
fn test_fixed_week_periods() {
    assert_eq!(
        both(NOV_21, PeriodType::WeekSun, Variant::Short),
        pair("11/19 - 11/25", "19/11 - 25/11")
    );
    assert_eq!(
        both(NOV_21, PeriodType::WeekSun, Variant::Long),
        pair("11/19/2023 - 11/25/2023", "19/11/2023 - 25/11/2023")
    );
    assert_eq!(
        both(NOV_21, PeriodType::WeekMon, Variant::Short),
        pair("11/20 - 11/26", "20/11 - 26/11")
    );
    assert_eq!(
        both(NOV_21, PeriodType::WeekMon, Variant::Long),
        pair("11/20/2023 - 11/26/2023", "20/11/2023 - 26/11/2023")
    );
}

#[test]
fn test_biweek_periods() {
    assert_eq!(
        both(NOV_21, PeriodType::BiWeek1Sun, Variant::Short),
        pair("11/12 - 11/25", "12/11 - 25/11")
    );
    assert_eq!(
        both(NOV_21, PeriodType::BiWeek1Sun, Variant::Long),
        pair("11/12/2023 - 11/25/2023", "12/11/2023 - 25/11/2023")
    );
    // The second cycle is offset by one week.
    assert_eq!(
        both(NOV_21, PeriodType::BiWeek2Sun, Variant::Short),
        pair("11/19 - 12/2", "19/11 - 02/12")
    );
}

#[test]
fn test_month() {
    assert_eq!(both(NOV_21, PeriodType::Month, Variant::Short), pair("Nov", "nov."));
    assert_eq!(both(NOV_21, PeriodType::Month, Variant::Default), pair("November", "novembre"));
    assert_eq!(both(NOV_21, PeriodType::Month, Variant::Long), pair("November", "novembre"));
}

#[test]
fn test_month_year() {
    assert_eq!(both(NOV_21, PeriodType::MonthYear, Variant::Short), pair("Nov 23", "nov. 23"));
    assert_eq!(
        both(NOV_21, PeriodType::MonthYear, Variant::Default),
        pair("November 2023", "novembre 2023")
    );
}

#[test]
fn test_quarter() {
    assert_eq!(
        both(NOV_21, PeriodType::Quarter, Variant::Short),
        pair("Oct - Dec 23", "oct. - déc. 23")
    );
    assert_eq!(
        both(NOV_21, PeriodType::Quarter, Variant::Default),
        pair("October - December 2023", "octobre - décembre 2023")
    );
    assert_eq!(
        both(NOV_21, PeriodType::Quarter, Variant::Long),
        pair("October - December 2023", "octobre - décembre 2023")
    );
}

#[test]
fn test_calendar_and_fiscal_year() {
    assert_eq!(both(NOV_21, PeriodType::CalendarYear, Variant::Short), pair("23", "23"));
    assert_eq!(both(NOV_21, PeriodType::CalendarYear, Variant::Long), pair("2023", "2023"));
    assert_eq!(both(NOV_21, PeriodType::FiscalYearOctober, Variant::Short), pair("24", "24"));
    assert_eq!(
        both(NOV_21, PeriodType::FiscalYearOctober, Variant::Default),
        pair("2024", "2024")
    );
}

#[test]
fn test_offset_input_lands_in_settings_timezone() {
    // 02:00 UTC on the 19th is still the 18th (a Saturday) at UTC-4.
    let (en, _) = both("2023-11-19T02:00:00Z", PeriodType::Day, Variant::Long);
    assert_eq!(en, "Nov 18, 2023");
}

// ── format_intl ─────────────────────────────────────────────────────────────

#[test]
fn test_intl_numeric_patterns() {
    let mar_7 = at(2023, 3, 7, 0, 0, 0, 0);
    let nov_7 = at(2023, 11, 7, 0, 0, 0, 0);
    let nov_21 = at(2023, 11, 21, 0, 0, 0, 0);

    assert_eq!(intl_both(mar_7, "MM/dd/yyyy"), pair("03/07/2023", "07/03/2023"));
    assert_eq!(intl_both(nov_21, "M/d/yyyy"), pair("11/21/2023", "21/11/2023"));
    assert_eq!(intl_both(nov_7, "M/d/yyyy"), pair("11/7/2023", "07/11/2023"));
    assert_eq!(intl_both(nov_7, "M/dd/yyyy"), pair("11/07/2023", "07/11/2023"));
    assert_eq!(intl_both(mar_7, "M/d/yyyy"), pair("3/7/2023", "07/03/2023"));
    assert_eq!(intl_both(mar_7, "MM/d/yyyy"), pair("03/7/2023", "7/03/2023"));
}

#[test]
fn test_intl_ordinal_pattern() {
    assert_eq!(
        intl_both(at(2023, 11, 7, 0, 0, 0, 0), "MMM do, yyyy"),
        pair("Nov 7th, 2023", "7 nov. 2023")
    );
    assert_eq!(
        intl_both(at(2023, 3, 7, 0, 0, 0, 0), "MMM do, yyyy"),
        pair("Mar 7th, 2023", "7 mars 2023")
    );
    assert_eq!(
        intl_both(at(2023, 11, 1, 0, 0, 0, 0), "MMM do, yyyy"),
        pair("Nov 1st, 2023", "1er nov. 2023")
    );
}

#[test]
fn test_intl_date_styles() {
    let nov_21 = at(2023, 11, 21, 0, 0, 0, 0);
    let style = IntlOptions::date_style;

    assert_eq!(
        intl_both(nov_21, style(DateStyle::Full)),
        pair("Tuesday, November 21, 2023", "mardi 21 novembre 2023")
    );
    assert_eq!(
        intl_both(nov_21, style(DateStyle::Long)),
        pair("November 21, 2023", "21 novembre 2023")
    );
    assert_eq!(
        intl_both(nov_21, style(DateStyle::Medium)),
        pair("Nov 21, 2023", "21 nov. 2023")
    );
    assert_eq!(
        intl_both(nov_21, style(DateStyle::Medium).with_ordinal()),
        pair("Nov 21st, 2023", "21 nov. 2023")
    );
    assert_eq!(
        intl_both(nov_21, style(DateStyle::Short)),
        pair("11/21/23", "21/11/2023")
    );
    assert_eq!(
        intl_both(at(2023, 3, 7, 0, 0, 0, 0), style(DateStyle::Short)),
        pair("3/7/23", "07/03/2023")
    );
}

#[test]
fn test_intl_time_tokens() {
    let pm = at(2023, 3, 7, 14, 2, 3, 4);
    let am = at(2023, 3, 7, 1, 2, 3, 4);

    assert_eq!(intl_both(pm, [T::HourNumeric, T::MinuteNumeric]), pair("2:02 PM", "14:02"));
    assert_eq!(intl_both(am, [T::HourNumeric, T::MinuteNumeric]), pair("1:02 AM", "01:02"));
    assert_eq!(
        intl_both(am, [T::HourNumeric, T::MinuteNumeric, T::HourWithAmPm]),
        pair("1:02 AM", "1:02 AM")
    );
    assert_eq!(
        intl_both(am, [T::Hour2Digit, T::Minute2Digit, T::HourWithoutAmPm]),
        pair("01:02", "01:02")
    );
    assert_eq!(
        intl_both(am, [T::HourNumeric, T::MinuteNumeric, T::SecondNumeric]),
        pair("1:02:03 AM", "01:02:03")
    );
    assert_eq!(
        intl_both(
            am,
            [T::HourNumeric, T::MinuteNumeric, T::SecondNumeric, T::Millisecond3]
        ),
        pair("1:02:03.004 AM", "01:02:03,004")
    );
}

#[test]
fn test_intl_invalid_input_renders_empty() {
    let s = settings();
    let opts = FormatDateOptions::default();
    assert_eq!(format_intl(&s, None::<&str>, "MM/dd/yyyy", &opts), "");
    assert_eq!(format_intl(&s, "invalid date", "MM/dd/yyyy", &opts), "");
}

#[test]
fn test_unknown_locale_falls_back_to_english() {
    let s = settings();
    let opts = FormatDateOptions::default().with_locale("xx-YY");
    assert_eq!(format_intl(&s, at(2023, 11, 21, 0, 0, 0, 0), "MMM d, yyyy", &opts), "Nov 21, 2023");
}

#[test]
fn test_settings_ordinal_suffixes_apply_without_options() {
    let s = Settings::from_json(
        r#"{"locale": "fr", "ordinalSuffixes": {"fr": {"one": "er", "two": "", "few": "", "other": ""}}}"#,
    )
    .unwrap();
    let options = FormatDateOptions::default();
    let text = format_intl(&s, at(2023, 11, 1, 0, 0, 0, 0), "do MMMM", &options);
    assert_eq!(text, "1er novembre");
}
