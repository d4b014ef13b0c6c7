//! Locale data consumed by the Intl-style renderer.
//!
//! A [`LocaleData`] carries only what the renderer needs: month and weekday
//! names, field ordering and padding conventions, the default hour cycle,
//! and the ordinal plural rule. `en` and `fr` are built in; further locales
//! can be registered through [`crate::Settings`] (they deserialize from JSON).

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Order of numeric day, month and year fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// Layout used when the month is spelled out.
///
/// `MonthFirst` renders `Nov 21, 2023`; `DayFirst` renders `21 nov. 2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextOrder {
    MonthFirst,
    DayFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourCycle {
    /// 1-12 with a day period (AM/PM).
    H12,
    /// 00-23.
    H23,
}

/// CLDR ordinal plural categories used for suffix selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    One,
    Two,
    Few,
    Other,
}

/// How a locale maps a number to its ordinal plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrdinalRule {
    /// 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st ...
    English,
    /// Only 1 is `one` (1er, 2e ...).
    OneOnly,
    /// Every number is `other`.
    OtherOnly,
}

impl OrdinalRule {
    pub fn category(self, n: u32) -> PluralCategory {
        match self {
            OrdinalRule::English => match (n % 10, n % 100) {
                (1, r) if r != 11 => PluralCategory::One,
                (2, r) if r != 12 => PluralCategory::Two,
                (3, r) if r != 13 => PluralCategory::Few,
                _ => PluralCategory::Other,
            },
            OrdinalRule::OneOnly if n == 1 => PluralCategory::One,
            OrdinalRule::OneOnly | OrdinalRule::OtherOnly => PluralCategory::Other,
        }
    }
}

/// Suffixes appended to an ordinal day, keyed by plural category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalSuffixes {
    pub one: String,
    pub two: String,
    pub few: String,
    pub other: String,
}

impl OrdinalSuffixes {
    pub fn new(one: &str, two: &str, few: &str, other: &str) -> Self {
        Self {
            one: one.to_string(),
            two: two.to_string(),
            few: few.to_string(),
            other: other.to_string(),
        }
    }

    pub fn english() -> Self {
        Self::new("st", "nd", "rd", "th")
    }

    pub fn suffix(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::One => &self.one,
            PluralCategory::Two => &self.two,
            PluralCategory::Few => &self.few,
            PluralCategory::Other => &self.other,
        }
    }
}

impl Default for OrdinalSuffixes {
    fn default() -> Self {
        Self::english()
    }
}

pub(crate) static ENGLISH_SUFFIXES: LazyLock<OrdinalSuffixes> =
    LazyLock::new(OrdinalSuffixes::english);

/// Locale conventions for date and time rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleData {
    pub months_long: [String; 12],
    pub months_short: [String; 12],
    /// Sunday first.
    pub weekdays_long: [String; 7],
    pub weekdays_short: [String; 7],
    pub weekdays_narrow: [String; 7],

    pub numeric_order: NumericOrder,
    pub date_separator: String,
    /// Numeric months are always 2-digit, and days too when the month was
    /// requested numeric (`dd/MM/y`).
    pub pad_numeric_date: bool,
    pub text_order: TextOrder,
    /// Joins a weekday to the rest of the date.
    pub weekday_separator: String,
    /// Joins the date part to the time part.
    pub date_time_separator: String,
    /// Whether `dateStyle: short` uses a 2-digit year.
    pub short_date_two_digit_year: bool,

    pub hour_cycle: HourCycle,
    pub am: String,
    pub pm: String,
    pub decimal_separator: String,

    pub ordinal_rule: OrdinalRule,
}

fn strings<const N: usize>(items: [&str; N]) -> [String; N] {
    items.map(String::from)
}

static EN: LazyLock<LocaleData> = LazyLock::new(LocaleData::en);
static FR: LazyLock<LocaleData> = LazyLock::new(LocaleData::fr);

impl LocaleData {
    /// English (United States).
    pub fn en() -> Self {
        Self {
            months_long: strings([
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]),
            months_short: strings([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            weekdays_long: strings([
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ]),
            weekdays_short: strings(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            weekdays_narrow: strings(["S", "M", "T", "W", "T", "F", "S"]),
            numeric_order: NumericOrder::MonthDayYear,
            date_separator: "/".to_string(),
            pad_numeric_date: false,
            text_order: TextOrder::MonthFirst,
            weekday_separator: ", ".to_string(),
            date_time_separator: ", ".to_string(),
            short_date_two_digit_year: true,
            hour_cycle: HourCycle::H12,
            am: "AM".to_string(),
            pm: "PM".to_string(),
            decimal_separator: ".".to_string(),
            ordinal_rule: OrdinalRule::English,
        }
    }

    /// French.
    pub fn fr() -> Self {
        Self {
            months_long: strings([
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ]),
            months_short: strings([
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
                "nov.", "déc.",
            ]),
            weekdays_long: strings([
                "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
            ]),
            weekdays_short: strings(["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."]),
            weekdays_narrow: strings(["D", "L", "M", "M", "J", "V", "S"]),
            numeric_order: NumericOrder::DayMonthYear,
            date_separator: "/".to_string(),
            pad_numeric_date: true,
            text_order: TextOrder::DayFirst,
            weekday_separator: " ".to_string(),
            date_time_separator: " ".to_string(),
            short_date_two_digit_year: false,
            hour_cycle: HourCycle::H23,
            am: "AM".to_string(),
            pm: "PM".to_string(),
            decimal_separator: ",".to_string(),
            ordinal_rule: OrdinalRule::OneOnly,
        }
    }

    /// Built-in data for `tag`, matched on its language subtag (`fr-CA` → `fr`).
    pub fn builtin(tag: &str) -> Option<&'static LocaleData> {
        match language_of(tag).to_ascii_lowercase().as_str() {
            "en" => Some(&*EN),
            "fr" => Some(&*FR),
            _ => None,
        }
    }

    /// Built-in English data, the last-resort fallback.
    pub fn fallback() -> &'static LocaleData {
        &*EN
    }
}

/// The language subtag of a BCP 47 tag (`en-US` → `en`, `fr_FR` → `fr`).
pub fn language_of(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

// ── Tests ───────────────────────────────────────────────────────────────────
