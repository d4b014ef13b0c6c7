//! Date tokens and their assembly into Intl-style options.
//!
//! A format request arrives as a pattern string (`"MMM do, yyyy"`), an
//! ordered [`DateToken`] sequence, or a ready-made [`IntlOptions`] bag. All
//! three normalise to [`IntlOptions`] before rendering; literal separators
//! in a pattern are dropped because the locale decides order and punctuation.

use serde::{Deserialize, Serialize};

use crate::error::{DateError, Result};

/// An atomic date/time format unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateToken {
    YearNumeric,
    Year2Digit,

    MonthLong,
    MonthShort,
    MonthNumeric,
    Month2Digit,

    DayOfMonthNumeric,
    DayOfMonth2Digit,
    DayOfMonthWithOrdinal,

    DayOfWeekLong,
    DayOfWeekShort,
    DayOfWeekNarrow,

    HourNumeric,
    Hour2Digit,
    /// Forces a 12-hour clock with AM/PM.
    HourWithAmPm,
    /// Forces a 24-hour clock.
    HourWithoutAmPm,

    MinuteNumeric,
    Minute2Digit,

    SecondNumeric,
    Second2Digit,

    Millisecond3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericWidth {
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthWidth {
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWidth {
    Long,
    Short,
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateStyle {
    Full,
    Long,
    Medium,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeStyle {
    Medium,
    Short,
}

/// Intl-style field options, plus the `with_ordinal` extension.
///
/// Field names serialize in camelCase so a JSON bag such as
/// `{"dateStyle": "medium", "withOrdinal": true}` deserializes directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntlOptions {
    pub weekday: Option<TextWidth>,
    pub year: Option<NumericWidth>,
    pub month: Option<MonthWidth>,
    pub day: Option<NumericWidth>,
    pub hour: Option<NumericWidth>,
    pub minute: Option<NumericWidth>,
    pub second: Option<NumericWidth>,
    pub fractional_second_digits: Option<u8>,
    pub hour12: Option<bool>,
    pub date_style: Option<DateStyle>,
    pub time_style: Option<TimeStyle>,
    pub with_ordinal: bool,
}

impl IntlOptions {
    pub fn date_style(style: DateStyle) -> Self {
        Self {
            date_style: Some(style),
            ..Self::default()
        }
    }

    pub fn time_style(style: TimeStyle) -> Self {
        Self {
            time_style: Some(style),
            ..Self::default()
        }
    }

    pub fn with_ordinal(mut self) -> Self {
        self.with_ordinal = true;
        self
    }

    /// Fold one token into the options.
    ///
    /// `HourWithAmPm` / `HourWithoutAmPm` set `hour12` and so override the
    /// locale's default hour cycle regardless of their position.
    pub fn apply(&mut self, token: DateToken) {
        use DateToken as T;
        match token {
            T::YearNumeric => self.year = Some(NumericWidth::Numeric),
            T::Year2Digit => self.year = Some(NumericWidth::TwoDigit),
            T::MonthLong => self.month = Some(MonthWidth::Long),
            T::MonthShort => self.month = Some(MonthWidth::Short),
            T::MonthNumeric => self.month = Some(MonthWidth::Numeric),
            T::Month2Digit => self.month = Some(MonthWidth::TwoDigit),
            T::DayOfMonthNumeric => self.day = Some(NumericWidth::Numeric),
            T::DayOfMonth2Digit => self.day = Some(NumericWidth::TwoDigit),
            T::DayOfMonthWithOrdinal => {
                self.day = Some(NumericWidth::Numeric);
                self.with_ordinal = true;
            }
            T::DayOfWeekLong => self.weekday = Some(TextWidth::Long),
            T::DayOfWeekShort => self.weekday = Some(TextWidth::Short),
            T::DayOfWeekNarrow => self.weekday = Some(TextWidth::Narrow),
            T::HourNumeric => self.hour = Some(NumericWidth::Numeric),
            T::Hour2Digit => self.hour = Some(NumericWidth::TwoDigit),
            T::HourWithAmPm => self.hour12 = Some(true),
            T::HourWithoutAmPm => self.hour12 = Some(false),
            T::MinuteNumeric => self.minute = Some(NumericWidth::Numeric),
            T::Minute2Digit => self.minute = Some(NumericWidth::TwoDigit),
            T::SecondNumeric => self.second = Some(NumericWidth::Numeric),
            T::Second2Digit => self.second = Some(NumericWidth::TwoDigit),
            T::Millisecond3 => self.fractional_second_digits = Some(3),
        }
    }

    /// Whether no field or style is requested at all.
    pub fn is_empty(&self) -> bool {
        self.weekday.is_none()
            && self.year.is_none()
            && self.month.is_none()
            && self.day.is_none()
            && self.hour.is_none()
            && self.minute.is_none()
            && self.second.is_none()
            && self.fractional_second_digits.is_none()
            && self.date_style.is_none()
            && self.time_style.is_none()
    }
}

impl FromIterator<DateToken> for IntlOptions {
    fn from_iter<I: IntoIterator<Item = DateToken>>(tokens: I) -> Self {
        let mut options = Self::default();
        for token in tokens {
            options.apply(token);
        }
        options
    }
}

// ── Pattern strings ─────────────────────────────────────────────────────────

/// Split a pattern string into tokens.
///
/// Recognised letters: `y yy yyyy`, `M MM MMM MMMM`, `d dd do`,
/// `EEE EEEE EEEEE`, `h hh` (locale hour cycle), `H HH` (24-hour), `a`,
/// `m mm`, `s ss`, `SSS`. Anything that is not an ASCII letter is a
/// separator, and text between single quotes is skipped.
///
/// # Errors
///
/// Returns [`DateError::InvalidPattern`] for unknown letters or unsupported
/// run lengths.
///
/// # Examples
///
/// ```
/// use period_engine::token::{parse_pattern, DateToken};
///
/// let tokens = parse_pattern("MMM do, yyyy").unwrap();
/// assert_eq!(
///     tokens,
///     vec![DateToken::MonthShort, DateToken::DayOfMonthWithOrdinal, DateToken::YearNumeric]
/// );
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<DateToken>> {
    use DateToken as T;

    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            // Skip quoted literal text up to the closing quote.
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                i += 1;
            }
            i += 1;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        i += run;

        let unsupported = || {
            DateError::InvalidPattern(format!(
                "unsupported field '{}' in '{pattern}'",
                c.to_string().repeat(run)
            ))
        };

        match (c, run) {
            ('y', 2) => tokens.push(T::Year2Digit),
            ('y', _) => tokens.push(T::YearNumeric),
            ('M', 1) => tokens.push(T::MonthNumeric),
            ('M', 2) => tokens.push(T::Month2Digit),
            ('M', 3) => tokens.push(T::MonthShort),
            ('M', 4) => tokens.push(T::MonthLong),
            ('d', 1) if chars.get(i) == Some(&'o') => {
                i += 1;
                tokens.push(T::DayOfMonthWithOrdinal);
            }
            ('d', 1) => tokens.push(T::DayOfMonthNumeric),
            ('d', 2) => tokens.push(T::DayOfMonth2Digit),
            ('E', 1..=3) => tokens.push(T::DayOfWeekShort),
            ('E', 4) => tokens.push(T::DayOfWeekLong),
            ('E', 5) => tokens.push(T::DayOfWeekNarrow),
            ('h', 1) => tokens.push(T::HourNumeric),
            ('h', 2) => tokens.push(T::Hour2Digit),
            ('H', 1) => tokens.extend([T::HourNumeric, T::HourWithoutAmPm]),
            ('H', 2) => tokens.extend([T::Hour2Digit, T::HourWithoutAmPm]),
            ('a', 1..=5) => tokens.push(T::HourWithAmPm),
            ('m', 1) => tokens.push(T::MinuteNumeric),
            ('m', 2) => tokens.push(T::Minute2Digit),
            ('s', 1) => tokens.push(T::SecondNumeric),
            ('s', 2) => tokens.push(T::Second2Digit),
            ('S', 3) => tokens.push(T::Millisecond3),
            _ => return Err(unsupported()),
        }
    }

    Ok(tokens)
}

// ── DateFormat ──────────────────────────────────────────────────────────────

/// What to render: a pattern string, a token sequence, or an options bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    Pattern(String),
    Tokens(Vec<DateToken>),
    Options(IntlOptions),
}

impl DateFormat {
    /// Normalise to an options bag.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidPattern`] if a pattern string cannot be tokenised.
    pub fn to_options(&self) -> Result<IntlOptions> {
        match self {
            DateFormat::Pattern(pattern) => Ok(parse_pattern(pattern)?.into_iter().collect()),
            DateFormat::Tokens(tokens) => Ok(tokens.iter().copied().collect()),
            DateFormat::Options(options) => Ok(*options),
        }
    }
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        DateFormat::Pattern(pattern.to_string())
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        DateFormat::Pattern(pattern)
    }
}

impl From<Vec<DateToken>> for DateFormat {
    fn from(tokens: Vec<DateToken>) -> Self {
        DateFormat::Tokens(tokens)
    }
}

impl From<&[DateToken]> for DateFormat {
    fn from(tokens: &[DateToken]) -> Self {
        DateFormat::Tokens(tokens.to_vec())
    }
}

impl<const N: usize> From<[DateToken; N]> for DateFormat {
    fn from(tokens: [DateToken; N]) -> Self {
        DateFormat::Tokens(tokens.to_vec())
    }
}

impl From<IntlOptions> for DateFormat {
    fn from(options: IntlOptions) -> Self {
        DateFormat::Options(options)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
