//! Formatting settings and per-call options.
//!
//! [`Settings`] is the read-only collaborator every formatting call consults:
//! default locale, timezone, week start, ordinal-suffix tables and any extra
//! locale data. [`FormatDateOptions`] overrides those defaults per call.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DateError, Result};
use crate::locale::{language_of, LocaleData, OrdinalSuffixes, ENGLISH_SUFFIXES};
use crate::period::DayOfWeek;

// ── Variant ─────────────────────────────────────────────────────────────────

/// How much detail a period rendering carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Short,
    #[default]
    Default,
    Long,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Short => write!(f, "short"),
            Variant::Default => write!(f, "default"),
            Variant::Long => write!(f, "long"),
        }
    }
}

impl FromStr for Variant {
    type Err = DateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Variant::Short),
            "default" => Ok(Variant::Default),
            "long" => Ok(Variant::Long),
            _ => Err(DateError::InvalidSettings(format!(
                "unknown variant '{s}', expected short, default or long"
            ))),
        }
    }
}

// ── FormatDateOptions ───────────────────────────────────────────────────────

/// Per-call overrides for [`crate::format_date`] and [`crate::format_intl`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatDateOptions {
    pub variant: Variant,
    /// Locale tag; falls back to [`Settings::locale`].
    pub locale: Option<String>,
    /// Week start; falls back to [`Settings::week_starts_on`].
    pub week_starts_on: Option<DayOfWeek>,
    /// Ordinal suffixes keyed by locale tag, consulted before the settings tables.
    pub ordinal_suffixes: HashMap<String, OrdinalSuffixes>,
}

impl FormatDateOptions {
    pub fn variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    pub fn with_week_start(mut self, day: DayOfWeek) -> Self {
        self.week_starts_on = Some(day);
        self
    }

    pub fn with_ordinal_suffixes(
        mut self,
        tag: impl Into<String>,
        suffixes: OrdinalSuffixes,
    ) -> Self {
        self.ordinal_suffixes.insert(tag.into(), suffixes);
        self
    }
}

// ── Settings ────────────────────────────────────────────────────────────────

/// Defaults shared by every formatting call.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use period_engine::{DayOfWeek, Settings};
///
/// let settings = Settings::from_json(
///     r#"{ "locale": "fr", "timezone": "Europe/Paris", "weekStartsOn": "Monday" }"#,
/// ).unwrap();
/// assert_eq!(settings.locale, "fr");
/// assert_eq!(settings.week_starts_on, DayOfWeek::Monday);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub locale: String,
    pub timezone: Tz,
    pub week_starts_on: DayOfWeek,
    /// Ordinal suffixes keyed by locale tag.
    pub ordinal_suffixes: HashMap<String, OrdinalSuffixes>,
    /// Extra locale data keyed by tag; takes precedence over the built-ins.
    pub locales: HashMap<String, LocaleData>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            timezone: Tz::UTC,
            week_starts_on: DayOfWeek::Sunday,
            ordinal_suffixes: HashMap::from([("en".to_string(), OrdinalSuffixes::english())]),
            locales: HashMap::new(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidSettings`] on malformed JSON, unknown
    /// timezone names or invalid locale data.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DateError::InvalidSettings(e.to_string()))
    }

    /// Settings for the host: timezone from `TZ` or the system, locale from `LANG`.
    pub fn system() -> Self {
        let mut settings = Self {
            timezone: local_timezone(),
            ..Self::default()
        };
        if let Some(tag) = std::env::var("LANG").ok().and_then(|lang| locale_from_env(&lang)) {
            debug!("Using locale from LANG: {}", tag);
            settings.locale = tag;
        }
        settings
    }

    /// Replace the timezone with a validated IANA name.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidTimezone`] if `name` is not a known IANA timezone.
    pub fn with_timezone(mut self, name: &str) -> Result<Self> {
        self.timezone = parse_timezone(name)?;
        Ok(self)
    }

    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = tag.into();
        self
    }

    pub fn with_week_start(mut self, day: DayOfWeek) -> Self {
        self.week_starts_on = day;
        self
    }

    /// Locale data for `tag`: registered data, then built-ins, each tried on
    /// the full tag and then the language subtag. Unknown tags fall back to
    /// English.
    pub fn locale_data(&self, tag: &str) -> &LocaleData {
        self.find_locale(tag).unwrap_or_else(|| {
            warn!("No locale data for '{}', falling back to en", tag);
            LocaleData::fallback()
        })
    }

    /// Like [`Settings::locale_data`] but without the English fallback.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::UnknownLocale`] when neither registered nor built-in data matches.
    pub fn require_locale(&self, tag: &str) -> Result<&LocaleData> {
        self.find_locale(tag)
            .ok_or_else(|| DateError::UnknownLocale(format!("'{tag}'")))
    }

    fn find_locale(&self, tag: &str) -> Option<&LocaleData> {
        self.locales
            .get(tag)
            .or_else(|| self.locales.get(language_of(tag)))
            .or_else(|| LocaleData::builtin(tag))
    }

    /// The locale tag in effect for a call.
    pub fn active_locale<'a>(&'a self, options: &'a FormatDateOptions) -> &'a str {
        options.locale.as_deref().unwrap_or(&self.locale)
    }

    /// The week start in effect for a call.
    pub fn week_starts_on(&self, options: &FormatDateOptions) -> DayOfWeek {
        options.week_starts_on.unwrap_or(self.week_starts_on)
    }

    /// Ordinal suffixes for `tag`.
    ///
    /// Lookup order: call options for the tag, settings for the tag, then the
    /// same two tables for the language subtag, then English.
    pub fn ordinal_suffixes<'a>(
        &'a self,
        tag: &str,
        options: &'a FormatDateOptions,
    ) -> &'a OrdinalSuffixes {
        let language = language_of(tag);
        [tag, language]
            .into_iter()
            .find_map(|key| {
                options
                    .ordinal_suffixes
                    .get(key)
                    .or_else(|| self.ordinal_suffixes.get(key))
            })
            .unwrap_or(&*ENGLISH_SUFFIXES)
    }
}

/// Parse an IANA timezone string into `Tz`.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| DateError::InvalidTimezone(format!("'{}'", s)))
}

/// Detect the host timezone: `TZ` first, then the system setting, then UTC.
fn local_timezone() -> Tz {
    if let Some(tz) = std::env::var("TZ").ok().and_then(|s| s.parse::<Tz>().ok()) {
        debug!("Using timezone from TZ environment variable: {}", tz.name());
        return tz;
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => match name.parse::<Tz>() {
            Ok(tz) => {
                debug!("Using system timezone from iana-time-zone: {}", name);
                tz
            }
            Err(_) => {
                debug!("Could not parse system timezone '{}', falling back to UTC", name);
                Tz::UTC
            }
        },
        Err(e) => {
            debug!("Could not detect local timezone: {:?}, falling back to UTC", e);
            Tz::UTC
        }
    }
}

/// Turn a POSIX locale (`fr_FR.UTF-8`) into a BCP 47 tag (`fr-FR`).
fn locale_from_env(lang: &str) -> Option<String> {
    let base = lang.split(['.', '@']).next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

// ── Tests ───────────────────────────────────────────────────────────────────
