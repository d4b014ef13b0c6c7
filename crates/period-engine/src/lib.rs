//! # period-engine
//!
//! Locale-aware calendar period resolution and token-based date formatting.
//!
//! Given a date and a period type (a week starting Monday, an October fiscal
//! year, the second half of a bi-week cycle ...), the engine finds the
//! period that contains the date and renders it for a locale. Rendering is
//! driven by date tokens or pattern strings and follows Intl conventions
//! for field order, padding and hour cycle.
//!
//! ## Modules
//!
//! - [`period`] — Period types, week starts, period resolution and month grids
//! - [`token`] — Date tokens, pattern strings and Intl-style option bags
//! - [`locale`] — Locale data (`en`, `fr` built in) and ordinal suffix rules
//! - [`intl`] — Intl-style renderer and [`format_intl`]
//! - [`format`] — Period rendering via [`format_date`]
//! - [`convert`] — Date inputs and UTC / local wall-clock conversion
//! - [`settings`] — Shared settings and per-call options
//! - [`error`] — Error types

pub mod convert;
pub mod error;
pub mod format;
pub mod intl;
pub mod locale;
pub mod period;
pub mod settings;
pub mod token;

pub use convert::{local_to_utc_date, to_iso_string, utc_to_local_date, DateInput};
pub use error::DateError;
pub use format::{format_date, try_format_date, RANGE_SEPARATOR};
pub use intl::{format_intl, try_format_intl, IntlFormatter};
pub use locale::{LocaleData, OrdinalSuffixes};
pub use period::{
    end_of_week, fiscal_year_october, is_same_period, month_days_by_week, resolve_period,
    shift_period, start_of_week, DateRange, DayOfWeek, MonthWeeks, PeriodType, ResolvedPeriod,
};
pub use settings::{FormatDateOptions, Settings, Variant};
pub use token::{parse_pattern, DateFormat, DateToken, IntlOptions};
