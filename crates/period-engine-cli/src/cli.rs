//! Command-line interface for the `period` binary.
//!
//! # Example
//!
//! ```bash
//! # Render the week containing a date, Monday first
//! period format 2023-11-21 --period week --variant short --week-start monday
//!
//! # Render with a pattern in French
//! period --locale fr intl 2023-11-21 "MMM do, yyyy"
//!
//! # Print the month grid
//! period grid 2023-11-21
//! ```

use clap::{Parser, Subcommand};
use period_engine::{DayOfWeek, PeriodType, Variant};

/// Resolve calendar periods and format dates for a locale
#[derive(Parser, Debug, Clone)]
#[command(name = "period")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Log library decisions (locale fallback, timezone detection) to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// JSON settings file (locale, timezone, weekStartsOn, ordinalSuffixes, locales)
    #[arg(long, global = true)]
    pub settings: Option<std::path::PathBuf>,

    /// Locale tag (e.g. "en-US", "fr")
    #[arg(long, short = 'l', global = true)]
    pub locale: Option<String>,

    /// IANA timezone (e.g. "America/New_York"); defaults to TZ or the system zone
    #[arg(long, short = 'z', global = true)]
    pub timezone: Option<String>,

    /// First day of the week (name, abbreviation or 0-6 from Sunday)
    #[arg(long, short = 'w', global = true)]
    pub week_start: Option<DayOfWeek>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the period containing a date, or an ISO string without --period
    Format {
        /// Date or datetime (YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS], or RFC 3339)
        date: String,

        /// Period type (e.g. day, week-mon, bi-week1, quarter, fiscal-year-october)
        #[arg(long, short = 'p')]
        period: Option<PeriodType>,

        /// Level of detail
        #[arg(long, default_value = "default")]
        variant: Variant,
    },

    /// Render a date with a pattern string such as "MMM do, yyyy"
    Intl {
        date: String,
        pattern: String,
    },

    /// Print the first and last day of the period containing a date
    Range {
        date: String,

        #[arg(long, short = 'p')]
        period: PeriodType,
    },

    /// Print the month grid containing a date, one week per line
    Grid {
        date: String,
    },

    /// Reinterpret a wall clock in the configured timezone as UTC
    ToUtc {
        datetime: String,
    },

    /// Reinterpret a UTC wall clock as wall-clock time in the configured timezone
    ToLocal {
        datetime: String,
    },
}
