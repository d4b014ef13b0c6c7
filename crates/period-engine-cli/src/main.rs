//! period - calendar period resolution and locale-aware date formatting

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use period_engine::convert::DateInput;
use period_engine::{
    local_to_utc_date, month_days_by_week, resolve_period, to_iso_string, try_format_date,
    try_format_intl, utc_to_local_date, FormatDateOptions, Settings,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

/// Build settings from the settings file (or the host), then apply flag overrides.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file {}", path.display()))?;
            Settings::from_json(&json)
                .with_context(|| format!("Failed to parse settings file {}", path.display()))?
        }
        None => Settings::system(),
    };

    if let Some(tag) = &cli.locale {
        settings = settings.with_locale(tag.as_str());
    }
    if let Some(name) = &cli.timezone {
        settings = settings.with_timezone(name)?;
    }
    if let Some(day) = cli.week_start {
        settings = settings.with_week_start(day);
    }

    debug!(
        "Settings: locale={} timezone={} week_starts_on={:?}",
        settings.locale,
        settings.timezone.name(),
        settings.week_starts_on
    );
    Ok(settings)
}

/// Resolve a CLI date argument to its wall clock in the settings timezone.
fn local_datetime(settings: &Settings, date: &str) -> Result<chrono::NaiveDateTime> {
    DateInput::from(date)
        .resolve(&settings.timezone)
        .with_context(|| format!("Could not parse date '{date}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("period_engine=debug,period=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = load_settings(&cli)?;
    let options = FormatDateOptions::default();

    match &cli.command {
        Command::Format {
            date,
            period,
            variant,
        } => {
            let options = FormatDateOptions::variant(*variant);
            let text = try_format_date(&settings, date.as_str(), *period, &options)
                .with_context(|| format!("Failed to format '{date}'"))?;
            println!("{text}");
        }
        Command::Intl { date, pattern } => {
            let text = try_format_intl(&settings, date.as_str(), pattern.as_str(), &options)
                .with_context(|| format!("Failed to format '{date}' with '{pattern}'"))?;
            println!("{text}");
        }
        Command::Range { date, period } => {
            let local = local_datetime(&settings, date)?;
            let resolved = resolve_period(local, *period, settings.week_starts_on(&options))
                .with_context(|| format!("{period} containing '{date}' is out of range"))?;
            println!("{} {}", resolved.start(), resolved.end());
        }
        Command::Grid { date } => {
            let local = local_datetime(&settings, date)?;
            for row in month_days_by_week(local.date(), settings.week_starts_on(&options)) {
                let line: Vec<String> = row.iter().map(ToString::to_string).collect();
                println!("{}", line.join(" "));
            }
        }
        Command::ToUtc { datetime } => {
            let shifted = local_to_utc_date(datetime.as_str(), &settings.timezone)?;
            println!("{}", to_iso_string(&shifted));
        }
        Command::ToLocal { datetime } => {
            let shifted = utc_to_local_date(datetime.as_str(), &settings.timezone)?;
            println!("{}", to_iso_string(&shifted));
        }
    }

    Ok(())
}
