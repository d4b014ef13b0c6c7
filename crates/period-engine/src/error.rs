//! Error types for period-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, DateError>;
