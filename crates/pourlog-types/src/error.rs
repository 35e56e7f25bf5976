//! Error types for pourlog

use chrono::NaiveDate;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Backing-file errors
///
/// A missing backing file is not an error (load substitutes an empty table);
/// anything else that prevents a full read or write is.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    Io(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Corrupt order table at row {row}: {message}")]
    Corrupt { row: usize, message: String },
}

/// Submission-time validation errors
///
/// Raised before any store write; a rejected order never reaches the table.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Datum betonáže is required")]
    MissingDate,

    #[error("Datum betonáže must not be in the past: {0}")]
    DateInPast(NaiveDate),

    #[error("Objednané množství must not be negative: {0}")]
    NegativeOrdered(f64),

    #[error("Skutečné množství must not be negative: {0}")]
    NegativeActual(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
