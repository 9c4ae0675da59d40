//! Unified application error type.
//! Data sources, the CLI and the web layer all return AppError so errors
//! surface the same way whatever path produced them.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data sources
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Users XML error: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// A value expected to be a time of day is not one.
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// A timetable document does not have the `{date: {start, end}}` shape.
    #[error("Malformed timetable: {0}")]
    MalformedTimetable(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("User {0} not found")]
    UserNotFound(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Web server
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
