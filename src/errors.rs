//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Calendar errors
    // ---------------------------
    #[error("Calendar radix must be positive: {0}")]
    NonPositiveRadix(String),

    #[error("World '{0}' defines an incomplete calendar")]
    IncompleteCalendar(String),

    #[error("World '{0}' has no calendar configured")]
    NoCalendar(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid world date: {0}")]
    InvalidWorldDate(String),

    #[error("Invalid date string: {0}")]
    InvalidDateString(String),

    #[error("Invalid time unit: {0}")]
    InvalidUnit(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No such world: {0}")]
    NoSuchWorld(String),

    #[error("No such event: {0}")]
    NoSuchEvent(i64),

    #[error("World '{0}' has no recorded maximum event time")]
    NoReferencePoint(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
