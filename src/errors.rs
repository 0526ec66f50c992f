//! Unified application error type.
//! Store, gate, QR refresh, CLI and HTTP adapter all return AppError so
//! that rejections and internal failures are reported the same way.

use crate::store::Collection;
use chrono::{NaiveDate, NaiveTime};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Failed to write the {collection} store: {source}")]
    StoreWrite {
        collection: Collection,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Check-in rejections
    // ---------------------------
    #[error(
        "Attendance can only be recorded between {} and {}",
        .start.format("%H:%M"),
        .end.format("%H:%M")
    )]
    OutsideWindow { start: NaiveTime, end: NaiveTime },

    #[error("Student {0} not found")]
    StudentNotFound(u32),

    #[error("Student {student_id} has already checked in on {date}")]
    AlreadyCheckedIn { student_id: u32, date: NaiveDate },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    // ---------------------------
    // QR codes
    // ---------------------------
    #[error("QR encoding failed: {0}")]
    Encode(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Runtime
    // ---------------------------
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    /// True for errors caused by the request itself (no state was touched),
    /// false for internal failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::OutsideWindow { .. }
                | AppError::StudentNotFound(_)
                | AppError::AlreadyCheckedIn { .. }
                | AppError::MalformedPayload(_)
        )
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
