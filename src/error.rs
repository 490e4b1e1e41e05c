//! Error types for biblio
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, lookup found nothing)
//! - 3: Lending blocked (no copies available, return of an idle copy)
//! - 4: Operation failed (I/O error, malformed record)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the biblio CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const LENDING_BLOCKED: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for biblio operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No author named '{0}'")]
    AuthorNotFound(String),

    #[error("No book matching '{0}'")]
    BookNotFound(String),

    #[error("No patron named '{name}' at '{address}'")]
    PatronNotFound { name: String, address: String },

    #[error("Copy #{serial} of '{title}' is not in the catalog")]
    CopyNotFound { title: String, serial: u32 },

    // Lending blocks (exit code 3)
    #[error("No available copy of '{0}'")]
    NoCopyAvailable(String),

    #[error("Cannot borrow {requested} copies of '{title}': only {available} available")]
    InsufficientCopies {
        title: String,
        requested: usize,
        available: usize,
    },

    #[error("Copy #{serial} of '{title}' is not checked out")]
    CopyNotCheckedOut { title: String, serial: u32 },

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Malformed record in {file} line {line}: {reason}")]
    MalformedRecord {
        file: PathBuf,
        line: usize,
        reason: String,
    },
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::InvalidArgument(_)
            | Error::AuthorNotFound(_)
            | Error::BookNotFound(_)
            | Error::PatronNotFound { .. }
            | Error::CopyNotFound { .. } => exit_codes::USER_ERROR,

            // Lending blocks
            Error::NoCopyAvailable(_)
            | Error::InsufficientCopies { .. }
            | Error::CopyNotCheckedOut { .. } => exit_codes::LENDING_BLOCKED,

            // Operation failures
            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::MalformedRecord { .. } => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details for JSON consumers, where the message alone is not
    /// enough to act on.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::InsufficientCopies {
                title,
                requested,
                available,
            } => Some(serde_json::json!({
                "title": title,
                "requested": requested,
                "available": available,
            })),
            Error::MalformedRecord { file, line, .. } => Some(serde_json::json!({
                "file": file,
                "line": line,
            })),
            _ => None,
        }
    }
}

/// Result type alias for biblio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            details: None,
        }
    }
}
