//! Error types and exit codes for docsim
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Corpus error (missing directory, unreadable document)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the docsim process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Corpus error - missing directory, unreadable document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during docsim operations
#[derive(Error, Debug)]
pub enum DocsimError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Corpus errors (exit code 3)
    #[error("document directory not found: {path:?}")]
    CorpusDirNotFound { path: PathBuf },

    #[error("not a directory: {path:?}")]
    NotADirectory { path: PathBuf },

    #[error("failed to read document {path:?}: {reason}")]
    UnreadableDocument { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DocsimError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DocsimError::UnknownFormat(_)
            | DocsimError::DuplicateFormat
            | DocsimError::UsageError(_) => ExitCode::Usage,

            DocsimError::CorpusDirNotFound { .. }
            | DocsimError::NotADirectory { .. }
            | DocsimError::UnreadableDocument { .. } => ExitCode::Data,

            DocsimError::Io(_) | DocsimError::Json(_) | DocsimError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            DocsimError::UnknownFormat(_) => "unknown_format",
            DocsimError::DuplicateFormat => "duplicate_format",
            DocsimError::UsageError(_) => "usage_error",
            DocsimError::CorpusDirNotFound { .. } => "corpus_dir_not_found",
            DocsimError::NotADirectory { .. } => "not_a_directory",
            DocsimError::UnreadableDocument { .. } => "unreadable_document",
            DocsimError::Io(_) => "io_error",
            DocsimError::Json(_) => "json_error",
            DocsimError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for docsim operations
pub type Result<T> = std::result::Result<T, DocsimError>;
