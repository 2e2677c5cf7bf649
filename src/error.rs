//! Error types for dirscan
//!
//! This module defines the error hierarchy for the scanner:
//! - Database errors (open, pragma, schema, transaction, insert)
//! - Walk errors (per-path access failures)
//! - Configuration and CLI errors
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - No error is recovered locally; everything unwinds to main unless
//!   the walk's error policy says otherwise
//! - Preserve error chains for debugging

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level error type for the dirscan application
#[derive(Error, Debug)]
pub enum ScanError {
    /// Database errors
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// Filesystem walk errors
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Database errors
///
/// The initialization variants (`Open`, `Configuration`, `Schema`) and the
/// write-path variants (`Transaction`, `Insert`) are all fatal: no
/// partial-store state is considered usable.
#[derive(Error, Debug)]
pub enum DbError {
    /// The store file could not be opened or created
    #[error("Failed to open store at '{path}': {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// A pragma from the store profile could not be applied
    #[error("Failed to apply store configuration: {0}")]
    Configuration(rusqlite::Error),

    /// The record table could not be created
    #[error("Failed to create schema: {0}")]
    Schema(rusqlite::Error),

    /// A transaction could not be started, prepared against, or committed
    #[error("Transaction failed: {0}")]
    Transaction(rusqlite::Error),

    /// A record insert failed mid-walk
    #[error("Failed to insert record for '{path}': {source}")]
    Insert {
        path: String,
        source: rusqlite::Error,
    },
}

/// Filesystem walk errors
#[derive(Error, Debug)]
pub enum WalkError {
    /// A path could not be statted or read during traversal
    #[error("Failed to access '{path}': {source}")]
    PathAccess {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl WalkError {
    /// Wrap an I/O error with the path it occurred on
    pub fn access(path: &Path, source: std::io::Error) -> Self {
        WalkError::PathAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        WalkError::PathAccess {
            path,
            source: err.into(),
        }
    }
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Source path is missing or not a directory
    #[error("Invalid source directory '{path}': {reason}")]
    InvalidSource { path: PathBuf, reason: String },

    /// Destination path is unusable
    #[error("Invalid database path '{path}': {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },

    /// Cache size outside accepted bounds
    #[error("Invalid cache size {pages}: must be between {min} and {max} pages")]
    InvalidCachePages { pages: u32, min: u32, max: u32 },
}

/// Result type alias for ScanError
pub type Result<T> = std::result::Result<T, ScanError>;

/// Result type alias for DbError
pub type DbResult<T> = std::result::Result<T, DbError>;

/// Result type alias for WalkError
pub type WalkResult<T> = std::result::Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let walk_err = WalkError::PathAccess {
            path: "/missing".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let scan_err: ScanError = walk_err.into();
        assert!(matches!(scan_err, ScanError::Walk(_)));
    }

    #[test]
    fn test_insert_error_message() {
        let err = DbError::Insert {
            path: "/data/file.txt".into(),
            source: rusqlite::Error::ExecuteReturnedResults,
        };
        assert!(err.to_string().contains("/data/file.txt"));
    }
}
