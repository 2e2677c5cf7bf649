//! Configuration types for dirscan
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - The store durability profile (the fast/safe trade-off)
//! - Runtime configuration with validation

use crate::error::ConfigError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default page cache size, sized generously to minimize intermediate
/// disk touches during a long bulk load
pub const DEFAULT_CACHE_PAGES: u32 = 100_000;

/// Cache size limits
const MIN_CACHE_PAGES: u32 = 1_000;
const MAX_CACHE_PAGES: u32 = 1_000_000;

/// Bulk directory metadata scanner with SQLite output
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirscan",
    version,
    about = "Bulk directory metadata scanner with SQLite output",
    long_about = "Recursively scans a directory tree and records per-file metadata\n\
                  (path, name, size, modification and status-change times) into a\n\
                  SQLite database, tuned for sustained write throughput on slow\n\
                  media such as SD cards.",
    after_help = "EXAMPLES:\n    \
        dirscan /usr dirscan.db3\n    \
        dirscan /data scan.db --durability safe --journal persistent\n    \
        dirscan /data scan.db --batch-size 10000 --on-error skip"
)]
pub struct CliArgs {
    /// Directory to scan
    #[arg(value_name = "SOURCE_DIR")]
    pub source: PathBuf,

    /// Output SQLite database file
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,

    /// Durability profile: 'fast' acknowledges writes before they reach
    /// stable storage (a crash mid-scan can corrupt the store), 'safe'
    /// fsyncs every write
    #[arg(long, value_enum, default_value_t = Durability::Fast, value_name = "MODE")]
    pub durability: Durability,

    /// Journal placement: 'memory' keeps the rollback journal in RAM
    /// (lost on crash), 'persistent' keeps it on disk
    #[arg(long, value_enum, default_value_t = Journal::Memory, value_name = "MODE")]
    pub journal: Journal,

    /// SQLite page cache size in pages
    #[arg(long, default_value_t = DEFAULT_CACHE_PAGES, value_name = "PAGES")]
    pub cache_pages: u32,

    /// Commit every NUM records instead of one transaction for the whole
    /// scan (0 = entire scan, preserving all-or-nothing atomicity)
    #[arg(short = 'b', long, default_value_t = 0, value_name = "NUM")]
    pub batch_size: u64,

    /// What to do when a path cannot be accessed during the walk
    #[arg(long = "on-error", value_enum, default_value_t = ErrorPolicy::Abort, value_name = "POLICY")]
    pub error_policy: ErrorPolicy,

    /// Quiet mode - suppress the summary block
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (log every recorded file)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Write durability mode
///
/// `Fast` trades crash-durability for throughput: per-write fsync cost
/// dominates on slow media, and skipping it is an orders-of-magnitude
/// improvement for a one-shot ingest that can simply be re-run after a
/// failure.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// synchronous = OFF: writes are acknowledged before reaching disk
    Fast,
    /// synchronous = FULL: fsync on every write
    Safe,
}

impl Durability {
    /// Value for `PRAGMA synchronous`
    pub fn synchronous(self) -> &'static str {
        match self {
            Durability::Fast => "OFF",
            Durability::Safe => "FULL",
        }
    }
}

/// Rollback journal placement
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Journal {
    /// journal_mode = MEMORY: no journal I/O, rollback lost on crash
    Memory,
    /// journal_mode = DELETE: standard on-disk journal
    Persistent,
}

impl Journal {
    /// Value for `PRAGMA journal_mode`
    pub fn journal_mode(self) -> &'static str {
        match self {
            Journal::Memory => "MEMORY",
            Journal::Persistent => "DELETE",
        }
    }
}

/// Policy for per-path access errors during the walk
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the whole scan on the first error, rolling back any
    /// uncommitted records (the default)
    Abort,
    /// Log the error and continue with the next entry
    Skip,
    /// Continue, and report every error after the scan completes
    Collect,
}

/// Store durability/performance profile, applied as pragmas when the
/// store is opened
///
/// The default (fast/memory/large cache) accepts data-loss risk on crash
/// in exchange for bulk-load throughput. This is a documented contract,
/// not an implementation detail: use `Durability::Safe` plus
/// `Journal::Persistent` for correctness-sensitive runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreProfile {
    pub durability: Durability,
    pub journal: Journal,
    pub cache_pages: u32,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            durability: Durability::Fast,
            journal: Journal::Memory,
            cache_pages: DEFAULT_CACHE_PAGES,
        }
    }
}

impl StoreProfile {
    /// The crash-safe profile (fsync on, on-disk journal)
    pub fn safe() -> Self {
        Self {
            durability: Durability::Safe,
            journal: Journal::Persistent,
            cache_pages: DEFAULT_CACHE_PAGES,
        }
    }
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory to scan
    pub source: PathBuf,

    /// Output database path
    pub database: PathBuf,

    /// Store durability profile
    pub profile: StoreProfile,

    /// Records per commit (0 = entire scan in one transaction)
    pub batch_size: u64,

    /// Per-path error policy
    pub error_policy: ErrorPolicy,

    /// Print the summary block after the scan
    pub show_summary: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl ScanConfig {
    /// Create and validate configuration from CLI arguments
    ///
    /// Validation happens before the store is touched, so a bad
    /// invocation never leaves a partially created database behind.
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Source must be an existing directory
        match std::fs::metadata(&args.source) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(ConfigError::InvalidSource {
                    path: args.source,
                    reason: "not a directory".into(),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidSource {
                    path: args.source,
                    reason: e.to_string(),
                });
            }
        }

        // Destination parent must exist
        if let Some(parent) = args.database.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ConfigError::InvalidOutputPath {
                    path: args.database.clone(),
                    reason: format!("Parent directory '{}' does not exist", parent.display()),
                });
            }
        }

        // Validate cache size
        if args.cache_pages < MIN_CACHE_PAGES || args.cache_pages > MAX_CACHE_PAGES {
            return Err(ConfigError::InvalidCachePages {
                pages: args.cache_pages,
                min: MIN_CACHE_PAGES,
                max: MAX_CACHE_PAGES,
            });
        }

        Ok(Self {
            source: args.source,
            database: args.database,
            profile: StoreProfile {
                durability: args.durability,
                journal: args.journal,
                cache_pages: args.cache_pages,
            },
            batch_size: args.batch_size,
            error_policy: args.error_policy,
            show_summary: !args.quiet,
            verbose: args.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args_for(source: &std::path::Path, db: &std::path::Path) -> CliArgs {
        CliArgs::parse_from([
            "dirscan".to_string(),
            source.display().to_string(),
            db.display().to_string(),
        ])
    }

    #[test]
    fn test_default_profile_is_fast() {
        let profile = StoreProfile::default();
        assert_eq!(profile.durability, Durability::Fast);
        assert_eq!(profile.journal, Journal::Memory);
        assert_eq!(profile.cache_pages, DEFAULT_CACHE_PAGES);
    }

    #[test]
    fn test_pragma_values() {
        assert_eq!(Durability::Fast.synchronous(), "OFF");
        assert_eq!(Durability::Safe.synchronous(), "FULL");
        assert_eq!(Journal::Memory.journal_mode(), "MEMORY");
        assert_eq!(Journal::Persistent.journal_mode(), "DELETE");
    }

    #[test]
    fn test_missing_args_rejected() {
        assert!(CliArgs::try_parse_from(["dirscan"]).is_err());
        assert!(CliArgs::try_parse_from(["dirscan", "/tmp"]).is_err());
        assert!(CliArgs::try_parse_from(["dirscan", "/tmp", "out.db", "extra"]).is_err());
    }

    #[test]
    fn test_source_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();

        let args = args_for(&file, &dir.path().join("out.db"));
        let err = ScanConfig::from_args(args).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSource { .. }));
    }

    #[test]
    fn test_missing_source_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(&dir.path().join("absent"), &dir.path().join("out.db"));
        assert!(ScanConfig::from_args(args).is_err());
    }

    #[test]
    fn test_output_parent_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(dir.path(), &dir.path().join("nope").join("out.db"));
        let err = ScanConfig::from_args(args).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOutputPath { .. }));
    }

    #[test]
    fn test_cache_pages_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args_for(dir.path(), &dir.path().join("out.db"));
        args.cache_pages = 1;
        let err = ScanConfig::from_args(args).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCachePages { .. }));
    }

    #[test]
    fn test_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(dir.path(), &dir.path().join("out.db"));
        let config = ScanConfig::from_args(args).unwrap();
        assert_eq!(config.batch_size, 0);
        assert_eq!(config.error_policy, ErrorPolicy::Abort);
        assert!(config.show_summary);
    }
}
