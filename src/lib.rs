//! dirscan - Bulk directory metadata scanner with SQLite output
//!
//! Recursively enumerates every regular file beneath a directory and
//! persists its metadata (path, name, size, modification and
//! status-change times) into a SQLite database, tuned for sustained
//! write throughput on slow storage media such as SD cards.
//!
//! # How it stays fast
//!
//! - **Durability profile**: the default opens the store with
//!   `synchronous = OFF`, an in-memory journal, and a large page cache.
//!   Writes are acknowledged before they reach stable storage, so a
//!   crash mid-scan can corrupt the database or lose recent writes; in
//!   exchange, bulk-load throughput improves by orders of magnitude on
//!   media where per-write fsync dominates. A safe profile (fsync on,
//!   on-disk journal) is available for correctness-sensitive runs.
//!
//! - **One batch transaction**: all inserts for a scan go through a
//!   single transaction and a reused prepared statement. A failed scan
//!   rolls back completely; nothing from that invocation persists.
//!
//! Single-threaded and sequential by design: this is a one-shot batch
//! tool, not a service. Re-running against an existing database appends
//! a second batch of records without deduplication.
//!
//! # Example
//!
//! ```bash
//! # Fast ingest (default profile)
//! dirscan /usr dirscan.db3
//!
//! # Crash-safe ingest with periodic commits
//! dirscan /data scan.db --durability safe --journal persistent -b 10000
//!
//! # Query results
//! sqlite3 dirscan.db3 "SELECT filepath, size FROM files WHERE size > 1000000"
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod record;
pub mod report;
pub mod stat;
pub mod walker;

pub use config::{CliArgs, Durability, ErrorPolicy, Journal, ScanConfig, StoreProfile};
pub use error::{Result, ScanError};
pub use record::FileRecord;
pub use walker::{scan, ScanStats};
