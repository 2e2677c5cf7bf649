//! Store initialization: schema creation and durability configuration
//!
//! Opening a store is idempotent: reopening an existing database with an
//! existing table is a no-op beyond re-applying the profile pragmas.

use crate::config::StoreProfile;
use crate::error::{DbError, DbResult};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// SQL to create the record table
///
/// No indexes beyond the primary key: this tool is write-optimized, and
/// there is no read path to serve.
const CREATE_FILES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    filepath TEXT NOT NULL,
    filename TEXT NOT NULL,
    size INTEGER NOT NULL,
    modified_time INTEGER NOT NULL,
    created_time INTEGER NOT NULL
)
"#;

/// Open (creating if absent) the store at `path`, apply the durability
/// profile, and ensure the schema exists
pub fn open_store(path: &Path, profile: &StoreProfile) -> DbResult<Connection> {
    let conn = Connection::open(path).map_err(|e| DbError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    apply_profile(&conn, profile)?;
    create_schema(&conn)?;

    debug!(path = %path.display(), ?profile, "store opened");
    Ok(conn)
}

/// Apply the durability/performance pragmas from the profile
pub fn apply_profile(conn: &Connection, profile: &StoreProfile) -> DbResult<()> {
    let pragmas = format!(
        "PRAGMA synchronous = {};\n\
         PRAGMA journal_mode = {};\n\
         PRAGMA cache_size = {};",
        profile.durability.synchronous(),
        profile.journal.journal_mode(),
        profile.cache_pages,
    );

    conn.execute_batch(&pragmas).map_err(DbError::Configuration)
}

/// Create the record table if absent
pub fn create_schema(conn: &Connection) -> DbResult<()> {
    conn.execute(CREATE_FILES_TABLE, [])
        .map_err(DbError::Schema)?;
    Ok(())
}
