//! Batched record writer for high-throughput inserts
//!
//! All inserts for one scan go through a single long-lived transaction
//! and a prepared statement reused for every row (via the connection's
//! statement cache). Per-row transactions are catastrophically slow on
//! high-latency storage; one large transaction turns thousands of small
//! synchronous writes into one.
//!
//! A nonzero batch size commits every N records instead, trading the
//! all-or-nothing guarantee for partial-progress durability. The default
//! is one transaction for the entire scan.
//!
//! Dropping the writer without calling [`RecordWriter::finish`] rolls
//! back whatever the current transaction holds.

use crate::error::{DbError, DbResult};
use crate::record::FileRecord;
use rusqlite::{params, Connection, Transaction};
use tracing::debug;

/// Insert statement, prepared once and reused across the whole walk
const INSERT_FILE: &str = "INSERT INTO files (filepath, filename, size, modified_time, created_time)
     VALUES (?1, ?2, ?3, ?4, ?5)";

/// Writes records inside a batch transaction
pub struct RecordWriter<'conn> {
    conn: &'conn Connection,
    tx: Option<Transaction<'conn>>,
    batch_size: u64,
    in_batch: u64,
    inserted: u64,
    batches: u64,
}

impl<'conn> RecordWriter<'conn> {
    /// Open the batch transaction before traversal begins
    ///
    /// `batch_size` of 0 means the entire scan commits as one unit.
    pub fn begin(conn: &'conn Connection, batch_size: u64) -> DbResult<Self> {
        let tx = conn.unchecked_transaction().map_err(DbError::Transaction)?;
        Ok(Self {
            conn,
            tx: Some(tx),
            batch_size,
            in_batch: 0,
            inserted: 0,
            batches: 0,
        })
    }

    /// Insert one record, committing the current batch when full
    pub fn insert(&mut self, record: &FileRecord) -> DbResult<()> {
        if self.tx.is_none() {
            self.tx = Some(self.conn.unchecked_transaction().map_err(DbError::Transaction)?);
        }

        if let Some(tx) = self.tx.as_ref() {
            let mut stmt = tx.prepare_cached(INSERT_FILE).map_err(DbError::Transaction)?;
            stmt.execute(params![
                record.filepath,
                record.filename,
                record.size as i64,
                record.modified_time,
                record.created_time,
            ])
            .map_err(|e| DbError::Insert {
                path: record.filepath.clone(),
                source: e,
            })?;
        }

        self.inserted += 1;
        self.in_batch += 1;

        if self.batch_size > 0 && self.in_batch >= self.batch_size {
            self.commit_batch()?;
        }

        Ok(())
    }

    /// Commit the outstanding transaction and return the total row count
    pub fn finish(mut self) -> DbResult<u64> {
        self.commit_batch()?;
        debug!(
            inserted = self.inserted,
            batches = self.batches,
            "writer finished"
        );
        Ok(self.inserted)
    }

    /// Records inserted so far (including uncommitted ones)
    pub fn inserted(&self) -> u64 {
        self.inserted
    }

    /// Batches committed so far
    pub fn batches(&self) -> u64 {
        self.batches
    }

    fn commit_batch(&mut self) -> DbResult<()> {
        if let Some(tx) = self.tx.take() {
            tx.commit().map_err(DbError::Transaction)?;
            self.batches += 1;
        }
        self.in_batch = 0;
        Ok(())
    }
}
