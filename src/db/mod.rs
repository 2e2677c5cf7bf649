//! SQLite persistence layer
//!
//! Split into schema/configuration (`schema`) and the batched record
//! writer (`writer`).

pub mod schema;
pub mod writer;

pub use schema::open_store;
pub use writer::RecordWriter;
