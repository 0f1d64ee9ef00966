//! Record Store Module
//!
//! This module implements the save step for processable records.
//! No storage backend exists; the store either acknowledges the record
//! with a log line or rejects it outright.

mod record_store;
pub use record_store::RecordStore;
