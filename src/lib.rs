//! This crate validates ISO 8583-style transaction records: it checks the
//! presence and contents of the named field slots ("bits") on a record and
//! conditionally hands the record to a save step, which either acknowledges
//! it with a log line or rejects it.

pub mod types; // Defines the record, field and error types used throughout the crate.
pub mod logging; // Injectable log seam with a tracing-backed default.
pub mod validation; // Contains the field-presence gate and processability logic.
pub mod store; // Implements the save step for processable records.
pub mod config; // Defines and loads the binary's configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use validation::TransactionValidator;
