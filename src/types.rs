use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type codes that bit04 may carry on a processable record.
///
/// Fixed by the message format; membership is checked with `contains`,
/// no configuration surface exists for it.
pub const VALID_TYPE_CODES: [&str; 5] = ["02", "03", "04", "05", "12"];

/// A single named field ("bit") on a transaction record
///
/// Wraps the field's string content. A field that is present but holds an
/// empty string is distinct from a field that was never set at all, which
/// is modeled as `None` on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub value: String,
}

impl FieldValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// True when the field is present but carries an empty string
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// ISO 8583-style transaction record
///
/// Five optional field slots, read-only for the duration of validation:
/// - `bit02`: primary identifier field
/// - `bit04`: transaction type code, must be one of `VALID_TYPE_CODES`
///   for the record to be processable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub bit02: Option<FieldValue>,
    pub bit03: Option<FieldValue>,
    pub bit04: Option<FieldValue>,
    pub bit05: Option<FieldValue>,
    pub bit12: Option<FieldValue>,
}

/// Validation errors
///
/// All three kinds are terminal for a single `validate` call.
/// `ProcessingError` wraps whatever failed inside the protected save
/// attempt and keeps the cause on the source chain, so the underlying
/// failure is never masked.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("fields not correctly populated")]
    FieldsNotPopulated,

    #[error("validation failed")]
    ValidationFailed,

    #[error("processing error")]
    ProcessingError {
        #[source]
        source: Box<ValidationError>,
    },
}

/// Per-record outcome reported by the harness binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecordStatus {
    Accepted,
    Rejected { reason: String },
}

/// Report emitted by the harness binary after each record is validated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub index: usize,
    pub status: RecordStatus,
    pub timestamp: u64,
}
