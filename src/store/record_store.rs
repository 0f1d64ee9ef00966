use crate::{logging::ValidationLog, TransactionRecord, ValidationError};
use std::sync::Arc;

/// Save step for processable records
///
/// Named a store, but no persistence layer sits behind it: the success path
/// logs an acceptance line carrying the record's bit02 value and returns,
/// the failure path rejects without any further check. Two terminal
/// outcomes per call, no retry, no partial state.
pub struct RecordStore {
    log: Arc<dyn ValidationLog>,
}

impl RecordStore {
    pub fn new(log: Arc<dyn ValidationLog>) -> Self {
        Self { log }
    }

    /// Attempt to save a processable record
    ///
    /// Rejects with `ValidationError::ValidationFailed` whenever
    /// `aux_validation_required` is set; that flag is the only thing this
    /// step inspects. Otherwise emits the acceptance line and returns.
    ///
    /// # Arguments
    /// * `record` - The record that passed the processability check
    /// * `aux_validation_required` - Derived flag: bit02 present-but-empty
    ///   and bit03 absent
    pub fn try_save(
        &self,
        record: &TransactionRecord,
        aux_validation_required: bool,
    ) -> Result<(), ValidationError> {
        if aux_validation_required {
            return Err(ValidationError::ValidationFailed);
        }

        // The presence gate ran before the save attempt, so bit02 is set here.
        let bit02 = record
            .bit02
            .as_ref()
            .map(|field| field.value.as_str())
            .unwrap_or_default();
        self.log.info(&format!("record accepted, bit02: {}", bit02));

        Ok(())
    }
}
