use crate::{
    logging::{TracingLog, ValidationLog},
    store::RecordStore,
    TransactionRecord, ValidationError, VALID_TYPE_CODES,
};
use std::sync::Arc;

/// Flags derived from a record in a single pass before any gate runs
struct RecordFlags {
    bit02_missing: bool,
    bit02_empty: bool,
    aux_validation_required: bool,
    validation_discriminator: &'static str,
}

pub struct TransactionValidator {
    store: RecordStore,
    log: Arc<dyn ValidationLog>,
}

impl Default for TransactionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionValidator {
    /// Creates a validator that logs through `tracing`
    pub fn new() -> Self {
        Self::with_log(Arc::new(TracingLog))
    }

    /// Creates a validator with an injected log sink
    ///
    /// Tests pass a capturing sink here to assert on emitted lines.
    pub fn with_log(log: Arc<dyn ValidationLog>) -> Self {
        Self {
            store: RecordStore::new(log.clone()),
            log,
        }
    }

    /// Validate a transaction record and save it when processable
    ///
    /// Returns `Ok(())` either after a successful save or when the record
    /// is not processable: an incomplete record that clears the presence
    /// gate is dropped without error. That silent path is part of the
    /// component's contract, callers must not treat `Ok` as "saved".
    /// The auxiliary-validation edge case is the exception: it reaches the
    /// save step and comes back as `ProcessingError` wrapping
    /// `ValidationFailed`.
    pub fn validate(&self, record: &TransactionRecord) -> Result<(), ValidationError> {
        self.log.info("validation started");

        // 1. Derive flags from the record
        let flags = Self::derive_flags(record);

        // 2. Field-presence gate
        self.check_presence(&flags)?;

        // 3. Processability check. The auxiliary-validation edge case
        //    (bit02 empty and bit03 absent) still reaches the save step,
        //    where it is rejected.
        if !Self::is_processable(record) && !flags.aux_validation_required {
            return Ok(());
        }

        // 4. Save attempt; any failure is logged with its cause and
        //    re-raised wrapped, never swallowed
        self.store
            .try_save(record, flags.aux_validation_required)
            .map_err(|cause| {
                self.log.error("processing error", &cause);
                ValidationError::ProcessingError {
                    source: Box::new(cause),
                }
            })
    }

    fn derive_flags(record: &TransactionRecord) -> RecordFlags {
        let bit02_missing = record.bit02.is_none();
        let bit02_empty = record
            .bit02
            .as_ref()
            .map(|field| field.is_empty())
            .unwrap_or(false);
        let aux_validation_required = bit02_empty && record.bit03.is_none();
        let validation_discriminator = if bit02_missing { "01" } else { "02" };

        RecordFlags {
            bit02_missing,
            bit02_empty,
            aux_validation_required,
            validation_discriminator,
        }
    }

    /// Reject records whose identifier field is not populated
    fn check_presence(&self, flags: &RecordFlags) -> Result<(), ValidationError> {
        // TODO: confirm with the format owner whether the second arm can be
        // folded away. The discriminator is "01" only when bit02 is missing,
        // which the first arm already rejects, so the arm cannot fire today.
        if flags.bit02_missing
            || (flags.bit02_empty
                && !flags.aux_validation_required
                && flags.validation_discriminator == "01")
        {
            return Err(ValidationError::FieldsNotPopulated);
        }

        Ok(())
    }

    /// A record is processable when bit03, bit05 and bit12 are present and
    /// bit04 carries one of the valid transaction type codes
    fn is_processable(record: &TransactionRecord) -> bool {
        let type_code_valid = record
            .bit04
            .as_ref()
            .map(|field| VALID_TYPE_CODES.contains(&field.value.as_str()))
            .unwrap_or(false);

        record.bit03.is_some() && type_code_valid && record.bit05.is_some() && record.bit12.is_some()
    }
}
