use txgate::{
    config::Config,
    RecordStatus, TransactionRecord, TransactionValidator, ValidationReport,
};
use std::fs;
use tracing::info;

/// The main entry point for the txgate harness.
///
/// Initializes logging, loads the configuration, reads a JSON array of
/// transaction records and validates each one, printing a JSON report line
/// per record.
fn main() -> anyhow::Result<()> {
    // Initialize logging using tracing_subscriber.
    tracing_subscriber::fmt::init();

    let config = Config::load("config/default.toml")?;
    info!("txgate starting with config: {:?}", config);

    // Read the records to validate from the configured JSON file.
    let content = fs::read_to_string(&config.input.records_path)?;
    let records: Vec<TransactionRecord> = serde_json::from_str(&content)?;
    info!("loaded {} record(s) from {}", records.len(), config.input.records_path);

    let validator = TransactionValidator::new();

    for (index, record) in records.iter().enumerate() {
        let status = match validator.validate(record) {
            Ok(()) => RecordStatus::Accepted,
            Err(e) => RecordStatus::Rejected {
                reason: e.to_string(),
            },
        };

        let report = ValidationReport {
            index,
            status,
            timestamp: chrono::Utc::now().timestamp() as u64,
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}
