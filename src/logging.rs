//! Logging Seam Module
//!
//! The validator and the record store report through the `ValidationLog`
//! trait instead of calling a global logger directly. Production code uses
//! `TracingLog`, which forwards to the `tracing` macros; tests substitute a
//! capturing implementation to assert on emitted lines.

use crate::ValidationError;

/// Log sink for validation events
///
/// Two severities only, matching what validation emits: informational
/// progress lines and one error line carrying the causing failure.
pub trait ValidationLog: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str, cause: &ValidationError);
}

/// Default log sink backed by the `tracing` macros
pub struct TracingLog;

impl ValidationLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str, cause: &ValidationError) {
        tracing::error!(cause = %cause, "{}", message);
    }
}
