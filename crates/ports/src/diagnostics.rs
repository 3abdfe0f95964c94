// crates/ports/src/diagnostics.rs
use jid_sort_shared_kernel::{DomainError, Result};

/// Receives recoverable per-line problems. Reporting one never aborts a run.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, problem: &DomainError) -> Result<()>;
}
