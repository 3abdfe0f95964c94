// crates/infra/src/console.rs
//! Console adapters. Both write to stdout by default; tests substitute a buffer.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use jid_sort_ports::{diagnostics::DiagnosticSink, output::ListPrinter};
use jid_sort_shared_kernel::{DomainError, InfrastructureError, Result};

/// Writes one diagnostic line per skipped input line.
pub struct ConsoleDiagnostics<W> {
    out: Mutex<W>,
}

impl ConsoleDiagnostics<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleDiagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> DiagnosticSink for ConsoleDiagnostics<W> {
    fn report(&self, problem: &DomainError) -> Result<()> {
        let mut out = self.out.lock().map_err(|_| poisoned())?;
        writeln!(out, "{problem}")?;
        Ok(())
    }
}

/// Prints the joined list followed by a newline.
pub struct ConsolePrinter<W> {
    out: Mutex<W>,
}

impl ConsolePrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> ListPrinter for ConsolePrinter<W> {
    fn print_list(&self, text: &str) -> Result<()> {
        let mut out = self.out.lock().map_err(|_| poisoned())?;
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }
}

fn poisoned() -> InfrastructureError {
    InfrastructureError::OutputError { message: "console writer lock poisoned".to_string(), source: None }
}
