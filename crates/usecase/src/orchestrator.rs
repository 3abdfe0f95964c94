use jid_sort_domain::{
    analytics::SortStrategy, model::Jid, options::OutputMode, parsing::split_jids, rendering::join_jids,
};
use jid_sort_ports::{diagnostics::DiagnosticSink, filesystem::JidListStore, output::ListPrinter};
use jid_sort_shared_kernel::{ErrorContext, Result};
use log::{debug, info};

use crate::dto::{SortOutcome, SortRequest};

/// Reads a JID list, sorts it by domain then username, and writes it back.
pub struct SortJidList<'a> {
    store: &'a dyn JidListStore,
    diagnostics: &'a dyn DiagnosticSink,
    printer: &'a dyn ListPrinter,
    strategy: SortStrategy,
}

impl<'a> SortJidList<'a> {
    pub fn new(
        store: &'a dyn JidListStore,
        diagnostics: &'a dyn DiagnosticSink,
        printer: &'a dyn ListPrinter,
    ) -> Self {
        Self { store, diagnostics, printer, strategy: SortStrategy::default() }
    }

    /// # Errors
    /// Any filesystem or output failure. Unparsable lines are reported to the
    /// diagnostic sink and do not fail the run.
    pub fn run(&self, request: &SortRequest) -> Result<SortOutcome> {
        let lines = self
            .store
            .read_lines(&request.path)
            .with_context(|| format!("reading {}", request.path.display()))?;
        debug!("read {} lines from {}", lines.len(), request.path.display());

        let (mut jids, skipped) = self.parse(&lines)?;
        self.strategy.apply(&mut jids);
        let text = join_jids(&jids);

        let mut outcome = SortOutcome { sorted: jids.len(), skipped, backup: None };
        match request.mode {
            OutputMode::Stdout => self.printer.print_list(&text)?,
            OutputMode::InPlace => {
                let contents = text + request.line_ending.as_str();
                let backup = self
                    .store
                    .replace_with_backup(&request.path, &contents)
                    .with_context(|| format!("rewriting {}", request.path.display()))?;
                debug!("previous contents kept at {}", backup.display());
                outcome.backup = Some(backup);
            }
        }
        Ok(outcome)
    }

    fn parse(&self, lines: &[String]) -> Result<(Vec<Jid>, usize)> {
        let mut jids = Vec::with_capacity(lines.len());
        let mut skipped = 0;
        for parsed in split_jids(lines) {
            match parsed {
                Ok(jid) => jids.push(jid),
                Err(problem) => {
                    info!("skipping line: {problem}");
                    self.diagnostics.report(&problem)?;
                    skipped += 1;
                }
            }
        }
        Ok((jids, skipped))
    }
}
