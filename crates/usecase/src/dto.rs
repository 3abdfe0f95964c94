// crates/usecase/src/dto.rs
use std::path::PathBuf;

use jid_sort_domain::options::{LineEnding, OutputMode};

/// Input for one sorting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub path: PathBuf,
    pub mode: OutputMode,
    pub line_ending: LineEnding,
}

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// Entries written or printed.
    pub sorted: usize,
    /// Lines reported as unparsable and dropped.
    pub skipped: usize,
    /// Set in in-place mode.
    pub backup: Option<PathBuf>,
}
