// src/config.rs
use std::path::{Path, PathBuf};

use jid_sort_domain::options::{LineEnding, OutputMode};
use jid_sort_ports::filesystem::backup_path_for;
use jid_sort_usecase::SortRequest;
use log::LevelFilter;

use crate::cli::Args;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub mode: OutputMode,
    pub line_ending: LineEnding,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn backup_path(&self) -> PathBuf {
        backup_path_for(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_request(&self) -> SortRequest {
        SortRequest { path: self.path.clone(), mode: self.mode, line_ending: self.line_ending }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            path: args.filename,
            mode: OutputMode::from(args.stdout),
            line_ending: LineEnding::platform(),
            log_level: if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn },
        }
    }
}
