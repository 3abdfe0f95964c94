// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "jid_sort",
    version = crate::VERSION,
    about = "Read, sort, and by default overwrite a list of Jabber IDs"
)]
pub struct Args {
    /// filename to sort
    #[arg(value_hint = ValueHint::FilePath)]
    pub filename: PathBuf,

    /// print sorted list instead of overwriting file
    #[arg(long)]
    pub stdout: bool,

    /// log each step to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
