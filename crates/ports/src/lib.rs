//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: reading a JID list and replacing it behind a backup
//! - [`diagnostics`]: reporting lines that were skipped
//! - [`output`]: printing the sorted list
//!
//! These ports keep the use case independent of stdout and the local disk.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod filesystem;
pub mod output;
