//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: load, parse, sort and write back a JID list
//! - [`dto`]: request and outcome types for the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{SortOutcome, SortRequest};
pub use orchestrator::SortJidList;
