// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DomainError, DomainResult, ErrorContext, InfrastructureError, JidSortError, Result};

pub mod error;
