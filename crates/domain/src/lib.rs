//! # Domain
//!
//! Pure JID list logic with no I/O:
//!
//! - [`model`]: the [`Jid`](model::Jid) value type, its parser and serializer
//! - [`parsing`]: lazy line-to-JID adapter
//! - [`analytics`]: ordering of parsed lists
//! - [`rendering`]: joining a sorted list back into text
//! - [`options`]: output mode and line separator choices

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;
pub mod parsing;
pub mod rendering;

pub use model::Jid;
