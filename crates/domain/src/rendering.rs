// crates/domain/src/rendering.rs
use std::fmt::Write;

use crate::model::Jid;

/// Join serialized JIDs with `\n`, without a trailing separator.
pub fn join_jids(jids: &[Jid]) -> String {
    let mut out = String::new();
    for (i, jid) in jids.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{jid}");
    }
    out
}
