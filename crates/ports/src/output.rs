// crates/ports/src/output.rs
use jid_sort_shared_kernel::Result;

/// Port for emitting the sorted list instead of rewriting the source.
pub trait ListPrinter: Send + Sync {
    /// Print `text` followed by a single newline.
    fn print_list(&self, text: &str) -> Result<()>;
}
