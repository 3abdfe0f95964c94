pub mod sort;

pub use sort::{SortKey, SortStrategy};
