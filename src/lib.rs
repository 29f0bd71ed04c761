mod element;
mod ordering;
mod priority_heap;

pub mod errors;
pub mod utils;

pub use element::{HasPriority, Prioritized};
pub use errors::HeapError;
pub use ordering::HeapOrdering;
pub use priority_heap::PriorityHeap;
