mod binary_heap;
mod error;
mod order;

pub use binary_heap::{BinaryHeap, MaxHeap, MinHeap};
pub use error::HeapError;
pub use order::{MaxFirst, MinFirst, Order};
