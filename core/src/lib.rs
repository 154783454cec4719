//! An array-backed m-ary heap.
//!
//! [`Heap`] stores its elements in a dense `Vec` laid out as an implicit tree
//! where every node has up to `m` children. The relation that decides which
//! element surfaces at the root is a type parameter implementing
//! [`Priority`], so min-heaps, max-heaps and custom orders share one
//! implementation without dynamic dispatch.

mod arity;
mod error;
mod heap;
mod iter;
mod priority;

pub use arity::Arity;
pub use error::{HeapError, Result};
pub use heap::Heap;
pub use iter::DrainSorted;
pub use priority::{ByKey, Greater, Less, Priority};
