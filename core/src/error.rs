use thiserror::Error;

/// Errors returned by [`Heap`](crate::Heap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `top` or `pop` was called on a heap with no elements.
    #[error("heap underflow: {operation} called on an empty heap")]
    Underflow { operation: &'static str },

    /// A heap was requested with fewer than two children per node.
    #[error("invalid heap arity {0}, expected at least 2")]
    InvalidArity(usize),
}

impl HeapError {
    pub(crate) const fn underflow(operation: &'static str) -> Self {
        HeapError::Underflow { operation }
    }

    /// Returns `true` for the empty-heap error kind.
    pub const fn is_underflow(&self) -> bool {
        matches!(self, HeapError::Underflow { .. })
    }
}

pub type Result<T> = core::result::Result<T, HeapError>;
