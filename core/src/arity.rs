use crate::error::{HeapError, Result};

/// Maximum number of children per heap node, always at least 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity(usize);

impl Arity {
    pub const BINARY: Arity = Arity(2);
    pub const TERNARY: Arity = Arity(3);
    pub const QUATERNARY: Arity = Arity(4);

    pub const fn new(arity: usize) -> Result<Self> {
        if arity < 2 {
            Err(HeapError::InvalidArity(arity))
        } else {
            Ok(Arity(arity))
        }
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for Arity {
    fn default() -> Self {
        Self::BINARY
    }
}

impl TryFrom<usize> for Arity {
    type Error = HeapError;

    fn try_from(arity: usize) -> Result<Self> {
        Self::new(arity)
    }
}

impl From<Arity> for usize {
    fn from(arity: Arity) -> usize {
        arity.get()
    }
}
