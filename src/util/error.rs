use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Produced when indexing past the end of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was asked for.
    pub index: usize,
    /// How many elements the sequence turned out to have.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for sequence with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Produced when asking for the head or tail of a sequence that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Sequence is empty!")]
pub struct EmptySequence;

/// Produced when a signed count passed to a bounding operation is below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Count {count} is negative!")]
pub struct NegativeCount {
    /// The count that was passed.
    pub count: isize,
}

/// Any of the errors above, for callers that mix several `try_` operations behind one `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SequenceError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`EmptySequence`].
    EmptySequence(EmptySequence),
    /// See [`NegativeCount`].
    NegativeCount(NegativeCount),
}
