use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::rc::Rc;

use derive_more::IsVariant;

use super::Iter;
#[doc(inline)]
pub use crate::util::error::EmptySequence;
use crate::util::result::Throw;

/// An immutable, singly-linked list where every list shares its tail with the list it was built
/// from.
///
/// Prepending with [`ConsList::cons`] leaves the original untouched and reuses all of its nodes,
/// so keeping many versions of a list around only costs one node per version.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ConsList.
///
/// | Method | Complexity |
/// |-|-|
/// | `cons` | `O(1)` |
/// | `head` | `O(1)` |
/// | `tail` | `O(1)` |
/// | `clone` | `O(1)` |
/// | `len` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct ConsList<T> {
    pub(crate) state: ConsState<T>,
}

#[derive(IsVariant)]
pub(crate) enum ConsState<T> {
    Empty,
    Full(Rc<ConsNode<T>>),
}

use ConsState::*;

pub(crate) struct ConsNode<T> {
    pub value: T,
    pub next: ConsState<T>,
}

impl<T> ConsList<T> {
    /// Creates a new ConsList with no elements.
    pub const fn new() -> ConsList<T> {
        ConsList {
            state: Empty,
        }
    }

    /// Returns true if the ConsList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the number of elements, walking the whole list to count them.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns a new list with `value` in front of the elements of `self`. `self` is unchanged and
    /// becomes the tail of the new list.
    pub fn cons(&self, value: T) -> ConsList<T> {
        ConsList {
            state: Full(Rc::new(ConsNode {
                value,
                next: self.state.clone(),
            })),
        }
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn head(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(node) => Some(&node.value),
        }
    }

    /// Returns the list without its first element, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn tail(&self) -> ConsList<T> {
        self.try_tail().throw()
    }

    /// Returns the list without its first element, returning an [`Err`] on a failure rather than
    /// panicking. The returned list shares all of its nodes with `self`.
    pub fn try_tail(&self) -> Result<ConsList<T>, EmptySequence> {
        match &self.state {
            Empty => Err(EmptySequence),
            Full(node) => Ok(ConsList {
                state: node.next.clone(),
            }),
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns true if both lists are backed by the very same nodes.
    pub fn ptr_eq(&self, other: &ConsList<T>) -> bool {
        match (&self.state, &other.state) {
            (Empty, Empty) => true,
            (Full(a), Full(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: PartialEq> ConsList<T> {
    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> Clone for ConsState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(node) => Full(Rc::clone(node)),
        }
    }
}

impl<T> Clone for ConsList<T> {
    fn clone(&self) -> Self {
        ConsList {
            state: self.state.clone(),
        }
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Nodes can only be prepended, so build back to front.
        let items = iter.into_iter().collect::<Vec<T>>();
        items.into_iter().rev().fold(ConsList::new(), |list, item| list.cons(item))
    }
}

impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes one at a time, rather than letting the default drop recurse
        // once per node. Stops at the first node that is still shared.
        let mut state = mem::replace(&mut self.state, Empty);
        while let Full(node) = state {
            match Rc::try_unwrap(node) {
                Ok(ConsNode { next, .. }) => state = next,
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for value in self.iter() {
            value.hash(state);
            len += 1;
        }

        // Terminate variable length hashing sequence.
        len.hash(state);
    }
}

impl<T: Debug> Debug for ConsList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConsList")
            .field(&DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a ConsList<T>);

impl<T: Debug> Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for ConsList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}

#[cfg(feature = "thunk")]
mod lazy {
    use super::ConsList;
    use crate::collections::thunk::{Step, Thunk};

    // Captures a ConsList, not a bare ConsState, so dropping a view unlinks through its Drop.
    fn view<'a, T: Clone + 'a>(list: ConsList<T>) -> Thunk<'a, T> {
        Thunk::new(move || match list.head() {
            None => Step::End,
            Some(head) => Step::Cons(head.clone(), view(list.tail())),
        })
    }

    impl<'a, T: Clone + 'a> From<ConsList<T>> for Thunk<'a, T> {
        /// Creates a lazy view over the list. The view shares the list's nodes rather than copying
        /// them.
        fn from(list: ConsList<T>) -> Self {
            view(list)
        }
    }

    impl<T: Clone> ConsList<T> {
        /// Shorthand for converting a clone of this list into a [`Thunk`].
        pub fn to_thunk<'a>(&self) -> Thunk<'a, T>
        where
            T: 'a,
        {
            Thunk::from(self.clone())
        }
    }
}
