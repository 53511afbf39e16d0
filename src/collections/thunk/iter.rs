use std::iter::FusedIterator;

use super::{Step, Thunk};

impl<'a, T: 'a> IntoIterator for Thunk<'a, T> {
    type Item = T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: Some(self),
        }
    }
}

impl<'a, T: 'a> IntoIterator for &Thunk<'a, T> {
    type Item = T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.clone().into_iter()
    }
}

/// An iterator over the elements of a [`Thunk`], forcing one step per call to `next`.
///
/// Elements are produced fresh by each step, so this yields owned values even when created from a
/// borrowed Thunk.
pub struct Iter<'a, T> {
    // None once the sequence has ended, so that an exhausted iterator never forces anything again.
    pub(crate) next: Option<Thunk<'a, T>>,
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next.take()?.force() {
            Step::End => None,
            Step::Cons(head, tail) => {
                self.next = Some(tail);
                Some(head)
            },
        }
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}
