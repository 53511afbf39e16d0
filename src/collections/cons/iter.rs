use std::iter::FusedIterator;

use super::{ConsList, ConsNode, ConsState};

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            node: node_of(&self.state),
        }
    }
}

fn node_of<T>(state: &ConsState<T>) -> Option<&ConsNode<T>> {
    match state {
        ConsState::Empty => None,
        ConsState::Full(node) => Some(&**node),
    }
}

/// A borrowed iterator over the elements of a [`ConsList`].
pub struct Iter<'a, T> {
    pub(crate) node: Option<&'a ConsNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node_of(&node.next);
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            node: self.node,
        }
    }
}
