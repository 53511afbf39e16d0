//! The one impure corner of this module: helpers which push into a mutable container.
//!
//! Both are shaped to be handed straight to [`Thunk::fold`](super::Thunk::fold) when a lazy
//! sequence needs to be materialized.

use std::iter;

/// Appends `element` to `container` and returns the same container.
pub fn conj<C, T>(mut container: C, element: T) -> C
where
    C: Extend<T>,
{
    container.extend(iter::once(element));
    container
}

/// Appends `element` to the borrowed `container` and returns the same borrow, for folding into a
/// container the caller keeps hold of.
pub fn conj_mut<C, T>(container: &mut C, element: T) -> &mut C
where
    C: Extend<T>,
{
    container.extend(iter::once(element));
    container
}
