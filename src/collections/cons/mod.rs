//! A module containing [`ConsList`] and its borrowed iterator, [`Iter`].
//!
//! There is no mutable or owned iterator, the nodes of a ConsList may be shared with any number of
//! other lists.
//!
//! [`ConsList`] is also re-exported at the crate root.

mod cons_list;
mod iter;
mod tests;

pub use cons_list::*;
pub use iter::*;
