//! A module containing [`Thunk`] and associated types.
//!
//! [`Step`] is what forcing a Thunk produces and [`Iter`] adapts a Thunk to [`Iterator`]. The
//! [`conj`] and [`conj_mut`] helpers are the only functions here that mutate anything, they exist to
//! collect a sequence through [`Thunk::fold`].

mod conj;
mod iter;
mod memo;
mod thunk;

pub use conj::*;
pub use iter::*;
pub(crate) use memo::*;
pub use thunk::*;
