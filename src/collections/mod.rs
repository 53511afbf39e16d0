//! List types built out of shared, singly-linked nodes.
//!
//! # Purpose
//! [`Thunk`](thunk::Thunk) is the lazy one: each link is only computed when it is forced.
//! [`ConsList`](cons::ConsList) is the eager one: every link already exists, and prepending shares
//! the old list rather than copying it.
//!
//! # Method
//! Both types are cheap to clone because cloning only bumps a reference count. That is what makes
//! structural sharing work: the same sequence can feed any number of downstream combinators.

#[cfg(feature = "cons")]
pub mod cons;
#[cfg(feature = "thunk")]
pub mod thunk;
