//! This crate is a small collection of lazy and persistent list types, written in the style of a
//! standard library collection.
//!
//! # Purpose
//! The main type here is [`Thunk`](collections::thunk::Thunk), a singly-linked sequence where every
//! link is a deferred computation. Nothing is evaluated until something asks for it, so a Thunk can
//! describe an infinite sequence as long as whatever consumes it stops at some point (with
//! [`take`](collections::thunk::Thunk::take) or
//! [`take_while`](collections::thunk::Thunk::take_while), for example).
//!
//! Alongside it lives [`ConsList`](collections::cons::ConsList), an immutable list that shares its
//! tail with every list built on top of it. A ConsList can be viewed lazily as a Thunk without
//! copying anything.
//!
//! # Error Handling
//! Functions that can fail because of a caller mistake come in pairs, like `try_nth` and `nth`. The
//! `try_` version returns a [`Result`] with a small error struct, and the other one panics with that
//! error's message. Errors that happen inside a producer (a panic in a closure passed to `map`, for
//! example) are never caught. They unwind straight through whatever combinator was forcing the
//! sequence.
//!
//! # Dependencies
//! The error types use `derive_more` to avoid repetitive `Display` and `Error` impls, and
//! [`Thunk::memoize`](collections::thunk::Thunk::memoize) stores its cached steps in a
//! `once_cell` cell.
//!
//! # Threads
//! Everything here is built on [`Rc`](std::rc::Rc), so none of these types can be sent between
//! threads.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[cfg(feature = "thunk")]
#[doc(inline)]
pub use collections::thunk::{Step, Thunk, conj, conj_mut};
#[cfg(feature = "cons")]
#[doc(inline)]
pub use collections::cons::ConsList;
