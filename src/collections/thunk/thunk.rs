use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use derive_more::IsVariant;
use super::{Iter, Memo, conj};
#[doc(inline)]
pub use crate::util::error::{EmptySequence, IndexOutOfBounds, NegativeCount, SequenceError};
use crate::util::result::Throw;

/// A lazy, singly-linked sequence where every link is a deferred computation.
///
/// A Thunk is a shared producer which, when [forced](Thunk::force), returns a [`Step`]: either
/// [`Step::End`] or the next element along with another Thunk for the rest of the sequence. Nothing
/// is computed until a Thunk is forced, and forcing it again recomputes the same result. Producers
/// are expected to be pure; if one is expensive, see [`Thunk::memoize`].
///
/// Cloning a Thunk is cheap and shares the producer, so the same sequence can be handed to any
/// number of combinators without re-deriving it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the sequence.
/// - `i`: The index of the element in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `map/filter/take/take_while/zip/bind` | `O(1)`, nothing is forced |
/// | `force` | `O(1)` plus the cost of the producer |
/// | `nth` | `O(i)` |
/// | `fold/to_vec` | `O(n)` |
///
/// Any method that walks the whole sequence (`fold`, `to_vec`, iterating to the end) never returns
/// if the sequence is infinite.
pub struct Thunk<'a, T> {
    pub(crate) eval: Rc<dyn Producer<'a, T> + 'a>,
}

/// Whatever sits behind a [`Thunk`]: usually a plain closure, or a [`Memo`] node.
pub(crate) trait Producer<'a, T> {
    fn produce(&self) -> Step<'a, T>;

    /// Removes and returns the tail this producer has cached, if it caches anything.
    fn detach(&mut self) -> Option<Thunk<'a, T>> {
        None
    }
}

impl<'a, T, F> Producer<'a, T> for F
where
    F: Fn() -> Step<'a, T>,
{
    fn produce(&self) -> Step<'a, T> {
        self()
    }
}

/// The result of forcing a [`Thunk`].
///
/// `End` is its own variant rather than a special element value, so every `T`, including
/// [`Option::None`] or `()`, is a valid element.
#[derive(Clone, Debug, IsVariant)]
pub enum Step<'a, T> {
    /// The sequence is exhausted.
    End,
    /// The next element and the (unevaluated) rest of the sequence.
    Cons(T, Thunk<'a, T>),
}

use Step::*;

impl<'a, T> Step<'a, T> {
    /// Splits a `Cons` step into its head and tail, returning [`None`] for `End`.
    pub fn into_parts(self) -> Option<(T, Thunk<'a, T>)> {
        match self {
            End => None,
            Cons(head, tail) => Some((head, tail)),
        }
    }

    /// Returns the element carried by this step, if there is one.
    pub fn into_head(self) -> Option<T> {
        self.into_parts().map(|(head, _)| head)
    }
}

impl<'a, T: 'a> Thunk<'a, T> {
    /// Creates a Thunk from a producer. The producer isn't invoked until the Thunk is forced.
    pub fn new<F>(producer: F) -> Thunk<'a, T>
    where
        F: Fn() -> Step<'a, T> + 'a,
    {
        Thunk {
            eval: Rc::new(producer),
        }
    }

    /// Creates a Thunk which immediately ends.
    pub fn empty() -> Thunk<'a, T> {
        Thunk::new(|| End)
    }

    /// Creates a Thunk which yields `head` followed by the elements of `tail`.
    pub fn cons(head: T, tail: Thunk<'a, T>) -> Thunk<'a, T>
    where
        T: Clone,
    {
        Thunk::new(move || Cons(head.clone(), tail.clone()))
    }

    /// Creates a Thunk over the provided elements. The elements are shared between every Thunk
    /// derived from the returned one, so restarting the traversal doesn't copy the list.
    pub fn from_list(items: impl Into<Rc<[T]>>) -> Thunk<'a, T>
    where
        T: Clone,
    {
        from_shared(items.into(), 0)
    }

    /// Creates an infinite Thunk yielding `seed`, `step(seed)`, `step(step(seed))` and so on.
    ///
    /// `step` is only called when the tail of an element is forced.
    pub fn iterate<F>(seed: T, step: F) -> Thunk<'a, T>
    where
        T: Clone,
        F: Fn(&T) -> T + 'a,
    {
        iterate_with(seed, Rc::new(step))
    }

    /// Creates an infinite Thunk yielding `value` forever.
    pub fn repeat(value: T) -> Thunk<'a, T>
    where
        T: Clone,
    {
        Thunk::new(move || Cons(value.clone(), Thunk::repeat(value.clone())))
    }

    /// Creates a Thunk by repeatedly applying `step` to a state. Each call returns the next element
    /// and the state for the following call, or [`None`] to end the sequence.
    pub fn unfold<S, F>(state: S, step: F) -> Thunk<'a, T>
    where
        S: 'a,
        F: Fn(&S) -> Option<(T, S)> + 'a,
    {
        unfold_with(state, Rc::new(step))
    }

    /// Invokes the producer, returning the next [`Step`] of the sequence.
    ///
    /// Any panic raised by the producer propagates from here untouched.
    pub fn force(&self) -> Step<'a, T> {
        self.eval.produce()
    }

    /// Returns true if the sequence has no elements. Forces the first step.
    pub fn is_empty(&self) -> bool {
        self.force().is_end()
    }

    /// Returns the first element of the sequence, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the sequence is empty.
    pub fn head(&self) -> T {
        self.try_head().throw()
    }

    /// Returns the first element of the sequence, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_head(&self) -> Result<T, EmptySequence> {
        self.force().into_head().ok_or(EmptySequence)
    }

    /// Returns the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the sequence ends before reaching `index`.
    pub fn nth(&self, index: usize) -> T {
        self.try_nth(index).throw()
    }

    /// Returns the element at the provided `index`, returning an [`Err`] on a failure rather than
    /// panicking. Only the elements up to and including `index` are forced.
    pub fn try_nth(&self, index: usize) -> Result<T, IndexOutOfBounds> {
        let mut step = self.force();
        let mut seen = 0;
        loop {
            match step {
                End => break Err(IndexOutOfBounds { index, len: seen }),
                Cons(head, _) if seen == index => break Ok(head),
                Cons(_, tail) => {
                    seen += 1;
                    step = tail.force();
                },
            }
        }
    }

    /// Strictly walks the whole sequence, combining each element into an accumulator.
    ///
    /// This must not be called on an infinite sequence: it will never return.
    pub fn fold<A, F>(&self, init: A, mut combine: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = init;
        let mut step = self.force();
        while let Cons(head, tail) = step {
            acc = combine(acc, head);
            step = tail.force();
        }
        acc
    }

    /// Collects the whole sequence into a [`Vec`]. Has the same restrictions as [`Thunk::fold`].
    pub fn to_vec(&self) -> Vec<T> {
        self.fold(Vec::new(), conj)
    }

    /// Creates a Thunk which forces `self` and, unless it has ended, hands the head and tail to
    /// `continuation` to decide the next step.
    ///
    /// Nothing happens until the returned Thunk is forced. `map`, `filter`, `take` and `take_while`
    /// are all built on this.
    pub fn bind<U, F>(&self, continuation: F) -> Thunk<'a, U>
    where
        U: 'a,
        F: Fn(T, Thunk<'a, T>) -> Step<'a, U> + 'a,
    {
        let thunk = self.clone();
        Thunk::new(move || match thunk.force() {
            End => End,
            Cons(head, tail) => continuation(head, tail),
        })
    }

    /// Lazily applies `transform` to each element. The length of the sequence is unchanged.
    pub fn map<U, F>(&self, transform: F) -> Thunk<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + 'a,
    {
        map_with(self, Rc::new(transform))
    }

    /// Lazily skips every element for which `predicate` returns false.
    ///
    /// Forcing the result forces the underlying sequence until a matching element is found. The
    /// search is a loop, so long runs of skipped elements don't grow the stack.
    pub fn filter<P>(&self, predicate: P) -> Thunk<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        filter_with(self, Rc::new(predicate))
    }

    /// Yields at most `n` elements. An element is only forced if it is going to be yielded, so
    /// `take(0)` never forces `self` at all.
    pub fn take(&self, n: usize) -> Thunk<'a, T> {
        match n.checked_sub(1) {
            None => Thunk::empty(),
            Some(rest) => self.bind(move |head, tail| Cons(head, tail.take(rest))),
        }
    }

    /// Like [`Thunk::take`], but accepting a signed count, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `count` is negative.
    pub fn take_signed(&self, count: isize) -> Thunk<'a, T> {
        self.try_take(count).throw()
    }

    /// Like [`Thunk::take`], but accepting a signed count and returning an [`Err`] rather than
    /// panicking if it is negative.
    pub fn try_take(&self, count: isize) -> Result<Thunk<'a, T>, NegativeCount> {
        usize::try_from(count)
            .map(|n| self.take(n))
            .map_err(|_| NegativeCount { count })
    }

    /// Yields elements while `predicate` holds. The first element that fails it is forced and
    /// discarded, and the sequence ends there.
    pub fn take_while<P>(&self, predicate: P) -> Thunk<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        take_while_with(self, Rc::new(predicate))
    }

    /// Pairs up the elements of `self` and `other`, ending as soon as either one does.
    ///
    /// Unlike the other combinators, forcing the result forces one step of both sides, even when
    /// the first one has already ended.
    pub fn zip<U: 'a>(&self, other: &Thunk<'a, U>) -> Thunk<'a, (T, U)> {
        let (left, right) = (self.clone(), other.clone());
        Thunk::new(move || match (left.force(), right.force()) {
            (Cons(a, left_tail), Cons(b, right_tail)) => Cons((a, b), left_tail.zip(&right_tail)),
            _ => End,
        })
    }

    /// Creates a Thunk where each step is computed at most once, no matter how many times it is
    /// forced or how many clones share it.
    ///
    /// The cached steps keep their elements alive for as long as the returned Thunk (or any tail
    /// taken from it) is. Dropping a long, fully forced chain unlinks it node by node, so it doesn't
    /// recurse. A producer that forces its own memoized Thunk while it is being computed will panic.
    pub fn memoize(&self) -> Thunk<'a, T>
    where
        T: Clone,
    {
        Thunk {
            eval: Rc::new(Memo::new(self.clone())),
        }
    }

    /// Returns an iterator which forces one step of the sequence per element.
    pub fn iter(&self) -> Iter<'a, T> {
        self.into_iter()
    }
}

fn from_shared<'a, T: Clone + 'a>(items: Rc<[T]>, index: usize) -> Thunk<'a, T> {
    Thunk::new(move || match items.get(index) {
        None => End,
        Some(item) => Cons(item.clone(), from_shared(Rc::clone(&items), index + 1)),
    })
}

fn iterate_with<'a, T, F>(seed: T, step: Rc<F>) -> Thunk<'a, T>
where
    T: Clone + 'a,
    F: Fn(&T) -> T + 'a,
{
    Thunk::new(move || {
        let (seed, step) = (seed.clone(), Rc::clone(&step));
        let tail = {
            let seed = seed.clone();
            Thunk::new(move || iterate_with(step(&seed), Rc::clone(&step)).force())
        };
        Cons(seed, tail)
    })
}

fn unfold_with<'a, T, S, F>(state: S, step: Rc<F>) -> Thunk<'a, T>
where
    T: 'a,
    S: 'a,
    F: Fn(&S) -> Option<(T, S)> + 'a,
{
    Thunk::new(move || match step(&state) {
        None => End,
        Some((item, next)) => Cons(item, unfold_with(next, Rc::clone(&step))),
    })
}

fn map_with<'a, T, U, F>(thunk: &Thunk<'a, T>, transform: Rc<F>) -> Thunk<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(T) -> U + 'a,
{
    thunk.bind(move |head, tail| Cons(transform(head), map_with(&tail, Rc::clone(&transform))))
}

fn filter_with<'a, T, P>(thunk: &Thunk<'a, T>, predicate: Rc<P>) -> Thunk<'a, T>
where
    T: 'a,
    P: Fn(&T) -> bool + 'a,
{
    thunk.bind(move |head, tail| {
        let mut step = Cons(head, tail);
        loop {
            match step {
                End => break End,
                Cons(head, tail) if predicate(&head) => {
                    break Cons(head, filter_with(&tail, Rc::clone(&predicate)));
                },
                Cons(_, tail) => step = tail.force(),
            }
        }
    })
}

fn take_while_with<'a, T, P>(thunk: &Thunk<'a, T>, predicate: Rc<P>) -> Thunk<'a, T>
where
    T: 'a,
    P: Fn(&T) -> bool + 'a,
{
    thunk.bind(move |head, tail| {
        if predicate(&head) {
            Cons(head, take_while_with(&tail, Rc::clone(&predicate)))
        } else {
            End
        }
    })
}

impl<'a, T> Clone for Thunk<'a, T> {
    fn clone(&self) -> Self {
        Thunk {
            eval: Rc::clone(&self.eval),
        }
    }
}

impl<'a, T: 'a> Default for Thunk<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Thunk<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Thunk::from_list(iter.into_iter().collect::<Rc<[T]>>())
    }
}

impl<'a, T> Debug for Thunk<'a, T> {
    // Never forces the sequence.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk").finish_non_exhaustive()
    }
}
