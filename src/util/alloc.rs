#![cfg(test)]

use std::cell::Cell;
use std::ops::Deref;
use std::rc::Rc;

/// A value that bumps a shared counter every time one of its clones is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a counter starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<Cell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Counts how many times a producer or transform has been invoked.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> CallCounter {
        CallCounter::default()
    }

    /// Records one invocation.
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Returns the number of invocations recorded so far.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}
