use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::{Producer, Step, Thunk};

/// A node of a memoized sequence: the source step it wraps and the step once it has been computed.
pub(crate) struct Memo<'a, T> {
    source: Thunk<'a, T>,
    cell: OnceCell<Step<'a, T>>,
}

impl<'a, T> Memo<'a, T> {
    pub fn new(source: Thunk<'a, T>) -> Memo<'a, T> {
        Memo {
            source,
            cell: OnceCell::new(),
        }
    }

    fn take_tail(&mut self) -> Option<Thunk<'a, T>> {
        self.cell.take()?.into_parts().map(|(_, tail)| tail)
    }
}

impl<'a, T: Clone + 'a> Producer<'a, T> for Memo<'a, T> {
    fn produce(&self) -> Step<'a, T> {
        self.cell
            .get_or_init(|| match self.source.force() {
                Step::End => Step::End,
                Step::Cons(head, tail) => Step::Cons(head, tail.memoize()),
            })
            .clone()
    }

    fn detach(&mut self) -> Option<Thunk<'a, T>> {
        self.take_tail()
    }
}

impl<'a, T> Drop for Memo<'a, T> {
    fn drop(&mut self) {
        // Empty each uniquely owned tail before it goes, so dropping it never reaches the next
        // node. Stops at the first tail that is still shared.
        let mut next = self.take_tail();
        while let Some(mut tail) = next {
            next = Rc::get_mut(&mut tail.eval).and_then(|producer| producer.detach());
        }
    }
}
