use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroSizedType;

/// Counts how many times it (or any of its clones) has been dropped.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }

    /// The number of live values sharing this counter, including `self`.
    pub fn alive(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// An element that allows a fixed number of clones, shared between all of its copies, and then
/// panics on the next one.
#[derive(Debug)]
pub struct PanicOnClone {
    pub budget: Rc<Cell<usize>>,
    pub drops: CountedDrop,
}

impl PanicOnClone {
    pub fn new(budget: &Rc<Cell<usize>>, drops: &CountedDrop) -> PanicOnClone {
        PanicOnClone {
            budget: Rc::clone(budget),
            drops: drops.clone(),
        }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        match self.budget.get() {
            0 => panic!("clone budget exhausted"),
            left => self.budget.set(left - 1),
        }
        PanicOnClone {
            budget: Rc::clone(&self.budget),
            drops: self.drops.clone(),
        }
    }
}
