use std::sync::atomic::{AtomicUsize, Ordering};

// Shared count of faults still to be generated.
// Exactly `initial` claims succeed, however many threads race on it.
#[derive(Debug)]
pub struct FaultBudget {
    initial: usize,
    remaining: AtomicUsize,
}

impl FaultBudget {
    pub fn new(faults: usize) -> Self {
        Self {
            initial: faults,
            remaining: AtomicUsize::new(faults),
        }
    }

    // Take one unit of work. Check and decrement happen in a single CAS,
    // so the counter never goes below zero.
    pub fn claim(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    pub fn initial(&self) -> usize {
        self.initial
    }

    pub fn claimed(&self) -> usize {
        self.initial - self.remaining()
    }
}
