use log::debug;
use rand::Rng;

use crate::budget::FaultBudget;
use crate::cancel::CancelToken;
use crate::grid::Grid;
use crate::point::Point;

// Height adjustment per fault is drawn from [MIN_ADJUSTMENT, MAX_ADJUSTMENT].
// Never 0, a zero raise would be a wasted pass.
pub const MIN_ADJUSTMENT: u64 = 1;
pub const MAX_ADJUSTMENT: u64 = 10;

// Directed line from one grid point to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultLine {
    pub start: (i64, i64),
    pub end: (i64, i64),
}

impl FaultLine {
    pub fn new(start: (i64, i64), end: (i64, i64)) -> Self {
        Self { start, end }
    }

    pub fn between(end1: &Point, end2: &Point) -> Self {
        Self::new(
            (end1.x as i64, end1.y as i64),
            (end2.x as i64, end2.y as i64),
        )
    }

    // Two random endpoints from the grid. `end2` is redrawn until it differs
    // from `end1`; Grid::new guarantees at least two points exist.
    pub fn random<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        let end1 = grid.sample_with(rng);
        let mut end2 = grid.sample_with(rng);
        while end2.same_position(end1) {
            end2 = grid.sample_with(rng);
        }
        Self::between(end1, end2)
    }

    // 2D cross product of (end - start) and (p - start).
    // Positive means p is to the left of the directed line.
    #[inline]
    pub fn cross(&self, x: i64, y: i64) -> i64 {
        let (x1, y1) = self.start;
        let (x2, y2) = self.end;
        (x2 - x1) * (y - y1) - (x - x1) * (y2 - y1)
    }

    // Points on the line itself are not left
    #[inline]
    pub fn is_left(&self, p: &Point) -> bool {
        self.cross(p.x as i64, p.y as i64) > 0
    }

    // Raise every point left of the line by `adj`, returns how many moved
    pub fn apply(&self, grid: &Grid, adj: u64) -> usize {
        let mut raised = 0;
        for p in grid.points() {
            if self.is_left(p) {
                p.raise(adj);
                raised += 1;
            }
        }
        raised
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Running,
    Finished,
}

// One generation thread's loop: claim a fault from the shared budget,
// run a full pass over the grid, repeat until nothing is left.
pub struct Worker<'a> {
    id: usize,
    grid: &'a Grid,
    budget: &'a FaultBudget,
    cancel: &'a CancelToken,
    applied: usize,
}

impl<'a> Worker<'a> {
    pub fn new(id: usize, grid: &'a Grid, budget: &'a FaultBudget, cancel: &'a CancelToken) -> Self {
        Self {
            id,
            grid,
            budget,
            cancel,
            applied: 0,
        }
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    // Claim and run one fault. The cancel flag is read before claiming so
    // a claimed fault is always carried through to the end of its pass.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WorkerState {
        if self.cancel.is_cancelled() || !self.budget.claim() {
            return WorkerState::Finished;
        }

        let line = FaultLine::random(self.grid, rng);
        let adj = rng.gen_range(MIN_ADJUSTMENT..=MAX_ADJUSTMENT);
        line.apply(self.grid, adj);
        self.applied += 1;

        WorkerState::Running
    }

    // Run to completion on this thread's generator, returns faults applied
    pub fn run(mut self) -> usize {
        let mut rng = rand::thread_rng();
        while self.step(&mut rng) == WorkerState::Running {}

        debug!("worker {} finished after {} faults", self.id, self.applied);
        self.applied
    }
}
