use std::sync::atomic::{AtomicU64, Ordering};

// One lattice cell of the terrain.
// Coordinates are fixed at creation, the height only ever grows.
#[derive(Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    height: AtomicU64,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            height: AtomicU64::new(0),
        }
    }

    // Add `amount` to the height.
    // Each add is atomic so concurrent raises are never lost; no ordering
    // with other points is implied, the join at the end of a run is the barrier.
    #[inline]
    pub fn raise(&self, amount: u64) {
        debug_assert!(amount > 0, "raise amount must be positive");
        self.height.fetch_add(amount, Ordering::Relaxed);
    }

    #[inline]
    pub fn height(&self) -> u64 {
        self.height.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn same_position(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}
