use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::budget::FaultBudget;
use crate::cancel::CancelToken;
use crate::config::TerrainConfig;
use crate::error::{Result, TerrainError};
use crate::fault::Worker;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Complete,
    // Stopped early, `remaining` faults were never claimed
    Cancelled { remaining: usize },
}

// A finished run: the grid plus what it took to build it.
// Every worker has been joined by the time one of these exists.
#[derive(Debug)]
pub struct Terrain {
    pub grid: Grid,
    pub config: TerrainConfig,
    pub elapsed: Duration,
    pub faults_applied: usize,
    pub status: GenerationStatus,
}

impl Terrain {
    pub fn is_complete(&self) -> bool {
        self.status == GenerationStatus::Complete
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

// Fault-line terrain generator.
// Builds a fresh grid and budget per run, spawns one worker per thread,
// joins them all and hands back the grid.
pub struct TerrainEngine {
    config: TerrainConfig,
}

impl TerrainEngine {
    // Config is checked here, before any grid or thread exists
    pub fn new(config: TerrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn generate(&self) -> Result<Terrain> {
        self.generate_with_cancel(&CancelToken::new())
    }

    pub fn generate_with_cancel(&self, cancel: &CancelToken) -> Result<Terrain> {
        let TerrainConfig {
            width,
            height,
            threads,
            faults,
        } = self.config;

        let grid = Grid::new(width, height)?;
        let budget = FaultBudget::new(faults);

        let start = Instant::now();
        let (faults_applied, panicked) = thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|id| {
                    let worker = Worker::new(id, &grid, &budget, cancel);
                    s.spawn(move || worker.run())
                })
                .collect();

            // Join every handle, even after a failure, so none outlives the run
            let mut applied = 0;
            let mut panicked = false;
            for handle in handles {
                match handle.join() {
                    Ok(n) => applied += n,
                    Err(_) => panicked = true,
                }
            }
            (applied, panicked)
        });
        let elapsed = start.elapsed();

        if panicked {
            return Err(TerrainError::WorkerPanicked);
        }

        info!(
            "generated {} faults on {}x{} with {} threads in {} ms",
            faults_applied,
            width,
            height,
            threads,
            elapsed.as_millis()
        );

        // A claimed fault always runs its full pass
        debug_assert_eq!(faults_applied, budget.claimed());

        let status = match budget.remaining() {
            0 => GenerationStatus::Complete,
            remaining => {
                warn!(
                    "generation cancelled with {} of {} faults unclaimed",
                    remaining,
                    budget.initial()
                );
                GenerationStatus::Cancelled { remaining }
            }
        };

        Ok(Terrain {
            grid,
            config: self.config,
            elapsed,
            faults_applied,
            status,
        })
    }
}

// One-shot helper: validate, generate, join
pub fn generate(width: usize, height: usize, threads: usize, faults: usize) -> Result<Terrain> {
    TerrainEngine::new(TerrainConfig::new(width, height, threads, faults))?.generate()
}
