use crate::error::{Result, TerrainError};

pub const MIN_SIDE: usize = 5;
pub const MIN_THREADS: usize = 1;
pub const MIN_FAULTS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainConfig {
    pub width: usize,
    pub height: usize,
    pub threads: usize,
    pub faults: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            threads: 1,
            faults: 1000,
        }
    }
}

impl TerrainConfig {
    pub fn new(width: usize, height: usize, threads: usize, faults: usize) -> Self {
        Self {
            width,
            height,
            threads,
            faults,
        }
    }

    // Reports the first minimum that is violated
    pub fn validate(&self) -> Result<()> {
        let Some(len) = self.width.checked_mul(self.height) else {
            return Err(TerrainError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        };
        if len < 2 {
            return Err(TerrainError::DegenerateGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width < MIN_SIDE {
            return Err(TerrainError::InvalidDimension {
                axis: "width",
                value: self.width,
                min: MIN_SIDE,
            });
        }
        if self.height < MIN_SIDE {
            return Err(TerrainError::InvalidDimension {
                axis: "height",
                value: self.height,
                min: MIN_SIDE,
            });
        }
        if self.threads < MIN_THREADS {
            return Err(TerrainError::InvalidThreadCount(self.threads));
        }
        if self.faults < MIN_FAULTS {
            return Err(TerrainError::InvalidFaultCount(self.faults));
        }
        Ok(())
    }

    // Lift every field up to its minimum instead of rejecting it
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_SIDE),
            height: self.height.max(MIN_SIDE),
            threads: self.threads.max(MIN_THREADS),
            faults: self.faults.max(MIN_FAULTS),
        }
    }
}
