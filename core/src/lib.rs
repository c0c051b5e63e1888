// core holds the concurrent fault-line terrain engine and the
// height-map / image helpers the binaries build on
pub mod budget;
pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod fault;
pub mod grid;
pub mod point;
pub mod render;
pub mod utils;

pub use budget::FaultBudget;
pub use cancel::CancelToken;
pub use config::TerrainConfig;
pub use engine::{GenerationStatus, Terrain, TerrainEngine, generate};
pub use error::{Result, TerrainError};
pub use fault::{FaultLine, Worker, WorkerState};
pub use grid::Grid;
pub use point::Point;
pub use render::{Palette, render, save_png};
pub use utils::{HeightMap2D, flatten2, normalize2};
