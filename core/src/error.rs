use thiserror::Error;

pub type Result<T> = std::result::Result<T, TerrainError>;

#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("{axis} must be at least {min}, got {value}")]
    InvalidDimension {
        axis: &'static str,
        value: usize,
        min: usize,
    },

    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    #[error("fault count must be at least 1, got {0}")]
    InvalidFaultCount(usize),

    // A fault line needs two distinct endpoints
    #[error("a {width}x{height} grid has fewer than two points to draw a fault between")]
    DegenerateGrid { width: usize, height: usize },

    #[error("a {width}x{height} grid has more points than can be addressed")]
    GridTooLarge { width: usize, height: usize },

    #[error("a fault worker panicked before finishing")]
    WorkerPanicked,

    #[error("unknown palette `{0}` (expected `ocean` or `terrain`)")]
    UnknownPalette(String),

    #[error("failed to write terrain image: {0}")]
    Image(#[from] image::ImageError),
}
