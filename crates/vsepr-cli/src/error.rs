use thiserror::Error;
use vsepr::engine::ShapeError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} formula(s) could not be resolved")]
    PartialFailure { failed: usize, total: usize },
}
