use thiserror::Error;

/// Errors raised while building an index or loading its rectangles.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    #[error("WKT parsing error: {0}")]
    Wkt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
