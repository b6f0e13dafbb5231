use thiserror::Error;

/// Top-level error type for polygon cutting.
#[derive(Debug, Error)]
pub enum PolycutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("line endpoints coincide at ({x}, {y})")]
    CoincidentPoints { x: f64, y: f64 },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors related to cut operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PolycutError`].
pub type Result<T> = std::result::Result<T, PolycutError>;
