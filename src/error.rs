use thiserror::Error;

/// Scene-authoring errors. Geometric misses are never errors; they are empty results.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("matrix is not invertible (determinant {determinant})")]
    NonInvertibleMatrix { determinant: f64 },

    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
}

pub type Result<T> = std::result::Result<T, Error>;
