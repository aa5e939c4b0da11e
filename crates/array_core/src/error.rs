//! Error types for array generation.

use thiserror::Error;

/// Errors raised while generating a random array.
///
/// # Examples
/// ```
/// use array_core::GeneratorError;
///
/// let err = GeneratorError::InvalidArgument { size: 0 };
/// assert_eq!(format!("{}", err), "Invalid argument: size must be positive, got 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The requested size is not a positive integer.
    #[error("Invalid argument: size must be positive, got {size}")]
    InvalidArgument {
        /// Requested size
        size: usize,
    },

    /// The array could not be allocated.
    #[error("Resource exhausted: cannot allocate a {rows}x{cols} array")]
    ResourceExhausted {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Buffer and shape disagreed when building the array.
    #[error("Shape error: {0}")]
    Shape(String),
}

impl From<ndarray::ShapeError> for GeneratorError {
    fn from(err: ndarray::ShapeError) -> Self {
        GeneratorError::Shape(err.to_string())
    }
}

/// Result type for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
