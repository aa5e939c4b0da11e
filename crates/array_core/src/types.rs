//! Array, layout and shape types.

use crate::config::ConfigError;
use crate::error::{GeneratorError, GeneratorResult};

/// Dense two-dimensional array of `f64` values in row-major order.
pub type Array = ndarray::Array2<f64>;

/// Column layout of a generated array.
///
/// Both layouts have `size` rows; they differ only in the column count.
///
/// # Examples
/// ```
/// use array_core::types::Layout;
///
/// assert_eq!(Layout::Square.columns(4), 4);
/// assert_eq!(Layout::TwoColumn.columns(4), 2);
/// assert_eq!("two-column".parse::<Layout>().unwrap(), Layout::TwoColumn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// `(size, size)` matrix.
    #[default]
    Square,
    /// `(size, 2)` table.
    TwoColumn,
}

impl Layout {
    /// Number of columns produced for the given size.
    #[inline]
    pub fn columns(&self, size: usize) -> usize {
        match self {
            Layout::Square => size,
            Layout::TwoColumn => 2,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Square => "square",
            Layout::TwoColumn => "two-column",
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(Layout::Square),
            "two-column" | "two_column" | "twocolumn" | "2col" => Ok(Layout::TwoColumn),
            _ => Err(ConfigError::InvalidLayout(s.to_string())),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row and column counts of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Shape {
    /// Resolves the shape for `size` under `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] when `size` is zero.
    pub fn for_size(size: usize, layout: Layout) -> GeneratorResult<Self> {
        if size == 0 {
            return Err(GeneratorError::InvalidArgument { size });
        }
        Ok(Self {
            rows: size,
            cols: layout.columns(size),
        })
    }

    /// Total element count, or `ResourceExhausted` if it overflows `usize`.
    pub fn len(&self) -> GeneratorResult<usize> {
        self.rows
            .checked_mul(self.cols)
            .ok_or(GeneratorError::ResourceExhausted {
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Returns `true` if the shape holds no elements.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Shape as an `(rows, cols)` tuple, matching `ndarray`'s `dim()`.
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}
