//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod generate;
pub mod worker;

use array_core::Array;

/// Minimum, maximum and mean of an array's elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Smallest element
    pub min: f64,
    /// Largest element
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
}

/// Summarises `array`; `None` for an empty array.
pub fn summarise(array: &Array) -> Option<Summary> {
    let mean = array.mean()?;
    let min = array.iter().copied().fold(f64::INFINITY, f64::min);
    let max = array.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(Summary { min, max, mean })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summarise() {
        let array = Array::from_shape_vec((2, 2), vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        let summary = summarise(&array).unwrap();
        assert_relative_eq!(summary.min, 0.1);
        assert_relative_eq!(summary.max, 0.4);
        assert_relative_eq!(summary.mean, 0.25);
    }

    #[test]
    fn test_summarise_empty() {
        let array = Array::zeros((0, 2));
        assert!(summarise(&array).is_none());
    }
}
