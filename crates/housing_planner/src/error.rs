//! # Planner Error Types
//!
//! All errors that can occur before or during plan generation.

use thiserror::Error;

/// Errors that can occur in the planner.
///
/// None of these are recoverable by the generator itself; it returns
/// immediately and never hands out a partial plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// Width or length is zero.
    #[error("invalid grid dimension: {width}x{length}")]
    InvalidDimension {
        /// Requested grid width.
        width: usize,
        /// Requested grid length.
        length: usize,
    },

    /// Kernel size is zero or larger than the smaller grid side.
    #[error("invalid kernel size {kernel_size} for a {width}x{length} grid")]
    InvalidKernel {
        /// Requested kernel size.
        kernel_size: usize,
        /// Grid width.
        width: usize,
        /// Grid length.
        length: usize,
    },

    /// The floor cap was reached while the top floor still had buildable cells.
    #[error("generation did not terminate within {max_floors} floors")]
    GenerationCapExceeded {
        /// Configured maximum number of floors (ground floor included).
        max_floors: usize,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Layout parameter outside its allowed range.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_values() {
        let err = PlannerError::InvalidKernel {
            kernel_size: 11,
            width: 10,
            length: 10,
        };
        assert_eq!(err.to_string(), "invalid kernel size 11 for a 10x10 grid");

        let err = PlannerError::GenerationCapExceeded { max_floors: 3 };
        assert_eq!(
            err.to_string(),
            "generation did not terminate within 3 floors"
        );
    }
}
