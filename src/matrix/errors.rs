// ============================================================================
// Matrix Errors
// Error types for shape-checked matrix operations
// ============================================================================

use std::fmt;

/// Errors that can occur during matrix operations.
///
/// Every variant is a precondition failure: a programmer error, not a runtime
/// condition to recover from. The checked methods surface them as values; the
/// operator forms panic with the same diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixError {
    /// Element-wise operation on operands of different shapes
    ShapeMismatch {
        /// Shape of the left operand as (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        right: (usize, usize),
    },
    /// Multiplication where the left operand's columns do not match the
    /// right operand's rows
    InnerDimensionMismatch {
        /// Shape of the left operand as (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        right: (usize, usize),
    },
    /// View rectangle does not fit within the parent matrix
    ViewOutOfBounds {
        /// Top-left corner of the requested rectangle
        start: (usize, usize),
        /// Extent of the requested rectangle as (rows, cols)
        extent: (usize, usize),
        /// Dimensions of the parent matrix as (rows, cols)
        parent: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: left operand is {}x{}, right operand is {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::InnerDimensionMismatch { left, right } => write!(
                f,
                "inner dimension mismatch: cannot multiply {}x{} by {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::ViewOutOfBounds {
                start,
                extent,
                parent,
            } => write!(
                f,
                "view rectangle {}x{} at ({}, {}) exceeds parent dimensions {}x{}",
                extent.0, extent.1, start.0, start.1, parent.0, parent.1
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Result type alias for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;
