// ============================================================================
// Precision Matrix Library
// Fixed-precision arbitrary-precision matrices with compile-time mantissa width
// ============================================================================

//! # Precision Matrix
//!
//! Dense matrices whose elements carry a caller-chosen mantissa width in bits
//! instead of native machine-float precision.
//!
//! ## Features
//!
//! - **Compile-time precision** via const generics: matrices of different
//!   widths cannot be mixed by accident
//! - **Round-to-nearest arithmetic** (add, subtract, multiply, transpose) at
//!   every scalar operation
//! - **Aliasing views** of rectangular sub-regions for in-place read/write
//!   without copying
//! - **Reproducible random fills** from a fixed seed, for deterministic test
//!   data
//!
//! ## Example
//!
//! ```rust
//! use precision_matrix::prelude::*;
//!
//! // [[1, 2, 3], [4, 5, 6]] at 128 mantissa bits.
//! let mut a = PrecisionMatrix::<128>::new(2, 3);
//! for (k, value) in (1u64..=6).enumerate() {
//!     *a.at_mut(k / 3, k % 3) = Scalar::from_u64(value);
//! }
//!
//! // [[7, 8], [9, 10], [11, 12]].
//! let mut b = PrecisionMatrix::<128>::new(3, 2);
//! for (k, value) in (7u64..=12).enumerate() {
//!     *b.at_mut(k / 2, k % 2) = Scalar::from_u64(value);
//! }
//!
//! let product = &a * &b;
//! assert_eq!(product.shape(), (2, 2));
//! assert_eq!(product.at(0, 0).to_f64(), 58.0);
//! assert_eq!(product.at(1, 1).to_f64(), 154.0);
//!
//! // Write through a view of the top-left corner; the parent sees it.
//! let mut a = a;
//! let mut window = a.view(0, 0, 1, 1);
//! *window.at_mut(0, 0) = Scalar::from_u64(42);
//! assert_eq!(a.at(0, 0).to_f64(), 42.0);
//! ```

pub mod matrix;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::matrix::{
        Matrix128, Matrix256, Matrix64, MatrixError, MatrixResult, MatrixView, PrecisionMatrix,
    };
    pub use crate::numeric::Scalar;
}
