// ============================================================================
// Matrix Module
// Dense arbitrary-precision matrices and non-owning views
// ============================================================================
//
// This module provides:
// - PrecisionMatrix<P>: owned row-major grid of width-P scalars with
//   add/sub/mul/transpose and zero/random fills
// - MatrixView<'a, P>: aliasing window into a parent matrix
// - MatrixError: precondition failures surfaced as values by the checked API
//
// Design principles:
// - Operators panic on shape mismatch with the full shapes in the message;
//   checked_* methods return the same diagnostic as a value
// - Arithmetic never mutates its operands and always allocates a fresh result
// - Round-to-nearest at every scalar operation

mod errors;
mod precision_matrix;
mod view;

pub use errors::{MatrixError, MatrixResult};
pub use precision_matrix::{Matrix128, Matrix256, Matrix64, PrecisionMatrix};
pub use view::MatrixView;
