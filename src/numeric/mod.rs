// ============================================================================
// Numeric Module
// Arbitrary-precision scalar arithmetic consumed by the matrix layer
// ============================================================================
//
// This module provides:
// - Scalar<P>: arbitrary-precision float with compile-time mantissa width
//
// Design principles:
// - Mantissa width is fixed per type; mixed-width arithmetic is rejected at
//   compile time via const generics
// - Round-to-nearest (ties to even) at every operation
// - Representation and rounding come from arpfloat; this crate never
//   re-implements them

mod scalar;

pub use scalar::Scalar;
