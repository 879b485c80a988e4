// ============================================================================
// Precision Matrix
// Dense row-major matrix of arbitrary-precision scalars
// ============================================================================

use super::errors::{MatrixError, MatrixResult};
use super::view::MatrixView;
use crate::numeric::Scalar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Seed for [`PrecisionMatrix::initialize_random`]. Fixed so two fills of
/// matrices with the same dimensions and width are bit-for-bit identical.
const RANDOM_FILL_SEED: u64 = 12345;

/// Dense matrix of arbitrary-precision scalars with compile-time mantissa
/// width.
///
/// Elements are stored row-major in a `Vec<Scalar<P>>` of exactly
/// `rows * cols` cells, so dropping or cloning the matrix releases or
/// deep-copies every cell's precision state through ordinary ownership.
/// Every element is initialized to an exact width-`P` zero at construction;
/// there is no uninitialized state.
///
/// The width `P` is a const generic, so arithmetic between matrices of
/// different widths does not compile.
///
/// # Type Parameter
/// - `P`: mantissa width in bits of every element.
///
/// # Example
/// ```
/// use precision_matrix::prelude::*;
///
/// let mut a = PrecisionMatrix::<128>::new(2, 2);
/// *a.at_mut(0, 0) = Scalar::from_u64(1);
/// *a.at_mut(1, 1) = Scalar::from_u64(1);
///
/// let mut b = PrecisionMatrix::<128>::new(2, 2);
/// b.initialize_random();
///
/// // Multiplying by the identity preserves every element.
/// assert_eq!(&a * &b, b);
/// ```
pub struct PrecisionMatrix<const P: u32> {
    rows: usize,
    cols: usize,
    /// Row-major grid: element (i, j) lives at `i * cols + j`.
    elements: Vec<Scalar<P>>,
}

impl<const P: u32> PrecisionMatrix<P> {
    /// Mantissa width in bits of every element.
    pub const PRECISION: u32 = P;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a `rows x cols` matrix with every element an exact width-`P`
    /// zero.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("matrix dimensions overflow usize: {}x{}", rows, cols));
        let elements = (0..len).map(|_| Scalar::zero()).collect();
        Self {
            rows,
            cols,
            elements,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Mantissa width in bits of every element.
    #[inline]
    pub fn precision(&self) -> u32 {
        P
    }

    /// Shape as (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element at `(row, col)`.
    ///
    /// The check is per axis and unconditional: an out-of-range column never
    /// aliases a neighboring row's element.
    ///
    /// # Panics
    /// Panics if the position is out of range.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> &Scalar<P> {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.elements[row * self.cols + col]
    }

    /// Mutable element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is out of range.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut Scalar<P> {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.elements[row * self.cols + col]
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Element-wise sum, rounding to nearest at width `P`.
    ///
    /// Operands are unmodified; the result is a new owned matrix of the same
    /// shape.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn checked_add(&self, rhs: &Self) -> MatrixResult<Self> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut result = Self::new(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                *result.at_mut(i, j) = self.at(i, j) + rhs.at(i, j);
            }
        }

        Ok(result)
    }

    /// Element-wise difference, rounding to nearest at width `P`.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn checked_sub(&self, rhs: &Self) -> MatrixResult<Self> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut result = Self::new(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                *result.at_mut(i, j) = self.at(i, j) - rhs.at(i, j);
            }
        }

        Ok(result)
    }

    /// Matrix product by classic triple-nested accumulation.
    ///
    /// `result(i, j) = Σ_k self(i, k) * rhs(k, j)`, with each product formed
    /// in a width-`P` scratch scalar and added into a zero-initialized
    /// accumulator, rounding to nearest at every multiply and every add.
    /// Costs `rows * rhs.cols * cols` scalar operations, each proportional to
    /// `P`.
    ///
    /// # Errors
    /// Returns `InnerDimensionMismatch` if `self.cols != rhs.rows`.
    pub fn checked_mul(&self, rhs: &Self) -> MatrixResult<Self> {
        if self.cols != rhs.rows {
            return Err(MatrixError::InnerDimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        tracing::debug!(
            "multiplying {}x{} by {}x{} at {} mantissa bits",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols,
            P
        );

        let mut result = Self::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = Scalar::zero();
                for k in 0..self.cols {
                    let product = self.at(i, k) * rhs.at(k, j);
                    acc += &product;
                }
                *result.at_mut(i, j) = acc;
            }
        }

        Ok(result)
    }

    /// Transposed copy: a new `cols x rows` matrix with
    /// `result(j, i) = self(i, j)`, each element copied exactly.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                *transposed.at_mut(j, i) = self.at(i, j).clone();
            }
        }
        transposed
    }

    // ========================================================================
    // Fill Utilities
    // ========================================================================

    /// Set every element to an exact zero.
    pub fn initialize_zeros(&mut self) {
        for element in &mut self.elements {
            *element = Scalar::zero();
        }
    }

    /// Fill every element with a value drawn uniformly from [0, 1).
    ///
    /// The generator is seeded with a fixed constant, so two matrices of the
    /// same dimensions and width filled this way are elementwise identical.
    /// Intended for reproducible test data, not for statistics or security.
    pub fn initialize_random(&mut self) {
        let mut rng = StdRng::seed_from_u64(RANDOM_FILL_SEED);
        for element in &mut self.elements {
            *element = Scalar::from_f64(rng.gen::<f64>());
        }
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Mutable view of the `rows x cols` rectangle whose top-left corner is
    /// `(start_row, start_col)`. Reads and writes through the view alias this
    /// matrix directly.
    ///
    /// # Panics
    /// Panics with a full diagnostic if the rectangle does not fit. Use
    /// [`MatrixView::new`] for the checked form.
    pub fn view(
        &mut self,
        start_row: usize,
        start_col: usize,
        rows: usize,
        cols: usize,
    ) -> MatrixView<'_, P> {
        MatrixView::new(self, start_row, start_col, rows, cols)
            .unwrap_or_else(|e| panic!("matrix view: {}", e))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const P: u32> Default for PrecisionMatrix<P> {
    /// The empty 0x0 matrix with no storage.
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            elements: Vec::new(),
        }
    }
}

impl<const P: u32> Clone for PrecisionMatrix<P> {
    /// Deep copy: every element is duplicated at width `P`.
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            elements: self.elements.clone(),
        }
    }
}

impl<const P: u32> PartialEq for PrecisionMatrix<P> {
    /// Exact elementwise equality of matrices with equal shapes.
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.elements == other.elements
    }
}

// Infallible operators for ergonomics (panic on shape mismatch with a full
// diagnostic - use checked_* to handle the error as a value)
impl<const P: u32> Add for &PrecisionMatrix<P> {
    type Output = PrecisionMatrix<P>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
            .unwrap_or_else(|e| panic!("matrix addition: {}", e))
    }
}

impl<const P: u32> Sub for &PrecisionMatrix<P> {
    type Output = PrecisionMatrix<P>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .unwrap_or_else(|e| panic!("matrix subtraction: {}", e))
    }
}

impl<const P: u32> Mul for &PrecisionMatrix<P> {
    type Output = PrecisionMatrix<P>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .unwrap_or_else(|e| panic!("matrix multiplication: {}", e))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const P: u32> fmt::Debug for PrecisionMatrix<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrecisionMatrix<{}>({}x{})", P, self.rows, self.cols)
    }
}

impl<const P: u32> fmt::Display for PrecisionMatrix<P> {
    /// One line per row; each element rendered with exactly 15 fractional
    /// digits, right-justified to width 15, followed by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:>15.15} ", self.at(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Type Aliases for Common Widths
// ============================================================================

/// Matrix with 64-bit mantissas
pub type Matrix64 = PrecisionMatrix<64>;

/// Matrix with 128-bit mantissas
pub type Matrix128 = PrecisionMatrix<128>;

/// Matrix with 256-bit mantissas
pub type Matrix256 = PrecisionMatrix<256>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x3 matrix [[1, 2, 3], [4, 5, 6]] built via zero-fill plus writes.
    fn small_a() -> Matrix128 {
        let mut a = Matrix128::new(2, 3);
        for (k, value) in (1u64..=6).enumerate() {
            *a.at_mut(k / 3, k % 3) = Scalar::from_u64(value);
        }
        a
    }

    /// 3x2 matrix [[7, 8], [9, 10], [11, 12]].
    fn small_b() -> Matrix128 {
        let mut b = Matrix128::new(3, 2);
        for (k, value) in (7u64..=12).enumerate() {
            *b.at_mut(k / 2, k % 2) = Scalar::from_u64(value);
        }
        b
    }

    #[test]
    fn test_new_is_zero_filled() {
        let m = Matrix128::new(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.precision(), 128);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m.at(i, j).to_f64(), 0.0);
            }
        }
    }

    #[test]
    fn test_default_is_empty() {
        let m = Matrix128::default();
        assert_eq!(m.shape(), (0, 0));
        assert_eq!(m.to_string(), "");
    }

    #[test]
    fn test_clone_is_deep() {
        let mut m = Matrix128::new(2, 2);
        *m.at_mut(0, 1) = Scalar::from_u64(5);

        let copy = m.clone();
        *m.at_mut(0, 1) = Scalar::from_u64(9);

        assert_eq!(copy.at(0, 1).to_f64(), 5.0);
        assert_eq!(m.at(0, 1).to_f64(), 9.0);
    }

    #[test]
    fn test_add_shape_and_values() {
        let a = small_a();
        let b = small_a();
        let sum = a.checked_add(&b).unwrap();

        assert_eq!(sum.shape(), a.shape());
        assert_eq!(sum.at(1, 2).to_f64(), 12.0);
    }

    #[test]
    fn test_add_commutes() {
        let mut a = Matrix64::new(3, 3);
        a.initialize_random();
        let b = a.transpose().transpose();

        assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
    }

    #[test]
    fn test_add_zero_identity() {
        let mut a = Matrix128::new(4, 2);
        a.initialize_random();
        let zeros = Matrix128::new(4, 2);

        assert_eq!(a.checked_add(&zeros).unwrap(), a);
    }

    #[test]
    fn test_sub_cancels() {
        let a = small_a();
        let diff = a.checked_sub(&a).unwrap();
        assert_eq!(diff, Matrix128::new(2, 3));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = Matrix128::new(2, 3);
        let b = Matrix128::new(3, 2);
        assert_eq!(
            a.checked_add(&b),
            Err(MatrixError::ShapeMismatch {
                left: (2, 3),
                right: (3, 2),
            })
        );
    }

    #[test]
    fn test_multiply_concrete() {
        // [[1,2,3],[4,5,6]] * [[7,8],[9,10],[11,12]] = [[58,64],[139,154]]
        let product = small_a().checked_mul(&small_b()).unwrap();

        assert_eq!(product.shape(), (2, 2));
        assert_eq!(product.at(0, 0).to_f64(), 58.0);
        assert_eq!(product.at(0, 1).to_f64(), 64.0);
        assert_eq!(product.at(1, 0).to_f64(), 139.0);
        assert_eq!(product.at(1, 1).to_f64(), 154.0);
    }

    #[test]
    fn test_multiply_identity() {
        let mut identity = Matrix128::new(2, 2);
        identity.initialize_zeros();
        *identity.at_mut(0, 0) = Scalar::one();
        *identity.at_mut(1, 1) = Scalar::one();

        let mut a = Matrix128::new(2, 3);
        a.initialize_random();

        assert_eq!(identity.checked_mul(&a).unwrap(), a);
    }

    #[test]
    fn test_multiply_inner_dimension_mismatch() {
        let a = Matrix128::new(2, 3);
        let b = Matrix128::new(2, 2);
        assert_eq!(
            a.checked_mul(&b),
            Err(MatrixError::InnerDimensionMismatch {
                left: (2, 3),
                right: (2, 2),
            })
        );
    }

    #[test]
    #[should_panic(expected = "inner dimension mismatch")]
    fn test_multiply_operator_panics_on_mismatch() {
        let a = Matrix128::new(2, 3);
        let b = Matrix128::new(2, 2);
        let _ = &a * &b;
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_add_operator_panics_on_mismatch() {
        let a = Matrix128::new(2, 3);
        let b = Matrix128::new(3, 3);
        let _ = &a + &b;
    }

    #[test]
    fn test_operators_match_checked_forms() {
        let a = small_a();
        let b = small_b();

        assert_eq!(&a * &b, a.checked_mul(&b).unwrap());
        assert_eq!(&a + &a, a.checked_add(&a).unwrap());
        assert_eq!(&a - &a, a.checked_sub(&a).unwrap());
    }

    #[test]
    fn test_transpose() {
        let a = small_a();
        let t = a.transpose();

        assert_eq!(t.shape(), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t.at(j, i), a.at(i, j));
            }
        }
    }

    #[test]
    fn test_transpose_involution() {
        let mut a = Matrix256::new(3, 5);
        a.initialize_random();
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_random_fill_is_deterministic() {
        let mut a = Matrix128::new(3, 3);
        let mut b = Matrix128::new(3, 3);
        a.initialize_random();
        b.initialize_random();

        assert_eq!(a, b);
    }

    #[test]
    fn test_random_fill_is_in_unit_interval() {
        let mut a = Matrix64::new(4, 4);
        a.initialize_random();
        for i in 0..4 {
            for j in 0..4 {
                let v = a.at(i, j).to_f64();
                assert!((0.0..1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_zero_fill_after_random() {
        let mut a = Matrix128::new(2, 2);
        a.initialize_random();
        a.initialize_zeros();
        assert_eq!(a, Matrix128::new(2, 2));
    }

    #[test]
    fn test_display_single_zero() {
        let m = Matrix64::new(1, 1);
        assert_eq!(m.to_string(), "0.000000000000000 \n");
    }

    #[test]
    fn test_display_grid_layout() {
        let mut m = Matrix64::new(2, 2);
        *m.at_mut(0, 0) = Scalar::from_u64(1);
        *m.at_mut(1, 1) = Scalar::from_f64(0.5);

        let rendered = m.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "1.000000000000000 0.000000000000000 "
        );
        assert_eq!(
            lines[1],
            "0.000000000000000 0.500000000000000 "
        );
    }

    #[test]
    fn test_display_full_precision_beyond_f64() {
        // (2 * 10^16 + 1) / 2 is exact at 128 mantissa bits; an f64-based
        // rendering would drop the .5.
        let mut m = Matrix128::new(1, 1);
        *m.at_mut(0, 0) =
            Scalar::from_u64(20_000_000_000_000_001) * Scalar::from_f64(0.5);
        assert_eq!(m.to_string(), "10000000000000000.500000000000000 \n");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_at_rejects_out_of_range_column() {
        let mut m = Matrix128::new(2, 3);
        *m.at_mut(1, 0) = Scalar::from_u64(99);
        // The linear index of (0, 3) lands on (1, 0); the per-axis check
        // must reject it instead of aliasing that element.
        let _ = m.at(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_at_mut_rejects_out_of_range_row() {
        let mut m = Matrix128::new(2, 3);
        let _ = m.at_mut(2, 0);
    }

    #[test]
    #[should_panic(expected = "dimensions overflow")]
    fn test_new_rejects_overflowing_dimensions() {
        let _ = Matrix64::new(usize::MAX, 2);
    }

    #[test]
    fn test_empty_dimension() {
        let a = Matrix128::new(0, 5);
        let b = Matrix128::new(5, 4);
        let product = a.checked_mul(&b).unwrap();
        assert_eq!(product.shape(), (0, 4));
        assert_eq!(a.to_string(), "");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn matrix_from_values(rows: usize, cols: usize, values: &[f64]) -> Matrix64 {
            let mut m = Matrix64::new(rows, cols);
            for i in 0..rows {
                for j in 0..cols {
                    *m.at_mut(i, j) = Scalar::from_f64(values[(i * cols + j) % values.len()]);
                }
            }
            m
        }

        proptest! {
            #[test]
            fn prop_add_shape_law(rows in 1usize..5, cols in 1usize..5,
                                  values in prop::collection::vec(-1e6f64..1e6, 8)) {
                let a = matrix_from_values(rows, cols, &values);
                let b = matrix_from_values(rows, cols, &values);
                let sum = a.checked_add(&b).unwrap();
                prop_assert_eq!(sum.shape(), (rows, cols));
            }

            #[test]
            fn prop_add_commutes(rows in 1usize..5, cols in 1usize..5,
                                 left in prop::collection::vec(-1e6f64..1e6, 8),
                                 right in prop::collection::vec(-1e6f64..1e6, 8)) {
                let a = matrix_from_values(rows, cols, &left);
                let b = matrix_from_values(rows, cols, &right);
                prop_assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
            }

            #[test]
            fn prop_multiply_shape_law(m in 1usize..4, k in 1usize..4, n in 1usize..4,
                                       values in prop::collection::vec(-100f64..100.0, 8)) {
                let a = matrix_from_values(m, k, &values);
                let b = matrix_from_values(k, n, &values);
                let product = a.checked_mul(&b).unwrap();
                prop_assert_eq!(product.shape(), (m, n));
            }

            #[test]
            fn prop_transpose_involution(rows in 1usize..5, cols in 1usize..5,
                                         values in prop::collection::vec(-1e6f64..1e6, 8)) {
                let a = matrix_from_values(rows, cols, &values);
                prop_assert_eq!(a.transpose().transpose(), a);
            }
        }
    }
}
