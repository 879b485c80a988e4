// ============================================================================
// Matrix View
// Non-owning rectangular window into a parent matrix
// ============================================================================

use super::errors::{MatrixError, MatrixResult};
use super::precision_matrix::PrecisionMatrix;
use crate::numeric::Scalar;
use std::fmt;

/// Rectangular window into a [`PrecisionMatrix`] for in-place access without
/// copying.
///
/// A view owns no element storage. Reads and writes through it alias the
/// parent's elements directly, and the mutable borrow of the parent means the
/// view cannot outlive it and nothing else can touch the parent while the
/// view exists. Views carry no arithmetic operators and cannot be resized;
/// arithmetic always operates on owned matrices.
///
/// # Example
/// ```
/// use precision_matrix::prelude::*;
///
/// let mut m = PrecisionMatrix::<128>::new(4, 4);
/// let mut window = m.view(1, 1, 2, 2);
/// *window.at_mut(0, 0) = Scalar::from_u64(9);
///
/// assert_eq!(m.at(1, 1).to_f64(), 9.0);
/// ```
pub struct MatrixView<'a, const P: u32> {
    parent: &'a mut PrecisionMatrix<P>,
    start_row: usize,
    start_col: usize,
    rows: usize,
    cols: usize,
}

impl<'a, const P: u32> MatrixView<'a, P> {
    /// Bind a view to the `rows x cols` rectangle of `parent` whose top-left
    /// corner is `(start_row, start_col)`.
    ///
    /// # Errors
    /// Returns `ViewOutOfBounds` if the rectangle does not fit within the
    /// parent's current dimensions (including on index overflow).
    pub fn new(
        parent: &'a mut PrecisionMatrix<P>,
        start_row: usize,
        start_col: usize,
        rows: usize,
        cols: usize,
    ) -> MatrixResult<Self> {
        let row_end = start_row.checked_add(rows);
        let col_end = start_col.checked_add(cols);
        let fits = matches!((row_end, col_end), (Some(r), Some(c))
            if r <= parent.rows() && c <= parent.cols());

        if !fits {
            return Err(MatrixError::ViewOutOfBounds {
                start: (start_row, start_col),
                extent: (rows, cols),
                parent: (parent.rows(), parent.cols()),
            });
        }

        Ok(Self {
            parent,
            start_row,
            start_col,
            rows,
            cols,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows in the view.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the view.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row of the parent the view starts at.
    #[inline]
    pub fn start_row(&self) -> usize {
        self.start_row
    }

    /// Column of the parent the view starts at.
    #[inline]
    pub fn start_col(&self) -> usize {
        self.start_col
    }

    /// Element at `(i, j)` of the view, aliasing
    /// `parent(start_row + i, start_col + j)`.
    ///
    /// The check is against the view's own extent and unconditional: a
    /// position outside the rectangle never reaches the parent, even when
    /// the offset position would be in range there.
    ///
    /// # Panics
    /// Panics if the position is out of range.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> &Scalar<P> {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} view",
            i,
            j,
            self.rows,
            self.cols
        );
        self.parent.at(self.start_row + i, self.start_col + j)
    }

    /// Mutable element at `(i, j)` of the view; writes land in the parent.
    ///
    /// # Panics
    /// Panics if the position is out of range.
    #[inline]
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut Scalar<P> {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} view",
            i,
            j,
            self.rows,
            self.cols
        );
        self.parent.at_mut(self.start_row + i, self.start_col + j)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const P: u32> fmt::Debug for MatrixView<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MatrixView<{}>({}x{} at ({}, {}))",
            P, self.rows, self.cols, self.start_row, self.start_col
        )
    }
}

impl<const P: u32> fmt::Display for MatrixView<'_, P> {
    /// Same grid contract as [`PrecisionMatrix`], over the view's extent.
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
// Tests
// ============================================================================
