//! Affine coefficient form of constraint expressions.
//!
//! After the upstream canonicalization has run, every constraint residual is
//! affine in the decision variable: `M * x + c`. This module holds that
//! stuffed representation, with `M` sparse (rows = scalar constraint
//! components, cols = variable size) and `c` dense.

use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::CscMatrix;

use crate::error::{Result, StuffingError};
use crate::sparse::{csc_from_triplets, csc_identity, dense_to_csc};

/// An affine expression in stuffed form: `matrix * x + offset`.
#[derive(Debug, Clone)]
pub struct AffineExpr {
    matrix: CscMatrix<f64>,
    offset: DVector<f64>,
}

impl AffineExpr {
    /// Create an affine expression from a sparse coefficient matrix and a
    /// dense offset vector.
    pub fn new(matrix: CscMatrix<f64>, offset: DVector<f64>) -> Result<Self> {
        if matrix.nrows() != offset.len() {
            return Err(StuffingError::ShapeMismatch {
                expected: format!("offset of length {}", matrix.nrows()),
                got: format!("length {}", offset.len()),
            });
        }
        Ok(AffineExpr { matrix, offset })
    }

    /// Create from dense coefficients.
    pub fn from_dense(matrix: &DMatrix<f64>, offset: DVector<f64>) -> Result<Self> {
        Self::new(dense_to_csc(matrix), offset)
    }

    /// The identity expression `x + offset` over a variable of size `n`.
    pub fn identity(n: usize, offset: DVector<f64>) -> Result<Self> {
        Self::new(csc_identity(n), offset)
    }

    /// A single scalar row: `coeffs . x + offset`.
    pub fn row(coeffs: &[f64], offset: f64) -> Self {
        let cols: Vec<usize> = (0..coeffs.len()).collect();
        let matrix = csc_from_triplets(1, coeffs.len(), vec![0; coeffs.len()], cols, coeffs.to_vec());
        AffineExpr {
            matrix,
            offset: DVector::from_element(1, offset),
        }
    }

    /// The coefficient matrix and constant offset, read directly from the
    /// parameter-substituted form.
    pub fn coeff_offset(&self) -> (&CscMatrix<f64>, &DVector<f64>) {
        (&self.matrix, &self.offset)
    }

    /// Number of scalar components of this expression.
    pub fn rows(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of variable columns the coefficients span.
    pub fn cols(&self) -> usize {
        self.matrix.ncols()
    }
}
