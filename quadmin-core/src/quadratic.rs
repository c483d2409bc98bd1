use ndarray::{Array1, Array2};
use thiserror::Error;

/// Shape errors raised by [`QuadraticForm`] construction and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows} rows by {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// An operand's length does not match the form's dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    Mismatch { expected: usize, got: usize },
}

/// A quadratic form f(x) = ½·xᵀAx + bᵀx + c with exact gradient Ax + b.
///
/// Construction validates the shapes of `A` and `b` once, and every
/// evaluation validates its argument against `dims()`, so a mismatched
/// vector is reported as an error instead of being truncated or padded.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticForm {
    a: Array2<f64>,
    b: Array1<f64>,
    c: f64,
    max_eigenvalue: Option<f64>,
}

impl QuadraticForm {
    /// Creates a form from a square matrix, linear term, and constant.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if `a` is not square or `b`'s length does
    /// not match it.
    pub fn new(a: Array2<f64>, b: Array1<f64>, c: f64) -> Result<Self, DimensionError> {
        if a.nrows() != a.ncols() {
            return Err(DimensionError::NotSquare {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        if b.len() != a.nrows() {
            return Err(DimensionError::Mismatch {
                expected: a.nrows(),
                got: b.len(),
            });
        }
        Ok(Self {
            a,
            b,
            c,
            max_eigenvalue: None,
        })
    }

    /// Creates a form whose matrix is diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if `diag` and `b` have different lengths.
    pub fn diagonal(diag: Array1<f64>, b: Array1<f64>, c: f64) -> Result<Self, DimensionError> {
        Self::new(Array2::from_diag(&diag), b, c)
    }

    /// Attaches a known maximum eigenvalue of the matrix.
    ///
    /// Steepest descent caps its inner search interval at `2 / λ` when this
    /// is present.
    #[must_use]
    pub fn with_max_eigenvalue(mut self, eigenvalue: f64) -> Self {
        self.max_eigenvalue = Some(eigenvalue);
        self
    }

    /// Returns the dimension of the form's domain.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.b.len()
    }

    /// Returns the coefficient matrix.
    #[must_use]
    pub fn a(&self) -> &Array2<f64> {
        &self.a
    }

    /// Returns the linear term.
    #[must_use]
    pub fn b(&self) -> &Array1<f64> {
        &self.b
    }

    /// Returns the constant term.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the known maximum eigenvalue, if one was attached.
    #[must_use]
    pub fn max_eigenvalue(&self) -> Option<f64> {
        self.max_eigenvalue
    }

    /// Evaluates the form at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] if `x`'s length differs from
    /// `dims()`.
    pub fn value_at(&self, x: &Array1<f64>) -> Result<f64, DimensionError> {
        self.check(x)?;
        Ok(0.5 * self.a.dot(x).dot(x) + self.b.dot(x) + self.c)
    }

    /// Evaluates the gradient Ax + b at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] if `x`'s length differs from
    /// `dims()`.
    pub fn gradient_at(&self, x: &Array1<f64>) -> Result<Array1<f64>, DimensionError> {
        self.check(x)?;
        Ok(self.a.dot(x) + &self.b)
    }

    fn check(&self, x: &Array1<f64>) -> Result<(), DimensionError> {
        if x.len() == self.dims() {
            Ok(())
        } else {
            Err(DimensionError::Mismatch {
                expected: self.dims(),
                got: x.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    fn two_dim_form() -> QuadraticForm {
        QuadraticForm::new(
            array![[64.0, 19.0], [19.0, 32.0]],
            array![32.0, -20.0],
            6.0,
        )
        .unwrap()
    }

    #[test]
    fn rejects_non_square_matrix() {
        let result = QuadraticForm::new(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]], array![1.0], 0.0);

        assert_eq!(result, Err(DimensionError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn rejects_mismatched_linear_term() {
        let result = QuadraticForm::new(
            array![[1.0, 0.0], [0.0, 1.0]],
            array![1.0, 2.0, 3.0],
            0.0,
        );

        assert_eq!(result, Err(DimensionError::Mismatch { expected: 2, got: 3 }));
    }

    #[test]
    fn value_at_origin_is_constant_term() {
        let f = two_dim_form();

        assert_relative_eq!(f.value_at(&array![0.0, 0.0]).unwrap(), 6.0);
    }

    #[test]
    fn gradient_at_origin_is_linear_term() {
        let f = two_dim_form();
        let grad = f.gradient_at(&array![0.0, 0.0]).unwrap();

        assert_relative_eq!(grad[0], 32.0);
        assert_relative_eq!(grad[1], -20.0);
    }

    #[test]
    fn value_matches_expanded_formula() {
        let f = two_dim_form();
        let x = array![1.0, -2.0];

        // ½(64 - 2·19·2 + 32·4) + (32 + 40) + 6
        let expected = 0.5 * (64.0 - 76.0 + 128.0) + 72.0 + 6.0;
        assert_relative_eq!(f.value_at(&x).unwrap(), expected);
    }

    #[test]
    fn evaluation_rejects_wrong_length() {
        let f = two_dim_form();

        assert_eq!(
            f.value_at(&array![1.0]),
            Err(DimensionError::Mismatch { expected: 2, got: 1 })
        );
        assert_eq!(
            f.gradient_at(&array![1.0, 2.0, 3.0]),
            Err(DimensionError::Mismatch { expected: 2, got: 3 })
        );
    }

    #[test]
    fn diagonal_form_evaluates_componentwise() {
        let f = QuadraticForm::diagonal(array![2.0, 8.0], array![0.0, 0.0], 1.0).unwrap();

        // ½(2·1 + 8·9) + 1
        assert_relative_eq!(f.value_at(&array![1.0, 3.0]).unwrap(), 38.0);
        assert_relative_eq!(f.gradient_at(&array![1.0, 3.0]).unwrap()[1], 24.0);
    }

    #[test]
    fn eigenvalue_is_off_by_default() {
        let f = two_dim_form();
        assert_eq!(f.max_eigenvalue(), None);

        let f = f.with_max_eigenvalue(75.2);
        assert_eq!(f.max_eigenvalue(), Some(75.2));
    }
}
