//! Residual of a solution against the original system

use crate::error::{GaussError, Result};
use crate::matrix::AugmentedMatrix;
use ndarray::{Array1, ArrayView1};

/// Compute E = B - A*x against the un-eliminated system.
///
/// `x` is indexed by original variable, as returned by the eliminator.
///
/// # Errors
///
/// [`GaussError::DimensionMismatch`] if `x.len()` differs from the number of unknowns.
pub fn residual(matrix: &AugmentedMatrix, x: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
    if x.len() != matrix.n() {
        return Err(GaussError::DimensionMismatch {
            expected: matrix.n(),
            got: x.len(),
        });
    }
    Ok(&matrix.rhs() - &matrix.coefficients().dot(&x))
}

/// Largest absolute residual component (infinity norm).
///
/// NaN if any component is NaN.
pub fn max_abs_residual(residual: &Array1<f64>) -> f64 {
    residual.iter().fold(0.0_f64, |acc, e| {
        if acc.is_nan() || e.is_nan() {
            f64::NAN
        } else {
            acc.max(e.abs())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_exact_solution_has_zero_residual() {
        let m = AugmentedMatrix::new(array![[2.0, 1.0, 5.0], [1.0, 3.0, 10.0]]).unwrap();
        let e = residual(&m, array![1.0, 3.0].view()).unwrap();
        assert_eq!(e, array![0.0, 0.0]);
    }

    #[test]
    fn test_residual_uses_original_columns() {
        let m = AugmentedMatrix::new(array![[1.0, 2.0, 4.0], [3.0, 4.0, 10.0]]).unwrap();
        let e = residual(&m, array![1.0, 1.0].view()).unwrap();
        assert_abs_diff_eq!(e[0], 1.0);
        assert_abs_diff_eq!(e[1], 3.0);
        assert_abs_diff_eq!(max_abs_residual(&e), 3.0);
    }

    #[test]
    fn test_residual_is_repeatable() {
        let m = AugmentedMatrix::new(array![[0.1, 0.7, 0.3], [0.9, 0.2, 0.4]]).unwrap();
        let x = array![0.123456789, -3.3];
        assert_eq!(
            residual(&m, x.view()).unwrap(),
            residual(&m, x.view()).unwrap()
        );
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let m = AugmentedMatrix::new(array![[1.0, 2.0]]).unwrap();
        let err = residual(&m, array![1.0, 2.0].view()).unwrap_err();
        assert!(matches!(
            err,
            GaussError::DimensionMismatch {
                expected: 1,
                got: 2
            }
        ));
    }

    #[test]
    fn test_nan_residual_is_not_hidden() {
        assert!(max_abs_residual(&array![0.0, f64::NAN, 1.0]).is_nan());
        assert!(max_abs_residual(&array![f64::NAN, 0.0]).is_nan());
        assert_eq!(max_abs_residual(&array![-2.0, 1.0]), 2.0);
    }

    #[test]
    fn test_nan_input_shows_in_max_residual() {
        let m = AugmentedMatrix::new(array![[1.0, f64::NAN]]).unwrap();
        let e = residual(&m, array![1.0].view()).unwrap();
        assert!(max_abs_residual(&e).is_nan());
    }
}
