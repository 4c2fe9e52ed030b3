//! Augmented matrix (A|B) of a square linear system

use crate::error::{FormatError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2, s};

/// An n x (n+1) matrix: n equations, n coefficient columns and the
/// right-hand side in the last column.
///
/// The shape is checked on construction and cannot change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    data: Array2<f64>,
}

impl AugmentedMatrix {
    /// Wrap an array, checking that it is n x (n+1) with n >= 1
    pub fn new(data: Array2<f64>) -> Result<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols != rows + 1 {
            return Err(FormatError::Shape { rows, cols }.into());
        }
        Ok(Self { data })
    }

    /// Build from row vectors, each holding the coefficients then the right-hand side
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != n_cols) {
            return Err(FormatError::Shape {
                rows: n_rows,
                cols: bad.len(),
            }
            .into());
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|_| {
            FormatError::Shape {
                rows: n_rows,
                cols: n_cols,
            }
        })?;
        Self::new(data)
    }

    /// Number of unknowns (and equations)
    pub fn n(&self) -> usize {
        self.data.nrows()
    }

    /// Coefficient block A
    pub fn coefficients(&self) -> ArrayView2<'_, f64> {
        self.data.slice(s![.., ..self.n()])
    }

    /// Right-hand side B
    pub fn rhs(&self) -> ArrayView1<'_, f64> {
        self.data.column(self.n())
    }

    /// The whole n x (n+1) grid
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Unwrap the underlying n x (n+1) array
    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_accepts_augmented_shape() {
        let m = AugmentedMatrix::new(array![[2.0, 1.0, 5.0], [1.0, 3.0, 10.0]]).unwrap();
        assert_eq!(m.n(), 2);
        assert_eq!(m.coefficients(), array![[2.0, 1.0], [1.0, 3.0]]);
        assert_eq!(m.rhs(), array![5.0, 10.0]);
    }

    #[test]
    fn test_rejects_square_matrix() {
        let err = AugmentedMatrix::new(array![[1.0, 0.0], [0.0, 1.0]]).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_rejects_empty_matrix() {
        let err = AugmentedMatrix::new(Array2::zeros((0, 1))).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert!(AugmentedMatrix::from_rows(&rows).is_err());
    }

    #[test]
    fn test_from_rows_single_equation() {
        let m = AugmentedMatrix::from_rows(&[vec![4.0, 8.0]]).unwrap();
        assert_eq!(m.n(), 1);
        assert_eq!(m.rhs()[0], 8.0);
    }
}
