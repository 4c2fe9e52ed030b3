//! Row reduction with feature-gated parallelism
//!
//! With the `rayon` feature, the rows of the working matrix are reduced
//! concurrently. Every row update only reads the pivot row, so the
//! sequential and parallel paths produce identical values.

use crate::elimination::PivotChoice;
use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis};

/// Check if parallel row reduction is available
#[cfg(feature = "rayon")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel row reduction is available
#[cfg(not(feature = "rayon"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Eliminate the pivot column from every row except the pivot row (parallel when requested)
#[cfg(feature = "rayon")]
pub fn reduce_rows(data: &mut Array2<f64>, pivot: &PivotChoice, parallel: bool) {
    use rayon::prelude::*;

    let pivot_row = data.row(pivot.row).to_owned();
    if parallel {
        data.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(k, row)| reduce_row(k, row, pivot, pivot_row.view()));
    } else {
        data.axis_iter_mut(Axis(0))
            .enumerate()
            .for_each(|(k, row)| reduce_row(k, row, pivot, pivot_row.view()));
    }
}

/// Eliminate the pivot column from every row except the pivot row (sequential fallback)
#[cfg(not(feature = "rayon"))]
pub fn reduce_rows(data: &mut Array2<f64>, pivot: &PivotChoice, _parallel: bool) {
    let pivot_row = data.row(pivot.row).to_owned();
    data.axis_iter_mut(Axis(0))
        .enumerate()
        .for_each(|(k, row)| reduce_row(k, row, pivot, pivot_row.view()));
}

/// row_k += m * row_pivot with m = -row_k[col] / pivot
#[inline]
fn reduce_row(
    k: usize,
    mut row: ArrayViewMut1<'_, f64>,
    pivot: &PivotChoice,
    pivot_row: ArrayView1<'_, f64>,
) {
    if k == pivot.row {
        return;
    }
    let m = -row[pivot.col] / pivot.value;
    row.scaled_add(m, &pivot_row);
}
