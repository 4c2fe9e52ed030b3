//! General element (pivot) search restricted to the current row

use ndarray::ArrayView1;
use std::fmt;

/// Absolute threshold a candidate must exceed the current best by to replace it
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Pivot chosen for one elimination step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotChoice {
    /// Row of the pivot, always the current step
    pub row: usize,
    /// Column of the pivot in the working matrix
    pub col: usize,
    /// Pivot value
    pub value: f64,
}

impl PivotChoice {
    /// Magnitude of the pivot
    pub fn abs_value(&self) -> f64 {
        self.value.abs()
    }
}

impl fmt::Display for PivotChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "General element: a[{},{}] = {:.1}",
            self.row + 1,
            self.col + 1,
            self.value
        )
    }
}

/// Find the general element of `row` for elimination step `step`.
///
/// Only the coefficient columns `step..n` are scanned; `row` may include the
/// right-hand side. A candidate replaces the current best only when its
/// magnitude is larger by more than `epsilon`, so near-ties keep the leftmost
/// entry. Returns `None` when every scanned entry is within `epsilon` of zero.
pub fn find_general_element(
    row: ArrayView1<'_, f64>,
    step: usize,
    n: usize,
    epsilon: f64,
) -> Option<PivotChoice> {
    let mut best: Option<PivotChoice> = None;

    for col in step..n {
        let value = row[col];
        let best_abs = best.map_or(0.0, |p| p.abs_value());
        if value.abs() - best_abs > epsilon {
            best = Some(PivotChoice {
                row: step,
                col,
                value,
            });
        }
    }

    best
}
