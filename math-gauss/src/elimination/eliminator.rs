//! Gaussian elimination with the general element in rows
//!
//! At each step the pivot is searched only in the current row. Its column is
//! eliminated from every other row, then moved onto the diagonal by a column
//! swap that is mirrored in a [`VariableOrder`]. After the last step the
//! working matrix is diagonal and each unknown is a single division away.

use super::order::VariableOrder;
use super::pivot::{PIVOT_EPSILON, PivotChoice, find_general_element};
use crate::error::{GaussError, Result};
use crate::matrix::AugmentedMatrix;
use crate::parallel::reduce_rows;
use crate::trace::{NoTrace, TraceEvent, TraceSink};
use ndarray::{Array1, Array2, Axis};

/// Eliminator configuration
#[derive(Debug, Clone)]
pub struct GaussConfig {
    /// Absolute margin a pivot candidate must win by
    pub pivot_epsilon: f64,
    /// Reduce rows in parallel (only effective with the `rayon` feature)
    pub parallel: bool,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            pivot_epsilon: PIVOT_EPSILON,
            parallel: false,
        }
    }
}

/// Gaussian elimination result
#[derive(Debug, Clone)]
pub struct GaussSolution {
    /// Solution vector, indexed by original variable
    pub x: Array1<f64>,
    /// Final column-to-variable mapping
    pub order: VariableOrder,
    /// Working matrix after elimination (diagonal coefficient block)
    pub reduced: Array2<f64>,
    /// Number of elimination steps performed
    pub steps: usize,
    /// Number of steps that swapped columns
    pub column_swaps: usize,
}

/// Elimination state: a private copy of the system and its variable order
#[derive(Debug, Clone)]
pub struct Eliminator {
    data: Array2<f64>,
    order: VariableOrder,
    config: GaussConfig,
    step: usize,
    column_swaps: usize,
}

impl Eliminator {
    /// Copy `matrix` into a new eliminator; the caller's matrix is never touched
    pub fn new(matrix: &AugmentedMatrix, config: GaussConfig) -> Self {
        let data = matrix.as_array().to_owned();
        let order = VariableOrder::identity(matrix.n());
        Self {
            data,
            order,
            config,
            step: 0,
            column_swaps: 0,
        }
    }

    /// Number of unknowns
    pub fn n(&self) -> usize {
        self.data.nrows()
    }

    /// Current working matrix
    pub fn matrix(&self) -> &Array2<f64> {
        &self.data
    }

    /// Current column-to-variable mapping
    pub fn order(&self) -> &VariableOrder {
        &self.order
    }

    /// Index of the next step to run
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// `true` once every row has provided its general element
    pub fn is_finished(&self) -> bool {
        self.step >= self.n()
    }

    /// Run one elimination step and return the general element it used.
    ///
    /// Returns `Ok(None)` without touching the state once the elimination is
    /// finished.
    ///
    /// # Errors
    ///
    /// [`GaussError::Singular`] if the current row has no usable pivot.
    pub fn step(&mut self, trace: &mut dyn TraceSink) -> Result<Option<PivotChoice>> {
        if self.is_finished() {
            return Ok(None);
        }
        let i = self.step;
        let n = self.n();

        let pivot = find_general_element(self.data.row(i), i, n, self.config.pivot_epsilon);
        trace.record(&TraceEvent::GeneralElement { step: i, pivot });
        let pivot = match pivot {
            Some(pivot) => pivot,
            None => {
                log::warn!("row {} has no general element, system is singular", i + 1);
                return Err(GaussError::Singular { row: i });
            }
        };
        log::debug!("step {}: {}", i + 1, pivot);

        reduce_rows(&mut self.data, &pivot, self.config.parallel);
        trace.record(&TraceEvent::RowReduced {
            step: i,
            matrix: self.data.view(),
            order: &self.order,
        });

        if pivot.col != i {
            self.swap_columns(i, pivot.col);
            log::debug!(
                "step {}: swapped columns {} and {}, order {:?}",
                i + 1,
                i + 1,
                pivot.col + 1,
                self.order.as_slice()
            );
            trace.record(&TraceEvent::Reordered {
                step: i,
                matrix: self.data.view(),
                order: &self.order,
            });
        }

        self.step += 1;
        Ok(Some(pivot))
    }

    /// Run all remaining steps and back-substitute.
    pub fn run(mut self, trace: &mut dyn TraceSink) -> Result<GaussSolution> {
        if self.step == 0 {
            trace.record(&TraceEvent::Initial {
                matrix: self.data.view(),
                order: &self.order,
            });
        }
        while self.step(trace)?.is_some() {}
        Ok(self.into_solution())
    }

    fn swap_columns(&mut self, a: usize, b: usize) {
        for mut row in self.data.axis_iter_mut(Axis(0)) {
            row.swap(a, b);
        }
        self.order.swap(a, b);
        self.column_swaps += 1;
    }

    /// x[order[i]] = b_i / a_ii on the diagonalised system
    fn into_solution(self) -> GaussSolution {
        let n = self.n();
        let mut x = Array1::zeros(n);
        for i in 0..n {
            x[self.order.get(i)] = self.data[[i, n]] / self.data[[i, i]];
        }

        log::info!(
            "Gaussian elimination finished: n = {}, column swaps = {}",
            n,
            self.column_swaps
        );

        GaussSolution {
            x,
            order: self.order,
            reduced: self.data,
            steps: self.step,
            column_swaps: self.column_swaps,
        }
    }
}

/// Solve the augmented system with the default configuration and no tracing
pub fn gauss_solve(matrix: &AugmentedMatrix) -> Result<GaussSolution> {
    gauss_solve_traced(matrix, &GaussConfig::default(), &mut NoTrace)
}

/// Solve the augmented system, reporting every step to `trace`
pub fn gauss_solve_traced(
    matrix: &AugmentedMatrix,
    config: &GaussConfig,
    trace: &mut dyn TraceSink,
) -> Result<GaussSolution> {
    Eliminator::new(matrix, config.clone()).run(trace)
}
