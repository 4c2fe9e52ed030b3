//! Gaussian elimination with the general element in rows
//!
//! This crate solves dense square linear systems `A x = B` given as an
//! augmented matrix `(A|B)`. At each elimination step the pivot (the
//! "general element") is the entry of largest magnitude in the current row;
//! columns are then swapped to bring it onto the diagonal and the variable
//! order is tracked so the solution comes back in the original order.
//!
//! # Features
//!
//! - **Eliminator**: step-by-step elimination with an optional trace observer
//! - **Residuals**: `E = B - A x` against the untouched input system
//! - **CSV reader**: `;`-separated augmented matrices
//! - **Parallel row reduction**: behind the `rayon` feature
//!
//! # Example
//!
//! ```
//! use math_gauss::{AugmentedMatrix, gauss_solve, residual};
//! use ndarray::array;
//!
//! let system = AugmentedMatrix::new(array![[2.0, 1.0, 5.0], [1.0, 3.0, 10.0]]).unwrap();
//! let solution = gauss_solve(&system).unwrap();
//! assert!((solution.x[0] - 1.0).abs() < 1e-12);
//! assert!((solution.x[1] - 3.0).abs() < 1e-12);
//!
//! let e = residual(&system, solution.x.view()).unwrap();
//! assert!(e.iter().all(|v| v.abs() < 1e-12));
//! ```

pub mod csv;
pub mod elimination;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod report;
pub mod residual;
pub mod trace;

// Re-export main types
pub use error::{FormatError, GaussError, Result};
pub use matrix::AugmentedMatrix;

// Re-export the solver
pub use elimination::{
    Eliminator, GaussConfig, GaussSolution, PIVOT_EPSILON, PivotChoice, VariableOrder,
    find_general_element, gauss_solve, gauss_solve_traced,
};

pub use csv::{parse_augmented_matrix, read_augmented_matrix};
pub use residual::{max_abs_residual, residual};
pub use trace::{ConsoleTrace, LogTrace, NoTrace, TraceEvent, TraceSink};
