//! Direct solver for dense augmented systems
//!
//! This module provides Gaussian elimination with the general element in rows:
//! - [`find_general_element`]: row-local pivot search
//! - [`Eliminator`]: step-by-step elimination with column reordering
//! - [`gauss_solve`]: one-call convenience wrapper

mod eliminator;
mod order;
mod pivot;

pub use eliminator::{Eliminator, GaussConfig, GaussSolution, gauss_solve, gauss_solve_traced};
pub use order::VariableOrder;
pub use pivot::{PIVOT_EPSILON, PivotChoice, find_general_element};
