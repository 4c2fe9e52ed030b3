//! Observers of the elimination process
//!
//! The eliminator reports its progress to a [`TraceSink`]. Events are purely
//! informational; a sink cannot influence the computation.
//!
//! - [`NoTrace`]: discards everything
//! - [`LogTrace`]: forwards events to the `log` facade
//! - [`ConsoleTrace`]: writes a step-by-step transcript of the equations

use crate::elimination::{PivotChoice, VariableOrder};
use ndarray::ArrayView2;
use std::fmt::Write as FmtWrite;
use std::io::Write;

/// One observable moment of the elimination
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a> {
    /// The working copy before the first step
    Initial {
        matrix: ArrayView2<'a, f64>,
        order: &'a VariableOrder,
    },
    /// Result of the pivot search of a step (`None` if the row has no pivot)
    GeneralElement {
        step: usize,
        pivot: Option<PivotChoice>,
    },
    /// The working copy after eliminating the pivot column from the other rows
    RowReduced {
        step: usize,
        matrix: ArrayView2<'a, f64>,
        order: &'a VariableOrder,
    },
    /// The working copy after moving the pivot column onto the diagonal.
    /// Only emitted when a swap happened.
    Reordered {
        step: usize,
        matrix: ArrayView2<'a, f64>,
        order: &'a VariableOrder,
    },
}

/// Receiver of [`TraceEvent`]s
pub trait TraceSink {
    /// Observe one event; must not alter the elimination
    fn record(&mut self, event: &TraceEvent<'_>);
}

/// Sink that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: &TraceEvent<'_>) {}
}

/// Sink forwarding pivots and swaps at `debug` level and matrices at `trace` level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&mut self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::Initial { matrix, order } => {
                log::trace!("initial system:\n{}", format_equations(*matrix, order));
            }
            TraceEvent::GeneralElement { step, pivot } => match pivot {
                Some(p) => log::debug!("step {}: {}", step + 1, p),
                None => log::debug!("step {}: general element is not found", step + 1),
            },
            TraceEvent::RowReduced {
                step,
                matrix,
                order,
            } => {
                log::trace!(
                    "step {} row reduction:\n{}",
                    step + 1,
                    format_equations(*matrix, order)
                );
            }
            TraceEvent::Reordered {
                step,
                matrix,
                order,
            } => {
                log::trace!(
                    "step {} variables' order {:?}:\n{}",
                    step + 1,
                    order.as_slice(),
                    format_equations(*matrix, order)
                );
            }
        }
    }
}

/// Sink writing a human-readable transcript to any writer
#[derive(Debug)]
pub struct ConsoleTrace<W: Write> {
    out: W,
}

impl<W: Write> ConsoleTrace<W> {
    /// Write the transcript to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer, e.g. to append the final report
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(event: &TraceEvent<'_>) -> String {
        match event {
            TraceEvent::Initial { matrix, order } => format!(
                "Initial system of linear equations:\n{}\n\
                 Gaussian elimination with the general element in rows\n\n",
                format_equations(*matrix, order)
            ),
            TraceEvent::GeneralElement { step, pivot } => {
                let found = match pivot {
                    Some(p) => p.to_string(),
                    None => "General element is not found".to_string(),
                };
                format!("Step #{}\n{}\n", step + 1, found)
            }
            TraceEvent::RowReduced { matrix, order, .. } => {
                format!("Row reduction:\n{}\n", format_equations(*matrix, order))
            }
            TraceEvent::Reordered { matrix, order, .. } => format!(
                "Changing variables' order:\n{}\n",
                format_equations(*matrix, order)
            ),
        }
    }
}

impl<W: Write> TraceSink for ConsoleTrace<W> {
    fn record(&mut self, event: &TraceEvent<'_>) {
        if let Err(err) = self.out.write_all(Self::render(event).as_bytes()) {
            log::warn!("failed to write elimination trace: {err}");
        }
    }
}

/// Format an augmented matrix as one equation per line.
///
/// Coefficients are labelled with the variable currently occupying their
/// column, e.g. `   2.0 * x1 +    1.0 * x2 =    5.0`.
pub fn format_equations(matrix: ArrayView2<'_, f64>, order: &VariableOrder) -> String {
    let n = matrix.nrows();
    let mut out = String::new();
    for row in matrix.rows() {
        for (j, value) in row.iter().enumerate() {
            // writing into a String cannot fail
            let _ = if j == 0 {
                write!(out, "{:6.1} * {} ", value, order.label(j))
            } else if j == n {
                write!(out, "= {:6.1}", value)
            } else {
                write!(out, "+ {:6.1} * {} ", value, order.label(j))
            };
        }
        out.push('\n');
    }
    out
}
