//! Reader for augmented matrices stored as `;`-separated text
//!
//! One equation per line, `n + 1` fields per line (coefficients then the
//! right-hand side), `.` as decimal separator, no header. `n` is inferred from
//! the first line and the file must hold exactly `n` lines.

use crate::error::{FormatError, GaussError, Result};
use crate::matrix::AugmentedMatrix;
use ndarray::Array2;
use std::fs;
use std::io;
use std::path::Path;

/// Field delimiter
pub const DELIMITER: char = ';';

/// Load an augmented matrix from a file
pub fn read_augmented_matrix<P: AsRef<Path>>(path: P) -> Result<AugmentedMatrix> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            GaussError::MalformedInput(FormatError::NotText)
        } else {
            GaussError::FileNotFound {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    parse_augmented_matrix(&content)
}

/// UTF-8 byte-order mark written by some editors and spreadsheets
const BOM: char = '\u{feff}';

/// Parse an augmented matrix from text
///
/// A leading byte-order mark is ignored.
pub fn parse_augmented_matrix(content: &str) -> Result<AugmentedMatrix> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut lines = content.lines();
    let first = lines.next().ok_or(FormatError::Empty)?;

    let first_row = parse_line(first, 1)?;
    let cols = first_row.len();
    if cols < 2 {
        return Err(FormatError::TooFewColumns { got: cols }.into());
    }
    let n = cols - 1;

    let mut values = Vec::with_capacity(n * cols);
    values.extend(first_row);
    let mut rows = 1;

    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let row = parse_line(line, line_no)?;
        if row.len() != cols {
            return Err(FormatError::FieldCount {
                line: line_no,
                expected: cols,
                got: row.len(),
            }
            .into());
        }
        values.extend(row);
        rows += 1;
    }

    if rows != n {
        return Err(FormatError::RowCount {
            expected: n,
            got: rows,
        }
        .into());
    }

    let data = Array2::from_shape_vec((rows, cols), values)
        .map_err(|_| FormatError::Shape { rows, cols })?;
    log::debug!("parsed {}x{} augmented matrix", rows, cols);
    AugmentedMatrix::new(data)
}

fn parse_line(line: &str, line_no: usize) -> std::result::Result<Vec<f64>, FormatError> {
    line.split(DELIMITER)
        .enumerate()
        .map(|(idx, field)| parse_field(field, line_no, idx + 1))
        .collect()
}

fn parse_field(field: &str, line: usize, column: usize) -> std::result::Result<f64, FormatError> {
    let invalid = || FormatError::InvalidNumber {
        line,
        field: column,
        value: field.to_string(),
    };
    let value: f64 = field.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}
