//! Error types for Gaussian elimination.
//!
//! Every failure of the crate is one of three kinds: the system has no unique
//! solution, the input is not a well-formed augmented matrix, or the input file
//! could not be opened.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or solving a linear system.
#[derive(Debug, Error)]
pub enum GaussError {
    /// Every coefficient of a row is zero (within the pivot epsilon) at the
    /// step that needs a general element from it.
    #[error("there is no unique solution: row {} has no general element", .row + 1)]
    Singular {
        /// Row (0-based) where the pivot search failed
        row: usize,
    },

    /// The input does not describe an n x (n+1) augmented matrix.
    #[error("wrong file format: {0}")]
    MalformedInput(#[from] FormatError),

    /// A vector does not match the dimension of the system.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Number of unknowns of the system
        expected: usize,
        /// Length of the vector
        got: usize,
    },

    /// The input file could not be opened.
    #[error("file {} not found", .path.display())]
    FileNotFound {
        /// Path as given by the caller
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

/// Detail of a [`GaussError::MalformedInput`].
///
/// Line and field numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The input holds no line at all.
    #[error("input is empty")]
    Empty,

    /// The file is readable but is not UTF-8 text.
    #[error("input is not UTF-8 text")]
    NotText,

    /// The first line does not hold at least one coefficient and the right-hand side.
    #[error("first line has {got} field(s), at least 2 are required")]
    TooFewColumns {
        /// Number of fields found on the first line
        got: usize,
    },

    /// A line has a different field count than the first line.
    #[error("line {line} has {got} field(s), expected {expected}")]
    FieldCount {
        /// Offending line
        line: usize,
        /// Field count of the first line
        expected: usize,
        /// Field count of the offending line
        got: usize,
    },

    /// A field is not a finite decimal number.
    #[error("line {line}, field {field}: '{value}' is not a number")]
    InvalidNumber {
        /// Offending line
        line: usize,
        /// Offending field
        field: usize,
        /// Raw field text
        value: String,
    },

    /// The number of equations does not match the number of unknowns.
    #[error("expected {expected} line(s), got {got}")]
    RowCount {
        /// Number of unknowns inferred from the first line
        expected: usize,
        /// Number of lines read
        got: usize,
    },

    /// An in-memory matrix is not n x (n+1) with n >= 1.
    #[error("matrix is {rows}x{cols}, expected n x (n+1) with n >= 1")]
    Shape {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
}

/// A specialized `Result` type for Gaussian elimination.
pub type Result<T> = std::result::Result<T, GaussError>;

impl GaussError {
    /// Returns `true` if the system has no unique solution.
    pub fn is_singular(&self) -> bool {
        matches!(self, GaussError::Singular { .. })
    }

    /// Returns `true` if the input is not a well-formed augmented matrix.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, GaussError::MalformedInput(_))
    }

    /// Returns `true` if the input file could not be opened.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, GaussError::FileNotFound { .. })
    }

    /// Process exit status used by the `gauss` binary for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            GaussError::DimensionMismatch { .. } => 1,
            GaussError::MalformedInput(_) => 2,
            GaussError::Singular { .. } => 3,
            GaussError::FileNotFound { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_display_is_one_based() {
        let err = GaussError::Singular { row: 0 };
        assert_eq!(
            err.to_string(),
            "there is no unique solution: row 1 has no general element"
        );
    }

    #[test]
    fn test_format_error_converts() {
        let err: GaussError = FormatError::RowCount {
            expected: 2,
            got: 3,
        }
        .into();
        assert!(err.is_malformed_input());
        assert!(!err.is_singular());
        assert_eq!(err.to_string(), "wrong file format: expected 2 line(s), got 3");
    }

    #[test]
    fn test_invalid_number_display() {
        let err = FormatError::InvalidNumber {
            line: 2,
            field: 3,
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let singular = GaussError::Singular { row: 1 };
        let malformed = GaussError::MalformedInput(FormatError::Empty);
        let missing = GaussError::FileNotFound {
            path: PathBuf::from("missing.csv"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert!(missing.is_file_not_found());
        assert_eq!(malformed.exit_code(), 2);
        assert_eq!(singular.exit_code(), 3);
        assert_eq!(missing.exit_code(), 4);
        assert_eq!(missing.to_string(), "file missing.csv not found");

        let mismatch = GaussError::DimensionMismatch {
            expected: 2,
            got: 3,
        };
        assert_eq!(mismatch.exit_code(), 1);
        assert_eq!(
            mismatch.to_string(),
            "dimension mismatch: expected 2, got 3"
        );
    }
}
