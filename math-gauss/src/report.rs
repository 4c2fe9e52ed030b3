//! Text output for solutions and residuals

use ndarray::Array1;
use std::fmt::Write;

/// Usage and input format description printed by the `gauss` binary
pub const USAGE: &str = "\
Usage:
  gauss <file>

where <file> is a text file holding the augmented matrix (A|B):
  * fields separated by ';', '.' as decimal separator, no header
  * n rows, one equation per row
  * n+1 columns, the last column is the right-hand side B";

/// Format a value like .NET's `E` specifier: six decimals and a signed,
/// three digit exponent (`-1.234560E+003`)
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{value:.6E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}E{sign}{:03}", exponent.abs())
        }
        None => formatted,
    }
}

/// `x1 = 1.000000` lines, one per unknown
pub fn format_roots(x: &Array1<f64>) -> String {
    let mut out = String::new();
    for (i, value) in x.iter().enumerate() {
        let _ = writeln!(out, "x{} = {:.6}", i + 1, value);
    }
    out
}

/// `e1 = 0.000000E+000` lines, one per equation
pub fn format_errors(residual: &Array1<f64>) -> String {
    let mut out = String::new();
    for (i, value) in residual.iter().enumerate() {
        let _ = writeln!(out, "e{} = {}", i + 1, format_scientific(*value));
    }
    out
}

/// Full report of a successful solve
pub fn format_report(x: &Array1<f64>, residual: &Array1<f64>) -> String {
    format!(
        "Solution is found.\nVector of roots:\n{}\nVector of errors (E = B-A*X):\n{}",
        format_roots(x),
        format_errors(residual)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(0.0), "0.000000E+000");
        assert_eq!(format_scientific(1234.56), "1.234560E+003");
        assert_eq!(format_scientific(-2.5e-17), "-2.500000E-017");
        assert_eq!(format_scientific(1e200), "1.000000E+200");
    }

    #[test]
    fn test_format_roots() {
        assert_eq!(
            format_roots(&array![1.0, -3.0]),
            "x1 = 1.000000\nx2 = -3.000000\n"
        );
    }

    #[test]
    fn test_format_report() {
        let report = format_report(&array![1.0, 3.0], &array![0.0, 0.0]);
        assert_eq!(
            report,
            "Solution is found.\nVector of roots:\nx1 = 1.000000\nx2 = 3.000000\n\n\
             Vector of errors (E = B-A*X):\ne1 = 0.000000E+000\ne2 = 0.000000E+000\n"
        );
    }
}
