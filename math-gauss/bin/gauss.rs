//! Solve a linear system stored as a `;`-separated augmented matrix
//!
//! Prints every elimination step, the roots and the residual vector.
//!
//! Usage:
//!   cargo run --release --bin gauss -- system.csv
//!
//! Logging is controlled with `RUST_LOG` (default `warn`).

use clap::Parser;
use env_logger::Env;
use math_gauss::parallel::is_parallel_available;
use math_gauss::report::{USAGE, format_report};
use math_gauss::{
    ConsoleTrace, GaussConfig, GaussError, gauss_solve_traced, max_abs_residual,
    read_augmented_matrix, residual,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "gauss",
    version,
    about = "Gaussian elimination with the general element in rows"
)]
struct Cli {
    /// Augmented matrix (A|B): n lines of n+1 ';'-separated numbers
    file: Option<PathBuf>,
}

fn run(path: &Path) -> Result<(), GaussError> {
    let system = read_augmented_matrix(path)?;
    log::info!("solving a {0}x{0} system from {1}", system.n(), path.display());

    let stdout = io::stdout();
    let mut trace = ConsoleTrace::new(stdout.lock());
    let solution = gauss_solve_traced(&system, &GaussConfig::default(), &mut trace)?;
    let mut out = trace.into_inner();

    let e = residual(&system, solution.x.view())?;
    log::info!("max |e| = {:.3e}", max_abs_residual(&e));

    if let Err(err) = out.write_all(format_report(&solution.x, &e).as_bytes()) {
        log::error!("failed to write the solution: {err}");
    }
    Ok(())
}

fn main() {
    let args = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!(
        "Running with: {args:?} (parallel row reduction available: {})",
        is_parallel_available()
    );

    let Some(path) = args.file else {
        println!("{USAGE}");
        return;
    };

    if let Err(err) = run(&path) {
        match &err {
            GaussError::Singular { .. } => eprintln!("There is no unique solution"),
            GaussError::MalformedInput(detail) => {
                eprintln!("Wrong file format: {detail}");
                eprintln!("{USAGE}");
            }
            GaussError::FileNotFound { path, .. } => {
                eprintln!("File {} not found", path.display())
            }
            GaussError::DimensionMismatch { .. } => eprintln!("{err}"),
        }
        log::debug!("{err:?}");
        process::exit(err.exit_code());
    }
}
