//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! Solves symmetric (`TSP`) and asymmetric (`ATSP`) TSPLIB instances
//! approximately with a generational GA seeded from a supplied initial
//! population:
//!
//! - **Distance model**: Cost matrices from `EUC_2D` / `ATT` coordinates
//!   or an explicit `FULL_MATRIX`.
//! - **GA engine**: Relative fitness, tournament or proportional
//!   selection, PMX crossover, swap mutation, and a fixed-length
//!   generational loop that tracks the best tour found.
//! - **Readers**: TSPLIB problem files and initial-population files.
//!
//! # Example
//!
//! ```no_run
//! use u_tspga::ga::{GaConfig, GaRunner, Population};
//! use u_tspga::tsplib::{read_initial_population, TsplibProblem};
//!
//! # fn main() -> u_tspga::Result<()> {
//! let problem = TsplibProblem::from_file("att48.tsp")?;
//! let matrix = problem.distance_matrix()?;
//! let rows = read_initial_population("att48.init", matrix.size())?;
//! let population = Population::load(&matrix, rows)?;
//!
//! let result = GaRunner::run(population, &GaConfig::default().with_seed(42))?;
//! println!("record {} via {:?}", result.record, result.best);
//! # Ok(())
//! # }
//! ```

pub mod distance;
mod error;
pub mod ga;
pub mod tsplib;

pub use error::{Result, TspError};
