//! Readers for the two run inputs.
//!
//! - [`TsplibProblem`]: A TSPLIB-style problem file (header plus
//!   `EDGE_WEIGHT_SECTION` or `NODE_COORD_SECTION`)
//! - [`read_initial_population`]: Whitespace-separated initial tours, one
//!   row of `DIMENSION` values per individual

mod population;
mod problem;

pub use population::{parse_initial_population, read_initial_population};
pub use problem::{EdgeWeightFormat, ProblemData, ProblemType, TsplibProblem};
