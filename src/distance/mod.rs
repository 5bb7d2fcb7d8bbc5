//! Distance model.
//!
//! Builds the `size × size` cost matrix a TSP run works on, either from
//! 2-D city coordinates or from an explicit full matrix.
//!
//! - [`City`]: A 2-D coordinate, identified by its position in the input
//! - [`EdgeWeightType`]: How costs are derived (`EXPLICIT`, `EUC_2D`, `ATT`)
//! - [`DistanceMatrix`]: Dense row-major cost matrix, immutable once built
//!
//! # References
//!
//! - Reinelt (1991), "TSPLIB — A Traveling Salesman Problem Library"

mod matrix;
mod metric;

pub use matrix::{DistanceMatrix, UNREACHABLE};
pub use metric::{att_distance, euclidean_distance, City, EdgeWeightType};
