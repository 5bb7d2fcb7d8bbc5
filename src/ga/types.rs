//! Tour representation.
//!
//! A tour is an ordered list of zero-based city indices visiting each city
//! exactly once and returning to the start.

use crate::error::{Result, TspError};

/// A candidate solution: a permutation of `0..size`.
pub type Tour = Vec<usize>;

/// Checks that `tour` is a permutation of `0..size`.
///
/// # Errors
/// [`TspError::InvalidPermutation`] naming the first offending value.
pub fn validate_tour(tour: &[usize], size: usize) -> Result<()> {
    if tour.len() != size {
        return Err(TspError::invalid_permutation(format!(
            "tour has {} cities, expected {size}",
            tour.len()
        )));
    }
    let mut seen = vec![false; size];
    for (pos, &city) in tour.iter().enumerate() {
        if city >= size {
            return Err(TspError::invalid_permutation(format!(
                "city {city} at position {pos} is out of range 0..{size}"
            )));
        }
        if seen[city] {
            return Err(TspError::invalid_permutation(format!(
                "city {city} appears twice (again at position {pos})"
            )));
        }
        seen[city] = true;
    }
    Ok(())
}
