//! Population store.
//!
//! [`Population`] holds one generation of tours together with the distance
//! matrix they are measured against.

use log::warn;

use super::types::{validate_tour, Tour};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// The current generation of tours.
///
/// Every tour is a permutation of `0..matrix.size()`. The population borrows
/// the matrix; it never outlives the run that built it.
#[derive(Debug, Clone)]
pub struct Population<'a> {
    matrix: &'a DistanceMatrix,
    tours: Vec<Tour>,
}

impl<'a> Population<'a> {
    /// Loads externally parsed initial tours.
    ///
    /// Rows are accepted in order until the first row whose length differs
    /// from the matrix size; that row and everything after it are dropped.
    ///
    /// # Errors
    /// - [`TspError::EmptyPopulation`] if no row is accepted.
    /// - [`TspError::InvalidPermutation`] if an accepted row repeats or
    ///   omits a city.
    pub fn load(matrix: &'a DistanceMatrix, rows: Vec<Tour>) -> Result<Self> {
        let size = matrix.size();
        let total = rows.len();
        let tours: Vec<Tour> = rows.into_iter().take_while(|row| row.len() == size).collect();

        if tours.len() < total {
            warn!(
                "dropped {} initial tour(s) starting at row {}: expected {size} cities per row",
                total - tours.len(),
                tours.len()
            );
        }
        if tours.is_empty() {
            return Err(TspError::EmptyPopulation);
        }
        for (i, tour) in tours.iter().enumerate() {
            validate_tour(tour, size).map_err(|e| match e {
                TspError::InvalidPermutation(msg) => {
                    TspError::invalid_permutation(format!("initial tour {i}: {msg}"))
                }
                other => other,
            })?;
        }

        Ok(Self { matrix, tours })
    }

    /// Swaps the current generation for `next`.
    pub fn replace(&mut self, next: Vec<Tour>) {
        self.tours = next;
    }

    /// Closed-tour length of `tour` under this population's matrix.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        self.matrix.tour_length(tour)
    }

    /// The shortest tour, ties broken by first occurrence.
    ///
    /// Returns `None` only for an empty population.
    pub fn best(&self) -> Option<(&Tour, f64)> {
        let mut best: Option<(&Tour, f64)> = None;
        for tour in &self.tours {
            let len = self.tour_length(tour);
            match best {
                Some((_, best_len)) if len >= best_len => {}
                _ => best = Some((tour, len)),
            }
        }
        best
    }

    /// Lengths of all tours, in population order.
    pub fn lengths(&self) -> Vec<f64> {
        self.tours.iter().map(|t| self.tour_length(t)).collect()
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Number of tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Number of cities per tour.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }
}
