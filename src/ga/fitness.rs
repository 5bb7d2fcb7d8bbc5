//! Relative fitness within one generation.
//!
//! `fitness(t) = 1 - len(t) / Σ len(p)` over the population `p`. Shorter
//! tours score closer to 1. The score only means something inside the
//! generation it was computed for, so it is rebuilt for every selection.

use super::population::Population;

/// Fitness scores of one generation, in population order.
#[derive(Debug, Clone)]
pub struct FitnessTable {
    scores: Vec<f64>,
}

impl FitnessTable {
    /// Scores every tour of `population` against the population total.
    pub fn evaluate(population: &Population<'_>) -> Self {
        let lengths = population.lengths();
        let total: f64 = lengths.iter().sum();
        let scores = lengths.iter().map(|&len| relative_fitness(len, total)).collect();
        Self { scores }
    }

    /// Fitness of the tour at `index`.
    pub fn get(&self, index: usize) -> f64 {
        self.scores[index]
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// `1 - length / total`.
///
/// A zero total (every tour has length 0) scores every tour 1.
pub fn relative_fitness(length: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 1.0;
    }
    1.0 - length / total
}

/// Fitness of a single tour against `population`.
pub fn fitness(tour: &[usize], population: &Population<'_>) -> f64 {
    let total: f64 = population.lengths().iter().sum();
    relative_fitness(population.tour_length(tour), total)
}
