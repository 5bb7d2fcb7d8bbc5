//! Mating pool selection.
//!
//! A [`SelectionStrategy`] turns the current generation into a mating pool
//! of `⌈n/2⌉` tours, in the order they were drawn. The halving is the
//! selection pressure; the runner pairs the pool so the next generation is
//! back to `n` tours.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::fitness::FitnessTable;
use super::population::Population;
use super::types::Tour;

/// Builds a mating pool from a population.
///
/// Implementations score tours with [`FitnessTable`] (higher is better).
pub trait SelectionStrategy {
    /// Returns `mating_pool_size(population.len())` tours drawn from
    /// `population`.
    fn select<R: Rng>(&self, population: &Population<'_>, rng: &mut R) -> Vec<Tour>;
}

/// Size of the mating pool for a population of `n` tours: `⌈n/2⌉`.
pub fn mating_pool_size(n: usize) -> usize {
    n.div_ceil(2)
}

/// Binary tournament: two distinct random tours, the fitter one wins.
///
/// # Complexity
/// O(n) to score the generation, O(1) per draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tournament;

impl SelectionStrategy for Tournament {
    fn select<R: Rng>(&self, population: &Population<'_>, rng: &mut R) -> Vec<Tour> {
        let n = population.len();
        let tours = population.tours();
        if n < 2 {
            return tours.to_vec();
        }

        let fitness = FitnessTable::evaluate(population);
        (0..mating_pool_size(n))
            .map(|_| {
                let a = rng.random_range(0..n);
                let mut b = rng.random_range(0..n - 1);
                if b >= a {
                    b += 1;
                }
                let winner = if fitness.get(b) > fitness.get(a) { b } else { a };
                tours[winner].clone()
            })
            .collect()
    }
}

/// Fitness-proportionate (roulette wheel) selection.
///
/// Each draw picks tour `i` with probability `f_i / Σ f`. Negative scores
/// are treated as zero; a small epsilon keeps every tour drawable.
///
/// **Warning**: Susceptible to super-individual dominance when fitness
/// variance is high.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Proportional;

impl SelectionStrategy for Proportional {
    fn select<R: Rng>(&self, population: &Population<'_>, rng: &mut R) -> Vec<Tour> {
        let n = population.len();
        let tours = population.tours();
        if n < 2 {
            return tours.to_vec();
        }

        let epsilon = 1e-10;
        let weights: Vec<f64> = FitnessTable::evaluate(population)
            .scores()
            .iter()
            .map(|&f| f.max(0.0) + epsilon)
            .collect();
        let total: f64 = weights.iter().sum();

        (0..mating_pool_size(n))
            .map(|_| tours[spin(&weights, total, rng)].clone())
            .collect()
    }
}

/// One roulette spin over `weights` summing to `total`.
fn spin<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    weights.len() - 1 // floating-point fallback
}

/// Selection strategy chosen for a run.
///
/// # Examples
///
/// ```
/// use u_tspga::ga::Selection;
///
/// let sel = Selection::Tournament;
/// let sel = Selection::Proportional;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// See [`Tournament`].
    #[default]
    Tournament,
    /// See [`Proportional`].
    Proportional,
}

impl Selection {
    /// Decodes `"tournament"` or `"proportional"` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "tournament" => Some(Self::Tournament),
            "proportional" | "roulette" => Some(Self::Proportional),
            _ => None,
        }
    }
}

impl SelectionStrategy for Selection {
    fn select<R: Rng>(&self, population: &Population<'_>, rng: &mut R) -> Vec<Tour> {
        match self {
            Selection::Tournament => Tournament.select(population, rng),
            Selection::Proportional => Proportional.select(population, rng),
        }
    }
}
