//! Generational evolution loop.
//!
//! [`GaRunner`] drives a fixed number of generations:
//! selection → PMX crossover → mutation → replacement, tracking the record
//! (shortest tour seen so far) after each one.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::GaConfig;
use super::operators::{mutate, pmx_pair, random_cut_point};
use super::population::Population;
use super::selection::SelectionStrategy;
use super::types::Tour;
use crate::error::{Result, TspError};

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The shortest tour found during the entire run.
    pub best: Tour,

    /// Length of `best`.
    pub record: f64,

    /// Best length in the initial population.
    pub initial_record: f64,

    /// Number of generations executed.
    pub iterations: usize,

    /// Wall-clock time spent in the run.
    pub elapsed: Duration,

    /// Record after the initial population and after every generation.
    ///
    /// Has `iterations + 1` entries and never increases.
    pub record_history: Vec<f64>,
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use u_tspga::distance::{DistanceMatrix, UNREACHABLE as INF};
/// use u_tspga::ga::{GaConfig, GaRunner, Population};
///
/// let dm = DistanceMatrix::from_data(3, vec![INF, 1.0, 10.0, 10.0, INF, 1.0, 1.0, 10.0, INF])
///     .unwrap();
/// let population = Population::load(&dm, vec![vec![2, 1, 0], vec![0, 2, 1]]).unwrap();
/// let config = GaConfig::default().with_iterations(10).with_seed(42);
/// let result = GaRunner::run(population, &config).unwrap();
/// assert!(result.record <= result.initial_record);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the strategy named in `config.selection`.
    ///
    /// # Errors
    /// - [`TspError::InvalidConfig`] if `config` fails validation.
    /// - [`TspError::EmptyPopulation`] if `population` has no tours.
    /// - [`TspError::InvalidPermutation`] if a tour reaching crossover is not
    ///   a permutation. Loaded populations are validated, so this signals a
    ///   defect in a custom [`SelectionStrategy`].
    pub fn run(population: Population<'_>, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_strategy(population, config, &config.selection)
    }

    /// Runs the GA with an explicit selection strategy.
    ///
    /// `config.selection` is ignored.
    pub fn run_with_strategy<S: SelectionStrategy>(
        mut population: Population<'_>,
        config: &GaConfig,
        strategy: &S,
    ) -> Result<GaResult> {
        config.validate().map_err(TspError::InvalidConfig)?;

        let start = Instant::now();
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Seed the record from the initial population
        let (mut best, initial_record) = population
            .best()
            .map(|(tour, len)| (tour.clone(), len))
            .ok_or(TspError::EmptyPopulation)?;
        let mut record = initial_record;
        let mut record_history = Vec::with_capacity(config.iterations + 1);
        record_history.push(record);

        info!(
            "initial record {record} over {} tours of {} cities",
            population.len(),
            population.size()
        );

        let target = population.len();

        // 2. Generational loop
        for gen in 0..config.iterations {
            let pool = strategy.select(&population, &mut rng);
            let offspring = breed(&pool, target, config.mutation_probability, &mut rng)?;
            population.replace(offspring);

            let (gen_best, gen_len) = population.best().ok_or(TspError::EmptyPopulation)?;
            if gen_len < record {
                record = gen_len;
                best = gen_best.clone();
            }
            record_history.push(record);

            debug!(
                "generation {}: population best {gen_len}, record {record}",
                gen + 1
            );
        }

        let elapsed = start.elapsed();
        info!(
            "finished {} generations in {elapsed:?}: record {record}",
            config.iterations
        );

        Ok(GaResult {
            best,
            record,
            initial_record,
            iterations: config.iterations,
            elapsed,
            record_history,
        })
    }
}

/// Produces the next generation from a mating pool.
///
/// The pool is paired cyclically as `(i, i + 1 mod m)`; every pair yields two
/// mirrored PMX children, each mutated independently. One cut point serves
/// the whole generation. Offspring beyond `target` are discarded, so the
/// population size stays constant.
fn breed<R: Rng>(
    pool: &[Tour],
    target: usize,
    mutation_probability: f64,
    rng: &mut R,
) -> Result<Vec<Tour>> {
    let m = pool.len();
    if m == 0 {
        return Err(TspError::EmptyPopulation);
    }

    let cut = pool
        .first()
        .and_then(|tour| random_cut_point(tour.len(), rng));

    let mut offspring = Vec::with_capacity(2 * m);
    for i in 0..m {
        if offspring.len() >= target {
            break;
        }
        let p1 = &pool[i];
        let p2 = &pool[(i + 1) % m];
        let (c1, c2) = match cut {
            Some(k) => pmx_pair(p1, p2, k)?,
            None => (p1.clone(), p2.clone()),
        };
        for mut child in [c1, c2] {
            mutate(&mut child, mutation_probability, rng);
            offspring.push(child);
        }
    }
    offspring.truncate(target);

    Ok(offspring)
}

fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ============================================================================
// Tests
// ============================================================================
