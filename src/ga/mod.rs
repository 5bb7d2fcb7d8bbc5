//! Genetic Algorithm engine for the TSP.
//!
//! A generational GA over permutation-encoded tours. Each generation:
//!
//! 1. [`SelectionStrategy`] draws a mating pool of `⌈n/2⌉` tours
//! 2. Cyclic pool neighbours are recombined with PMX (two mirrored children)
//! 3. Each child is swap-mutated with probability
//!    [`GaConfig::mutation_probability`]
//! 4. The children replace the population and the record is updated
//!
//! # Key Types
//!
//! - [`Population`]: The current generation plus its distance matrix
//! - [`FitnessTable`]: Relative fitness `1 - len / Σ len` of one generation
//! - [`Tournament`], [`Proportional`]: The two [`SelectionStrategy`] implementations
//! - [`GaConfig`]: Run parameters (iterations, mutation probability, selection, seed)
//! - [`GaRunner`]: Executes the loop and returns a [`GaResult`]
//!
//! # Submodules
//!
//! - [`operators`]: PMX crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::{fitness, relative_fitness, FitnessTable};
pub use population::Population;
pub use runner::{GaResult, GaRunner};
pub use selection::{mating_pool_size, Proportional, Selection, SelectionStrategy, Tournament};
pub use types::{validate_tour, Tour};
