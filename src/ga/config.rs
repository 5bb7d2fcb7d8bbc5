//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run, so separate runs (and tests)
//! can vary them independently.

use super::selection::Selection;

/// Configuration for the generational GA.
///
/// # Defaults
///
/// ```
/// use u_tspga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.iterations, 100);
/// assert_eq!(config.selection, Selection::Tournament);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tspga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_iterations(500)
///     .with_selection(Selection::Proportional)
///     .with_mutation_probability(0.1)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Probability that a child gets one swap mutation (0.0–1.0).
    pub mutation_probability: f64,

    /// Number of generations. The loop always runs all of them.
    pub iterations: usize,

    /// Strategy used to build each generation's mating pool.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from OS entropy once per run.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            mutation_probability: 0.3,
            iterations: 100,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if !self.mutation_probability.is_finite()
            || !(0.0..=1.0).contains(&self.mutation_probability)
        {
            return Err("mutation_probability must lie in [0, 1]".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert!((config.mutation_probability - 0.3).abs() < 1e-12);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.selection, Selection::Tournament);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_iterations(20)
            .with_selection(Selection::Proportional)
            .with_mutation_probability(0.05)
            .with_seed(42);

        assert_eq!(config.iterations, 20);
        assert_eq!(config.selection, Selection::Proportional);
        assert!((config.mutation_probability - 0.05).abs() < 1e-12);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_probability() {
        let high = GaConfig::default().with_mutation_probability(1.5);
        assert_eq!(high.mutation_probability, 1.0);
        let low = GaConfig::default().with_mutation_probability(-0.5);
        assert_eq!(low.mutation_probability, 0.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = GaConfig::default().with_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_probability() {
        let config = GaConfig {
            mutation_probability: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
