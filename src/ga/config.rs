//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::{check_rate, ConfigError};

/// Smallest population that yields one parent pair.
pub(crate) const MIN_POPULATION: usize = 2;

/// Configuration for the binary Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::new(19);
/// assert_eq!(config.genome_length, 19);
/// assert_eq!(config.population_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::new(19)
///     .with_population_size(400)
///     .with_mutation_rate(0.25)
///     .with_crossover_rate(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of bits `L` in every genome.
    pub genome_length: usize,

    /// Number of genomes `N` in the population.
    ///
    /// Offspring are produced in pairs; for odd `N` the second child of the
    /// last pair is discarded so the population size never changes.
    pub population_size: usize,

    /// Probability of flipping each gene of each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of applying single-point crossover to a parent pair
    /// (0.0–1.0). Otherwise the parents are copied unchanged.
    pub crossover_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a configuration for genomes of `genome_length` bits.
    pub fn new(genome_length: usize) -> Self {
        Self {
            genome_length,
            population_size: 100,
            mutation_rate: 0.01,
            crossover_rate: 0.7,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
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
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.genome_length == 0 {
            return Err(ConfigError::EmptyDimensions);
        }
        if self.population_size < MIN_POPULATION {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
                min: MIN_POPULATION,
            });
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        Ok(())
    }
}
