//! DE configuration.

use crate::bounds::Bounds;
use crate::error::{check_coefficient, check_rate, ConfigError};

/// Smallest population that admits three distinct donors.
pub(crate) const MIN_POPULATION: usize = 3;

/// Configuration for Differential Evolution.
///
/// # Examples
///
/// ```
/// use u_evolve::de::DeConfig;
///
/// let config = DeConfig::uniform(3, -500.0, 500.0)
///     .with_population_size(30)
///     .with_scale_factor(0.8)
///     .with_recombination_probability(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeConfig {
    /// Lower limit of each dimension.
    pub lower: Vec<f64>,

    /// Upper limit of each dimension.
    pub upper: Vec<f64>,

    /// Dimensionality `d` of every candidate.
    ///
    /// Must equal the length of both bound vectors.
    pub dimensions: usize,

    /// Number of candidates `N`. At least 3.
    pub population_size: usize,

    /// Scale factor `F` applied to the difference vector.
    ///
    /// Typical range: 0.4–1.0.
    pub scale_factor: f64,

    /// Per-dimension probability `p_r` of taking the donor gene (0.0–1.0).
    pub recombination_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl DeConfig {
    /// Creates a configuration over the box `[lower, upper]`.
    ///
    /// The dimensionality is taken from `lower`.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self {
            dimensions: lower.len(),
            lower,
            upper,
            population_size: 30,
            scale_factor: 0.5,
            recombination_probability: 0.9,
            seed: None,
        }
    }

    /// Creates a configuration with the same interval in every dimension.
    pub fn uniform(dimensions: usize, lower: f64, upper: f64) -> Self {
        Self::new(vec![lower; dimensions], vec![upper; dimensions])
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Declares the dimensionality explicitly; checked against the bounds.
    pub fn with_dimensions(mut self, d: usize) -> Self {
        self.dimensions = d;
        self
    }

    pub fn with_scale_factor(mut self, f: f64) -> Self {
        self.scale_factor = f;
        self
    }

    pub fn with_recombination_probability(mut self, p: f64) -> Self {
        self.recombination_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the validated search box.
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        let bounds = Bounds::new(self.lower.clone(), self.upper.clone())?;
        if bounds.dimensions() != self.dimensions {
            return Err(ConfigError::DimensionMismatch {
                expected: self.dimensions,
                got: bounds.dimensions(),
            });
        }
        Ok(bounds)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds()?;
        if self.population_size < MIN_POPULATION {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
                min: MIN_POPULATION,
            });
        }
        check_coefficient("scale_factor", self.scale_factor)?;
        check_rate("recombination_probability", self.recombination_probability)?;
        Ok(())
    }
}
