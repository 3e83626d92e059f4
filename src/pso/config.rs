//! PSO configuration.

use crate::bounds::Bounds;
use crate::error::{check_coefficient, ConfigError};

/// Configuration for Particle Swarm Optimization.
///
/// # Defaults
///
/// Inertia and acceleration coefficients default to the constriction-
/// equivalent values of Clerc & Kennedy (2002): `w = 0.7298`,
/// `c1 = c2 = 1.49618`.
///
/// # Examples
///
/// ```
/// use u_evolve::pso::PsoConfig;
///
/// let config = PsoConfig::uniform(3, -1000.0, 1000.0)
///     .with_particle_count(30)
///     .with_inertia(0.8)
///     .with_cognitive(0.1)
///     .with_social(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Lower limit of each dimension.
    pub lower: Vec<f64>,

    /// Upper limit of each dimension.
    pub upper: Vec<f64>,

    /// Number of particles `N`. At least 1.
    pub particle_count: usize,

    /// Inertia weight `w` applied to the previous velocity.
    pub inertia: f64,

    /// Cognitive coefficient `c1` (pull toward the personal best).
    pub cognitive: f64,

    /// Social coefficient `c2` (pull toward the global best).
    pub social: f64,

    /// Initial velocities are uniform in `[-initial_velocity, initial_velocity]`
    /// per dimension.
    pub initial_velocity: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl PsoConfig {
    /// Creates a configuration over the box `[lower, upper]`.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self {
            lower,
            upper,
            particle_count: 30,
            inertia: 0.7298,
            cognitive: 1.49618,
            social: 1.49618,
            initial_velocity: 0.1,
            seed: None,
        }
    }

    /// Creates a configuration with the same interval in every dimension.
    pub fn uniform(dimensions: usize, lower: f64, upper: f64) -> Self {
        Self::new(vec![lower; dimensions], vec![upper; dimensions])
    }

    pub fn with_particle_count(mut self, n: usize) -> Self {
        self.particle_count = n;
        self
    }

    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
        self
    }

    pub fn with_initial_velocity(mut self, v: f64) -> Self {
        self.initial_velocity = v;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the validated search box.
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        Bounds::new(self.lower.clone(), self.upper.clone())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds()?;
        if self.particle_count == 0 {
            return Err(ConfigError::PopulationTooSmall { size: 0, min: 1 });
        }
        check_coefficient("inertia", self.inertia)?;
        check_coefficient("cognitive", self.cognitive)?;
        check_coefficient("social", self.social)?;
        check_coefficient("initial_velocity", self.initial_velocity)?;
        Ok(())
    }
}
