//! Error types shared by all optimizers.
//!
//! Configuration problems are reported as [`ConfigError`] before any state
//! is created. Failures of the injected objective are never wrapped during
//! `optimize()`: they come back as the objective's own error type. Only
//! construction, which may have to evaluate the initial population, needs
//! the combined [`InitError`].

use thiserror::Error;

/// Malformed optimizer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds vector
        lower_len: usize,
        /// Length of the upper bounds vector
        upper_len: usize,
    },

    /// A bound pair is inverted or not finite.
    #[error("invalid bounds at index {index}: lower ({lower}) must be finite and <= upper ({upper})")]
    InvalidBounds {
        /// Dimension of the offending pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Declared dimensionality disagrees with the bounds or genome length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Declared dimensionality
        expected: usize,
        /// Length actually provided
        got: usize,
    },

    /// The search space has no dimensions.
    #[error("search space must have at least one dimension")]
    EmptyDimensions,

    /// Population (or swarm) is too small for the algorithm.
    #[error("population size ({size}) must be >= {min}")]
    PopulationTooSmall {
        /// The requested size
        size: usize,
        /// Minimum size accepted by the algorithm
        min: usize,
    },

    /// A probability lies outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    RateOutOfRange {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A coefficient is negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidCoefficient {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl ConfigError {
    /// Returns `true` for errors describing the bounds or dimensionality.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            ConfigError::BoundsMismatch { .. }
                | ConfigError::InvalidBounds { .. }
                | ConfigError::DimensionMismatch { .. }
                | ConfigError::EmptyDimensions
        )
    }

    /// Returns `true` for rejected probabilities or coefficients.
    pub fn is_rate_error(&self) -> bool {
        matches!(
            self,
            ConfigError::RateOutOfRange { .. } | ConfigError::InvalidCoefficient { .. }
        )
    }
}

/// Checks that `value` is a probability.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}

/// Checks that `value` is finite and non-negative.
pub(crate) fn check_coefficient(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidCoefficient { name, value })
    }
}

/// Failure while constructing an optimizer.
///
/// `E` is the error type of the injected objective.
#[derive(Debug, Error)]
pub enum InitError<E> {
    /// The configuration was rejected before any evaluation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The objective failed while scoring the initial population.
    #[error("objective failed while evaluating the initial population")]
    Objective(#[source] E),
}

impl<E> InitError<E> {
    /// Returns the configuration error, if that is what failed.
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            InitError::Config(e) => Some(e),
            InitError::Objective(_) => None,
        }
    }
}
