//! Box constraints for the real-valued optimizers.
//!
//! DE and PSO use different boundary policies: DE reflects a
//! stray coordinate back across the violated limit once, PSO clips it.

use crate::error::ConfigError;
use rand::Rng;

/// Per-dimension `[lower, upper]` limits.
///
/// Always non-empty, finite, and `lower[i] <= upper[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Validates and builds bounds from matching lower/upper vectors.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, ConfigError> {
        if lower.len() != upper.len() {
            return Err(ConfigError::BoundsMismatch {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(ConfigError::EmptyDimensions);
        }
        for (index, (&lo, &hi)) in lower.iter().zip(&upper).enumerate() {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(ConfigError::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// The same `[lower, upper]` interval in every one of `dimensions`.
    pub fn uniform(dimensions: usize, lower: f64, upper: f64) -> Result<Self, ConfigError> {
        Self::new(vec![lower; dimensions], vec![upper; dimensions])
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Returns `true` if every coordinate of `point` is within bounds.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dimensions()
            && point
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
    }

    /// Samples a point uniformly, each coordinate in `[lower, upper)`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&lo, &hi)| (lo + rng.random::<f64>() * (hi - lo)).min(hi))
            .collect()
    }

    /// Mirrors out-of-range coordinates across the violated limit.
    ///
    /// A single reflection: `2*lower - v` below, `2*upper - v` above. A
    /// violation larger than the interval width still lands outside after
    /// reflecting and is left there.
    pub fn reflect(&self, point: &mut [f64]) {
        for (v, (&lo, &hi)) in point.iter_mut().zip(self.lower.iter().zip(&self.upper)) {
            if *v < lo {
                *v = 2.0 * lo - *v;
            } else if *v > hi {
                *v = 2.0 * hi - *v;
            }
        }
    }

    /// Clamps every coordinate into `[lower, upper]`.
    pub fn clip(&self, point: &mut [f64]) {
        for (v, (&lo, &hi)) in point.iter_mut().zip(self.lower.iter().zip(&self.upper)) {
            *v = v.clamp(lo, hi);
        }
    }
}
