//! Fitness-proportionate (roulette-wheel) selection.
//!
//! The GA maximizes, so raw fitness is used as the wheel weight after a
//! shift that makes the least fit individual weigh exactly 1. Penalized
//! (negative) fitness values therefore stay selectable, and a population
//! of identical fitness is sampled uniformly.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// A roulette wheel built once per generation from the population fitness.
///
/// Weights are `f - min_f + 1`, where `min_f` is the least finite fitness.
/// NaN and `-inf` get weight 0. `+inf` and weights that overflow are capped
/// at `f64::MAX / (n + 1)`, so the total stays finite.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::RouletteWheel;
/// use u_evolve::random::create_rng;
///
/// let wheel = RouletteWheel::new(&[-3.0, 0.0, 5.0]);
/// assert_eq!(wheel.weights(), &[1.0, 4.0, 9.0]);
///
/// let mut rng = create_rng(42);
/// let pick = wheel.spin(&mut rng);
/// assert!(pick < 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouletteWheel {
    weights: Vec<f64>,
    total: f64,
}

impl RouletteWheel {
    /// Builds the wheel.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn new(fitness: &[f64]) -> Self {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        let min = fitness
            .iter()
            .copied()
            .filter(|f| f.is_finite())
            .fold(f64::INFINITY, f64::min);

        let cap = f64::MAX / (fitness.len() + 1) as f64;
        let weights: Vec<f64> = fitness
            .iter()
            .map(|&f| {
                if f == f64::INFINITY {
                    return cap;
                }
                let w = f - min + 1.0;
                if w.is_nan() || w <= 0.0 {
                    0.0
                } else {
                    w.min(cap)
                }
            })
            .collect();
        let total = weights.iter().sum();

        Self { weights, total }
    }

    /// Selection weight of each individual.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Selects one index.
    ///
    /// Draws a pick uniformly in `[0, total)` and returns the first
    /// individual whose cumulative weight exceeds it. The last individual
    /// is the fallback when rounding leaves the cumulative sum marginally
    /// short of the pick.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let n = self.weights.len();
        if n == 1 {
            return 0;
        }
        if !(self.total.is_finite() && self.total > 0.0) {
            return rng.random_range(0..n);
        }

        let pick = rng.random_range(0.0..self.total);
        let mut cumulative = 0.0;
        for (i, &w) in self.weights.iter().enumerate() {
            cumulative += w;
            if cumulative > pick {
                return i;
            }
        }

        n - 1 // floating-point fallback
    }
}
