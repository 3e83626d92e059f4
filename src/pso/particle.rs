//! A single PSO particle.

use crate::bounds::Bounds;

/// Position, velocity and personal best of one particle.
///
/// The personal-best value never increases over the particle's lifetime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_value: f64,
}

impl Particle {
    /// Creates a particle whose personal best is its starting point.
    pub(crate) fn new(position: Vec<f64>, velocity: Vec<f64>, value: f64) -> Self {
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_value: value,
        }
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Best position this particle has visited.
    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// Objective value at [`best_position`](Self::best_position).
    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    /// `v = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)`.
    ///
    /// `r1` and `r2` are scalars shared by every dimension.
    pub(crate) fn update_velocity(
        &mut self,
        coefficients: (f64, f64, f64),
        (r1, r2): (f64, f64),
        global_best: &[f64],
    ) {
        let (w, c1, c2) = coefficients;
        for (((v, &x), &pb), &gb) in self
            .velocity
            .iter_mut()
            .zip(&self.position)
            .zip(&self.best_position)
            .zip(global_best)
        {
            *v = w * *v + c1 * r1 * (pb - x) + c2 * r2 * (gb - x);
        }
    }

    /// Moves by the current velocity and clips into `bounds`.
    pub(crate) fn update_position(&mut self, bounds: &Bounds) {
        for (x, &v) in self.position.iter_mut().zip(&self.velocity) {
            *x += v;
        }
        bounds.clip(&mut self.position);
    }

    /// Records `value` at the current position if it is strictly better.
    ///
    /// Returns `true` when the personal best changed.
    pub(crate) fn observe(&mut self, value: f64) -> bool {
        if value < self.best_value {
            self.best_value = value;
            self.best_position.clone_from(&self.position);
            true
        } else {
            false
        }
    }
}
