//! PSO iteration loop.
//!
//! [`Swarm`] owns the particles and the global best and advances them one
//! iteration per [`optimize`](Swarm::optimize) call.

use super::config::PsoConfig;
use super::particle::Particle;
use crate::bounds::Bounds;
use crate::error::InitError;
use crate::objective::Objective;
use crate::random::rng_from;
use rand::rngs::StdRng;
use rand::Rng;

/// Owned copy of the swarm state, for renderers and loggers that keep it
/// beyond the next iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmSnapshot {
    /// Iteration the snapshot was taken after.
    pub iteration: usize,

    /// Current position of each particle.
    pub positions: Vec<Vec<f64>>,

    /// Current velocity of each particle.
    pub velocities: Vec<Vec<f64>>,

    /// Personal-best position of each particle.
    pub best_positions: Vec<Vec<f64>>,

    /// Global-best position.
    pub global_best_position: Vec<f64>,

    /// Global-best value.
    pub global_best_value: f64,
}

/// Result of a multi-iteration [`run`](Swarm::run).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoReport {
    /// The global-best position.
    pub best_position: Vec<f64>,

    /// Value at `best_position`.
    pub best_value: f64,

    /// Total iterations executed by the swarm so far.
    pub iterations: usize,

    /// Global-best value after each iteration of this run, preceded by the
    /// value at the start of the run.
    pub value_history: Vec<f64>,
}

/// Particle Swarm Optimization (minimization only).
///
/// Every particle in an iteration is steered by the global best as it
/// stood when the iteration began; the global best is then reduced from
/// the updated personal bests in particle order.
///
/// # Usage
///
/// ```
/// use u_evolve::pso::{PsoConfig, Swarm};
///
/// let config = PsoConfig::uniform(2, -5.0, 5.0)
///     .with_particle_count(20)
///     .with_seed(42);
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// let mut swarm = Swarm::new(config, sphere).unwrap();
///
/// let start = swarm.global_best_value();
/// swarm.run(100).unwrap();
/// assert!(swarm.global_best_value() <= start);
/// ```
pub struct Swarm<O> {
    config: PsoConfig,
    bounds: Bounds,
    objective: O,
    particles: Vec<Particle>,
    global_best_position: Vec<f64>,
    global_best_value: f64,
    iteration: usize,
    rng: StdRng,
}

impl<O: Objective<[f64]>> Swarm<O> {
    /// Validates `config`, scatters the particles and evaluates their
    /// starting positions.
    pub fn new(config: PsoConfig, objective: O) -> Result<Self, InitError<O::Error>> {
        config.validate()?;
        let bounds = config.bounds()?;
        let mut rng = rng_from(config.seed);
        let v_max = config.initial_velocity;

        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            let position = bounds.sample(&mut rng);
            let velocity: Vec<f64> = (0..bounds.dimensions())
                .map(|_| (rng.random::<f64>() * 2.0 - 1.0) * v_max)
                .collect();
            let value = objective
                .evaluate(&position)
                .map_err(InitError::Objective)?;
            particles.push(Particle::new(position, velocity, value));
        }

        let (global_best_position, global_best_value) = reduce_global_best(
            &particles,
            particles[0].best_position().to_vec(),
            particles[0].best_value(),
        );

        log::debug!(
            "pso: initialized {} particles, global best {:e}",
            particles.len(),
            global_best_value
        );

        Ok(Self {
            config,
            bounds,
            objective,
            particles,
            global_best_position,
            global_best_value,
            iteration: 0,
            rng,
        })
    }

    /// Advances every particle by one iteration.
    ///
    /// An objective error is returned unchanged; the swarm keeps its
    /// iteration-start state.
    pub fn optimize(&mut self) -> Result<(), O::Error> {
        let coefficients = (self.config.inertia, self.config.cognitive, self.config.social);
        let mut particles = self.particles.clone();

        for particle in &mut particles {
            let r = (self.rng.random::<f64>(), self.rng.random::<f64>());
            particle.update_velocity(coefficients, r, &self.global_best_position);
            particle.update_position(&self.bounds);
            let value = self.objective.evaluate(particle.position())?;
            particle.observe(value);
        }

        let (position, value) = reduce_global_best(
            &particles,
            std::mem::take(&mut self.global_best_position),
            self.global_best_value,
        );
        if value < self.global_best_value {
            log::trace!(
                "pso: iteration {} improved global best {:e} -> {:e}",
                self.iteration + 1,
                self.global_best_value,
                value
            );
        }
        self.global_best_position = position;
        self.global_best_value = value;
        self.particles = particles;
        self.iteration += 1;

        log::debug!(
            "pso: iteration {} global best {:e}",
            self.iteration,
            self.global_best_value
        );
        Ok(())
    }

    /// Runs `iterations` consecutive calls to [`optimize`](Self::optimize).
    pub fn run(&mut self, iterations: usize) -> Result<PsoReport, O::Error> {
        let mut value_history = Vec::with_capacity(iterations + 1);
        value_history.push(self.global_best_value);

        for _ in 0..iterations {
            self.optimize()?;
            value_history.push(self.global_best_value);
        }

        Ok(PsoReport {
            best_position: self.global_best_position.clone(),
            best_value: self.global_best_value,
            iterations: self.iteration,
            value_history,
        })
    }
}

impl<O> Swarm<O> {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Best position any particle has visited.
    pub fn global_best_position(&self) -> &[f64] {
        &self.global_best_position
    }

    /// Objective value at [`global_best_position`](Self::global_best_position).
    pub fn global_best_value(&self) -> f64 {
        self.global_best_value
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    /// Copies the current state out of the swarm.
    pub fn snapshot(&self) -> SwarmSnapshot {
        SwarmSnapshot {
            iteration: self.iteration,
            positions: self.particles.iter().map(|p| p.position().to_vec()).collect(),
            velocities: self.particles.iter().map(|p| p.velocity().to_vec()).collect(),
            best_positions: self
                .particles
                .iter()
                .map(|p| p.best_position().to_vec())
                .collect(),
            global_best_position: self.global_best_position.clone(),
            global_best_value: self.global_best_value,
        }
    }
}

/// Folds the particles' personal bests into an incumbent global best.
///
/// Only strictly lower values replace the incumbent, so the first particle
/// wins ties.
fn reduce_global_best(
    particles: &[Particle],
    mut position: Vec<f64>,
    mut value: f64,
) -> (Vec<f64>, f64) {
    for p in particles {
        if p.best_value() < value {
            value = p.best_value();
            position.clear();
            position.extend_from_slice(p.best_position());
        }
    }
    (position, value)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Fallible;
    use std::cell::Cell;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    fn griewank(x: &[f64]) -> f64 {
        let sum: f64 = x.iter().map(|v| v * v).sum::<f64>() / 4000.0;
        let prod: f64 = x
            .iter()
            .enumerate()
            .map(|(i, v)| (v / ((i + 1) as f64).sqrt()).cos())
            .product();
        sum - prod + 1.0
    }

    #[test]
    fn test_initialization() {
        let config = PsoConfig::uniform(3, -5.0, 5.0)
            .with_particle_count(12)
            .with_seed(42);
        let swarm = Swarm::new(config, sphere).unwrap();

        assert_eq!(swarm.particles().len(), 12);
        for p in swarm.particles() {
            assert!(swarm.bounds().contains(p.position()));
            assert!(p.velocity().iter().all(|v| v.abs() <= 0.1));
            assert_eq!(p.best_position(), p.position());
            assert_eq!(p.best_value(), sphere(p.position()));
        }

        let min = swarm
            .particles()
            .iter()
            .map(|p| p.best_value())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(swarm.global_best_value(), min);
        assert_eq!(sphere(swarm.global_best_position()), min);
    }

    #[test]
    fn test_bests_never_increase() {
        let config = PsoConfig::uniform(3, -600.0, 600.0)
            .with_particle_count(20)
            .with_seed(7);
        let mut swarm = Swarm::new(config, griewank).unwrap();

        let mut global = swarm.global_best_value();
        let mut personal: Vec<f64> = swarm.particles().iter().map(|p| p.best_value()).collect();
        for _ in 0..100 {
            swarm.optimize().unwrap();
            assert!(swarm.global_best_value() <= global);
            global = swarm.global_best_value();
            for (p, prev) in swarm.particles().iter().zip(personal.iter_mut()) {
                assert!(p.best_value() <= *prev);
                *prev = p.best_value();
            }
        }
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        // Large coefficients drive particles into the walls.
        let config = PsoConfig::new(vec![-1.0, 0.0], vec![1.0, 10.0])
            .with_particle_count(10)
            .with_inertia(1.2)
            .with_cognitive(3.0)
            .with_social(3.0)
            .with_initial_velocity(5.0)
            .with_seed(3);
        let mut swarm = Swarm::new(config, sphere).unwrap();
        for _ in 0..50 {
            swarm.optimize().unwrap();
            for p in swarm.particles() {
                assert!(swarm.bounds().contains(p.position()), "{:?}", p.position());
            }
        }
    }

    #[test]
    fn test_single_particle_converges() {
        // A lone particle has its personal best equal to the global best, so
        // both attraction terms vanish once it sits there. The default
        // inertia below 1 then damps the velocity to zero near the start
        // point. Unit inertia keeps it moving along the last step.
        let config = PsoConfig::uniform(1, -5.0, 5.0)
            .with_particle_count(1)
            .with_inertia(1.0)
            .with_cognitive(1.0)
            .with_social(1.0)
            .with_initial_velocity(1.0)
            .with_seed(42);
        let mut swarm = Swarm::new(config, |x: &[f64]| x[0] * x[0]).unwrap();
        let report = swarm.run(20_000).unwrap();

        for w in report.value_history.windows(2) {
            assert!(w[1] <= w[0], "global best increased: {} -> {}", w[0], w[1]);
        }
        assert!(
            report.best_value < 1e-2,
            "expected global best near 0, got {}",
            report.best_value
        );
    }

    #[test]
    fn test_single_particle_default_coefficients_never_worsens() {
        let config = PsoConfig::uniform(1, -5.0, 5.0)
            .with_particle_count(1)
            .with_seed(42);
        let mut swarm = Swarm::new(config, |x: &[f64]| x[0] * x[0]).unwrap();
        let report = swarm.run(1_000).unwrap();

        assert_eq!(report.value_history.len(), 1_001);
        for w in report.value_history.windows(2) {
            assert!(w[1] <= w[0], "global best increased: {} -> {}", w[0], w[1]);
        }
        let p = &swarm.particles()[0];
        assert!(swarm.bounds().contains(p.position()));
        assert_eq!(p.best_value(), swarm.global_best_value());
    }

    #[test]
    fn test_sphere_convergence() {
        let config = PsoConfig::uniform(3, -5.0, 5.0)
            .with_particle_count(30)
            .with_seed(42);
        let mut swarm = Swarm::new(config, sphere).unwrap();
        let report = swarm.run(300).unwrap();

        assert!(
            report.best_value < 1e-4,
            "expected value < 1e-4 for 3D sphere, got {}",
            report.best_value
        );
        assert_eq!(report.iterations, 300);
        assert_eq!(report.value_history.len(), 301);
        assert_eq!(report.best_value, sphere(&report.best_position));
    }

    #[test]
    fn test_snapshot_matches_accessors() {
        let config = PsoConfig::uniform(2, -1.0, 1.0)
            .with_particle_count(4)
            .with_seed(9);
        let mut swarm = Swarm::new(config, sphere).unwrap();
        swarm.run(3).unwrap();

        let snap = swarm.snapshot();
        assert_eq!(snap.iteration, 3);
        assert_eq!(snap.positions.len(), 4);
        for (i, p) in swarm.particles().iter().enumerate() {
            assert_eq!(snap.positions[i], p.position());
            assert_eq!(snap.velocities[i], p.velocity());
            assert_eq!(snap.best_positions[i], p.best_position());
        }
        assert_eq!(snap.global_best_position, swarm.global_best_position());
        assert_eq!(snap.global_best_value, swarm.global_best_value());
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let config = PsoConfig::uniform(2, -3.0, 3.0)
            .with_particle_count(6)
            .with_seed(11);
        let mut a = Swarm::new(config.clone(), sphere).unwrap();
        let mut b = Swarm::new(config, sphere).unwrap();
        a.run(25).unwrap();
        b.run(25).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_reduce_global_best_first_wins_ties() {
        let particles = vec![
            Particle::new(vec![1.0], vec![0.0], 2.0),
            Particle::new(vec![2.0], vec![0.0], 1.0),
            Particle::new(vec![3.0], vec![0.0], 1.0),
        ];
        let (pos, val) = reduce_global_best(&particles, vec![9.0], f64::INFINITY);
        assert_eq!(pos, vec![2.0]);
        assert_eq!(val, 1.0);

        let (pos, val) = reduce_global_best(&particles, vec![9.0], 1.0);
        assert_eq!(pos, vec![9.0], "incumbent keeps ties");
        assert_eq!(val, 1.0);
    }

    #[derive(Debug, PartialEq)]
    struct Failed;

    #[test]
    fn test_objective_error_leaves_swarm_unchanged() {
        let calls = Cell::new(0usize);
        let objective = Fallible(|x: &[f64]| {
            calls.set(calls.get() + 1);
            if calls.get() > 5 {
                Err(Failed)
            } else {
                Ok(sphere(x))
            }
        });
        let config = PsoConfig::uniform(2, -1.0, 1.0)
            .with_particle_count(3)
            .with_seed(1);
        let mut swarm = Swarm::new(config, objective).unwrap();
        let before = swarm.snapshot();

        // Third initial evaluation is call 3; the first iteration fails on
        // its third particle.
        assert_eq!(swarm.optimize(), Err(Failed));
        assert_eq!(swarm.snapshot(), before);
        assert_eq!(swarm.iteration(), 0);
    }

    #[test]
    fn test_objective_error_during_init() {
        let objective = Fallible(|_: &[f64]| Err::<f64, _>(Failed));
        let config = PsoConfig::uniform(1, -1.0, 1.0).with_particle_count(2);
        assert!(matches!(
            Swarm::new(config, objective),
            Err(InitError::Objective(Failed))
        ));
    }
}
