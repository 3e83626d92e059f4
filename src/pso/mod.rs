//! Particle Swarm Optimization (PSO).
//!
//! Particles fly through a box, each pulled toward its own best position
//! and the swarm's best position:
//!
//! ```text
//! v ← w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)
//! x ← clip(x + v, lower, upper)
//! ```
//!
//! The swarm always minimizes. Positions are clipped to the bounds, unlike
//! DE which reflects.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: Bounds, swarm size, inertia and acceleration coefficients
//! - [`Swarm`]: Owns the particles and the global best
//! - [`Particle`]: Read-only view of one particle
//! - [`SwarmSnapshot`]: Owned copy of the swarm state
//! - [`PsoReport`]: Summary of a multi-iteration run
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"
//! - Clerc & Kennedy (2002), "The Particle Swarm: Explosion, Stability,
//!   and Convergence in a Multidimensional Complex Space"

mod config;
mod particle;
mod runner;

pub use config::PsoConfig;
pub use particle::Particle;
pub use runner::{PsoReport, Swarm, SwarmSnapshot};
