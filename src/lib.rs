//! Population-based optimizers for black-box objectives.
//!
//! Provides three classic evolutionary algorithms behind a shared
//! [`Objective`](objective::Objective) abstraction:
//!
//! - **Differential Evolution (DE)**: DE/rand/1/bin over a bounded real box,
//!   minimizing or maximizing per call.
//! - **Particle Swarm Optimization (PSO)**: Inertia-weight swarm over a
//!   bounded real box, always minimizing.
//! - **Genetic Algorithm (GA)**: Generational binary GA with roulette
//!   selection, always maximizing. Ships a 0/1 knapsack objective.
//!
//! Every optimizer is driven one step at a time (`optimize`) or for a fixed
//! number of steps (`run`), and exposes read access to its population or
//! swarm between steps. All randomness comes from a single seedable RNG per
//! optimizer, so a fixed seed reproduces a run exactly.
//!
//! # Architecture
//!
//! - [`bounds`], [`objective`], [`random`], [`error`]: shared support
//! - [`de`], [`pso`], [`ga`]: one module per algorithm
//!
//! Logging goes through the [`log`] facade; no logger is installed.

pub mod bounds;
pub mod de;
pub mod error;
pub mod ga;
pub mod objective;
pub mod pso;
pub mod random;

pub use bounds::Bounds;
pub use error::{ConfigError, InitError};
pub use objective::{Fallible, Objective};
