//! Differential Evolution (DE).
//!
//! A population of real vectors inside a box evolves by DE/rand/1/bin:
//! each candidate is challenged by an offspring built from a donor
//! `a + F * (b - c)`, recombined gene by gene, reflected back into bounds,
//! and kept only if strictly better.
//!
//! # Key Types
//!
//! - [`DeConfig`]: Bounds, population size, `F`, `p_r`, seed
//! - [`DifferentialEvolution`]: Owns the population; one generation per
//!   [`optimize`](DifferentialEvolution::optimize) call
//! - [`DeReport`]: Summary of a multi-generation run
//!
//! # Submodules
//!
//! - [`operators`]: Donor construction, binomial crossover, distinct index sampling
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"
//! - Price, Storn & Lampinen (2005), *Differential Evolution: A Practical
//!   Approach to Global Optimization*

mod config;
pub mod operators;
mod runner;

pub use config::DeConfig;
pub use runner::{DeReport, DifferentialEvolution};
