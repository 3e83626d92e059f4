//! Binary Genetic Algorithm (GA).
//!
//! A fixed-size population of bit strings evolves generationally:
//! roulette-wheel selection on shifted fitness, single-point crossover and
//! per-gene bit-flip mutation. The GA maximizes and keeps no elite; the
//! best genome ever evaluated is tracked separately.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Genome length, population size, mutation and crossover rates
//! - [`BinaryPopulation`]: Owns the genomes and the best-ever record
//! - [`RouletteWheel`]: Fitness-proportionate selection over one generation
//! - [`GaReport`]: Summary of a multi-generation run
//!
//! # Submodules
//!
//! - [`operators`]: Bit-string initialization, crossover and mutation
//! - [`knapsack`]: 0/1 knapsack objective with configurable penalty
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod knapsack;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{BinaryPopulation, GaReport};
pub use selection::RouletteWheel;
