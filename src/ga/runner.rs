//! GA generation loop.
//!
//! [`BinaryPopulation`] evaluates the current generation, records the
//! best genome ever seen and breeds a full replacement population:
//! roulette selection → single-point crossover → bit-flip mutation.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, random_genome, single_point_crossover};
use super::selection::RouletteWheel;
use crate::error::ConfigError;
use crate::objective::Objective;
use crate::random::rng_from;
use rand::rngs::StdRng;
use rand::Rng;

/// Result of a multi-generation [`run`](BinaryPopulation::run).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaReport {
    /// Best genome evaluated over the optimizer's lifetime, `None` if no
    /// generation has run.
    pub best_genome: Option<Vec<bool>>,

    /// Fitness of `best_genome`.
    pub best_fitness: f64,

    /// Total generations executed by the optimizer so far.
    pub generations: usize,

    /// Best-ever fitness after each generation of this run.
    pub fitness_history: Vec<f64>,
}

/// Generational GA over fixed-length bit strings.
///
/// The GA maximizes. There is no elitism: the best genome may be lost from
/// the population, but it is kept in [`best_genome`](Self::best_genome).
///
/// # Usage
///
/// ```
/// use u_evolve::ga::{BinaryPopulation, GaConfig};
///
/// let config = GaConfig::new(16)
///     .with_population_size(30)
///     .with_mutation_rate(1.0 / 16.0)
///     .with_seed(42);
/// let one_max = |g: &[bool]| g.iter().filter(|&&b| b).count() as f64;
/// let mut ga = BinaryPopulation::new(config, one_max).unwrap();
///
/// let report = ga.run(50).unwrap();
/// assert!(report.best_fitness >= 12.0);
/// ```
pub struct BinaryPopulation<O> {
    config: GaConfig,
    objective: O,
    population: Vec<Vec<bool>>,
    best_genome: Option<Vec<bool>>,
    best_fitness: f64,
    generation: usize,
    rng: StdRng,
}

impl<O: Objective<[bool]>> BinaryPopulation<O> {
    /// Validates `config` and creates `N` random genomes.
    ///
    /// Nothing is evaluated until the first [`optimize`](Self::optimize).
    pub fn new(config: GaConfig, objective: O) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        let population = (0..config.population_size)
            .map(|_| random_genome(config.genome_length, &mut rng))
            .collect();

        log::debug!(
            "ga: initialized {} genomes of {} bits",
            config.population_size,
            config.genome_length
        );

        Ok(Self {
            config,
            objective,
            population,
            best_genome: None,
            best_fitness: f64::NEG_INFINITY,
            generation: 0,
            rng,
        })
    }

    /// Advances the population by exactly one generation.
    ///
    /// An objective error is returned unchanged before any state is
    /// modified.
    pub fn optimize(&mut self) -> Result<(), O::Error> {
        let n = self.population.len();

        // 1. Evaluation
        let fitness = self
            .population
            .iter()
            .map(|g| self.objective.evaluate(g))
            .collect::<Result<Vec<f64>, _>>()?;

        // 2. Best-ever
        let mut best = 0;
        for (i, &f) in fitness.iter().enumerate().skip(1) {
            if f > fitness[best] {
                best = i;
            }
        }
        if fitness[best] > self.best_fitness {
            log::trace!(
                "ga: best-ever improved {} -> {} at generation {}",
                self.best_fitness,
                fitness[best],
                self.generation
            );
            self.best_fitness = fitness[best];
            self.best_genome = Some(self.population[best].clone());
        }

        // 3. Breeding
        let wheel = RouletteWheel::new(&fitness);
        let mut next = Vec::with_capacity(n);
        while next.len() < n {
            let p1 = &self.population[wheel.spin(&mut self.rng)];
            let p2 = &self.population[wheel.spin(&mut self.rng)];

            let (mut c1, mut c2) = if self.rng.random::<f64>() < self.config.crossover_rate {
                single_point_crossover(p1, p2, &mut self.rng)
            } else {
                (p1.clone(), p2.clone())
            };
            bit_flip_mutation(&mut c1, self.config.mutation_rate, &mut self.rng);
            bit_flip_mutation(&mut c2, self.config.mutation_rate, &mut self.rng);

            next.push(c1);
            if next.len() < n {
                next.push(c2);
            }
        }

        // 4. Replacement
        self.population = next;
        self.generation += 1;

        log::debug!(
            "ga: generation {} best-ever fitness {}",
            self.generation,
            self.best_fitness
        );
        Ok(())
    }

    /// Runs `generations` consecutive calls to [`optimize`](Self::optimize).
    pub fn run(&mut self, generations: usize) -> Result<GaReport, O::Error> {
        let mut fitness_history = Vec::with_capacity(generations);
        for _ in 0..generations {
            self.optimize()?;
            fitness_history.push(self.best_fitness);
        }

        Ok(GaReport {
            best_genome: self.best_genome.clone(),
            best_fitness: self.best_fitness,
            generations: self.generation,
            fitness_history,
        })
    }
}

impl<O> BinaryPopulation<O> {
    /// Current genomes, indexed `0..N`.
    pub fn population(&self) -> &[Vec<bool>] {
        &self.population
    }

    /// Best genome evaluated so far, `None` before the first generation.
    pub fn best_genome(&self) -> Option<&[bool]> {
        self.best_genome.as_deref()
    }

    /// Fitness of [`best_genome`](Self::best_genome), `-inf` before the
    /// first generation.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

// ============================================================================
// Tests
// ============================================================================
