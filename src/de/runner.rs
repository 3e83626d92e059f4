//! DE generation loop.
//!
//! [`DifferentialEvolution`] owns the population and advances it one
//! generation per [`optimize`](DifferentialEvolution::optimize) call:
//! mutation → binomial crossover → reflection → greedy selection.

use super::config::DeConfig;
use super::operators::{binomial_crossover, distinct_triple, donor_vector};
use crate::bounds::Bounds;
use crate::error::InitError;
use crate::objective::Objective;
use crate::random::rng_from;
use rand::rngs::StdRng;

/// Result of a multi-generation [`run`](DifferentialEvolution::run).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeReport {
    /// The best candidate in the final population.
    pub best: Vec<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total generations executed by the optimizer so far.
    pub generations: usize,

    /// Best fitness in the population after each generation of this run,
    /// preceded by the value at the start of the run.
    pub fitness_history: Vec<f64>,
}

/// Differential Evolution over a bounded real search space.
///
/// Candidates are identified by their index. Each generation reads donors
/// only from the generation-start population and writes survivors into a
/// separate buffer, so no candidate sees a sibling's replacement from the
/// same generation.
///
/// # Usage
///
/// ```
/// use u_evolve::de::{DeConfig, DifferentialEvolution};
///
/// let config = DeConfig::uniform(2, -5.0, 5.0)
///     .with_population_size(20)
///     .with_seed(42);
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// let mut de = DifferentialEvolution::new(config, sphere).unwrap();
///
/// for _ in 0..100 {
///     de.optimize(false).unwrap();
/// }
/// let best = de.best_index(false);
/// assert!(de.fitness()[best] < 1e-2);
/// ```
pub struct DifferentialEvolution<O> {
    config: DeConfig,
    bounds: Bounds,
    objective: O,
    population: Vec<Vec<f64>>,
    fitness: Vec<f64>,
    generation: usize,
    rng: StdRng,
}

impl<O: Objective<[f64]>> DifferentialEvolution<O> {
    /// Validates `config`, samples the initial population uniformly within
    /// bounds and evaluates it.
    pub fn new(config: DeConfig, objective: O) -> Result<Self, InitError<O::Error>> {
        config.validate()?;
        let bounds = config.bounds()?;
        let mut rng = rng_from(config.seed);

        let population: Vec<Vec<f64>> = (0..config.population_size)
            .map(|_| bounds.sample(&mut rng))
            .collect();
        let fitness = population
            .iter()
            .map(|x| objective.evaluate(x))
            .collect::<Result<Vec<f64>, _>>()
            .map_err(InitError::Objective)?;

        log::debug!(
            "de: initialized {} candidates in {} dimensions",
            config.population_size,
            config.dimensions
        );

        Ok(Self {
            config,
            bounds,
            objective,
            population,
            fitness,
            generation: 0,
            rng,
        })
    }

    /// Advances the population by exactly one generation.
    ///
    /// The offspring of candidate `i` replaces it only when strictly better:
    /// greater fitness when `maximize` is `true`, lesser otherwise. Ties keep
    /// the parent. A parent whose fitness is NaN is replaced by any offspring
    /// with a comparable fitness.
    ///
    /// An objective error is returned unchanged and leaves the population at
    /// its generation-start state.
    pub fn optimize(&mut self, maximize: bool) -> Result<(), O::Error> {
        let n = self.population.len();
        let f = self.config.scale_factor;
        let p_r = self.config.recombination_probability;

        let mut next_population = Vec::with_capacity(n);
        let mut next_fitness = Vec::with_capacity(n);

        for (parent, &parent_fitness) in self.population.iter().zip(&self.fitness) {
            // 1. Mutation
            let [a, b, c] = distinct_triple(n, &mut self.rng);
            let donor = donor_vector(
                &self.population[a],
                &self.population[b],
                &self.population[c],
                f,
            );

            // 2. Recombination
            let mut offspring = binomial_crossover(parent, &donor, p_r, &mut self.rng);

            // 3. Bound repair
            self.bounds.reflect(&mut offspring);

            // 4. Selection
            let offspring_fitness = self.objective.evaluate(&offspring)?;
            if improves(offspring_fitness, parent_fitness, maximize) {
                next_population.push(offspring);
                next_fitness.push(offspring_fitness);
            } else {
                next_population.push(parent.clone());
                next_fitness.push(parent_fitness);
            }
        }

        self.population = next_population;
        self.fitness = next_fitness;
        self.generation += 1;

        log::debug!(
            "de: generation {} best fitness {:e}",
            self.generation,
            self.fitness[self.best_index(maximize)]
        );
        Ok(())
    }

    /// Runs `generations` consecutive calls to [`optimize`](Self::optimize).
    pub fn run(&mut self, generations: usize, maximize: bool) -> Result<DeReport, O::Error> {
        let mut fitness_history = Vec::with_capacity(generations + 1);
        fitness_history.push(self.fitness[self.best_index(maximize)]);

        for _ in 0..generations {
            self.optimize(maximize)?;
            fitness_history.push(self.fitness[self.best_index(maximize)]);
        }

        let best = self.best_index(maximize);
        Ok(DeReport {
            best: self.population[best].clone(),
            best_fitness: self.fitness[best],
            generations: self.generation,
            fitness_history,
        })
    }
}

impl<O> DifferentialEvolution<O> {
    /// Current candidates, indexed `0..N`.
    pub fn population(&self) -> &[Vec<f64>] {
        &self.population
    }

    /// Fitness of each candidate, aligned with [`population`](Self::population).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Index of the best candidate in the requested direction.
    ///
    /// The lowest index wins ties.
    pub fn best_index(&self, maximize: bool) -> usize {
        let mut best = 0;
        for (i, &f) in self.fitness.iter().enumerate().skip(1) {
            if improves(f, self.fitness[best], maximize) {
                best = i;
            }
        }
        best
    }

    /// Best candidate and its fitness in the requested direction.
    pub fn best(&self, maximize: bool) -> (&[f64], f64) {
        let i = self.best_index(maximize);
        (&self.population[i], self.fitness[i])
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &DeConfig {
        &self.config
    }
}

/// Strict improvement in the requested direction.
///
/// A NaN candidate never improves; any other candidate beats a NaN
/// incumbent.
fn improves(candidate: f64, incumbent: f64, maximize: bool) -> bool {
    if incumbent.is_nan() {
        !candidate.is_nan()
    } else if maximize {
        candidate > incumbent
    } else {
        candidate < incumbent
    }
}

// ============================================================================
// Tests
// ============================================================================
