//! 0/1 knapsack objective.
//!
//! Gene `i` set means item `i` is packed. Feasible selections score their
//! total value; overweight selections score a negative penalty of the
//! excess weight, so they remain comparable (and selectable) under the
//! shifted roulette wheel.

use crate::objective::Objective;
use thiserror::Error;

/// One candidate item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub value: f64,
    pub weight: f64,
}

impl Item {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Fitness assigned to an overweight selection, as a function of the
/// excess weight (always `> 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Penalty {
    /// `-factor * excess`.
    Linear { factor: f64 },

    /// `-factor * excess²`.
    Quadratic { factor: f64 },

    /// Any user mapping from excess weight to fitness.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(f64) -> f64),
}

impl Default for Penalty {
    fn default() -> Self {
        Penalty::Linear { factor: 1.0 }
    }
}

impl Penalty {
    /// Fitness for a selection exceeding capacity by `excess`.
    pub fn apply(&self, excess: f64) -> f64 {
        match *self {
            Penalty::Linear { factor } => -factor * excess,
            Penalty::Quadratic { factor } => -factor * excess * excess,
            Penalty::Custom(f) => f(excess),
        }
    }
}

/// Genome incompatible with the knapsack instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    #[error("genome has {got} genes but the knapsack has {expected} items")]
    GenomeLength { expected: usize, got: usize },
}

/// Totals of a selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackSolution {
    /// Indices of the selected items, ascending.
    pub items: Vec<usize>,
    pub total_value: f64,
    pub total_weight: f64,
}

/// A knapsack instance usable as a GA objective.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::knapsack::{Item, Knapsack};
/// use u_evolve::objective::Objective;
///
/// let knapsack = Knapsack::new(
///     vec![Item::new(10.0, 5.0), Item::new(20.0, 5.0), Item::new(15.0, 5.0)],
///     10.0,
/// );
/// assert_eq!(knapsack.evaluate(&[false, true, true][..]), Ok(35.0));
/// assert_eq!(knapsack.evaluate(&[true, true, true][..]), Ok(-5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: f64,
    penalty: Penalty,
}

impl Knapsack {
    /// Creates an instance with the default linear penalty.
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self {
            items,
            capacity,
            penalty: Penalty::default(),
        }
    }

    /// Replaces the infeasibility penalty.
    pub fn with_penalty(mut self, penalty: Penalty) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of genes a genome for this instance must have.
    pub fn genome_length(&self) -> usize {
        self.items.len()
    }

    /// Selected items and their totals.
    pub fn solution(&self, genome: &[bool]) -> Result<KnapsackSolution, KnapsackError> {
        self.check_length(genome)?;
        let mut packing = KnapsackSolution {
            items: Vec::new(),
            total_value: 0.0,
            total_weight: 0.0,
        };
        for (i, (item, _)) in self
            .items
            .iter()
            .zip(genome)
            .enumerate()
            .filter(|(_, (_, &selected))| selected)
        {
            packing.items.push(i);
            packing.total_value += item.value;
            packing.total_weight += item.weight;
        }
        Ok(packing)
    }

    fn check_length(&self, genome: &[bool]) -> Result<(), KnapsackError> {
        if genome.len() == self.items.len() {
            Ok(())
        } else {
            Err(KnapsackError::GenomeLength {
                expected: self.items.len(),
                got: genome.len(),
            })
        }
    }
}

impl Objective<[bool]> for Knapsack {
    type Error = KnapsackError;

    fn evaluate(&self, genome: &[bool]) -> Result<f64, KnapsackError> {
        let packing = self.solution(genome)?;
        if packing.total_weight > self.capacity {
            Ok(self.penalty.apply(packing.total_weight - self.capacity))
        } else {
            Ok(packing.total_value)
        }
    }
}
