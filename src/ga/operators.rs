//! Bit-string genetic operators.
//!
//! These operate on `&[bool]` genomes, where `true` means the gene is set
//! (for example, "item selected" in a knapsack).
//!
//! # Operators
//!
//! - [`random_genome`]: Fair-coin initialization, O(n)
//! - [`single_point_crossover`]: Exchange tails after a random cut, O(n)
//! - [`bit_flip_mutation`]: Independent per-gene flips, O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use rand::Rng;

/// Creates a genome of `length` independent fair-coin bits.
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Vec<bool> {
    (0..length).map(|_| rng.random_bool(0.5)).collect()
}

/// Single-point crossover.
///
/// Picks a cut point in `[1, n-1]`; the first child takes `parent1`'s head
/// and `parent2`'s tail, the second child the reverse. Genomes shorter
/// than two genes have no interior cut and are returned unchanged.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let point = rng.random_range(1..n);
    let mut child1 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1[..point]);
    child1.extend_from_slice(&parent2[point..]);
    let mut child2 = Vec::with_capacity(n);
    child2.extend_from_slice(&parent2[..point]);
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Flips each gene independently with probability `rate`.
///
/// Returns the number of flipped genes.
pub fn bit_flip_mutation<R: Rng>(genome: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in genome.iter_mut() {
        if rng.random::<f64>() < rate {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}
