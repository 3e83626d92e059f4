//! Variation operators for Differential Evolution.
//!
//! - [`distinct_triple`]: three mutually distinct population indices
//! - [`donor_vector`]: `a + F * (b - c)` (DE/rand/1)
//! - [`binomial_crossover`]: per-gene recombination with a forced gene
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"

use rand::Rng;

/// Draws three mutually distinct indices from `0..n` by rejection.
///
/// The indices are not required to differ from the target's own index.
///
/// # Panics
/// Panics if `n < 3`; configurations are validated against that before an
/// optimizer exists.
pub fn distinct_triple<R: Rng>(n: usize, rng: &mut R) -> [usize; 3] {
    assert!(n >= 3, "need at least 3 candidates, got {n}");

    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n);
    while b == a {
        b = rng.random_range(0..n);
    }
    let mut c = rng.random_range(0..n);
    while c == a || c == b {
        c = rng.random_range(0..n);
    }
    [a, b, c]
}

/// Builds the donor `a + f * (b - c)`.
pub fn donor_vector(a: &[f64], b: &[f64], c: &[f64], f: f64) -> Vec<f64> {
    a.iter()
        .zip(b.iter().zip(c))
        .map(|(&ai, (&bi, &ci))| ai + f * (bi - ci))
        .collect()
}

/// Binomial crossover between `parent` and `donor`.
///
/// Each gene independently comes from the donor with probability
/// `probability`. If the mask came out empty, one uniformly chosen gene is
/// taken from the donor so the offspring never equals the parent by
/// construction.
///
/// # Panics
/// Panics if the vectors differ in length or are empty.
pub fn binomial_crossover<R: Rng>(
    parent: &[f64],
    donor: &[f64],
    probability: f64,
    rng: &mut R,
) -> Vec<f64> {
    let n = parent.len();
    assert_eq!(n, donor.len(), "parent and donor must have equal length");
    assert!(n > 0, "vectors must not be empty");

    let mut offspring = parent.to_vec();
    let mut taken = false;
    for (gene, &d) in offspring.iter_mut().zip(donor) {
        if rng.random::<f64>() < probability {
            *gene = d;
            taken = true;
        }
    }
    if !taken {
        let j = rng.random_range(0..n);
        offspring[j] = donor[j];
    }
    offspring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_distinct_triple_minimum_population() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let mut t = distinct_triple(3, &mut rng);
            t.sort_unstable();
            assert_eq!(t, [0, 1, 2]);
        }
    }

    #[test]
    fn test_distinct_triple_covers_population() {
        let mut rng = create_rng(42);
        let mut seen = [0u32; 6];
        for _ in 0..6000 {
            for i in distinct_triple(6, &mut rng) {
                seen[i] += 1;
            }
        }
        // Each index appears with probability 1/2 per draw.
        for &c in &seen {
            assert!(c > 2500 && c < 3500, "expected roughly uniform, got {seen:?}");
        }
    }

    #[test]
    #[should_panic(expected = "need at least 3 candidates")]
    fn test_distinct_triple_rejects_small_population() {
        let mut rng = create_rng(42);
        distinct_triple(2, &mut rng);
    }

    #[test]
    fn test_donor_vector() {
        let donor = donor_vector(&[1.0, 2.0], &[3.0, 5.0], &[1.0, 1.0], 0.5);
        assert_eq!(donor, vec![2.0, 4.0]);
    }

    #[test]
    fn test_crossover_probability_one_takes_donor() {
        let mut rng = create_rng(42);
        let child = binomial_crossover(&[0.0; 4], &[1.0; 4], 1.0, &mut rng);
        assert_eq!(child, vec![1.0; 4]);
    }

    #[test]
    fn test_crossover_probability_zero_forces_one_gene() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let child = binomial_crossover(&[0.0; 5], &[1.0; 5], 0.0, &mut rng);
            let from_donor = child.iter().filter(|&&g| g == 1.0).count();
            assert_eq!(from_donor, 1, "exactly one forced gene, got {child:?}");
        }
    }

    #[test]
    fn test_crossover_single_dimension_always_donor() {
        let mut rng = create_rng(3);
        for p in [0.0, 0.5, 1.0] {
            assert_eq!(binomial_crossover(&[0.0], &[9.0], p, &mut rng), vec![9.0]);
        }
    }

    proptest! {
        #[test]
        fn prop_crossover_genes_come_from_parents(seed in any::<u64>(), p in 0.0f64..=1.0) {
            let mut rng = create_rng(seed);
            let parent = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
            let donor = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
            let child = binomial_crossover(&parent, &donor, p, &mut rng);
            prop_assert_eq!(child.len(), parent.len());
            let mut differs = false;
            for (i, &g) in child.iter().enumerate() {
                prop_assert!(g == parent[i] || g == donor[i]);
                differs |= g != parent[i];
            }
            prop_assert!(differs);
        }
    }
}
