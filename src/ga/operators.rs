//! Bit-string genetic operators.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: Swap the tails after one cut point
//! - [`two_point_crossover`]: Swap the segment between two cut points
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: Flip every gene independently with a fixed
//!   probability
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"

use rand::Rng;

/// Crossover operator applied to parent pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CrossoverKind {
    /// Single cut point.
    #[default]
    OnePoint,
    /// Two cut points.
    TwoPoint,
}

impl CrossoverKind {
    /// Recombines two parents into two children.
    pub fn apply<R: Rng>(self, parent1: &[bool], parent2: &[bool], rng: &mut R) -> (Vec<bool>, Vec<bool>) {
        match self {
            CrossoverKind::OnePoint => one_point_crossover(parent1, parent2, rng),
            CrossoverKind::TwoPoint => two_point_crossover(parent1, parent2, rng),
        }
    }
}

/// One-point crossover.
///
/// Picks a cut `c` in `1..n` and exchanges genes `c..n`. Parents shorter
/// than two genes are returned unchanged.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn one_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    if n < 2 {
        return (child1, child2);
    }

    let cut = rng.random_range(1..n);
    child1[cut..].copy_from_slice(&parent2[cut..]);
    child2[cut..].copy_from_slice(&parent1[cut..]);
    (child1, child2)
}

/// Two-point crossover.
///
/// Picks cuts `a <= b` in `1..n` and exchanges genes `a..b`. Parents shorter
/// than three genes fall back to [`one_point_crossover`].
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 3 {
        return one_point_crossover(parent1, parent2, rng);
    }

    let mut a = rng.random_range(1..n);
    let mut b = rng.random_range(1..n);
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    child1[a..b].copy_from_slice(&parent2[a..b]);
    child2[a..b].copy_from_slice(&parent1[a..b]);
    (child1, child2)
}

/// Flips each gene independently with probability `rate`.
///
/// Returns the number of flipped genes.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn ones(n: usize) -> Vec<bool> {
        vec![true; n]
    }

    fn zeros(n: usize) -> Vec<bool> {
        vec![false; n]
    }

    #[test]
    fn test_one_point_preserves_gene_multiset() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let (c1, c2) = one_point_crossover(&ones(8), &zeros(8), &mut rng);
            for i in 0..8 {
                // each position holds one gene from each parent
                assert_ne!(c1[i], c2[i]);
            }
            // child1 is a prefix of ones followed by zeros
            let cut = c1.iter().position(|&g| !g).expect("cut in 1..n");
            assert!(cut >= 1);
            assert!(c1[cut..].iter().all(|&g| !g));
        }
    }

    #[test]
    fn test_two_point_segment() {
        let mut rng = create_rng(7);
        for _ in 0..100 {
            let (c1, c2) = two_point_crossover(&ones(10), &zeros(10), &mut rng);
            assert!(c1[0], "first gene is never exchanged");
            for i in 0..10 {
                assert_ne!(c1[i], c2[i]);
            }
            // zeros in child1 form one contiguous block
            let zero_positions: Vec<usize> = (0..10).filter(|&i| !c1[i]).collect();
            if let (Some(&first), Some(&last)) = (zero_positions.first(), zero_positions.last()) {
                assert_eq!(last - first + 1, zero_positions.len());
            }
        }
    }

    #[test]
    fn test_short_parents() {
        let mut rng = create_rng(1);
        let (c1, c2) = one_point_crossover(&[true], &[false], &mut rng);
        assert_eq!((c1, c2), (vec![true], vec![false]));

        let (c1, c2) = two_point_crossover(&[true, true], &[false, false], &mut rng);
        assert_eq!(c1, vec![true, false]);
        assert_eq!(c2, vec![false, true]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_length_mismatch_panics() {
        let mut rng = create_rng(1);
        one_point_crossover(&[true, false], &[true], &mut rng);
    }

    #[test]
    fn test_mutation_rate_extremes() {
        let mut rng = create_rng(3);
        let mut genes = zeros(20);
        assert_eq!(bit_flip_mutation(&mut genes, 0.0, &mut rng), 0);
        assert!(genes.iter().all(|&g| !g));

        assert_eq!(bit_flip_mutation(&mut genes, 1.0, &mut rng), 20);
        assert!(genes.iter().all(|&g| g));
    }

    #[test]
    fn test_mutation_rate_is_per_gene() {
        let mut rng = create_rng(11);
        let mut genes = zeros(10_000);
        let flipped = bit_flip_mutation(&mut genes, 0.1, &mut rng);
        assert!((800..1200).contains(&flipped), "flipped {flipped}");
    }

    #[test]
    fn test_kind_dispatch() {
        let mut rng = create_rng(5);
        let (c1, _) = CrossoverKind::OnePoint.apply(&ones(4), &zeros(4), &mut rng);
        assert!(c1[0]);
        let (c1, _) = CrossoverKind::TwoPoint.apply(&ones(4), &zeros(4), &mut rng);
        assert!(c1[0]);
    }
}
