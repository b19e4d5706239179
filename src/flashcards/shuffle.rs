//! Permutation sources for deck shuffling

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Source of shuffle permutations.
///
/// `permutation(len)` returns an ordering of `0..len`: slot `i` of the
/// shuffled sequence receives item `permutation[i]` of the original one.
pub trait Shuffler {
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

/// Uniformly random shuffles
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible shuffles for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// Always hands back the same ordering
#[derive(Debug, Clone)]
pub struct FixedPermutation {
    order: Vec<usize>,
}

impl FixedPermutation {
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }
}

impl Shuffler for FixedPermutation {
    fn permutation(&mut self, _len: usize) -> Vec<usize> {
        self.order.clone()
    }
}

/// Check that `order` uses every index of `0..len` exactly once
pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }

    let mut seen = vec![false; len];
    order
        .iter()
        .all(|&i| i < len && !std::mem::replace(&mut seen[i], true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_permutation_is_valid() {
        let mut shuffler = RandomShuffler::new();
        for len in [0, 1, 2, 7, 50] {
            let order = shuffler.permutation(len);
            assert!(is_permutation(&order, len));
        }
    }

    #[test]
    fn test_seeded_shuffles_repeat() {
        let a = RandomShuffler::seeded(7).permutation(20);
        let b = RandomShuffler::seeded(7).permutation(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }
}
