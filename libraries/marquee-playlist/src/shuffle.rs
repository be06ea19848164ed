//! Shuffle permutations
//!
//! The playlist never reorders its tracks when shuffling. It keeps a
//! permutation of track indices and walks that instead.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform random permutation of `0..len` (Fisher-Yates)
pub fn shuffled_indices<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// Check that `order` holds every index in `0..len` exactly once
pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
