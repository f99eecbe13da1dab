//! Unbiased sequence shuffling.

use rand::Rng;

/// Returns a new vector holding a uniformly random permutation of `items`.
///
/// Fisher–Yates from the last index down; every permutation is equally
/// likely, unlike comparator-based "random sort" tricks. The input is
/// left untouched, and empty or singleton slices come back as plain
/// copies.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
