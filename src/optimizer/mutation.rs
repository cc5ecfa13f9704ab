use crate::consts::{ALPHABET, ALPHABET_LEN};
use crate::key::SubstitutionKey;
use fastrand::Rng;

/// Uniformly random permutation of the alphabet.
pub fn random_key(rng: &mut Rng) -> SubstitutionKey {
    let mut letters = *ALPHABET;
    rng.shuffle(&mut letters);
    SubstitutionKey::from_permutation(letters)
}

/// Neighbor of `key`: two positions drawn independently, their letters
/// swapped. Equal positions give back an unchanged key.
pub fn mutate(key: &SubstitutionKey, rng: &mut Rng) -> SubstitutionKey {
    let (a, b) = swap_positions(rng);
    let mut child = *key;
    child.swap(a, b);
    child
}

#[inline(always)]
pub fn swap_positions(rng: &mut Rng) -> (usize, usize) {
    (rng.usize(0..ALPHABET_LEN), rng.usize(0..ALPHABET_LEN))
}
