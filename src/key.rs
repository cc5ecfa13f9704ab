use crate::consts::{ALPHABET, ALPHABET_LEN};
use crate::error::SolverError;
use crate::text::letter_index;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A monoalphabetic substitution key.
///
/// Position `i` holds the plaintext letter for the ciphertext letter at
/// alphabet position `i`. Always a permutation of `A..=Z`; every constructor
/// and mutator keeps it that way.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SubstitutionKey([u8; ALPHABET_LEN]);

impl SubstitutionKey {
    pub fn identity() -> Self {
        Self(*ALPHABET)
    }

    /// Accepts any arrangement of the 26 uppercase letters.
    pub fn from_letters(letters: [u8; ALPHABET_LEN]) -> Result<Self, SolverError> {
        let mut seen = 0u32;
        for &b in &letters {
            if !b.is_ascii_uppercase() {
                return Err(SolverError::InvalidKey(format!(
                    "'{}' is not an uppercase letter",
                    b as char
                )));
            }
            let bit = 1u32 << (b - b'A');
            if seen & bit != 0 {
                return Err(SolverError::InvalidKey(format!(
                    "letter '{}' appears twice",
                    b as char
                )));
            }
            seen |= bit;
        }
        Ok(Self(letters))
    }

    /// Callers guarantee `letters` is a permutation of the alphabet.
    pub(crate) fn from_permutation(letters: [u8; ALPHABET_LEN]) -> Self {
        debug_assert!(Self::from_letters(letters).is_ok());
        Self(letters)
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }

    /// Plaintext alphabet position for the ciphertext position `cipher_idx`.
    #[inline(always)]
    pub fn plain_index(&self, cipher_idx: u8) -> u8 {
        self.0[cipher_idx as usize] - b'A'
    }

    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    pub fn inverse(&self) -> Self {
        let mut inv = [0u8; ALPHABET_LEN];
        for (cipher_idx, &plain) in self.0.iter().enumerate() {
            inv[(plain - b'A') as usize] = b'A' + cipher_idx as u8;
        }
        Self(inv)
    }

    pub fn is_bijection(&self) -> bool {
        Self::from_letters(self.0).is_ok()
    }

    /// Substitutes every ASCII letter (any case) and uppercases the rest.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        ciphertext
            .chars()
            .map(|c| match letter_index(c) {
                Some(idx) => self.0[idx as usize] as char,
                None => c.to_ascii_uppercase(),
            })
            .collect()
    }

    pub fn encrypt(&self, plaintext: &str) -> String {
        self.inverse().decrypt(plaintext)
    }
}

pub fn decrypt(ciphertext: &str, key: &SubstitutionKey) -> String {
    key.decrypt(ciphertext)
}

impl Default for SubstitutionKey {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubstitutionKey({})", self)
    }
}

impl FromStr for SubstitutionKey {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.chars().count() != ALPHABET_LEN {
            return Err(SolverError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_LEN,
                s.chars().count()
            )));
        }
        let mut letters = [0u8; ALPHABET_LEN];
        for (slot, c) in letters.iter_mut().zip(s.chars()) {
            // Non-ASCII chars land outside A-Z and are rejected below.
            *slot = if c.is_ascii() {
                c.to_ascii_uppercase() as u8
            } else {
                0
            };
        }
        Self::from_letters(letters)
    }
}

impl From<SubstitutionKey> for String {
    fn from(key: SubstitutionKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for SubstitutionKey {
    type Error = SolverError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
