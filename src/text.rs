use crate::consts::ALPHABET_LEN;

/// Alphabet position of an ASCII letter, case-insensitive.
#[inline(always)]
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

#[inline(always)]
pub fn index_letter(idx: u8) -> char {
    debug_assert!((idx as usize) < ALPHABET_LEN);
    (b'A' + idx) as char
}

/// Letters of `text` as alphabet positions, everything else dropped.
pub fn letter_codes(text: &str) -> Vec<u8> {
    text.chars().filter_map(letter_index).collect()
}

/// Uppercased ciphertext plus its letters pre-extracted as alphabet
/// positions, so the search loop never touches the string again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    text: String,
    letters: Vec<u8>,
}

impl Ciphertext {
    pub fn new(raw: &str) -> Self {
        let text: String = raw.chars().map(|c| c.to_ascii_uppercase()).collect();
        let letters = letter_codes(&text);
        Self { text, letters }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

impl From<&str> for Ciphertext {
    fn from(raw: &str) -> Self {
        Ciphertext::new(raw)
    }
}
