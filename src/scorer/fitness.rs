use crate::consts::ALPHABET_LEN;
use crate::scorer::model::FrequencyModel;
use crate::text::letter_codes;

/// Plausibility of `text` as language: the sum of log10 probabilities of
/// every overlapping n-letter window of its letters. Non-letters are
/// stripped and case is ignored. Higher (closer to zero) is better.
pub fn score(text: &str, model: &FrequencyModel) -> f64 {
    score_codes(&letter_codes(text), model)
}

/// Same as [`score`] over letters already mapped to alphabet positions.
///
/// Fewer letters than one window score `floor * len`; an empty input
/// scores exactly 0.
#[inline]
pub fn score_codes(codes: &[u8], model: &FrequencyModel) -> f64 {
    let n = model.ngram_len();
    if codes.is_empty() {
        return 0.0;
    }
    if codes.len() < n {
        return model.floor_probability() * codes.len() as f64;
    }

    let modulus = model.code_space();
    let mut code = 0usize;
    for &c in &codes[..n - 1] {
        code = code * ALPHABET_LEN + c as usize;
    }

    let mut total = 0.0;
    for &c in &codes[n - 1..] {
        // Shift in the new letter, drop the one that left the window.
        code = (code * ALPHABET_LEN + c as usize) % modulus;
        total += model.score_code(code);
    }
    total
}
