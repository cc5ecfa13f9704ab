use crate::consts::ALPHABET_LEN;
use crate::text::{index_letter, letter_codes};
use std::collections::HashMap;

/// Counts every overlapping `ngram_len`-letter window of `content`.
///
/// Non-letters are dropped before windowing, the same normalization the
/// fitness scorer applies, so counts line up with what gets scored.
/// Returned sorted by count (descending), then sequence.
pub fn count_ngrams(content: &str, ngram_len: usize) -> Vec<(String, u64)> {
    let letters = letter_codes(content);
    let mut counts: HashMap<&[u8], u64> = HashMap::new();

    if ngram_len > 0 {
        for window in letters.windows(ngram_len) {
            *counts.entry(window).or_default() += 1;
        }
    }

    let mut entries: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(window, count)| {
            debug_assert!(window.iter().all(|&c| (c as usize) < ALPHABET_LEN));
            (window.iter().map(|&c| index_letter(c)).collect(), count)
        })
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Renders counts in the `<SEQUENCE> <COUNT>` corpus format, one per line.
pub fn format_counts(entries: &[(String, u64)]) -> String {
    let mut output = String::new();
    for (sequence, count) in entries {
        output.push_str(&format!("{} {}\n", sequence, count));
    }
    output
}
