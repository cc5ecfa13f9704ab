use crate::config::ModelParams;
use crate::consts::{ALPHABET_LEN, DEFAULT_FLOOR_FACTOR};
use crate::error::{SolverError, SolverResult};
use crate::scorer::loader::load_corpus;
use crate::text::letter_index;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Log10 probabilities of fixed-length letter sequences.
///
/// Stored as a dense table of `26^n` entries indexed by the base-26 code of
/// the sequence (`A` = 0). Entries never observed hold `floor_probability`,
/// so lookups are a single index with no branch.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    ngram_len: usize,
    table: Vec<f64>,
    floor: f64,
    total_count: u64,
    distinct: usize,
}

impl FrequencyModel {
    /// Builds a model from `(sequence, count)` records with the default
    /// floor factor.
    pub fn from_counts<I, S>(records: I, ngram_len: usize) -> SolverResult<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let params = ModelParams {
            ngram_len,
            floor_factor: DEFAULT_FLOOR_FACTOR,
        };
        Self::from_counts_with(records, &params)
    }

    pub fn from_counts_with<I, S>(records: I, params: &ModelParams) -> SolverResult<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        params.validate()?;
        let ngram_len = params.ngram_len;

        // Duplicate sequences accumulate.
        let mut counts: HashMap<usize, u64> = HashMap::new();
        let mut total_count: u64 = 0;
        let mut rejected = 0;

        for (sequence, count) in records {
            match encode(sequence.as_ref(), ngram_len) {
                Some(code) => {
                    let slot = counts.entry(code).or_default();
                    *slot = slot.saturating_add(count);
                    total_count = total_count.saturating_add(count);
                }
                None => rejected += 1,
            }
        }

        if total_count == 0 {
            return Err(SolverError::EmptyCorpus { ngram_len });
        }
        if rejected > 0 {
            debug!("Ignored {} records that are not {}-letter sequences", rejected, ngram_len);
        }

        let total = total_count as f64;
        let floor = (params.floor_factor / total).log10();
        let mut table = vec![floor; table_len(ngram_len)];
        let mut distinct = 0;

        for (code, count) in counts {
            // A zero count has no finite log; it stays at the floor.
            if count > 0 {
                table[code] = (count as f64 / total).log10();
                distinct += 1;
            }
        }

        debug!(
            "Frequency model: {} distinct {}-grams, total {}, floor {:.4}",
            distinct, ngram_len, total_count, floor
        );

        Ok(Self {
            ngram_len,
            table,
            floor,
            total_count,
            distinct,
        })
    }

    /// Reads a corpus file and builds the model in one go.
    pub fn load<P: AsRef<Path>>(path: P, params: &ModelParams) -> SolverResult<Self> {
        params.validate()?;
        let raw = load_corpus(path, params.ngram_len)?;
        if raw.skipped > 0 {
            info!("⚠️  Skipped {} malformed corpus lines.", raw.skipped);
        }
        Self::from_counts_with(raw.records, params)
    }

    /// Log10 probability of `sequence`, or the floor when it was never
    /// observed (including when it is not an `n`-letter sequence at all).
    pub fn score_of(&self, sequence: &str) -> f64 {
        match encode(sequence, self.ngram_len) {
            Some(code) => self.table[code],
            None => self.floor,
        }
    }

    #[inline(always)]
    pub fn score_code(&self, code: usize) -> f64 {
        self.table[code]
    }

    pub fn floor_probability(&self) -> f64 {
        self.floor
    }

    pub fn ngram_len(&self) -> usize {
        self.ngram_len
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of sequences with a stored (non-floor) probability.
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    /// `26^n`, the number of distinct codes.
    pub fn code_space(&self) -> usize {
        self.table.len()
    }

    /// Fitness of arbitrary text; see [`crate::scorer::fitness::score`].
    pub fn score(&self, text: &str) -> f64 {
        crate::scorer::fitness::score(text, self)
    }
}

pub(crate) fn table_len(ngram_len: usize) -> usize {
    ALPHABET_LEN.pow(ngram_len as u32)
}

/// Base-26 code of an `ngram_len`-letter sequence, case-insensitive.
pub fn encode(sequence: &str, ngram_len: usize) -> Option<usize> {
    let mut code = 0usize;
    let mut len = 0;
    for c in sequence.chars() {
        let idx = letter_index(c)?;
        code = code * ALPHABET_LEN + idx as usize;
        len += 1;
        if len > ngram_len {
            return None;
        }
    }
    (len == ngram_len).then_some(code)
}
