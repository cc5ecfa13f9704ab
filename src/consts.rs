/// Size of the plaintext / ciphertext alphabet (A-Z).
pub const ALPHABET_LEN: usize = 26;
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const DEFAULT_NGRAM_LEN: usize = 4;
/// 26^5 entries is the largest dense table we are willing to allocate.
pub const MAX_NGRAM_LEN: usize = 5;

/// Unseen sequences get `floor_factor / total_count` as their probability.
pub const DEFAULT_FLOOR_FACTOR: f64 = 0.01;

pub const DEFAULT_RESTARTS: usize = 50;
pub const DEFAULT_STAGNATION_LIMIT: usize = 2500;

pub const DEFAULT_CORPUS_PATH: &str = "data/english_quadgrams.txt";
