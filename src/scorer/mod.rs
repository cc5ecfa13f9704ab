pub mod fitness;
pub mod loader;
pub mod model;

pub use self::fitness::{score, score_codes};
pub use self::loader::{load_corpus, read_corpus, RawCorpus};
pub use self::model::FrequencyModel;
