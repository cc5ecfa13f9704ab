use crate::consts::{
    DEFAULT_FLOOR_FACTOR, DEFAULT_NGRAM_LEN, DEFAULT_RESTARTS, DEFAULT_STAGNATION_LIMIT,
    MAX_NGRAM_LEN,
};
use crate::error::{SolverError, SolverResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub model: ModelParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    /// Independent hill-climbing trajectories
    #[arg(short = 'r', long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,

    /// Consecutive non-improving mutations before a trajectory converges
    #[arg(long, default_value_t = DEFAULT_STAGNATION_LIMIT)]
    pub stagnation_limit: usize,

    /// Spread restarts over the rayon thread pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            stagnation_limit: DEFAULT_STAGNATION_LIMIT,
            parallel: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelParams {
    /// Length of the letter sequences in the corpus
    #[arg(long, default_value_t = DEFAULT_NGRAM_LEN)]
    pub ngram_len: usize,

    /// Unseen sequences score log10(floor_factor / total_count)
    #[arg(long, default_value_t = DEFAULT_FLOOR_FACTOR)]
    pub floor_factor: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            ngram_len: DEFAULT_NGRAM_LEN,
            floor_factor: DEFAULT_FLOOR_FACTOR,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SolverResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SolverError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SolverResult<()> {
        if self.search.restarts == 0 {
            return Err(SolverError::NoRestartsConfigured);
        }
        self.model.validate()
    }

    /// Overwrites fields with values the user typed on the command line,
    /// leaving file-provided values in place for everything left at default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.search.merge_from_cli(&cli.search, matches);
        self.model.merge_from_cli(&cli.model, matches);
    }
}

macro_rules! update_if_present {
    ($target:ident, $cli:ident, $matches:ident, $field:ident) => {
        if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
            $target.$field = $cli.$field.clone();
        }
    };
}

impl SearchParams {
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, restarts);
        update_if_present!(self, cli, matches, stagnation_limit);
        update_if_present!(self, cli, matches, parallel);
    }
}

impl ModelParams {
    pub fn merge_from_cli(&mut self, cli: &ModelParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, ngram_len);
        update_if_present!(self, cli, matches, floor_factor);
    }

    pub fn validate(&self) -> SolverResult<()> {
        if self.ngram_len == 0 || self.ngram_len > MAX_NGRAM_LEN {
            return Err(SolverError::InvalidNgramLength(self.ngram_len));
        }
        // Must stay below one observation or unseen sequences outrank seen ones.
        if !(self.floor_factor > 0.0 && self.floor_factor < 1.0) {
            return Err(SolverError::Config(format!(
                "floor_factor must lie in (0, 1), got {}",
                self.floor_factor
            )));
        }
        Ok(())
    }
}
