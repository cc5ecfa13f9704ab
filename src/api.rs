use crate::config::Config;
use crate::error::SolverResult;
use crate::optimizer::{OptimizationOptions, Optimizer, ProgressCallback, Silent, Solution};
use crate::scorer::FrequencyModel;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Decrypts `ciphertext` with `restart_count` hill climbs and the default
/// stagnation limit, returning the best plaintext found.
pub fn solve(ciphertext: &str, model: &FrequencyModel, restart_count: usize) -> SolverResult<String> {
    let mut config = Config::default();
    config.search.restarts = restart_count;

    let optimizer = Optimizer::new(model, OptimizationOptions::from(&config));
    let solution = optimizer.run(ciphertext, None, Silent)?;
    Ok(solution.plaintext)
}

/// A loaded model plus the search configuration to run against it.
pub struct Solver {
    model: FrequencyModel,
    config: Config,
}

impl Solver {
    pub fn new(model: FrequencyModel, config: Config) -> SolverResult<Self> {
        config.validate()?;
        Ok(Self { model, config })
    }

    pub fn from_corpus_file<P: AsRef<Path>>(path: P, config: Config) -> SolverResult<Self> {
        config.validate()?;
        let model = FrequencyModel::load(path, &config.model)?;
        info!(
            "✅ Model ready: {} distinct {}-grams, floor {:.3}",
            model.distinct(),
            model.ngram_len(),
            model.floor_probability()
        );
        Ok(Self { model, config })
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn solve(&self, ciphertext: &str, seed: Option<u64>) -> SolverResult<Solution> {
        self.solve_with(ciphertext, seed, None, Silent)
    }

    pub fn solve_with<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        seed: Option<u64>,
        max_time: Option<Duration>,
        callback: CB,
    ) -> SolverResult<Solution> {
        let mut options = OptimizationOptions::from(&self.config);
        options.max_time = max_time;
        Optimizer::new(&self.model, options).run(ciphertext, seed, callback)
    }

    pub fn score(&self, text: &str) -> f64 {
        self.model.score(text)
    }
}
