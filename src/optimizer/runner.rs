use crate::config::Config;
use crate::error::{SolverError, SolverResult};
use crate::key::SubstitutionKey;
use crate::optimizer::climber::{climb, Trajectory};
use crate::scorer::FrequencyModel;
use crate::text::Ciphertext;
use rayon::prelude::*;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct OptimizationOptions {
    pub restarts: usize,
    pub stagnation_limit: usize,
    pub parallel: bool,
    pub max_time: Option<Duration>,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            restarts: cfg.search.restarts,
            stagnation_limit: cfg.search.stagnation_limit,
            parallel: cfg.search.parallel,
            max_time: None, // Set manually if needed
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Best trajectory over all restarts.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub key: SubstitutionKey,
    pub plaintext: String,
    pub score: f64,
    pub restarts_run: usize,
}

/// Receives every finished trajectory in restart order.
/// Returning `false` stops the search; the best found so far is kept.
pub trait ProgressCallback: Send + Sync {
    fn on_restart(&self, restart: usize, trajectory: &Trajectory, best_score: f64) -> bool;
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &T {
    fn on_restart(&self, restart: usize, trajectory: &Trajectory, best_score: f64) -> bool {
        (**self).on_restart(restart, trajectory, best_score)
    }
}

/// Callback for callers that do not need progress.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_restart(&self, _restart: usize, _trajectory: &Trajectory, _best_score: f64) -> bool {
        true
    }
}

/// Random-restart driver: runs independent hill climbs and keeps the one
/// with the strictly highest score, first found winning ties.
pub struct Optimizer<'m> {
    model: &'m FrequencyModel,
    options: OptimizationOptions,
}

impl<'m> Optimizer<'m> {
    pub fn new(model: &'m FrequencyModel, options: OptimizationOptions) -> Self {
        Self { model, options }
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    /// `seed` fixes every restart's generator; `None` draws from entropy.
    pub fn run<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        seed: Option<u64>,
        callback: CB,
    ) -> SolverResult<Solution> {
        let opts = &self.options;
        if opts.restarts == 0 {
            return Err(SolverError::NoRestartsConfigured);
        }

        let ciphertext = Ciphertext::new(ciphertext);
        let restart_seeds = restart_seeds(seed, opts.restarts);
        let start_time = Instant::now();

        // Restart 0 always runs so there is something to return.
        let out_of_time = |restart: usize| -> bool {
            restart > 0
                && opts
                    .max_time
                    .is_some_and(|limit| start_time.elapsed() >= limit)
        };

        let run_one = |restart: usize| -> Option<Trajectory> {
            if out_of_time(restart) {
                return None;
            }
            let rng = fastrand::Rng::with_seed(restart_seeds[restart]);
            Some(climb(&ciphertext, self.model, opts.stagnation_limit, rng))
        };

        let mut best: Option<Trajectory> = None;
        let mut restarts_run = 0;

        if opts.parallel {
            let trajectories: Vec<Option<Trajectory>> =
                (0..opts.restarts).into_par_iter().map(run_one).collect();

            // Reduce in restart order so the winner matches a sequential run.
            for (restart, trajectory) in trajectories.into_iter().enumerate() {
                let Some(trajectory) = trajectory else {
                    continue;
                };
                restarts_run += 1;
                if !record(&mut best, restart, trajectory, &callback) {
                    break;
                }
            }
        } else {
            for restart in 0..opts.restarts {
                let Some(trajectory) = run_one(restart) else {
                    break;
                };
                restarts_run += 1;
                if !record(&mut best, restart, trajectory, &callback) {
                    break;
                }
            }
        }

        let best = best.ok_or(SolverError::NoRestartsConfigured)?;

        info!(
            "🏆 Best score {:.2} after {} restart(s) in {:.2?}",
            best.score,
            restarts_run,
            start_time.elapsed()
        );

        Ok(Solution {
            key: best.key,
            plaintext: best.plaintext,
            score: best.score,
            restarts_run,
        })
    }
}

/// Folds one trajectory into the running best; returns whether to continue.
fn record<CB: ProgressCallback>(
    best: &mut Option<Trajectory>,
    restart: usize,
    trajectory: Trajectory,
    callback: &CB,
) -> bool {
    debug!(
        "Restart {:3} | score {:.2} | {} steps, {} accepted",
        restart, trajectory.score, trajectory.steps, trajectory.improvements
    );

    let improved = best
        .as_ref()
        .map_or(true, |current| trajectory.score > current.score);
    let best_score = match best.as_ref() {
        Some(current) if !improved => current.score,
        _ => trajectory.score,
    };

    let keep_going = callback.on_restart(restart, &trajectory, best_score);
    if improved {
        *best = Some(trajectory);
    }
    keep_going
}

/// One seed per restart, drawn up front from a master generator so results
/// do not depend on which thread runs which restart.
fn restart_seeds(seed: Option<u64>, restarts: usize) -> Vec<u64> {
    let mut master = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    (0..restarts).map(|_| master.u64(..)).collect()
}
