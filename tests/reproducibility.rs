mod common;

use aristocrat::error::SolverError;
use aristocrat::key::SubstitutionKey;
use aristocrat::optimizer::{OptimizationOptions, Optimizer, ProgressCallback, Silent, Trajectory};
use common::shared_english_model;
use std::sync::Mutex;
use std::time::Duration;

const CIPHER: &str = "FXHH PU OMKPXUH. ZQPU VUXCZ XYQ, SUWUC PMSR KQA HQSY BCUIMZUHV";

fn options(restarts: usize, parallel: bool) -> OptimizationOptions {
    OptimizationOptions {
        restarts,
        stagnation_limit: 400,
        parallel,
        max_time: None,
    }
}

/// Records every trajectory it is shown.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(usize, f64, f64)>>,
    keys: Mutex<Vec<SubstitutionKey>>,
}

impl ProgressCallback for Recorder {
    fn on_restart(&self, restart: usize, trajectory: &Trajectory, best_score: f64) -> bool {
        self.seen
            .lock()
            .unwrap()
            .push((restart, trajectory.score, best_score));
        self.keys.lock().unwrap().push(trajectory.key);
        true
    }
}

struct StopAfter(usize);

impl ProgressCallback for StopAfter {
    fn on_restart(&self, restart: usize, _trajectory: &Trajectory, _best_score: f64) -> bool {
        restart + 1 < self.0
    }
}

#[test]
fn test_zero_restarts_is_an_error() {
    let model = shared_english_model();
    let err = Optimizer::new(model, options(0, false))
        .run(CIPHER, Some(1), Silent)
        .unwrap_err();
    assert!(matches!(err, SolverError::NoRestartsConfigured));
}

#[test]
fn test_same_seed_same_solution() {
    let model = shared_english_model();
    let a = Optimizer::new(model, options(6, false))
        .run(CIPHER, Some(2024), Silent)
        .unwrap();
    let b = Optimizer::new(model, options(6, false))
        .run(CIPHER, Some(2024), Silent)
        .unwrap();

    assert_eq!(a.key, b.key);
    assert_eq!(a.plaintext, b.plaintext);
    assert_eq!(a.score, b.score);
}

#[test]
fn test_parallel_matches_sequential() {
    let model = shared_english_model();
    let seq = Optimizer::new(model, options(8, false))
        .run(CIPHER, Some(7), Silent)
        .unwrap();
    let par = Optimizer::new(model, options(8, true))
        .run(CIPHER, Some(7), Silent)
        .unwrap();

    assert_eq!(seq.key, par.key);
    assert_eq!(seq.score, par.score);
    assert_eq!(seq.restarts_run, 8);
    assert_eq!(par.restarts_run, 8);
}

#[test]
fn test_best_is_max_over_all_trajectories() {
    let model = shared_english_model();
    let recorder = Recorder::default();
    let solution = Optimizer::new(model, options(10, true))
        .run(CIPHER, Some(99), &recorder)
        .unwrap();

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), 10);

    let max = seen.iter().map(|(_, s, _)| *s).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(solution.score, max);
    assert_eq!(solution.plaintext, solution.key.decrypt(CIPHER));

    // Callback sees restarts in order with a running best that never drops.
    let mut running = f64::NEG_INFINITY;
    for (i, (restart, score, best)) in seen.iter().enumerate() {
        assert_eq!(*restart, i);
        running = running.max(*score);
        assert_eq!(*best, running);
    }
}

#[test]
fn test_ties_keep_the_first_trajectory() {
    // Every trajectory scores the floor; the first one must win.
    let model = common::tiny_model();
    let first = Optimizer::new(&model, options(1, false))
        .run("Q", Some(5), Silent)
        .unwrap();
    let many = Optimizer::new(&model, options(12, false))
        .run("Q", Some(5), Silent)
        .unwrap();

    assert_eq!(first.score, many.score);
    assert_eq!(first.key, many.key);
}

#[test]
fn test_callback_can_stop_the_search() {
    let model = shared_english_model();
    let solution = Optimizer::new(model, options(20, false))
        .run(CIPHER, Some(3), StopAfter(4))
        .unwrap();
    assert_eq!(solution.restarts_run, 4);
}

#[test]
fn test_expired_time_budget_still_returns_first_restart() {
    let model = shared_english_model();
    let mut opts = options(50, false);
    opts.max_time = Some(Duration::ZERO);

    let solution = Optimizer::new(model, opts).run(CIPHER, Some(3), Silent).unwrap();
    assert_eq!(solution.restarts_run, 1);
}

#[test]
fn test_restarts_draw_distinct_starting_keys() {
    let model = shared_english_model();
    let recorder = Recorder::default();
    let mut opts = options(5, false);
    opts.stagnation_limit = 0;

    Optimizer::new(model, opts)
        .run(CIPHER, Some(1), &recorder)
        .unwrap();

    let mut keys = recorder.keys.lock().unwrap().clone();
    assert_eq!(keys.len(), 5);
    keys.sort_by_key(|k| k.to_string());
    keys.dedup();
    assert_eq!(keys.len(), 5, "Restarts should not share a generator");
}
