use crate::reports::{self, SolveReport};
use aristocrat::api::Solver;
use aristocrat::config::Config;
use aristocrat::error::SolverResult;
use aristocrat::optimizer::{ProgressCallback, Trajectory};
use aristocrat::samples::KnownSample;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    /// Ciphertext to solve. Falls back to --input, then --sample.
    pub ciphertext: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Built-in puzzle (aristocrat, tale_of_two_cities, moby_dick)
    #[arg(long)]
    pub sample: Option<KnownSample>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Wall-clock budget in seconds; restarts not yet begun are skipped
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_restart(&self, restart: usize, trajectory: &Trajectory, best_score: f64) -> bool {
        info!(
            "Restart {:3} | Score: {:.2} | Best: {:.2} | {} steps",
            restart + 1,
            trajectory.score,
            best_score,
            trajectory.steps
        );
        true
    }
}

impl SolveArgs {
    pub fn resolve_ciphertext(&self) -> SolverResult<String> {
        if let Some(text) = &self.ciphertext {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            info!("📂 Reading ciphertext from: {}", path.display());
            return Ok(fs::read_to_string(path)?);
        }
        let sample = self.sample.unwrap_or(KnownSample::Aristocrat);
        info!("🧩 Using built-in sample: {}", sample);
        Ok(sample.ciphertext().to_string())
    }
}

pub fn run(args: SolveArgs, solver: &Solver) -> SolverResult<()> {
    let ciphertext = args.resolve_ciphertext()?;
    let search = &solver.config().search;

    info!(
        "🔥 Solving with {} restart(s), stagnation limit {}{}",
        search.restarts,
        search.stagnation_limit,
        if search.parallel { " (parallel)" } else { "" }
    );

    let max_time = args.time.map(Duration::from_secs);
    let solution = solver.solve_with(&ciphertext, args.seed, max_time, CliLogger)?;

    if args.json {
        let report = SolveReport {
            ciphertext: &ciphertext,
            solution: &solution,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!("\n=== 🏆 FINAL RESULT ===");
        reports::print_solution(&ciphertext, &solution);
    }
    Ok(())
}
