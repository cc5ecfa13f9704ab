pub mod climber;
pub mod mutation;
pub mod runner;

pub use self::climber::{climb, ClimbState, HillClimber, Trajectory};
pub use self::runner::{OptimizationOptions, Optimizer, ProgressCallback, Silent, Solution};
