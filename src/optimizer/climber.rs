use crate::key::SubstitutionKey;
use crate::optimizer::mutation;
use crate::scorer::{score_codes, FrequencyModel};
use crate::text::Ciphertext;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClimbState {
    Initialized,
    Searching,
    Converged,
}

/// Outcome of one hill-climbing run.
#[derive(Debug, Clone, Serialize)]
pub struct Trajectory {
    pub key: SubstitutionKey,
    pub plaintext: String,
    pub score: f64,
    /// Mutations evaluated.
    pub steps: usize,
    /// Mutations accepted.
    pub improvements: usize,
}

/// One local-search trajectory over substitution keys.
///
/// Starts from a random key and keeps a swap-mutated child only when it
/// scores strictly higher. Converges after `stagnation_limit` consecutive
/// rejected children.
pub struct HillClimber<'a> {
    ciphertext: &'a Ciphertext,
    model: &'a FrequencyModel,
    stagnation_limit: usize,
    rng: fastrand::Rng,

    state: ClimbState,
    parent_key: SubstitutionKey,
    parent_score: f64,
    stagnation: usize,
    steps: usize,
    improvements: usize,

    // Decrypted letter codes of the child under evaluation.
    scratch: Vec<u8>,
}

impl<'a> HillClimber<'a> {
    pub fn new(
        ciphertext: &'a Ciphertext,
        model: &'a FrequencyModel,
        stagnation_limit: usize,
        mut rng: fastrand::Rng,
    ) -> Self {
        let parent_key = mutation::random_key(&mut rng);
        let mut scratch = Vec::with_capacity(ciphertext.letter_count());
        let parent_score = score_key(ciphertext, model, &parent_key, &mut scratch);

        Self {
            ciphertext,
            model,
            stagnation_limit,
            rng,
            state: ClimbState::Initialized,
            parent_key,
            parent_score,
            stagnation: 0,
            steps: 0,
            improvements: 0,
            scratch,
        }
    }

    pub fn state(&self) -> ClimbState {
        self.state
    }

    pub fn key(&self) -> &SubstitutionKey {
        &self.parent_key
    }

    pub fn score(&self) -> f64 {
        self.parent_score
    }

    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// Advances one transition. `Initialized` moves to `Searching` (or
    /// straight to `Converged` with a zero limit); each `Searching` step
    /// evaluates exactly one child. `Converged` is terminal.
    pub fn step(&mut self) -> ClimbState {
        match self.state {
            ClimbState::Initialized => {
                self.state = if self.stagnation_limit == 0 {
                    ClimbState::Converged
                } else {
                    ClimbState::Searching
                };
            }
            ClimbState::Searching => {
                let child_key = mutation::mutate(&self.parent_key, &mut self.rng);
                let child_score =
                    score_key(self.ciphertext, self.model, &child_key, &mut self.scratch);
                self.steps += 1;

                // Ties are rejected so plateaus do not cause drift.
                if child_score > self.parent_score {
                    self.parent_key = child_key;
                    self.parent_score = child_score;
                    self.stagnation = 0;
                    self.improvements += 1;
                } else {
                    self.stagnation += 1;
                }

                if self.stagnation >= self.stagnation_limit {
                    self.state = ClimbState::Converged;
                }
            }
            ClimbState::Converged => {}
        }
        self.state
    }

    pub fn run(mut self) -> Trajectory {
        while self.step() != ClimbState::Converged {}
        self.into_trajectory()
    }

    /// Snapshot of the current parent, whatever the state.
    pub fn into_trajectory(self) -> Trajectory {
        Trajectory {
            plaintext: self.parent_key.decrypt(self.ciphertext.as_str()),
            key: self.parent_key,
            score: self.parent_score,
            steps: self.steps,
            improvements: self.improvements,
        }
    }
}

/// Runs a full trajectory from a fresh random key.
pub fn climb(
    ciphertext: &Ciphertext,
    model: &FrequencyModel,
    stagnation_limit: usize,
    rng: fastrand::Rng,
) -> Trajectory {
    HillClimber::new(ciphertext, model, stagnation_limit, rng).run()
}

#[inline]
fn score_key(
    ciphertext: &Ciphertext,
    model: &FrequencyModel,
    key: &SubstitutionKey,
    scratch: &mut Vec<u8>,
) -> f64 {
    scratch.clear();
    scratch.extend(ciphertext.letters().iter().map(|&c| key.plain_index(c)));
    score_codes(scratch, model)
}
