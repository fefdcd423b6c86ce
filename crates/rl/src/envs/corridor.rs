use crate::env::{Environment, StepResult};

use super::{EnvError, StepInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
}

impl Move {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

/// A one-dimensional chain MDP.
///
/// The agent starts in cell 0 and must walk right to cell `length`. Each move
/// is reversed with probability `slip`. Reaching the goal pays 1.0 and ends the
/// episode; every other transition pays nothing. Episodes are truncated after
/// `max_steps` steps.
pub struct Corridor {
    length: usize,
    slip: f32,
    max_steps: usize,
    rng: fastrand::Rng,
    pos: usize,
    steps: usize,
    finished: bool,
}

impl Corridor {
    /// # Errors
    ///
    /// [`EnvError::InvalidParameter`] for a zero `length` or `max_steps`, or a
    /// `slip` outside `[0, 1]`.
    pub fn new(length: usize, slip: f32, max_steps: usize, seed: u64) -> Result<Self, EnvError> {
        if length == 0 {
            return Err(EnvError::InvalidParameter {
                name: "length",
                reason: "must be at least 1",
            });
        }
        if !(0.0..=1.0).contains(&slip) {
            return Err(EnvError::InvalidParameter {
                name: "slip",
                reason: "must lie in [0, 1]",
            });
        }
        if max_steps == 0 {
            return Err(EnvError::InvalidParameter {
                name: "max_steps",
                reason: "must be at least 1",
            });
        }
        Ok(Self {
            length,
            slip,
            max_steps,
            rng: fastrand::Rng::with_seed(seed),
            pos: 0,
            steps: 0,
            finished: false,
        })
    }

    /// A corridor without slips, truncated at `4 * length` steps.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidParameter`] for a zero `length`.
    pub fn deterministic(length: usize) -> Result<Self, EnvError> {
        Self::new(length, 0.0, length.saturating_mul(4).max(1), 0)
    }

    /// Restart the slip sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Environment for Corridor {
    type State = usize;
    type Action = Move;
    type Info = StepInfo;
    type Error = EnvError;

    fn reset(&mut self) -> Result<usize, EnvError> {
        self.pos = 0;
        self.steps = 0;
        self.finished = false;
        Ok(self.pos)
    }

    fn step(&mut self, action: Move) -> Result<StepResult<usize, StepInfo>, EnvError> {
        if self.finished {
            return Err(EnvError::EpisodeFinished);
        }
        let slipped = self.slip > 0.0 && self.rng.f32() < self.slip;
        let applied = if slipped { action.reversed() } else { action };
        self.pos = match applied {
            Move::Left => self.pos.saturating_sub(1),
            Move::Right => (self.pos + 1).min(self.length),
        };
        self.steps += 1;

        let reached = self.pos == self.length;
        let truncated = !reached && self.steps >= self.max_steps;
        self.finished = reached || truncated;
        let reward = if reached { 1.0 } else { 0.0 };
        Ok(StepResult::new(self.pos, reward, self.finished)
            .with_info(StepInfo { truncated }))
    }
}
