use crate::env::{Environment, StepResult};

use super::{EnvError, StepInfo};

const MAX_FORCE: f32 = 10.0;
const DT: f32 = 0.02;
const BOUNDARY: f32 = 5.0;

/// Push a sphere along the x axis until it leaves `[-5, 5]`.
///
/// The action is a horizontal force, clamped to `[-10, 10]`. The reward of a
/// step is the displacement it caused, so the cumulative reward of an episode
/// equals the final position.
#[derive(Debug, Clone)]
pub struct RollingSphere {
    pos_x: f32,
    steps: usize,
    max_steps: usize,
    finished: bool,
}

impl RollingSphere {
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self {
            pos_x: 0.0,
            steps: 0,
            max_steps,
            finished: false,
        }
    }

    #[must_use]
    pub fn position(&self) -> f32 {
        self.pos_x
    }
}

impl Default for RollingSphere {
    fn default() -> Self {
        Self::new(500)
    }
}

impl Environment for RollingSphere {
    type State = f32;
    type Action = f32;
    type Info = StepInfo;
    type Error = EnvError;

    fn reset(&mut self) -> Result<f32, EnvError> {
        self.pos_x = 0.0;
        self.steps = 0;
        self.finished = false;
        Ok(self.pos_x)
    }

    fn step(&mut self, action: f32) -> Result<StepResult<f32, StepInfo>, EnvError> {
        if self.finished {
            return Err(EnvError::EpisodeFinished);
        }
        if !action.is_finite() {
            return Err(EnvError::InvalidAction(action));
        }
        let force = action.clamp(-MAX_FORCE, MAX_FORCE);
        let old_pos_x = self.pos_x;
        self.pos_x += force * DT;
        self.steps += 1;

        let out_of_bounds = self.pos_x.abs() > BOUNDARY;
        let truncated = !out_of_bounds && self.steps >= self.max_steps;
        self.finished = out_of_bounds || truncated;
        let reward = f64::from(self.pos_x - old_pos_x);
        Ok(StepResult::new(self.pos_x, reward, self.finished)
            .with_info(StepInfo { truncated }))
    }
}
