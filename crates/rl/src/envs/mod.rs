//! Small environments for exercising rollouts without an external simulator.

mod corridor;
mod rolling_sphere;

pub use corridor::{Corridor, Move};
pub use rolling_sphere::RollingSphere;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
    #[error("action {0} is not a finite force")]
    InvalidAction(f32),
    #[error("episode already finished; call reset")]
    EpisodeFinished,
}

/// Diagnostics attached to every step of the built-in environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// The episode was cut off by the step limit rather than reaching a
    /// terminal state.
    pub truncated: bool,
}
