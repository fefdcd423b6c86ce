//! Seam for an external training agent.
//!
//! Optimization lives in a third-party library. This module only fixes the
//! two calls a training loop makes on it and lets a trained agent stand in as
//! a rollout [`Policy`].

use serde::{Deserialize, Serialize};

use crate::policy::Policy;

/// Result record of one training iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// 1-based index of the iteration that produced this report.
    pub iteration: usize,
    /// Mean cumulative reward of the episodes finished during the iteration.
    pub episode_reward_mean: f64,
    /// Episodes finished since training started.
    pub episodes_total: usize,
    /// Environment steps taken since training started.
    pub timesteps_total: usize,
}

/// A trainable agent provided by an RL optimization library.
pub trait Agent {
    /// Observation the agent acts on.
    type State;
    /// Action it produces.
    type Action;
    /// Failure reported by the training library.
    type Error;

    /// Run one training iteration.
    ///
    /// # Errors
    ///
    /// Whatever the underlying library reports.
    fn train(&mut self) -> Result<TrainReport, Self::Error>;

    /// Pick an action with the current policy parameters.
    ///
    /// # Errors
    ///
    /// Whatever the underlying library reports.
    fn compute_action(&self, state: Self::State) -> Result<Self::Action, Self::Error>;
}

/// Borrows an agent as a rollout policy.
#[derive(Debug)]
pub struct AgentPolicy<'a, A>(pub &'a A);

impl<A: Agent> Policy<A::State> for AgentPolicy<'_, A> {
    type Action = A::Action;
    type Error = A::Error;

    fn act(&self, state: A::State) -> Result<A::Action, A::Error> {
        self.0.compute_action(state)
    }
}

/// Call [`Agent::train`] `iterations` times and collect the reports.
///
/// # Errors
///
/// Stops at the first failing iteration and returns its error.
pub fn train_for<A: Agent>(
    agent: &mut A,
    iterations: usize,
) -> Result<Vec<TrainReport>, A::Error> {
    let mut reports = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let report = agent.train()?;
        tracing::info!(
            iteration = report.iteration,
            reward_mean = report.episode_reward_mean,
            timesteps = report.timesteps_total,
            "training iteration complete"
        );
        reports.push(report);
    }
    Ok(reports)
}
