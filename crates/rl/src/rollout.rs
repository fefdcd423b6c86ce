//! Single-episode rollouts.
//!
//! [`RolloutRunner`] alternates strictly between the policy and the
//! environment: `reset`, then `act`/`step` pairs until a step reports `done`.
//! Nothing is retried and nothing is caught. The first failure from either
//! collaborator ends the rollout and no partial reward is returned.
//!
//! There is no step cap here. An environment that never reports `done` keeps
//! the caller blocked; episode limits belong to the environment.

use thiserror::Error;

use crate::env::{Environment, StepResult};
use crate::policy::Policy;

/// Failure of a rollout. The collaborator's error is carried unchanged.
#[derive(Debug, Error)]
pub enum RolloutError<P, E> {
    #[error("environment reset failed")]
    Reset(#[source] E),
    #[error("policy failed at step {step}")]
    Policy {
        step: usize,
        #[source]
        source: P,
    },
    #[error("environment step {step} failed")]
    Step {
        step: usize,
        #[source]
        source: E,
    },
}

/// Summary of a finished rollout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Episode {
    /// Sum of every step reward, including the terminal step.
    pub total_reward: f64,
    /// Number of `step` calls made.
    pub steps: usize,
}

/// Executes one episode of an environment under a policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct RolloutRunner;

impl RolloutRunner {
    /// Run one episode and return its cumulative reward.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `reset`, `step` or the policy.
    pub fn run<E, P>(
        env: &mut E,
        policy: &P,
    ) -> Result<f64, RolloutError<P::Error, E::Error>>
    where
        E: Environment,
        P: Policy<E::State, Action = E::Action>,
    {
        Self::run_episode(env, policy).map(|episode| episode.total_reward)
    }

    /// Run one episode and return its reward together with the step count.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `reset`, `step` or the policy.
    pub fn run_episode<E, P>(
        env: &mut E,
        policy: &P,
    ) -> Result<Episode, RolloutError<P::Error, E::Error>>
    where
        E: Environment,
        P: Policy<E::State, Action = E::Action>,
    {
        let mut state = match env.reset() {
            Ok(state) => state,
            Err(source) => {
                tracing::warn!("rollout aborted: reset failed");
                return Err(RolloutError::Reset(source));
            }
        };
        let mut total_reward = 0.0;
        let mut steps = 0;
        let mut done = false;

        while !done {
            let action = match policy.act(state) {
                Ok(action) => action,
                Err(source) => {
                    tracing::warn!(step = steps, "rollout aborted: policy failed");
                    return Err(RolloutError::Policy {
                        step: steps,
                        source,
                    });
                }
            };
            // info is diagnostic only
            let step = env.step(action);
            let StepResult {
                state: next,
                reward,
                done: finished,
                info: _,
            } = match step {
                Ok(result) => result,
                Err(source) => {
                    tracing::warn!(step = steps, "rollout aborted: step failed");
                    return Err(RolloutError::Step {
                        step: steps,
                        source,
                    });
                }
            };
            steps += 1;
            total_reward += reward;
            state = next;
            done = finished;
        }

        tracing::debug!(total_reward, steps, "rollout finished");
        Ok(Episode {
            total_reward,
            steps,
        })
    }
}
