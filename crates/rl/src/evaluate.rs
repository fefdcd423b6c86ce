//! Reward statistics over several rollouts.
//!
//! All aggregates are fail-fast: the first failing rollout aborts the whole
//! evaluation. Use [`isolated`] to keep every outcome instead.

use rayon::prelude::*;
use thiserror::Error;

use crate::env::Environment;
use crate::policy::Policy;
use crate::rollout::{Episode, RolloutError, RolloutRunner};

/// Outcome of one rollout kept by [`isolated`].
pub type Outcome<P, E> = Result<Episode, RolloutError<P, E>>;

/// Failure of an aggregate evaluation.
#[derive(Debug, Error)]
pub enum EvaluateError<P, E> {
    /// Nothing was asked to run.
    #[error("evaluation needs at least one episode")]
    NoEpisodes,
    /// The rollout at index `episode` failed and aborted the evaluation.
    #[error("episode {episode} failed")]
    Rollout {
        episode: usize,
        #[source]
        source: RolloutError<P, E>,
    },
}

/// Cumulative rewards of a batch of rollouts.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Per-episode rewards in the order the episodes were assigned.
    pub rewards: Vec<f64>,
    /// Arithmetic mean of `rewards`; NaN if any reward is NaN.
    pub mean: f64,
    /// Smallest reward; NaN if any reward is NaN.
    pub min: f64,
    /// Largest reward; NaN if any reward is NaN.
    pub max: f64,
}

impl Evaluation {
    /// Summarize a non-empty list of rewards.
    #[must_use]
    pub fn from_rewards(rewards: Vec<f64>) -> Option<Self> {
        if rewards.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
        let (min, max) = if rewards.iter().any(|r| r.is_nan()) {
            (f64::NAN, f64::NAN)
        } else {
            (
                rewards.iter().copied().fold(f64::INFINITY, f64::min),
                rewards.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            )
        };
        Some(Self {
            rewards,
            mean,
            min,
            max,
        })
    }

    /// Number of episodes summarized.
    #[must_use]
    pub fn episodes(&self) -> usize {
        self.rewards.len()
    }
}

/// Run `episodes` rollouts back to back on one environment.
///
/// # Errors
///
/// [`EvaluateError::NoEpisodes`] when `episodes` is zero, otherwise the first
/// failing rollout.
pub fn mean_reward<E, P>(
    env: &mut E,
    policy: &P,
    episodes: usize,
) -> Result<Evaluation, EvaluateError<P::Error, E::Error>>
where
    E: Environment,
    P: Policy<E::State, Action = E::Action>,
{
    let rewards = (0..episodes)
        .map(|episode| {
            RolloutRunner::run(env, policy)
                .map_err(|source| EvaluateError::Rollout { episode, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Evaluation::from_rewards(rewards).ok_or(EvaluateError::NoEpisodes)
}

/// Run `episodes_per_env` rollouts on every environment, one worker per
/// environment.
///
/// Each worker owns its environment exclusively; only the policy is shared.
/// Episode `k` of environment `i` is reported at index
/// `i * episodes_per_env + k`.
///
/// # Errors
///
/// [`EvaluateError::NoEpisodes`] when there is nothing to run, otherwise the
/// failure of the lowest-indexed failing worker.
pub fn parallel<E, P>(
    envs: &mut [E],
    policy: &P,
    episodes_per_env: usize,
) -> Result<Evaluation, EvaluateError<P::Error, E::Error>>
where
    E: Environment + Send,
    E::Error: Send,
    P: Policy<E::State, Action = E::Action> + Sync,
    P::Error: Send,
{
    if envs.is_empty() || episodes_per_env == 0 {
        return Err(EvaluateError::NoEpisodes);
    }
    tracing::debug!(workers = envs.len(), episodes_per_env, "parallel evaluation");

    let per_env = envs
        .par_iter_mut()
        .enumerate()
        .map(|(i, env)| {
            (0..episodes_per_env)
                .map(|k| {
                    RolloutRunner::run(env, policy).map_err(|source| EvaluateError::Rollout {
                        episode: i * episodes_per_env + k,
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Evaluation::from_rewards(per_env.into_iter().flatten().collect())
        .ok_or(EvaluateError::NoEpisodes)
}

/// Run `episodes` rollouts and keep every outcome, failed or not.
pub fn isolated<E, P>(
    env: &mut E,
    policy: &P,
    episodes: usize,
) -> Vec<Outcome<P::Error, E::Error>>
where
    E: Environment,
    P: Policy<E::State, Action = E::Action>,
{
    (0..episodes)
        .map(|_| RolloutRunner::run_episode(env, policy))
        .collect()
}
