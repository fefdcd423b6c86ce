//! # Rollouts over Markov decision processes
//!
//! An MDP is driven through two calls: `reset` starts an episode and `step`
//! applies one action, returning the next state, a reward and whether the
//! episode is over. A policy maps each observed state to the next action.
//!
//! -   [`env`] defines the [`Environment`] seam and its [`StepResult`].
//! -   [`policy`] defines [`Policy`]; closures and [`policy::total`] functions
//!     qualify.
//! -   [`rollout`] runs one episode with [`RolloutRunner`] and sums its reward.
//! -   [`evaluate`] averages many rollouts, sequentially or across independent
//!     environment instances in parallel.
//! -   [`agent`] and [`config`] describe the external training agent that
//!     produces policies, and the typed options it is configured with.
//! -   [`envs`] ships two small environments.
//!
//! ```
//! use rl::envs::{Corridor, Move};
//! use rl::policy::total;
//! use rl::RolloutRunner;
//!
//! let mut env = Corridor::deterministic(4).unwrap();
//! let reward = RolloutRunner::run(&mut env, &total(|_: usize| Move::Right)).unwrap();
//! assert_eq!(reward, 1.0);
//! ```

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod config;
pub mod env;
pub mod envs;
pub mod evaluate;
pub mod policy;
pub mod rollout;

pub use agent::{Agent, AgentPolicy, TrainReport};
pub use config::{ConfigError, PpoConfig};
pub use env::{Environment, StepResult};
pub use evaluate::{EvaluateError, Evaluation, Outcome};
pub use policy::Policy;
pub use rollout::{Episode, RolloutError, RolloutRunner};
