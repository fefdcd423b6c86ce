//! # Evaluation driver
//!
//! [`run`] builds the requested environments, picks the matching fixed policy
//! and averages rollouts with [`rl::evaluate`]. With a single worker the
//! episodes run back to back on one environment; with more, each worker owns
//! its own environment instance seeded `seed + worker` (wrapping).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rl::envs::{Corridor, Move, RollingSphere};
use rl::policy::total;
use rl::{evaluate, Evaluation, PpoConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvKind {
    /// Chain MDP; reach the right end.
    Corridor,
    /// Push a sphere off a bounded track.
    Sphere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Always head for the goal.
    Greedy,
    /// Move left in the corridor, apply no force to the sphere.
    Idle,
}

#[derive(Debug, Parser)]
#[command(name = "mdp", about = "Average rollout rewards of a fixed policy")]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = EnvKind::Corridor)]
    pub env: EnvKind,
    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    pub policy: PolicyKind,
    /// Episodes per worker.
    #[arg(long, default_value_t = 10)]
    pub episodes: usize,
    /// Independent environment instances evaluated in parallel.
    #[arg(long, default_value_t = 1)]
    pub workers: usize,
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Corridor length.
    #[arg(long, default_value_t = 8)]
    pub length: usize,
    /// Probability that a corridor move is reversed.
    #[arg(long, default_value_t = 0.1)]
    pub slip: f32,
    /// Step limit per episode.
    #[arg(long, default_value_t = 200)]
    pub max_steps: usize,
    /// Agent configuration (JSON) to validate and print.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the evaluation described by `cli`.
///
/// # Errors
///
/// Returns configuration, environment construction and rollout failures.
pub fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.config {
        let config = PpoConfig::from_path(path)
            .with_context(|| format!("invalid agent config {}", path.display()))?;
        println!("{}", serde_json::to_string_pretty(&config.to_options())?);
    }

    tracing::info!(
        env = ?cli.env,
        policy = ?cli.policy,
        episodes = cli.episodes,
        workers = cli.workers,
        "starting evaluation"
    );
    let evaluation = match cli.env {
        EnvKind::Corridor => evaluate_corridor(cli)?,
        EnvKind::Sphere => evaluate_sphere(cli)?,
    };

    tracing::info!(mean = evaluation.mean, "evaluation finished");
    println!(
        "episodes={} mean={:.4} min={:.4} max={:.4}",
        evaluation.episodes(),
        evaluation.mean,
        evaluation.min,
        evaluation.max
    );
    Ok(())
}

fn evaluate_corridor(cli: &Cli) -> Result<Evaluation> {
    let action = match cli.policy {
        PolicyKind::Greedy => Move::Right,
        PolicyKind::Idle => Move::Left,
    };
    let policy = total(move |_: usize| action);
    let mut envs = (0..cli.workers.max(1))
        .map(|worker| {
            let seed = cli.seed.wrapping_add(worker as u64);
            Corridor::new(cli.length, cli.slip, cli.max_steps, seed)
        })
        .collect::<Result<Vec<_>, _>>()
        .context("invalid corridor parameters")?;

    let evaluation = if let [env] = envs.as_mut_slice() {
        evaluate::mean_reward(env, &policy, cli.episodes)?
    } else {
        evaluate::parallel(&mut envs, &policy, cli.episodes)?
    };
    Ok(evaluation)
}

fn evaluate_sphere(cli: &Cli) -> Result<Evaluation> {
    let force = match cli.policy {
        PolicyKind::Greedy => 10.0,
        PolicyKind::Idle => 0.0,
    };
    let policy = total(move |_: f32| force);
    let mut envs: Vec<RollingSphere> = (0..cli.workers.max(1))
        .map(|_| RollingSphere::new(cli.max_steps))
        .collect();

    let evaluation = if let [env] = envs.as_mut_slice() {
        evaluate::mean_reward(env, &policy, cli.episodes)?
    } else {
        evaluate::parallel(&mut envs, &policy, cli.episodes)?
    };
    Ok(evaluation)
}
