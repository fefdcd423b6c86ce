use rl::envs::{Corridor, EnvError, Move, RollingSphere};
use rl::evaluate::{self, EvaluateError, Outcome};
use rl::policy::total;
use rl::RolloutError;
use std::cell::Cell;
use std::convert::Infallible;

fn slippery(seed: u64) -> Corridor {
    Corridor::new(6, 0.3, 40, seed).unwrap()
}

fn summarize(outcomes: Vec<Outcome<Infallible, EnvError>>) -> Vec<(f64, usize)> {
    outcomes
        .into_iter()
        .map(|r| {
            let episode = r.unwrap();
            (episode.total_reward, episode.steps)
        })
        .collect()
}

#[test]
fn deterministic_corridor_always_pays_one() {
    let mut env = Corridor::deterministic(5).unwrap();
    let eval = evaluate::mean_reward(&mut env, &total(|_: usize| Move::Right), 4).unwrap();
    assert_eq!(eval.episodes(), 4);
    assert!((eval.mean - 1.0).abs() < f64::EPSILON);
    assert!((eval.min - eval.max).abs() < f64::EPSILON);
}

#[test]
fn same_seed_same_rewards() {
    let policy = total(|_: usize| Move::Right);
    let a = evaluate::mean_reward(&mut slippery(11), &policy, 20).unwrap();
    let b = evaluate::mean_reward(&mut slippery(11), &policy, 20).unwrap();
    assert_eq!(a, b);
}

#[test]
fn reseeding_replays_the_slip_sequence() {
    let policy = total(|_: usize| Move::Right);
    let mut env = slippery(3);
    let first = summarize(evaluate::isolated(&mut env, &policy, 5));
    env.reseed(3);
    let second = summarize(evaluate::isolated(&mut env, &policy, 5));
    assert_eq!(first, second);
}

#[test]
fn zero_episodes_is_an_error() {
    let mut env = Corridor::deterministic(2).unwrap();
    let result = evaluate::mean_reward(&mut env, &total(|_: usize| Move::Right), 0);
    assert!(matches!(result, Err(EvaluateError::NoEpisodes)));
}

#[test]
fn first_failure_aborts_the_average() {
    let mut env = RollingSphere::default();
    let result = evaluate::mean_reward(&mut env, &total(|_: f32| f32::NAN), 3);
    match result {
        Err(EvaluateError::Rollout { episode, source }) => {
            assert_eq!(episode, 0);
            assert!(matches!(
                source,
                RolloutError::Step {
                    step: 0,
                    source: EnvError::InvalidAction(_)
                }
            ));
        }
        other => panic!("expected rollout failure, got {other:?}"),
    }
}

#[test]
fn isolated_keeps_going_after_failures() {
    let mut env = Corridor::deterministic(2).unwrap();
    // every other episode fails on its opening move
    let starts = Cell::new(0_usize);
    let policy = |s: usize| {
        let refuse = s == 0 && {
            let n = starts.get();
            starts.set(n + 1);
            n % 2 == 0
        };
        if refuse {
            Err("refused")
        } else {
            Ok(Move::Right)
        }
    };
    let outcomes = evaluate::isolated(&mut env, &policy, 4);
    assert_eq!(outcomes.len(), 4);
    assert!(matches!(
        outcomes[0],
        Err(RolloutError::Policy {
            step: 0,
            source: "refused"
        })
    ));
    let second = outcomes[1].as_ref().unwrap();
    assert_eq!(second.steps, 2);
    assert!((second.total_reward - 1.0).abs() < f64::EPSILON);
    assert!(outcomes[2].is_err());
    assert!(outcomes[3].is_ok());
}

#[test]
fn parallel_matches_sequential() {
    let policy = total(|_: usize| Move::Right);
    let mut envs: Vec<Corridor> = (0..4).map(slippery).collect();
    let par = evaluate::parallel(&mut envs, &policy, 5).unwrap();

    let mut expected = Vec::new();
    for seed in 0..4 {
        let eval = evaluate::mean_reward(&mut slippery(seed), &policy, 5).unwrap();
        expected.extend(eval.rewards);
    }
    assert_eq!(par.rewards, expected);
    assert_eq!(par.episodes(), 20);
}

#[test]
fn parallel_without_environments_is_an_error() {
    let mut envs: Vec<Corridor> = Vec::new();
    let result = evaluate::parallel(&mut envs, &total(|_: usize| Move::Right), 3);
    assert!(matches!(result, Err(EvaluateError::NoEpisodes)));
}

#[test]
fn parallel_reports_index_of_later_worker() {
    // the short corridor never shows state 3 to the policy; the long one does
    let mut envs = vec![
        Corridor::deterministic(2).unwrap(),
        Corridor::deterministic(5).unwrap(),
    ];
    let policy = |s: usize| if s >= 3 { Err("too far") } else { Ok(Move::Right) };
    let result = evaluate::parallel(&mut envs, &policy, 2);
    match result {
        Err(EvaluateError::Rollout { episode, source }) => {
            assert_eq!(episode, 2);
            assert!(matches!(
                source,
                RolloutError::Policy {
                    step: 3,
                    source: "too far"
                }
            ));
        }
        other => panic!("expected rollout failure, got {other:?}"),
    }
}

#[test]
fn parallel_reports_lowest_failing_episode() {
    let mut envs = vec![RollingSphere::default(), RollingSphere::default()];
    let result = evaluate::parallel(&mut envs, &total(|_: f32| f32::INFINITY), 2);
    assert!(matches!(result, Err(EvaluateError::Rollout { episode: 0, .. })));
}
