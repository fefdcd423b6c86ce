/// Reinforcement learning environment trait.
///
/// Modeled on the classic Gym interface: [`reset`] starts an episode and
/// returns the first observation, and each call to [`step`] advances the
/// simulation by one action. The environment owns all simulation state; a
/// rollout only borrows it mutably for the length of one episode.
///
/// Environments are not assumed to be re-entrant. Running several rollouts at
/// once requires one instance per rollout.
///
/// [`reset`]: Environment::reset
/// [`step`]: Environment::step
pub trait Environment {
    /// Observation handed to the policy.
    type State;
    /// Action accepted by [`Environment::step`]. Its domain is defined here,
    /// not by the caller.
    type Action;
    /// Diagnostic payload attached to a step.
    type Info;
    /// Failure signaled by `reset` or `step`.
    type Error;

    /// Reset the environment to its starting state and return the initial
    /// observation.
    ///
    /// # Errors
    ///
    /// Any failure of the simulator. Rollouts pass it on unchanged.
    fn reset(&mut self) -> Result<Self::State, Self::Error>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Any failure of the simulator. Rollouts pass it on unchanged.
    fn step(
        &mut self,
        action: Self::Action,
    ) -> Result<StepResult<Self::State, Self::Info>, Self::Error>;
}

/// Outcome of a single [`Environment::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult<S, I = ()> {
    /// Observation after the action was applied.
    pub state: S,
    /// Scalar reward for this transition.
    pub reward: f64,
    /// `true` once the episode has reached a terminal state.
    pub done: bool,
    /// Optional diagnostics. Rollouts never read this field.
    pub info: Option<I>,
}

impl<S, I> StepResult<S, I> {
    /// A transition without diagnostics.
    #[must_use]
    pub fn new(state: S, reward: f64, done: bool) -> Self {
        Self {
            state,
            reward,
            done,
            info: None,
        }
    }

    /// Attach a diagnostic payload.
    #[must_use]
    pub fn with_info(mut self, info: I) -> Self {
        self.info = Some(info);
        self
    }
}
