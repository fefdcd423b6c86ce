use std::convert::Infallible;

/// Maps an observed state to an action.
///
/// Rollouts only ever hold a shared reference to a policy, so any parameters
/// it carries are read-only for the duration of an episode. The state is
/// handed over by value on every step.
///
/// Any closure `Fn(S) -> Result<A, E>` is a policy. Infallible functions can be
/// lifted with [`total`].
pub trait Policy<S> {
    /// Action chosen for a state.
    type Action;
    /// Raised for a state the policy cannot handle.
    type Error;

    /// Choose the action for `state`.
    ///
    /// # Errors
    ///
    /// [`Policy::Error`] when `state` is outside the policy's domain.
    fn act(&self, state: S) -> Result<Self::Action, Self::Error>;
}

impl<S, A, E, F> Policy<S> for F
where
    F: Fn(S) -> Result<A, E>,
{
    type Action = A;
    type Error = E;

    fn act(&self, state: S) -> Result<A, E> {
        self(state)
    }
}

/// A policy defined on every state, built from a plain function.
#[derive(Debug, Clone, Copy)]
pub struct Total<F>(F);

/// Lift `f: Fn(S) -> A` into a [`Policy`] that never fails.
#[must_use]
pub fn total<F>(f: F) -> Total<F> {
    Total(f)
}

impl<S, A, F> Policy<S> for Total<F>
where
    F: Fn(S) -> A,
{
    type Action = A;
    type Error = Infallible;

    fn act(&self, state: S) -> Result<A, Infallible> {
        Ok((self.0)(state))
    }
}
