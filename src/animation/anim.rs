use std::fmt;

use crate::{
    animation::{
        ease::RateFunction,
        group::Group,
        lerp::Lerp,
        tween::{FnMutation, Idle, Mutation, Shared, Tween},
    },
    foundation::{core::validate_duration, error::ChoreoResult},
};

/// Lifecycle of a single animation.
///
/// `begin` moves `NotStarted -> Running`, `finish` moves to `Finished`, and `reset` returns to
/// `NotStarted`. `interpolate` never changes the state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Lifecycle {
    /// `begin` has not been called since construction or the last `reset`.
    #[default]
    NotStarted,
    /// Begun and not yet finished.
    Running,
    /// `finish` has been called; the target holds its exact end state.
    Finished,
}

/// Leaf animation: a fixed duration, a rate function, and a [`Mutation`] over some target.
pub struct Leaf {
    duration: f64,
    rate: RateFunction,
    mutation: Box<dyn Mutation>,
    state: Lifecycle,
}

impl Leaf {
    /// Build a leaf running `mutation` over `duration` seconds.
    pub fn new(duration: f64, mutation: impl Mutation + 'static) -> ChoreoResult<Self> {
        Ok(Self {
            duration: validate_duration(duration)?,
            rate: RateFunction::default(),
            mutation: Box::new(mutation),
            state: Lifecycle::NotStarted,
        })
    }

    /// Build a leaf from a closure receiving rate-adjusted progress.
    pub fn from_fn(duration: f64, f: impl FnMut(f64) + 'static) -> ChoreoResult<Self> {
        Self::new(duration, FnMutation(f))
    }

    /// Build a leaf tweening `target` toward `to`.
    pub fn tween<T>(duration: f64, target: Shared<T>, to: T) -> ChoreoResult<Self>
    where
        T: Lerp + Clone + 'static,
    {
        Self::new(duration, Tween::to(target, to))
    }

    /// Build a leaf that mutates nothing; occupies `duration` seconds of schedule.
    pub fn wait(duration: f64) -> ChoreoResult<Self> {
        Self::new(duration, Idle)
    }

    /// Replace the rate function.
    pub fn with_rate(mut self, rate: impl Into<RateFunction>) -> Self {
        self.rate = rate.into();
        self
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Rate function applied by whoever computes this leaf's local progress.
    pub fn rate_function(&self) -> &RateFunction {
        &self.rate
    }

    /// Current lifecycle state.
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Capture the starting state. Only the first call after construction or `reset` has an
    /// effect.
    pub fn begin(&mut self) {
        if self.state != Lifecycle::NotStarted {
            return;
        }
        self.mutation.begin();
        self.state = Lifecycle::Running;
        tracing::trace!(duration = self.duration, "leaf begin");
    }

    /// Apply already rate-adjusted progress `alpha` to the target.
    pub fn interpolate(&mut self, alpha: f64) {
        self.mutation.apply(alpha);
    }

    /// Force the exact end state. Begins first if needed; safe to repeat.
    pub fn finish(&mut self) {
        if self.state == Lifecycle::NotStarted {
            self.begin();
        }
        self.mutation.finish(self.rate.end_value());
        self.state = Lifecycle::Finished;
        tracing::trace!(duration = self.duration, "leaf finish");
    }

    /// `true` once `finish` has been called.
    pub fn is_finished(&self) -> bool {
        self.state == Lifecycle::Finished
    }

    /// Return to the pre-`begin` state. Idempotent.
    pub fn reset(&mut self) {
        self.mutation.reset();
        self.state = Lifecycle::NotStarted;
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("duration", &self.duration)
            .field("rate", &self.rate)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// A schedulable unit of work: either a leaf or a group of animations.
///
/// Both variants honor the same contract, so groups nest arbitrarily deep. Whoever computes an
/// animation's local progress applies that animation's own rate function exactly once before
/// calling [`Animation::interpolate`]; [`Animation::drive`] does this for standalone use.
#[derive(Debug)]
pub enum Animation {
    /// Leaf mutating an external target.
    Leaf(Leaf),
    /// Group driving child animations.
    Group(Group),
}

impl Animation {
    /// Duration in seconds; fixed at construction.
    pub fn duration(&self) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.duration(),
            Self::Group(group) => group.duration(),
        }
    }

    /// Rate function of this animation.
    pub fn rate_function(&self) -> &RateFunction {
        match self {
            Self::Leaf(leaf) => leaf.rate_function(),
            Self::Group(group) => group.rate_function(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> Lifecycle {
        match self {
            Self::Leaf(leaf) => leaf.state(),
            Self::Group(group) => group.state(),
        }
    }

    /// See [`Leaf::begin`] and [`Group::begin`].
    pub fn begin(&mut self) {
        match self {
            Self::Leaf(leaf) => leaf.begin(),
            Self::Group(group) => group.begin(),
        }
    }

    /// Apply already rate-adjusted progress.
    pub fn interpolate(&mut self, alpha: f64) {
        match self {
            Self::Leaf(leaf) => leaf.interpolate(alpha),
            Self::Group(group) => group.interpolate(alpha),
        }
    }

    /// Apply this animation's rate function to linear progress, then interpolate.
    pub fn drive(&mut self, linear_alpha: f64) {
        let alpha = self.rate_function().apply(linear_alpha);
        self.interpolate(alpha);
    }

    /// Force the exact end state.
    pub fn finish(&mut self) {
        match self {
            Self::Leaf(leaf) => leaf.finish(),
            Self::Group(group) => group.finish(),
        }
    }

    /// See [`Leaf::is_finished`] and [`Group::is_finished`].
    pub fn is_finished(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.is_finished(),
            Self::Group(group) => group.is_finished(),
        }
    }

    /// Return to the pre-`begin` state.
    pub fn reset(&mut self) {
        match self {
            Self::Leaf(leaf) => leaf.reset(),
            Self::Group(group) => group.reset(),
        }
    }
}

impl From<Leaf> for Animation {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Group> for Animation {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
