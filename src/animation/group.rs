use crate::{
    animation::{
        anim::{Animation, Lifecycle},
        ease::RateFunction,
    },
    foundation::{
        core::TimeSpan,
        error::{ChoreoError, ChoreoResult},
    },
};

/// Lag ratio used by [`Group::lagged_start`].
pub const DEFAULT_STAGGER_LAG: f64 = 0.2;

/// Construction options for a [`Group`].
#[derive(Clone, Debug, Default)]
pub struct GroupOptions {
    /// Fraction of each child's duration to wait before starting the next child.
    /// `0` runs children in parallel, `1` runs them back to back.
    pub lag_ratio: f64,
    /// Rate function applied to the group's own progress by its driver.
    pub rate_function: RateFunction,
}

impl GroupOptions {
    /// Options with the given lag ratio and a linear rate function.
    pub fn lag(lag_ratio: f64) -> Self {
        Self {
            lag_ratio,
            ..Self::default()
        }
    }

    /// Replace the rate function.
    pub fn with_rate(mut self, rate: impl Into<RateFunction>) -> Self {
        self.rate_function = rate.into();
        self
    }
}

/// Animation that drives an ordered list of children, staggering their start times.
///
/// A single lag-ratio walk lays children out on the group's own clock; parallel, sequential
/// and staggered groups are just different lag ratios.
#[derive(Debug)]
pub struct Group {
    children: Vec<Animation>,
    lag_ratio: f64,
    rate: RateFunction,
    duration: f64,
    spans: Vec<TimeSpan>,
    state: Lifecycle,
}

impl Group {
    /// Group `children` with the given options.
    pub fn new<I>(children: I, opts: GroupOptions) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Animation>,
    {
        let children: Vec<Animation> = children.into_iter().map(Into::into).collect();
        let spans = Self::layout(children.iter().map(Animation::duration), opts.lag_ratio);
        let duration = spans_duration(&spans);
        Self {
            children,
            lag_ratio: opts.lag_ratio,
            rate: opts.rate_function,
            duration,
            spans,
            state: Lifecycle::NotStarted,
        }
    }

    /// Run every child over the same span (`lag_ratio = 0`).
    pub fn parallel<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Animation>,
    {
        Self::new(children, GroupOptions::lag(0.0))
    }

    /// Run children strictly one after another (`lag_ratio = 1`).
    pub fn succession<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Animation>,
    {
        Self::new(children, GroupOptions::lag(1.0))
    }

    /// Stagger children with [`DEFAULT_STAGGER_LAG`].
    pub fn lagged_start<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Animation>,
    {
        Self::lagged_start_with(children, DEFAULT_STAGGER_LAG)
    }

    /// Stagger children with a caller-supplied lag ratio.
    pub fn lagged_start_with<I>(children: I, lag_ratio: f64) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Animation>,
    {
        Self::new(children, GroupOptions::lag(lag_ratio))
    }

    /// Build one child per item with `make`, then stagger them with `lag_ratio`.
    ///
    /// Stops at the first construction error.
    pub fn lagged_start_map<I, F, A>(items: I, mut make: F, lag_ratio: f64) -> ChoreoResult<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> ChoreoResult<A>,
        A: Into<Animation>,
    {
        let children = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                make(item).map(Into::into).map_err(|err| {
                    ChoreoError::animation(format!("staggered child {index}: {err}"))
                })
            })
            .collect::<ChoreoResult<Vec<Animation>>>()?;
        Ok(Self::lagged_start_with(children, lag_ratio))
    }

    /// Replace the group's own rate function.
    pub fn with_rate(mut self, rate: impl Into<RateFunction>) -> Self {
        self.rate = rate.into();
        self
    }

    /// Lay out children of the given durations on the group clock.
    ///
    /// Each child starts `duration * lag_ratio` after the previous child started, so children of
    /// differing length stagger by their own length. Ratios above `1` lay children out back to
    /// back and NaN behaves as `0`. Negative ratios walk backwards, so later children may start
    /// before the group's `t = 0`.
    pub fn layout(durations: impl IntoIterator<Item = f64>, lag_ratio: f64) -> Vec<TimeSpan> {
        let step = effective_lag(lag_ratio);
        let mut start = 0.0;
        durations
            .into_iter()
            .map(|d| {
                let span = TimeSpan::new(start, d);
                start += d * step;
                span
            })
            .collect()
    }

    /// Group duration: the latest child end time, `0` when empty.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Lag ratio as supplied at construction.
    pub fn lag_ratio(&self) -> f64 {
        self.lag_ratio
    }

    /// Children in their fixed order.
    pub fn children(&self) -> &[Animation] {
        &self.children
    }

    /// Per-child spans on the group clock, in child order.
    pub fn spans(&self) -> &[TimeSpan] {
        &self.spans
    }

    /// Rate function applied to this group's progress by its driver.
    pub fn rate_function(&self) -> &RateFunction {
        &self.rate
    }

    /// Lifecycle of the group itself.
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Recompute child spans and begin every child in order.
    pub fn begin(&mut self) {
        if self.state != Lifecycle::NotStarted {
            return;
        }
        self.spans = Self::layout(self.children.iter().map(Animation::duration), self.lag_ratio);
        for child in &mut self.children {
            child.begin();
        }
        self.state = Lifecycle::Running;
        tracing::debug!(
            children = self.children.len(),
            lag_ratio = self.lag_ratio,
            duration = self.duration,
            "group begin"
        );
    }

    /// Fan rate-adjusted group progress out to the children.
    ///
    /// Each child receives its own rate function applied to its local progress.
    pub fn interpolate(&mut self, alpha: f64) {
        let group_time = alpha * self.duration;
        for (child, span) in self.children.iter_mut().zip(&self.spans) {
            let local = span.local_alpha(group_time);
            let eased = child.rate_function().apply(local);
            child.interpolate(eased);
        }
    }

    /// Finish every child, then the group.
    pub fn finish(&mut self) {
        if self.state == Lifecycle::NotStarted {
            self.begin();
        }
        for child in &mut self.children {
            child.finish();
        }
        self.state = Lifecycle::Finished;
    }

    /// `true` iff every child reports finished (vacuously true when empty).
    pub fn is_finished(&self) -> bool {
        self.children.iter().all(Animation::is_finished)
    }

    /// Reset every child, then the group's derived state.
    pub fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
        self.spans = Self::layout(self.children.iter().map(Animation::duration), self.lag_ratio);
        self.state = Lifecycle::NotStarted;
    }
}

fn effective_lag(lag_ratio: f64) -> f64 {
    if lag_ratio.is_nan() {
        0.0
    } else {
        lag_ratio.min(1.0)
    }
}

fn spans_duration(spans: &[TimeSpan]) -> f64 {
    spans.iter().map(|s| s.end).fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/group.rs"]
mod tests;
