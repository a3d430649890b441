use crate::foundation::error::{ChoreoError, ChoreoResult};

/// Half-open span of time `[start, end)` in seconds, relative to its owner's `t = 0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeSpan {
    /// Time at which the span begins.
    pub start: f64,
    /// Time at which the span ends (`start + duration`).
    pub end: f64,
}

impl TimeSpan {
    /// Build a span starting at `start` and lasting `duration` seconds.
    pub fn new(start: f64, duration: f64) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Length of the span in seconds.
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    /// `true` for instantaneous spans.
    pub fn is_empty(self) -> bool {
        self.len() <= 0.0
    }

    /// Local progress of `t` within this span.
    ///
    /// Before the span this is `0`, at or after `end` it is `1`, and in between it is the
    /// linear fraction elapsed. Instantaneous spans never divide by zero.
    pub fn local_alpha(self, t: f64) -> f64 {
        if t < self.start {
            return 0.0;
        }
        if t >= self.end {
            return 1.0;
        }
        let len = self.len();
        if len <= 0.0 {
            return 1.0;
        }
        (t - self.start) / len
    }

    /// Shift the span by `offset` seconds.
    pub fn shift(self, offset: f64) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// Clamp `t` into `[0, max]`, mapping NaN to `0`.
pub fn clamp_time(t: f64, max: f64) -> f64 {
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, max.max(0.0))
}

/// Check that `duration` is a usable animation length (finite and `>= 0`).
pub fn validate_duration(duration: f64) -> ChoreoResult<f64> {
    if !duration.is_finite() {
        return Err(ChoreoError::validation(format!(
            "duration must be finite, got {duration}"
        )));
    }
    if duration < 0.0 {
        return Err(ChoreoError::validation(format!(
            "duration must be >= 0, got {duration}"
        )));
    }
    Ok(duration)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
