use crate::foundation::error::{ChoreoError, ChoreoResult};

/// Playback options for a [`crate::Timeline`].
///
/// Defaults give plain real-time playback that stops at the end.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineOpts {
    /// Multiplier applied to every `update(dt)` (`> 0`).
    pub time_scale: f64,
    /// Wrap the playhead back to the start instead of stopping at the end.
    pub looping: bool,
}

impl Default for TimelineOpts {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            looping: false,
        }
    }
}

impl TimelineOpts {
    /// Check option invariants.
    pub fn validate(&self) -> ChoreoResult<()> {
        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            return Err(ChoreoError::validation(format!(
                "time_scale must be finite and > 0, got {}",
                self.time_scale
            )));
        }
        Ok(())
    }

    /// Decode and validate options from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> ChoreoResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/opts.rs"]
mod tests;
