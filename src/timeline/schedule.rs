use std::fmt;

use crate::{
    animation::anim::{Animation, Lifecycle},
    foundation::{
        core::{TimeSpan, clamp_time},
        error::ChoreoResult,
    },
    timeline::{
        diagnostics::{DiagnosticSink, TracingSink},
        opts::TimelineOpts,
        position::Position,
    },
};

/// An animation placed at an absolute start time.
#[derive(Debug)]
pub struct Entry {
    animation: Animation,
    start_time: f64,
}

impl Entry {
    /// The scheduled animation.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Absolute start time; fixed once placed.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// `start_time + duration`.
    pub fn end_time(&self) -> f64 {
        self.span().end
    }

    /// Occupied span on the timeline clock.
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start_time, self.animation.duration())
    }
}

/// Top-level scheduler: places animations on an absolute clock and drives them from a
/// caller-advanced playhead.
///
/// Nothing runs on its own. A render loop calls [`Timeline::update`] once per frame; every
/// mutating method returns `&mut Self` for chaining.
pub struct Timeline {
    entries: Vec<Entry>,
    current_time: f64,
    duration: f64,
    playing: bool,
    opts: TimelineOpts,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl Timeline {
    /// Empty, stopped timeline with default options; diagnostics go to `tracing`.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            current_time: 0.0,
            duration: 0.0,
            playing: false,
            opts: TimelineOpts::default(),
            diagnostics: Box::new(TracingSink),
        }
    }

    /// Empty timeline with validated options.
    pub fn with_opts(opts: TimelineOpts) -> ChoreoResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            ..Self::new()
        })
    }

    /// Route diagnostics to `sink` instead of `tracing`.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Append `animation` after the previous entry.
    pub fn add(&mut self, animation: impl Into<Animation>) -> &mut Self {
        self.add_at(animation, Position::AfterPrevious)
    }

    /// Append `animation` at `position`.
    ///
    /// Unparseable positions are reported to the diagnostics sink and treated as
    /// [`Position::AfterPrevious`].
    pub fn add_at(
        &mut self,
        animation: impl Into<Animation>,
        position: impl Into<Position>,
    ) -> &mut Self {
        let start_time = self.resolve(&position.into());
        self.push(animation.into(), start_time);
        self
    }

    /// Append every animation at one shared start time: the previous entry's end.
    pub fn add_parallel<I>(&mut self, animations: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Animation>,
    {
        let start_time = self.resolve(&Position::AfterPrevious);
        for animation in animations {
            self.push(animation.into(), start_time);
        }
        self
    }

    /// Start (or resume) playback. Does not move the playhead.
    pub fn play(&mut self) -> &mut Self {
        self.playing = true;
        self
    }

    /// Pause playback. Does not move the playhead.
    pub fn pause(&mut self) -> &mut Self {
        self.playing = false;
        self
    }

    /// Move the playhead to `t`, clamped to `[0, duration]`, and drive every entry.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn seek(&mut self, t: f64) -> &mut Self {
        self.current_time = clamp_time(t, self.duration);
        self.apply();
        self
    }

    /// Advance the playhead by `dt * time_scale` while playing, then drive every entry.
    ///
    /// Reaching the end stops playback. When looping, steps past the end wrap to the start and
    /// a step landing exactly on the end stays there for one frame.
    pub fn update(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        if !dt.is_finite() {
            tracing::debug!(dt, "ignoring non-finite time step");
            return;
        }

        let next = self.current_time + dt * self.opts.time_scale;
        if next >= self.duration {
            if self.opts.looping && self.duration > 0.0 {
                // Landing exactly on the end draws the end state; the next step wraps.
                self.current_time = if next > self.duration {
                    next.rem_euclid(self.duration)
                } else {
                    self.duration
                };
            } else {
                self.current_time = self.duration;
                self.playing = false;
                tracing::debug!(duration = self.duration, "timeline reached end");
            }
        } else {
            self.current_time = clamp_time(next, self.duration);
        }
        self.apply();
    }

    /// Drive every entry from the current playhead, in registration order.
    ///
    /// Entries are begun the first time the playhead reaches their start; entries not yet
    /// reached are left untouched. Each entry's own rate function is applied to its local
    /// progress.
    pub fn apply(&mut self) {
        let t = self.current_time;
        for entry in &mut self.entries {
            let span = entry.span();
            if entry.animation.state() == Lifecycle::NotStarted {
                if t < span.start {
                    continue;
                }
                entry.animation.begin();
            }
            entry.animation.drive(span.local_alpha(t));
        }
    }

    /// Force every entry to its exact end state and park the playhead at the end.
    pub fn finish(&mut self) -> &mut Self {
        for entry in &mut self.entries {
            entry.animation.finish();
        }
        self.current_time = self.duration;
        self.playing = false;
        self
    }

    /// Rewind to `0` and stop. Entries keep their lifecycle state.
    pub fn reset(&mut self) -> &mut Self {
        self.current_time = 0.0;
        self.playing = false;
        self
    }

    /// Remove every entry, then [`Timeline::reset`].
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self.duration = 0.0;
        self.reset()
    }

    /// Latest entry end time (`0` when empty).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Playhead position in `[0, duration]`.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Playhead as a fraction of the duration (`1` for an empty timeline).
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.current_time / self.duration
    }

    /// Whether `update` currently advances the playhead.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// `true` once the playhead is at the end (vacuously for an empty timeline).
    pub fn is_finished(&self) -> bool {
        self.current_time >= self.duration
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Playback options.
    pub fn opts(&self) -> &TimelineOpts {
        &self.opts
    }

    fn resolve(&mut self, position: &Position) -> f64 {
        let previous = self.entries.last().map(Entry::span);
        match position.resolve(previous) {
            Ok(t) => t,
            Err(diagnostic) => {
                self.diagnostics.emit(&diagnostic);
                previous.map_or(0.0, |span| span.end)
            }
        }
    }

    fn push(&mut self, animation: Animation, start_time: f64) {
        let entry = Entry {
            animation,
            start_time,
        };
        self.duration = self.duration.max(entry.end_time());
        tracing::debug!(
            index = self.entries.len(),
            start = entry.start_time,
            end = entry.end_time(),
            "timeline add"
        );
        self.entries.push(entry);
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("entries", &self.entries)
            .field("current_time", &self.current_time)
            .field("duration", &self.duration)
            .field("playing", &self.playing)
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
