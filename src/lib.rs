//! choreo is a deterministic animation timing and composition engine.
//!
//! It decides *when* animations run and *how far along* each one is. What an animation does
//! to its target is left to the host through the [`Mutation`] trait; choreo only hands it a
//! rate-adjusted progress value.
//!
//! # Building blocks
//!
//! - [`Leaf`]: a duration, a [`RateFunction`] and a [`Mutation`].
//! - [`Group`]: an animation made of animations. A lag ratio interpolates between fully
//!   parallel (`0`), staggered (e.g. `0.2`) and strictly sequential (`1`) layouts.
//! - [`Timeline`]: places animations on an absolute clock with a small position DSL
//!   (`">"`, `"<"`, `"+=N"`, `"-=N"`, absolute seconds) and drives them from a playhead that
//!   the host advances with [`Timeline::update`].
//!
//! Every animation applies its own rate function exactly once, at the point its local
//! progress is computed, no matter how deeply groups are nested.
//!
//! # Caller contract
//!
//! Everything is single-threaded and pull-based. Two animations writing the same target at
//! the same time is not detected: the one visited last (registration order) wins. Calling
//! `interpolate` before `begin` is not guarded against.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod timeline;

pub use crate::animation::anim::{Animation, Leaf, Lifecycle};
pub use crate::animation::ease::{Ease, RateFunction};
pub use crate::animation::group::{DEFAULT_STAGGER_LAG, Group, GroupOptions};
pub use crate::animation::lerp::Lerp;
pub use crate::animation::tween::{FnMutation, Idle, Mutation, Shared, Tween, shared};
pub use crate::foundation::core::{TimeSpan, clamp_time, validate_duration};
pub use crate::foundation::error::{ChoreoError, ChoreoResult};
pub use crate::timeline::diagnostics::{
    Diagnostic, DiagnosticKind, DiagnosticLog, DiagnosticSink, FnSink, NullSink, TracingSink,
};
pub use crate::timeline::opts::TimelineOpts;
pub use crate::timeline::position::Position;
pub use crate::timeline::schedule::{Entry, Timeline};
