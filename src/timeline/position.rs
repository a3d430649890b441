use std::{fmt, str::FromStr};

use crate::{
    foundation::{
        core::TimeSpan,
        error::{ChoreoError, ChoreoResult},
    },
    timeline::diagnostics::Diagnostic,
};

/// Where to place an animation on a timeline, relative to the previously added entry.
///
/// String forms: `">"` (after previous), `"<"` (with previous), `"+=N"`, `"-=N"`. Numbers place
/// absolutely. Strings that do not parse are kept as [`Position::Unparsed`] and reported when
/// resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Position {
    /// At the previous entry's end time (`0` for the first entry).
    #[default]
    AfterPrevious,
    /// At the previous entry's start time (`0` for the first entry).
    WithPrevious,
    /// At an absolute time; negative values clamp to `0`.
    At(f64),
    /// Relative to the previous entry's end time; results below `0` clamp to `0`.
    Offset(f64),
    /// Input that could not be parsed.
    Unparsed(String),
}

impl Position {
    /// Strictly parse the string form.
    pub fn parse(input: &str) -> ChoreoResult<Self> {
        let s = input.trim();
        match s {
            ">" => return Ok(Self::AfterPrevious),
            "<" => return Ok(Self::WithPrevious),
            _ => {}
        }

        let (sign, rest) = if let Some(rest) = s.strip_prefix("+=") {
            (1.0, rest)
        } else if let Some(rest) = s.strip_prefix("-=") {
            (-1.0, rest)
        } else {
            return Err(ChoreoError::validation(format!(
                "unrecognized position '{input}'"
            )));
        };

        let amount: f64 = rest.trim().parse().map_err(|_| {
            ChoreoError::validation(format!("position offset in '{input}' is not a number"))
        })?;
        if !amount.is_finite() {
            return Err(ChoreoError::validation(format!(
                "position offset in '{input}' must be finite"
            )));
        }
        Ok(Self::Offset(sign * amount))
    }

    /// Resolve to an absolute start time given the previously added entry's span.
    ///
    /// Malformed positions return a diagnostic; callers fall back to
    /// [`Position::AfterPrevious`].
    pub fn resolve(&self, previous: Option<TimeSpan>) -> Result<f64, Diagnostic> {
        let (prev_start, prev_end) = previous.map_or((0.0, 0.0), |span| (span.start, span.end));
        match self {
            Self::AfterPrevious => Ok(prev_end),
            Self::WithPrevious => Ok(prev_start),
            Self::At(t) if t.is_finite() => Ok(t.max(0.0)),
            Self::Offset(dt) if dt.is_finite() => Ok((prev_end + dt).max(0.0)),
            Self::At(_) | Self::Offset(_) => Err(Diagnostic::unparseable_position(self.to_string())),
            Self::Unparsed(raw) => Err(Diagnostic::unparseable_position(raw.clone())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AfterPrevious => f.write_str(">"),
            Self::WithPrevious => f.write_str("<"),
            Self::At(t) => write!(f, "{t}"),
            Self::Offset(dt) if *dt < 0.0 => write!(f, "-={}", -dt),
            Self::Offset(dt) => write!(f, "+={dt}"),
            Self::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl FromStr for Position {
    type Err = ChoreoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for Position {
    fn from(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|_| Self::Unparsed(s.to_owned()))
    }
}

impl From<String> for Position {
    fn from(s: String) -> Self {
        match Self::parse(&s) {
            Ok(pos) => pos,
            Err(_) => Self::Unparsed(s),
        }
    }
}

impl From<f64> for Position {
    fn from(t: f64) -> Self {
        Self::At(t)
    }
}

impl From<i32> for Position {
    fn from(t: i32) -> Self {
        Self::At(f64::from(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/position.rs"]
mod tests;
