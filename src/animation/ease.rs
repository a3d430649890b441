use std::{fmt, rc::Rc};

/// Named rate functions used to remap linear animation progress.
///
/// Input progress is clamped to `[0, 1]`; output is not. Several curves overshoot on purpose
/// (`RunningStart`, `InBack`, `OutBack`) and `ThereAndBack` ends where it started.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Sigmoid ease-in/out with exact endpoints.
    Smooth,
    /// First half of [`Ease::Smooth`], rescaled: starts slow, ends fast.
    RushInto,
    /// Second half of [`Ease::Smooth`], rescaled: starts fast, ends slow.
    RushFrom,
    /// Quarter-circle ease-out.
    SlowInto,
    /// Two consecutive [`Ease::Smooth`] halves.
    DoubleSmooth,
    /// Goes to `1` at the midpoint and returns to `0`.
    ThereAndBack,
    /// Pulls back below `0` before accelerating to `1`.
    RunningStart,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Sinusoidal ease-in/out.
    InOutSine,
    /// Anticipating ease-in (dips below `0`).
    InBack,
    /// Overshooting ease-out (rises above `1`).
    OutBack,
    /// CSS-style cubic bezier `(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;
const SMOOTH_INFLECTION: f64 = 10.0;
const RUNNING_START_PULL: f64 = -0.5;

impl Ease {
    /// Apply this easing function to normalized progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => smooth(t),
            Self::RushInto => 2.0 * smooth(t / 2.0),
            Self::RushFrom => 2.0 * smooth(t / 2.0 + 0.5) - 1.0,
            Self::SlowInto => (1.0 - (1.0 - t) * (1.0 - t)).sqrt(),
            Self::DoubleSmooth => {
                if t < 0.5 {
                    0.5 * smooth(2.0 * t)
                } else {
                    0.5 * (1.0 + smooth(2.0 * t - 1.0))
                }
            }
            Self::ThereAndBack => {
                let folded = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
                smooth(folded)
            }
            Self::RunningStart => bernstein(
                &[
                    0.0,
                    0.0,
                    RUNNING_START_PULL,
                    RUNNING_START_PULL,
                    1.0,
                    1.0,
                    1.0,
                ],
                t,
            ),
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::InBack => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Self::OutBack => {
                let u = t - 1.0;
                1.0 + BACK_C3 * u * u * u + BACK_C1 * u * u
            }
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Logistic curve rescaled so that `smooth(0) == 0` and `smooth(1) == 1`.
fn smooth(t: f64) -> f64 {
    let error = sigmoid(-SMOOTH_INFLECTION / 2.0);
    ((sigmoid(SMOOTH_INFLECTION * (t - 0.5)) - error) / (1.0 - 2.0 * error)).clamp(0.0, 1.0)
}

/// Evaluate the 1-D bezier curve with control values `points` at `t`.
fn bernstein(points: &[f64], t: f64) -> f64 {
    let n = points.len().saturating_sub(1);
    let mut binom = 1.0;
    let mut acc = 0.0;
    for (k, p) in points.iter().enumerate() {
        acc += binom * t.powi(k as i32) * (1.0 - t).powi((n - k) as i32) * p;
        binom = binom * (n - k) as f64 / (k + 1) as f64;
    }
    acc
}

/// Solve the CSS cubic bezier for `y` at `x = t`.
///
/// Newton-Raphson with a bisection fallback when the slope flattens out.
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut p = t;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - t;
        if err.abs() < 1e-9 {
            return bezier_sample(p, y1, y2);
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-9 {
            break;
        }
        p -= err / slope;
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = t;
    for _ in 0..48 {
        let val = bezier_sample(p, x1, x2);
        if (val - t).abs() < 1e-9 {
            break;
        }
        if val < t {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }
    bezier_sample(p, y1, y2)
}

#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// A pure, stateless progress remap: either a named [`Ease`] or a host closure.
#[derive(Clone)]
pub enum RateFunction {
    /// Built-in named curve.
    Ease(Ease),
    /// Host-supplied curve. Must be pure; its output is not clamped.
    Custom(Rc<dyn Fn(f64) -> f64>),
}

impl RateFunction {
    /// Wrap a closure as a rate function.
    pub fn custom(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    /// Remap linear progress `t`.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Ease(ease) => ease.apply(t),
            Self::Custom(f) => f(t),
        }
    }

    /// Value the curve ends on, i.e. `apply(1.0)`.
    pub fn end_value(&self) -> f64 {
        self.apply(1.0)
    }
}

impl Default for RateFunction {
    fn default() -> Self {
        Self::Ease(Ease::Linear)
    }
}

impl From<Ease> for RateFunction {
    fn from(ease: Ease) -> Self {
        Self::Ease(ease)
    }
}

impl fmt::Debug for RateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ease(ease) => f.debug_tuple("Ease").field(ease).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
