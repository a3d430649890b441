use std::{cell::RefCell, fmt, rc::Rc};

use crate::animation::lerp::Lerp;

/// Mutable handle to an animated value shared between the host and its animations.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap `value` in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Target-mutation logic owned by a leaf animation.
///
/// `apply` receives rate-adjusted progress and must be a pure function of it given the state
/// captured in `begin`, so repeated calls with the same alpha never accumulate.
pub trait Mutation {
    /// Snapshot whatever `apply` needs.
    fn begin(&mut self) {}

    /// Write the state for progress `alpha` into the target.
    fn apply(&mut self, alpha: f64);

    /// Write the exact end state. `end_alpha` is the rate function evaluated at `1`.
    fn finish(&mut self, end_alpha: f64) {
        self.apply(end_alpha);
    }

    /// Forget the `begin` snapshot.
    fn reset(&mut self) {}
}

/// Mutation that does nothing; used for spacer leaves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Idle;

impl Mutation for Idle {
    fn apply(&mut self, _alpha: f64) {}
}

/// Adapter turning any `FnMut(f64)` into a [`Mutation`].
pub struct FnMutation<F>(pub F);

impl<F> Mutation for FnMutation<F>
where
    F: FnMut(f64),
{
    fn apply(&mut self, alpha: f64) {
        (self.0)(alpha)
    }
}

impl<F> fmt::Debug for FnMutation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnMutation(..)")
    }
}

/// Interpolates a shared value from its state at `begin` (or a fixed start) toward `to`.
#[derive(Debug)]
pub struct Tween<T> {
    target: Shared<T>,
    fixed_from: Option<T>,
    from: Option<T>,
    to: T,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Tween `target` toward `to`, starting from whatever value it holds at `begin`.
    pub fn to(target: Shared<T>, to: T) -> Self {
        Self {
            target,
            fixed_from: None,
            from: None,
            to,
        }
    }

    /// Tween `target` from `from` to `to`, ignoring its value at `begin`.
    pub fn between(target: Shared<T>, from: T, to: T) -> Self {
        Self {
            target,
            fixed_from: Some(from),
            from: None,
            to,
        }
    }

    /// Value the target ends on.
    pub fn end_value(&self) -> &T {
        &self.to
    }
}

impl<T> Mutation for Tween<T>
where
    T: Lerp + Clone,
{
    fn begin(&mut self) {
        let from = match &self.fixed_from {
            Some(v) => v.clone(),
            None => self.target.borrow().clone(),
        };
        self.from = Some(from);
    }

    fn apply(&mut self, alpha: f64) {
        let Some(from) = &self.from else {
            return;
        };
        *self.target.borrow_mut() = T::lerp(from, &self.to, alpha);
    }

    fn finish(&mut self, end_alpha: f64) {
        if end_alpha == 1.0 {
            *self.target.borrow_mut() = self.to.clone();
        } else {
            self.apply(end_alpha);
        }
    }

    fn reset(&mut self) {
        self.from = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
