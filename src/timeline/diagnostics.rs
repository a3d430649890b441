use std::{cell::RefCell, fmt, rc::Rc};

/// Category of a non-fatal scheduling diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DiagnosticKind {
    /// A placement could not be understood and fell back to "after previous".
    UnparseablePosition,
}

/// Warning-level report about malformed input the timeline recovered from.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Offending input, rendered as text.
    pub input: String,
    /// Human-readable explanation including the fallback taken.
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn unparseable_position(input: impl Into<String>) -> Self {
        let input = input.into();
        let message = format!(
            "invalid position '{input}', expected '>', '<', a finite number, '+=N' or '-=N'; \
             placing after the previous entry"
        );
        Self {
            kind: DiagnosticKind::UnparseablePosition,
            input,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receiver for timeline diagnostics. Hosts install one to capture or suppress warnings.
pub trait DiagnosticSink {
    /// Observe one diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);
}

/// Default sink: forwards every diagnostic to `tracing` at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        tracing::warn!(
            kind = ?diagnostic.kind,
            input = %diagnostic.input,
            "{}",
            diagnostic.message
        );
    }
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: &Diagnostic) {}
}

/// Collecting sink. Clones share one buffer, so a host can keep a handle after giving a clone
/// to the timeline.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticLog {
    entries: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything collected so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// `true` when nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop collected diagnostics.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.entries.borrow_mut().push(diagnostic.clone());
    }
}

/// Adapter turning any `FnMut(&Diagnostic)` into a [`DiagnosticSink`].
pub struct FnSink<F>(pub F);

impl<F> DiagnosticSink for FnSink<F>
where
    F: FnMut(&Diagnostic),
{
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (self.0)(diagnostic)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/diagnostics.rs"]
mod tests;
