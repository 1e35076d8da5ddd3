//! Diagnostic sinks
//!
//! The translator never logs through a global directly; it reports to the
//! [`DiagnosticSink`] it was constructed with.

use std::cell::RefCell;

use crate::error::{Diagnostic, Severity};

/// Receiver for non-fatal translation problems
pub trait DiagnosticSink {
    /// Record an unsupported feature
    fn warn(&self, diagnostic: &Diagnostic);

    /// Record a broken reference
    fn error(&self, diagnostic: &Diagnostic);

    /// Dispatch by the diagnostic's own severity
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => self.warn(diagnostic),
            Severity::Error => self.error(diagnostic),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn warn(&self, diagnostic: &Diagnostic) {
        (**self).warn(diagnostic);
    }

    fn error(&self, diagnostic: &Diagnostic) {
        (**self).error(diagnostic);
    }
}

/// Sink forwarding to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, diagnostic: &Diagnostic) {
        log::warn!("{}", diagnostic);
    }

    fn error(&self, diagnostic: &Diagnostic) {
        log::error!("{}", diagnostic);
    }
}

/// Sink that keeps every diagnostic in memory
///
/// Single-threaded by construction, like the translator that feeds it.
#[derive(Debug, Default)]
pub struct CapturingSink {
    entries: RefCell<Vec<(Severity, Diagnostic)>>,
}

impl CapturingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics in arrival order
    pub fn entries(&self) -> Vec<(Severity, Diagnostic)> {
        self.entries.borrow().clone()
    }

    /// Diagnostics recorded at error level
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.filtered(Severity::Error)
    }

    /// Diagnostics recorded at warning level
    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.filtered(Severity::Warning)
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn filtered(&self, severity: Severity) -> Vec<Diagnostic> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, d)| d.clone())
            .collect()
    }
}

impl DiagnosticSink for CapturingSink {
    fn warn(&self, diagnostic: &Diagnostic) {
        log::debug!("captured warning: {}", diagnostic);
        self.entries.borrow_mut().push((Severity::Warning, diagnostic.clone()));
    }

    fn error(&self, diagnostic: &Diagnostic) {
        log::debug!("captured error: {}", diagnostic);
        self.entries.borrow_mut().push((Severity::Error, diagnostic.clone()));
    }
}
