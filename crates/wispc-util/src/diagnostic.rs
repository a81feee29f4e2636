//! A minimal diagnostic sink.
//!
//! The lexer and the thread facade never format user-facing messages beyond
//! a failure kind and the source line it happened on, so this is a plain
//! record-and-collect sink rather than the full span/snippet machinery a
//! parser front end would eventually want.

use std::fmt;

/// Severity of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// One reported diagnostic: a level, a message, and the 1-based source line
/// it occurred on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub line: u32,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self { level: Level::Error, message: message.into(), line }
    }

    pub fn warning(message: impl Into<String>, line: u32) -> Self {
        Self { level: Level::Warning, message: message.into(), line }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (line {})", self.level, self.message, self.line)
    }
}

/// Collects diagnostics emitted during a single lex or façade call.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self { diagnostics: Vec::new() }
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(level = %diagnostic.level, line = diagnostic.line, "{}", diagnostic.message);
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>, line: u32) {
        self.emit(Diagnostic::error(message, line));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut handler = Handler::new();
        handler.error("bad token", 3);
        handler.emit(Diagnostic::warning("unreachable", 4));
        assert_eq!(handler.diagnostics().len(), 2);
        assert!(handler.has_errors());
    }

    #[test]
    fn clears() {
        let mut handler = Handler::new();
        handler.error("x", 1);
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }
}
