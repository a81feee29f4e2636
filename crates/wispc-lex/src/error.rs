//! Lexer failure kinds. Every one is surfaced with the source line it
//! occurred on; the lexer never does anything fancier with diagnostics.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("syntax error")]
    Syntax,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("bad escape sequence")]
    BadEscape,
    #[error("bad unicode escape")]
    BadUnicodeEscape,
    #[error("invalid utf-8 encoding")]
    InvalidEncoding,
    #[error("out of memory")]
    OutOfMemory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at line {line}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32) -> Self {
        Self { kind, line }
    }
}

pub type LexResult<T> = std::result::Result<T, LexError>;
