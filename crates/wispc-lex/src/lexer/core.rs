//! The `Lexer` struct: owns the cursor and the three output buffers, and
//! dispatches each input byte to the right sub-lexer.

use crate::byte_buf::ByteBuf;
use crate::cursor::Cursor;
use crate::dedup::DedupSet;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::tag::{LTag, LexOutput};
use wispc_util::Handler;

/// Growth granularity for the L-code stream: most tokens are a handful of
/// bytes, so doubling in small chunks avoids over-allocating short scripts.
const LCODE_GROWTH: u32 = 8;
const ARENA_GROWTH: u32 = 6;

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a mut Handler,
    line: u32,
    lcode: ByteBuf,
    strings: ByteBuf,
    idents: ByteBuf,
    string_dedup: DedupSet,
    ident_dedup: DedupSet,
    stcount: u32,
    idcount: u32,
    long_string_salt: u64,
}

/// String literals shorter than this length are deduplicated against every
/// other literal seen so far. Literals at or above it are not worth hashing
/// and comparing on every occurrence, so each gets its own arena entry.
const STRING_DEDUP_CUTOFF: usize = 256;

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8], handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            line: 1,
            lcode: ByteBuf::new(LCODE_GROWTH),
            strings: ByteBuf::new(ARENA_GROWTH),
            idents: ByteBuf::new(ARENA_GROWTH),
            string_dedup: DedupSet::new(),
            ident_dedup: DedupSet::new(),
            stcount: 0,
            idcount: 0,
            long_string_salt: 0,
        }
    }

    /// Lexes the whole source in one pass, returning the completed record or
    /// the first error encountered.
    pub fn run(mut self) -> LexResult<LexOutput> {
        let fault = loop {
            match self.next_token() {
                Ok(true) => continue,
                Ok(false) => break None,
                Err(kind) => break Some((kind, self.line)),
            }
        };

        self.cursor.finish_utf8();
        if self.cursor.utf8_invalid() {
            let err = LexError::new(LexErrorKind::InvalidEncoding, self.line);
            self.handler.error(err.kind.to_string(), err.line);
            return Err(err);
        }

        if let Some((kind, line)) = fault {
            self.handler.error(kind.to_string(), line);
            return Err(LexError::new(kind, line));
        }

        tracing::trace!(
            lcode_bytes = self.lcode.len(),
            strings = self.stcount,
            idents = self.idcount,
            lines = self.line,
            "lex completed"
        );

        self.lcode.pad_to_capacity();

        Ok(LexOutput {
            lcode: self.lcode.into_vec(),
            strings: self.strings.into_vec(),
            idents: self.idents.into_vec(),
            string_count: self.stcount,
            ident_count: self.idcount,
            line: self.line,
        })
    }

    /// Reads and dispatches one token. `Ok(true)` to keep lexing, `Ok(false)`
    /// once the `End` tag has been emitted.
    fn next_token(&mut self) -> Result<bool, LexErrorKind> {
        let Some(b) = self.cursor.get_char() else {
            self.emit_tag(LTag::End)?;
            return Ok(false);
        };
        match b {
            b'\n' => {
                self.line += 1;
                self.emit_tag(LTag::Newline)?;
                Ok(true)
            }
            b'\r' => match self.cursor.get_char() {
                Some(b'\n') => {
                    self.line += 1;
                    self.emit_tag(LTag::Newline)?;
                    Ok(true)
                }
                Some(c) => {
                    self.cursor.unget(c);
                    Err(LexErrorKind::Syntax)
                }
                None => Err(LexErrorKind::Syntax),
            },
            b' ' | b'\t' | 0x00 => Ok(true),
            b'#' => self.lex_comment(),
            b'"' => self.lex_string(),
            b'0'..=b'9' => {
                self.cursor.unget(b);
                self.lex_number(false)
            }
            b'.' => self.lex_dot(),
            b'!' => self.lex_bang(),
            b'%' => self.emit_simple(LTag::Percent),
            b'&' => self.emit_simple(LTag::Amp),
            b'(' => self.emit_simple(LTag::LParen),
            b')' => self.emit_simple(LTag::RParen),
            b'*' => self.emit_simple(LTag::Star),
            b'+' => self.emit_simple(LTag::Plus),
            b',' => self.emit_simple(LTag::Comma),
            b'-' => self.lex_minus(),
            b'/' => self.lex_slash(),
            b':' => self.emit_simple(LTag::Colon),
            b';' => self.emit_simple(LTag::Semi),
            b'<' => self.lex_less(),
            b'=' => self.lex_equals(),
            b'>' => self.lex_greater(),
            b'?' => self.lex_question(),
            b'[' => self.emit_simple(LTag::LBracket),
            b']' => self.emit_simple(LTag::RBracket),
            b'^' => self.emit_simple(LTag::Caret),
            b'{' => self.emit_simple(LTag::LBrace),
            b'|' => self.emit_simple(LTag::Pipe),
            b'}' => self.emit_simple(LTag::RBrace),
            b'~' => self.emit_simple(LTag::Tilde),
            c if c.is_ascii_alphabetic() || c == b'_' || c >= 0x80 => self.lex_identifier(c),
            _ => Err(LexErrorKind::Syntax),
        }
    }

    fn emit_simple(&mut self, tag: LTag) -> Result<bool, LexErrorKind> {
        self.emit_tag(tag)?;
        Ok(true)
    }

    fn lex_bang(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor.get_char() {
            Some(b'=') => self.emit_simple(LTag::NotEq),
            Some(c) => {
                self.cursor.unget(c);
                Err(LexErrorKind::Syntax)
            }
            None => Err(LexErrorKind::Syntax),
        }
    }

    fn lex_question(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor.get_char() {
            Some(b'?') => self.emit_simple(LTag::QuestionQuestion),
            Some(c) => {
                self.cursor.unget(c);
                Err(LexErrorKind::Syntax)
            }
            None => Err(LexErrorKind::Syntax),
        }
    }

    fn lex_minus(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor.get_char() {
            Some(b'>') => self.emit_simple(LTag::Arrow),
            Some(c) => {
                self.cursor.unget(c);
                self.emit_simple(LTag::Minus)
            }
            None => self.emit_simple(LTag::Minus),
        }
    }

    fn lex_slash(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor.get_char() {
            Some(b'/') => self.emit_simple(LTag::SlashSlash),
            Some(c) => {
                self.cursor.unget(c);
                self.emit_simple(LTag::Slash)
            }
            None => self.emit_simple(LTag::Slash),
        }
    }

    fn lex_less(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor.get_char() {
            Some(b'=') => self.emit_simple(LTag::Le),
            Some(b'<') => self.emit_simple(LTag::Shl),
            Some(c) => {
                self.cursor.unget(c);
                self.emit_simple(LTag::Lt)
            }
            None => self.emit_simple(LTag::Lt),
        }
    }

    fn lex_greater(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor.get_char() {
            Some(b'=') => self.emit_simple(LTag::Ge),
            Some(b'>') => self.emit_simple(LTag::Shr),
            Some(c) => {
                self.cursor.unget(c);
                self.emit_simple(LTag::Gt)
            }
            None => self.emit_simple(LTag::Gt),
        }
    }

    fn lex_equals(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor.get_char() {
            Some(b'=') => self.emit_simple(LTag::EqEq),
            Some(c) => {
                self.cursor.unget(c);
                self.emit_simple(LTag::Eq)
            }
            None => self.emit_simple(LTag::Eq),
        }
    }

    fn lex_dot(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor.get_char() {
            Some(c) if c.is_ascii_digit() => {
                self.cursor.unget(c);
                self.lex_number(true)
            }
            Some(b'?') => self.emit_simple(LTag::DotQuestion),
            Some(b'.') => match self.cursor.get_char() {
                Some(b'.') => self.emit_simple(LTag::Ellipsis),
                Some(c) => {
                    self.cursor.unget(c);
                    Err(LexErrorKind::Syntax)
                }
                None => Err(LexErrorKind::Syntax),
            },
            Some(c) => {
                self.cursor.unget(c);
                self.emit_simple(LTag::Dot)
            }
            None => self.emit_simple(LTag::Dot),
        }
    }

    /// Reads two bytes without consuming them, restoring cursor order.
    pub(super) fn peek2(&mut self) -> (Option<u8>, Option<u8>) {
        let a = self.cursor.get_char();
        let b = self.cursor.get_char();
        if let Some(bb) = b {
            self.cursor.unget(bb);
        }
        if let Some(aa) = a {
            self.cursor.unget(aa);
        }
        (a, b)
    }

    pub(super) fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(super) fn bump_line(&mut self) {
        self.line += 1;
    }

    pub(super) fn line(&self) -> u32 {
        self.line
    }

    pub(super) fn emit_tag(&mut self, tag: LTag) -> Result<(), LexErrorKind> {
        self.lcode.push_byte(tag as u8).map_err(|_| LexErrorKind::OutOfMemory)
    }

    pub(super) fn emit_int(&mut self, v: i64) -> Result<(), LexErrorKind> {
        self.emit_tag(LTag::IntLit)?;
        self.lcode.push_bytes(&v.to_ne_bytes()).map_err(|_| LexErrorKind::OutOfMemory)
    }

    pub(super) fn emit_float(&mut self, v: f64) -> Result<(), LexErrorKind> {
        self.emit_tag(LTag::FloatLit)?;
        self.lcode.push_bytes(&v.to_ne_bytes()).map_err(|_| LexErrorKind::OutOfMemory)
    }

    fn emit_id(&mut self, tag: LTag, id: u32) -> Result<(), LexErrorKind> {
        self.emit_tag(tag)?;
        self.lcode
            .push_bytes(&(id as usize).to_ne_bytes())
            .map_err(|_| LexErrorKind::OutOfMemory)
    }

    /// Looks up `text` in the identifier arena, appending it (NUL-terminated)
    /// only on a first sighting, and emits the resulting `Ident` token.
    pub(super) fn emit_ident(&mut self, text: &[u8]) -> Result<(), LexErrorKind> {
        let (id, is_new) = self.ident_dedup.insert(text);
        if is_new {
            self.idents.push_bytes(text).map_err(|_| LexErrorKind::OutOfMemory)?;
            self.idents.push_byte(0).map_err(|_| LexErrorKind::OutOfMemory)?;
            self.idcount += 1;
        }
        self.emit_id(LTag::Ident, id)
    }

    /// Same dedup contract as [`Lexer::emit_ident`], for string literal
    /// payloads, which may contain embedded NULs and are not length-prefixed
    /// in the arena (consumers split on the trailing NUL we append here,
    /// since an encoded NUL byte is always `0xC0 0x80`, never a bare `0x00`).
    pub(super) fn emit_string(&mut self, bytes: &[u8]) -> Result<(), LexErrorKind> {
        let (id, is_new) = if bytes.len() >= STRING_DEDUP_CUTOFF {
            self.long_string_salt += 1;
            let mut key = Vec::with_capacity(bytes.len() + 8);
            key.extend_from_slice(bytes);
            key.extend_from_slice(&self.long_string_salt.to_ne_bytes());
            self.string_dedup.insert(&key)
        } else {
            self.string_dedup.insert(bytes)
        };
        if is_new {
            self.strings.push_bytes(bytes).map_err(|_| LexErrorKind::OutOfMemory)?;
            self.strings.push_byte(0).map_err(|_| LexErrorKind::OutOfMemory)?;
            self.stcount += 1;
        }
        self.emit_id(LTag::StringLit, id)
    }
}
