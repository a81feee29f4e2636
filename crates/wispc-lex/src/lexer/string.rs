//! String literal lexing.
//!
//! The arena never stores a bare `0x00`: an embedded NUL, whether typed
//! directly or produced by `\0`, is encoded as the two-byte sequence
//! `0xC0 0x80` so the arena can keep using a trailing NUL as an end-of-entry
//! marker. Unicode escapes decode to a scalar value and are re-encoded to
//! UTF-8 before landing in the arena; the lexer never emits bytes the
//! validator it ran on the rest of the source would itself reject.

use super::core::Lexer;
use crate::error::LexErrorKind;

impl<'a> Lexer<'a> {
    pub(super) fn lex_string(&mut self) -> Result<bool, LexErrorKind> {
        let mut bytes = Vec::new();
        loop {
            match self.cursor().get_char() {
                None => return Err(LexErrorKind::UnterminatedString),
                Some(b'"') => break,
                Some(b'\n') => return Err(LexErrorKind::UnterminatedString),
                Some(b'\\') => self.lex_escape(&mut bytes)?,
                Some(b) => bytes.push(b),
            }
        }
        self.emit_string(&bytes)?;
        Ok(true)
    }

    fn lex_escape(&mut self, out: &mut Vec<u8>) -> Result<(), LexErrorKind> {
        match self.cursor().get_char() {
            None => Err(LexErrorKind::UnterminatedString),
            Some(b'\\') => {
                out.push(b'\\');
                Ok(())
            }
            Some(b'"') => {
                out.push(b'"');
                Ok(())
            }
            Some(b'0') => {
                out.extend_from_slice(&[0xC0, 0x80]);
                Ok(())
            }
            Some(b'b') => {
                out.push(0x08);
                Ok(())
            }
            Some(b'f') => {
                out.push(0x0C);
                Ok(())
            }
            Some(b'n') => {
                out.push(b'\n');
                Ok(())
            }
            Some(b'r') => {
                out.push(b'\r');
                Ok(())
            }
            Some(b't') => {
                out.push(b'\t');
                Ok(())
            }
            Some(b'x') => {
                let b = self.read_hex_digits(2)?;
                out.push(b as u8);
                Ok(())
            }
            Some(b'u') => {
                let cp = self.read_hex_digits(4)?;
                push_utf8_scalar(out, cp)
            }
            Some(b'U') => {
                let cp = self.read_hex_digits(8)?;
                push_utf8_scalar(out, cp)
            }
            Some(b'\n') => {
                self.bump_line();
                Ok(())
            }
            Some(b'\r') => match self.cursor().get_char() {
                Some(b'\n') => {
                    self.bump_line();
                    Ok(())
                }
                _ => Err(LexErrorKind::BadEscape),
            },
            Some(_) => Err(LexErrorKind::BadEscape),
        }
    }

    fn read_hex_digits(&mut self, count: u32) -> Result<u32, LexErrorKind> {
        let mut value: u32 = 0;
        for _ in 0..count {
            let d = match self.cursor().get_char() {
                Some(c @ b'0'..=b'9') => (c - b'0') as u32,
                Some(c @ b'a'..=b'f') => (c - b'a' + 10) as u32,
                Some(c @ b'A'..=b'F') => (c - b'A' + 10) as u32,
                _ => return Err(LexErrorKind::BadUnicodeEscape),
            };
            value = (value << 4) | d;
        }
        Ok(value)
    }
}

fn push_utf8_scalar(out: &mut Vec<u8>, codepoint: u32) -> Result<(), LexErrorKind> {
    if codepoint == 0 {
        out.extend_from_slice(&[0xC0, 0x80]);
        return Ok(());
    }
    let ch = char::from_u32(codepoint).ok_or(LexErrorKind::BadUnicodeEscape)?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    Ok(())
}
