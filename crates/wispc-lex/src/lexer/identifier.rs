//! Identifier and keyword lexing.
//!
//! `elseif` is special-cased into the two keyword tokens `else` and `if`
//! rather than being its own tag, so the rest of the front end never has to
//! know the shorthand exists. Bytes with the high bit set are accepted as
//! identifier characters so UTF-8 names pass through; this is also what
//! keeps the source's UTF-8 validity filter fed past the point an invalid
//! lead byte would otherwise dead-end the lexer before its continuation
//! bytes are read.

use super::core::Lexer;
use crate::error::LexErrorKind;
use crate::keyword;
use crate::tag::LTag;

impl<'a> Lexer<'a> {
    pub(super) fn lex_identifier(&mut self, first: u8) -> Result<bool, LexErrorKind> {
        let mut text = vec![first];
        loop {
            match self.cursor().get_char() {
                Some(c) if c.is_ascii_alphanumeric() || c == b'_' || c >= 0x80 => text.push(c),
                Some(c) => {
                    self.cursor().unget(c);
                    break;
                }
                None => break,
            }
        }

        if text.as_slice() == b"elseif" {
            self.emit_tag(LTag::KwElse)?;
            self.emit_tag(LTag::KwIf)?;
            return Ok(true);
        }

        if let Some(tag) = keyword::lookup(&text) {
            self.emit_tag(tag)?;
            return Ok(true);
        }

        self.emit_ident(&text)?;
        Ok(true)
    }
}
