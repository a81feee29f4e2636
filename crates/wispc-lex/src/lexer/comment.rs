//! Comment skipping.
//!
//! `#` runs to end of line; the newline itself is left for the driver loop
//! to consume so line counting stays in one place. `#<` opens a block
//! comment closed by `>#`; block comments do not nest. An unterminated
//! block comment is truncated at end-of-input rather than treated as an
//! error, matching how a trailing line comment runs off the end silently.

use super::core::Lexer;
use crate::error::LexErrorKind;

impl<'a> Lexer<'a> {
    pub(super) fn lex_comment(&mut self) -> Result<bool, LexErrorKind> {
        match self.cursor().get_char() {
            Some(b'<') => {
                self.skip_block_comment();
                Ok(true)
            }
            Some(c) => {
                self.cursor().unget(c);
                self.skip_line_comment();
                Ok(true)
            }
            None => Ok(true),
        }
    }

    fn skip_line_comment(&mut self) {
        loop {
            match self.cursor().get_char() {
                Some(b'\n') => {
                    self.cursor().unget(b'\n');
                    return;
                }
                Some(_) => continue,
                None => return,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        loop {
            match self.cursor().get_char() {
                Some(b'>') => match self.cursor().get_char() {
                    Some(b'#') => return,
                    Some(c) => self.cursor().unget(c),
                    None => return,
                },
                Some(b'\n') => self.bump_line(),
                Some(_) => {}
                None => return,
            }
        }
    }
}
