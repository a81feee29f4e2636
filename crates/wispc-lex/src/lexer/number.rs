//! Numeric literal lexing.
//!
//! Integers accumulate in a host `i64`; the moment a digit would overflow it,
//! accumulation silently switches to `f64` for the rest of the literal
//! (picking up exactly where the integer left off, per `fold_digit`). A
//! fractional part or exponent is only legal in base 10 - `0x1F.5` is a
//! syntax error, not two tokens.

use super::core::Lexer;
use crate::error::LexErrorKind;

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self, leading_dot: bool) -> Result<bool, LexErrorKind> {
        let mut acc: u64 = 0;
        let mut float_acc: f64 = 0.0;
        let mut is_float = leading_dot;
        let mut base: u32 = 10;
        let mut off: i64 = 0;

        if !leading_dot {
            let first = self.cursor().get_char().expect("digit dispatch guarantees a byte");
            if first == b'0' {
                match self.cursor().get_char() {
                    Some(b'x') => base = 16,
                    Some(b'o') => base = 8,
                    Some(b'b') => base = 2,
                    Some(c) => self.cursor().unget(c),
                    None => {}
                }
                if base != 10 {
                    if !self.consume_digits(&mut acc, &mut float_acc, &mut is_float, base)? {
                        return Err(LexErrorKind::Syntax);
                    }
                } else {
                    self.consume_digits(&mut acc, &mut float_acc, &mut is_float, base)?;
                }
            } else {
                fold_digit(&mut acc, &mut float_acc, &mut is_float, base, (first - b'0') as u64);
                self.consume_digits(&mut acc, &mut float_acc, &mut is_float, base)?;
            }
        }

        let (c1, c2) = self.peek2();
        if base == 10 && (leading_dot || (c1 == Some(b'.') && c2.is_some_and(|c| c.is_ascii_digit())))
        {
            if !leading_dot {
                self.cursor().get_char();
            }
            if !is_float {
                float_acc = acc as f64;
                is_float = true;
            }
            loop {
                match self.cursor().get_char() {
                    Some(c) if c.is_ascii_digit() => {
                        float_acc = float_acc * 10.0 + (c - b'0') as f64;
                        off -= 1;
                    }
                    Some(c) => {
                        self.cursor().unget(c);
                        break;
                    }
                    None => break,
                }
            }
        } else if base != 10 && c1 == Some(b'.') {
            return Err(LexErrorKind::Syntax);
        }

        if base == 10 {
            if let Some(c) = self.cursor().get_char() {
                if c == b'e' || c == b'E' {
                    off += self.lex_exponent()?;
                    if !is_float {
                        float_acc = acc as f64;
                        is_float = true;
                    }
                } else {
                    self.cursor().unget(c);
                }
            }
        }

        if is_float {
            let exp = off.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
            let value = wispc_arith::adjust_exp10(float_acc, exp);
            self.emit_float(value)?;
        } else {
            self.emit_int(acc as i64)?;
        }
        Ok(true)
    }

    fn lex_exponent(&mut self) -> Result<i64, LexErrorKind> {
        let mut neg = false;
        match self.cursor().get_char() {
            Some(b'+') => {}
            Some(b'-') => neg = true,
            Some(c) => self.cursor().unget(c),
            None => {}
        }
        let mut mag: i64 = 0;
        let mut any = false;
        loop {
            match self.cursor().get_char() {
                Some(d) if d.is_ascii_digit() => {
                    any = true;
                    mag = mag.saturating_mul(10).saturating_add((d - b'0') as i64);
                }
                Some(d) => {
                    self.cursor().unget(d);
                    break;
                }
                None => break,
            }
        }
        if !any {
            return Err(LexErrorKind::Syntax);
        }
        Ok(if neg { -mag } else { mag })
    }

    fn consume_digits(
        &mut self,
        acc: &mut u64,
        float_acc: &mut f64,
        is_float: &mut bool,
        base: u32,
    ) -> Result<bool, LexErrorKind> {
        let mut any = false;
        loop {
            match self.cursor().get_char() {
                Some(c) => match digit_value(c, base) {
                    Some(d) => {
                        any = true;
                        fold_digit(acc, float_acc, is_float, base, d as u64);
                    }
                    None => {
                        self.cursor().unget(c);
                        break;
                    }
                },
                None => break,
            }
        }
        Ok(any)
    }
}

fn fold_digit(acc: &mut u64, float_acc: &mut f64, is_float: &mut bool, base: u32, digit: u64) {
    if *is_float {
        *float_acc = *float_acc * base as f64 + digit as f64;
        return;
    }
    match acc.checked_mul(base as u64).and_then(|m| m.checked_add(digit)) {
        Some(v) if v <= i64::MAX as u64 => *acc = v,
        _ => {
            *float_acc = *acc as f64 * base as f64 + digit as f64;
            *is_float = true;
        }
    }
}

fn digit_value(c: u8, base: u32) -> Option<u32> {
    let v = match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'a'..=b'f' => (c - b'a' + 10) as u32,
        b'A'..=b'F' => (c - b'A' + 10) as u32,
        _ => return None,
    };
    if v < base {
        Some(v)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{lex, LTag};
    use wispc_util::Handler;

    fn lcode(source: &str) -> Vec<u8> {
        let mut handler = Handler::new();
        lex(source.as_bytes(), &mut handler).unwrap().lcode
    }

    fn int_at(lcode: &[u8]) -> i64 {
        assert_eq!(lcode[0], LTag::IntLit as u8);
        i64::from_ne_bytes(lcode[1..9].try_into().unwrap())
    }

    fn float_at(lcode: &[u8]) -> f64 {
        assert_eq!(lcode[0], LTag::FloatLit as u8);
        f64::from_ne_bytes(lcode[1..9].try_into().unwrap())
    }

    #[test]
    fn decimal_integer() {
        assert_eq!(int_at(&lcode("42")), 42);
    }

    #[test]
    fn hex_octal_binary() {
        assert_eq!(int_at(&lcode("0xFF")), 255);
        assert_eq!(int_at(&lcode("0o17")), 15);
        assert_eq!(int_at(&lcode("0b101")), 5);
    }

    #[test]
    fn leading_dot_fraction() {
        assert_eq!(float_at(&lcode(".5")), 0.5);
    }

    #[test]
    fn exponent_form() {
        assert_eq!(float_at(&lcode("1.5e2")), 150.0);
        assert_eq!(float_at(&lcode("2e-1")), 0.2);
    }

    #[test]
    fn overflowing_integer_promotes_to_float() {
        let v = float_at(&lcode("99999999999999999999"));
        assert!((v - 1e20).abs() / 1e20 < 1e-9);
    }

    #[test]
    fn dot_after_int_without_trailing_digit_is_an_operator() {
        let out = lcode("1.x");
        assert_eq!(out[0], LTag::IntLit as u8);
        assert_eq!(out[9], LTag::Dot as u8);
        assert_eq!(out[10], LTag::Ident as u8);
    }

    #[test]
    fn hex_with_fraction_is_a_syntax_error() {
        let mut handler = Handler::new();
        let err = lex(b"0x1F.5", &mut handler).unwrap_err();
        assert_eq!(err.kind, crate::LexErrorKind::Syntax);
    }

    #[test]
    fn uppercase_base_prefix_is_not_recognized() {
        let out = lcode("0X1");
        assert_eq!(int_at(&out), 0);
        assert_eq!(out[9], LTag::Ident as u8);
    }
}
