//! wispc-lex - lexical analyzer for the wisp scripting language front end.
//!
//! Turns a byte stream into L-code: a flat token stream plus a deduplicated
//! string-literal arena and a deduplicated identifier arena. Everything
//! past that point (parsing, compilation, the VM) lives elsewhere; this
//! crate does not interpret what any token means.

mod byte_buf;
mod cursor;
mod dedup;
mod error;
mod keyword;
mod lexer;
mod tag;
mod utf8;

pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::Lexer;
pub use tag::{LTag, LexOutput};

use wispc_util::Handler;

/// Lexes `source` in one shot, producing the full L-code record or the
/// first error encountered (with everything the lexer owned released).
pub fn lex(source: &[u8], handler: &mut Handler) -> LexResult<LexOutput> {
    Lexer::new(source, handler).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::LTag;

    fn run(source: &str) -> LexOutput {
        let mut handler = Handler::new();
        lex(source.as_bytes(), &mut handler).expect("lex should succeed")
    }

    fn run_err(source: &str) -> LexError {
        let mut handler = Handler::new();
        lex(source.as_bytes(), &mut handler).expect_err("lex should fail")
    }

    #[test]
    fn scenario_assignment_and_arithmetic() {
        let out = run("a = 1 + 2\n");
        assert_eq!(
            out.lcode[..out.lcode.iter().position(|&b| b == LTag::End as u8).unwrap() + 1],
            [
                LTag::Ident as u8, 0, 0, 0, 0, 0, 0, 0, 0,
                LTag::Eq as u8,
                LTag::IntLit as u8, 1, 0, 0, 0, 0, 0, 0, 0,
                LTag::Plus as u8,
                LTag::IntLit as u8, 2, 0, 0, 0, 0, 0, 0, 0,
                LTag::Newline as u8,
                LTag::End as u8,
            ]
        );
        assert_eq!(out.ident_count, 1);
        assert_eq!(&out.idents[..2], b"a\0");
        assert_eq!(out.line, 2);
    }

    #[test]
    fn scenario_numeric_bases() {
        let out = run("0xFF + 0b10 + 0o17 + 1.5e2");
        // int 255, +, int 2, +, int 15, +, float 150.0, end
        assert!(out.lcode.starts_with(&[LTag::IntLit as u8]));
        let mut cursor = 0usize;
        let read_tag = |buf: &[u8], at: usize| buf[at];
        assert_eq!(read_tag(&out.lcode, cursor), LTag::IntLit as u8);
        let v = i64::from_ne_bytes(out.lcode[cursor + 1..cursor + 9].try_into().unwrap());
        assert_eq!(v, 255);
        cursor += 9;
        assert_eq!(read_tag(&out.lcode, cursor), LTag::Plus as u8);
        cursor += 1;
        assert_eq!(read_tag(&out.lcode, cursor), LTag::IntLit as u8);
        let v = i64::from_ne_bytes(out.lcode[cursor + 1..cursor + 9].try_into().unwrap());
        assert_eq!(v, 2);
    }

    #[test]
    fn scenario_string_dedup() {
        let out = run("\"foo\" \"foo\" \"bar\"");
        assert_eq!(out.string_count, 2);
        assert_eq!(&out.strings[..8], b"foo\0bar\0");
        let id_at = |n: usize| {
            let mut count = 0;
            let mut i = 0;
            loop {
                if out.lcode[i] == LTag::StringLit as u8 {
                    if count == n {
                        return usize::from_ne_bytes(
                            out.lcode[i + 1..i + 1 + std::mem::size_of::<usize>()]
                                .try_into()
                                .unwrap(),
                        );
                    }
                    count += 1;
                    i += 1 + std::mem::size_of::<usize>();
                } else if out.lcode[i] == LTag::End as u8 {
                    panic!("not enough string tokens");
                } else {
                    i += 1;
                }
            }
        };
        assert_eq!(id_at(0), 0);
        assert_eq!(id_at(1), 0);
        assert_eq!(id_at(2), 1);
    }

    #[test]
    fn scenario_elseif_expands() {
        let out = run("elseif x then\n");
        assert_eq!(
            out.lcode[0..2],
            [LTag::KwElse as u8, LTag::KwIf as u8]
        );
    }

    #[test]
    fn scenario_unicode_escape() {
        let out = run("\"\\u00E9\"");
        assert_eq!(&out.strings[..3], &[0xC3, 0xA9, 0x00]);
    }

    #[test]
    fn scenario_unterminated_string_fails() {
        let err = run_err("\"unterminated");
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    }

    #[test]
    fn scenario_overlong_encoding_fails() {
        let mut handler = Handler::new();
        let err = lex(&[0xC0, 0x20], &mut handler).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidEncoding);
    }

    #[test]
    fn bare_cr_is_a_syntax_error() {
        let err = run_err("a\rb");
        assert_eq!(err.kind, LexErrorKind::Syntax);
    }

    // ------------------------------------------------------------------
    // PROPERTY-BASED TESTS
    // ------------------------------------------------------------------

    const KEYWORDS: &[&str] = &[
        "and", "break", "catch", "continue", "delete", "do", "else", "end", "false", "for",
        "function", "if", "not", "null", "or", "public", "return", "then", "true", "try",
        "while", "with",
    ];

    fn token_len(tag: u8) -> usize {
        if tag == LTag::IntLit as u8
            || tag == LTag::FloatLit as u8
            || tag == LTag::Ident as u8
            || tag == LTag::StringLit as u8
        {
            1 + std::mem::size_of::<usize>()
        } else {
            1
        }
    }

    fn ids_for_tag(lcode: &[u8], tag: u8) -> Vec<usize> {
        let step = std::mem::size_of::<usize>();
        let mut ids = Vec::new();
        let mut i = 0;
        while i < lcode.len() && lcode[i] != LTag::End as u8 {
            if lcode[i] == tag {
                ids.push(usize::from_ne_bytes(lcode[i + 1..i + 1 + step].try_into().unwrap()));
            }
            i += token_len(lcode[i]);
        }
        ids
    }

    fn count_tokens(lcode: &[u8]) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < lcode.len() && lcode[i] != LTag::End as u8 {
            count += 1;
            i += token_len(lcode[i]);
        }
        count
    }

    #[test]
    fn property_legal_tokens_with_whitespace_lex_to_matching_token_count() {
        use proptest::prelude::*;

        let atoms = ["1", "42", "abc", "+", "-", "*", "(", ")"];
        proptest!(|(indices in prop::collection::vec(0usize..atoms.len(), 1..10),
                    gaps in prop::collection::vec(1usize..4, 10))| {
            let mut source = String::new();
            for (i, &idx) in indices.iter().enumerate() {
                source.push_str(atoms[idx]);
                source.push_str(&" ".repeat(gaps[i % gaps.len()]));
            }
            let out = run(&source);
            assert_eq!(count_tokens(&out.lcode), indices.len());
            assert_eq!(out.line, 1);
        });
    }

    #[test]
    fn property_identifier_repeated_n_times_dedups_to_one_arena_entry() {
        use proptest::prelude::*;

        proptest!(|(name in "[a-z][a-z0-9]{0,10}", reps in 1usize..=6)| {
            prop_assume!(!KEYWORDS.contains(&name.as_str()));
            let source = vec![name.clone(); reps].join(" ");
            let out = run(&source);
            let ids = ids_for_tag(&out.lcode, LTag::Ident as u8);
            assert_eq!(ids.len(), reps);
            assert!(ids.iter().all(|&id| id == ids[0]));
            assert_eq!(out.ident_count, 1);
        });
    }

    #[test]
    fn property_small_integers_round_trip_exactly() {
        use proptest::prelude::*;

        proptest!(|(n in 0u64..=(i64::MAX as u64))| {
            let out = run(&n.to_string());
            assert_eq!(out.lcode[0], LTag::IntLit as u8);
            let v = i64::from_ne_bytes(out.lcode[1..9].try_into().unwrap());
            assert_eq!(v as u64, n);
        });
    }

    #[test]
    fn property_escape_free_string_round_trips_byte_for_byte() {
        use proptest::prelude::*;

        proptest!(|(s in "[a-zA-Z0-9 ]{0,80}")| {
            let source = format!("\"{}\"", s);
            let out = run(&source);
            assert_eq!(out.lcode[0], LTag::StringLit as u8);
            assert_eq!(out.string_count, 1);
            let mut expected = s.into_bytes();
            expected.push(0);
            assert_eq!(out.strings, expected);
        });
    }
}
