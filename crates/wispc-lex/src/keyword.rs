//! Keyword recognition.
//!
//! A `match` on the fully-consumed identifier text is the idiomatic Rust
//! equivalent of the hand-coded first-letter trie this is grounded on: the
//! compiler lowers a string match over a small fixed set to the same kind
//! of length-then-byte dispatch a trie gives you by hand.

use crate::tag::LTag;

pub fn lookup(text: &[u8]) -> Option<LTag> {
    Some(match text {
        b"and" => LTag::KwAnd,
        b"break" => LTag::KwBreak,
        b"catch" => LTag::KwCatch,
        b"continue" => LTag::KwContinue,
        b"delete" => LTag::KwDelete,
        b"do" => LTag::KwDo,
        b"else" => LTag::KwElse,
        b"end" => LTag::KwEnd,
        b"false" => LTag::KwFalse,
        b"for" => LTag::KwFor,
        b"function" => LTag::KwFunction,
        b"if" => LTag::KwIf,
        b"not" => LTag::KwNot,
        b"null" => LTag::KwNull,
        b"or" => LTag::KwOr,
        b"public" => LTag::KwPublic,
        b"return" => LTag::KwReturn,
        b"then" => LTag::KwThen,
        b"true" => LTag::KwTrue,
        b"try" => LTag::KwTry,
        b"while" => LTag::KwWhile,
        b"with" => LTag::KwWith,
        _ => return None,
    })
}
