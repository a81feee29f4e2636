//! The L-code tag alphabet and the record produced by a completed lex call.

/// One byte at the head of every L-code record.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LTag {
    End = 0,
    Newline = 1,

    KwAnd = 2,
    KwBreak = 3,
    KwCatch = 4,
    KwContinue = 5,
    KwDelete = 6,
    KwDo = 7,
    KwElse = 8,
    KwEnd = 9,
    KwFalse = 10,
    KwFor = 11,
    KwFunction = 12,
    KwIf = 13,
    KwNot = 14,
    KwNull = 15,
    KwOr = 16,
    KwPublic = 17,
    KwReturn = 18,
    KwThen = 19,
    KwTrue = 20,
    KwTry = 21,
    KwWhile = 22,
    KwWith = 23,

    Ident = 24,
    IntLit = 25,
    FloatLit = 26,
    StringLit = 27,

    NotEq = 28, // !=
    Percent = 29,
    Amp = 30,
    LParen = 31,
    RParen = 32,
    Star = 33,
    Plus = 34,
    Comma = 35,
    Minus = 36,
    Arrow = 37, // ->
    Dot = 38,
    DotQuestion = 39, // .?
    Ellipsis = 40,    // ...
    Slash = 41,
    SlashSlash = 42, // //
    Colon = 43,
    Semi = 44,
    Lt = 45,
    Le = 46,
    Shl = 47, // <<
    Eq = 48,
    EqEq = 49,
    Gt = 50,
    Ge = 51,
    Shr = 52, // >>
    QuestionQuestion = 53,
    LBracket = 54,
    RBracket = 55,
    Caret = 56,
    LBrace = 57,
    Pipe = 58,
    RBrace = 59,
    Tilde = 60,
}

/// The three owned buffers and bookkeeping counts a successful lex call
/// hands back to its caller.
#[derive(Debug, Clone)]
pub struct LexOutput {
    pub lcode: Vec<u8>,
    pub strings: Vec<u8>,
    pub idents: Vec<u8>,
    pub string_count: u32,
    pub ident_count: u32,
    pub line: u32,
}
