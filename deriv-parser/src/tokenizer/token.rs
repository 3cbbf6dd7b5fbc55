use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r" +")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("sin")]
    Sin,

    #[token("cos")]
    Cos,

    #[token("tan")]
    Tan,

    #[token("cot")]
    Cot,

    /// The natural logarithm.
    #[token("log")]
    Log,

    /// The single free variable of every expression.
    #[token("x", priority = 10)]
    Var,

    /// A non-negative decimal constant. A leading `-` always lexes as a separate [`Sub`] token.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Num,

    /// An alphabetic run that is not one of the known function names. Always rejected when the
    /// token stream is assembled.
    #[regex(r"[a-zA-Z]+")]
    Name,

    /// A decimal separator with no digits attached to it on both sides, such as the one in `3.`.
    /// Always rejected when the token stream is assembled.
    #[token(".")]
    Dot,

    /// Any other character. Always rejected when the token stream is assembled.
    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
