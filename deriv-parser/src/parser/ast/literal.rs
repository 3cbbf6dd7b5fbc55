use crate::{
    parser::{
        error::{Error, UnexpectedToken},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// A constant. Integer and decimal constants are both represented here as `f64`.
///
/// The tokenizer only ever produces non-negative constants; a leading `-` in the source is a
/// binary subtraction. Negative values do appear in trees built by differentiation.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The value of the constant.
    pub value: f64,

    /// The region of the source code that this constant was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind != TokenKind::Num {
            return Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Num],
                found: token.kind,
            }));
        }
        Ok(Self {
            // the tokenizer guarantees the lexeme is a valid decimal constant
            value: token.lexeme.parse().unwrap(),
            span: token.span,
        })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The single free variable of an expression. It carries no name; the grammar supports exactly
/// one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitVar {
    /// The region of the source code that this variable was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitVar {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind != TokenKind::Var {
            return Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Var],
                found: token.kind,
            }));
        }
        Ok(Self { span: token.span })
    }
}

impl fmt::Display for LitVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x")
    }
}
