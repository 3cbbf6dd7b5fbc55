use super::expr::Expr;
use crate::{
    parser::{
        error::{Error, MissingFunctionParenthesis, UnexpectedToken},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// The tokens that name a function.
pub(crate) const FUNCTION_NAMES: &[TokenKind] = &[
    TokenKind::Sin,
    TokenKind::Cos,
    TokenKind::Tan,
    TokenKind::Cot,
    TokenKind::Log,
];

/// The functions that can appear in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    /// The sine function.
    Sin,

    /// The cosine function.
    Cos,

    /// The tangent function.
    Tan,

    /// The cotangent function.
    Cot,

    /// The natural logarithm.
    Log,
}

impl Func {
    /// The source-level spelling of this function.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Cot => "cot",
            Func::Log => "log",
        }
    }

    /// Maps a function-name token to its function.
    pub(crate) fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Sin => Some(Func::Sin),
            TokenKind::Cos => Some(Func::Cos),
            TokenKind::Tan => Some(Func::Tan),
            TokenKind::Cot => Some(Func::Cot),
            TokenKind::Log => Some(Func::Log),
            _ => None,
        }
    }
}

/// A function call, such as `sin(x)`. The argument must always be wrapped in parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The function being called.
    pub func: Func,

    /// The argument to the function.
    pub arg: Box<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.next_token()?;
        let Some(func) = Func::from_token(name.kind) else {
            return Err(Error::new(vec![name.span], UnexpectedToken {
                expected: FUNCTION_NAMES,
                found: name.kind,
            }));
        };

        match input.peek_kind() {
            Some(TokenKind::OpenParen) => input.next_token()?,
            _ => return Err(input.error(MissingFunctionParenthesis { opening: true })),
        };

        let arg = Expr::parse(input)?;

        let close = match input.peek_kind() {
            Some(TokenKind::CloseParen) => input.next_token()?,
            _ => return Err(input.error(MissingFunctionParenthesis { opening: false })),
        };

        Ok(Self {
            func,
            arg: Box::new(arg),
            span: name.span.start..close.span.end,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.func.name(), self.arg)
    }
}
