//! Errors raised while parsing a token stream.

use crate::tokenizer::TokenKind;
use ariadne::Fmt;
use deriv_error::{error_kind, EXPR};

pub use deriv_error::Error;

error_kind! {
    /// The end of the expression was reached unexpectedly.
    pub struct UnexpectedEof;
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "operand".fg(EXPR))],
}

error_kind! {
    /// The end of the expression was expected, but something else was found.
    pub struct ExpectedEof;
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
}

error_kind! {
    /// An unexpected token was encountered.
    pub struct UnexpectedToken {
        /// The token(s) that were expected.
        pub expected: &'static [TokenKind],

        /// The token that was found.
        pub found: TokenKind,
    }
    message = "unexpected token",
    labels = [format!(
        "expected one of: {}",
        expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "),
    )],
    help = format!("found {:?}", found),
}

error_kind! {
    /// The argument of a function call was not wrapped in parentheses.
    pub struct MissingFunctionParenthesis {
        /// Whether the opening parenthesis `(` was missing. Otherwise, the closing parenthesis
        /// `)` was missing.
        pub opening: bool,
    }
    message = if *opening {
        "expected `(` after function name"
    } else {
        "expected `)` after function argument"
    },
    labels = ["the argument of a function call must be wrapped in parentheses"],
}
