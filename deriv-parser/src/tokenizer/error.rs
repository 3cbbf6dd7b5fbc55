//! Errors raised while assembling the token stream.

use ariadne::Fmt;
use deriv_error::{error_kind, EXPR};

error_kind! {
    /// A character that is not part of the expression grammar.
    pub struct UnknownChar;
    message = "unknown character",
    labels = ["this character is not part of the expression grammar"],
}

error_kind! {
    /// An alphabetic run that does not name a known function.
    pub struct UnknownName {
        /// The run of letters that was not recognized.
        pub name: String,
    }
    message = format!("unknown function: `{}`", name),
    labels = ["here"],
    help = format!("the supported functions are {}", "sin, cos, tan, cot, log".fg(EXPR)),
}

error_kind! {
    /// A decimal separator without a digit on each side of it.
    pub struct InvalidDecimal;
    message = "invalid decimal constant",
    labels = ["this decimal separator must have at least one digit on each side"],
}

error_kind! {
    /// A parenthesis was not closed.
    pub struct UnclosedParenthesis {
        /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was
        /// a closing parenthesis `)`.
        pub opening: bool,
    }
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
}
