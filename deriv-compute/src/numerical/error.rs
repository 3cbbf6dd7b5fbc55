//! Errors raised while evaluating an expression tree.

use deriv_error::error_kind;

pub use deriv_error::Error;

error_kind! {
    /// The divisor of a division, or the tangent under a cotangent, evaluated to exactly zero.
    pub struct DivisionByZero;
    message = "division by zero",
    labels = ["this evaluated to zero"],
}

error_kind! {
    /// The argument of `log` evaluated to exactly zero, the one point the principal logarithm is
    /// undefined at.
    pub struct LogarithmDomain;
    message = "logarithm of zero is undefined",
    labels = ["the argument of this logarithm evaluated to zero"],
}
