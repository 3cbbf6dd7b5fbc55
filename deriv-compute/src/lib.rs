//! Symbolic differentiation and numerical evaluation of expression trees produced by
//! [`deriv_parser`].
//!
//! The [`symbolic`] module differentiates a tree with respect to its free variable, producing a
//! new, unsimplified tree. The [`numerical`] module folds a tree into a [`rug::Complex`] value
//! under a [`Ctxt`](numerical::ctxt::Ctxt) binding the variable.
//!
//! [`differentiate`] ties the two together: it parses a source string and packages the expression
//! with its first and second derivatives, ready to be displayed or evaluated at any complex point.
//!
//! ```no_run
//! use deriv_compute::{differentiate, primitive::complex};
//!
//! let derivs = differentiate("x^4 + 3*x^2").unwrap();
//! println!("f'(x) = {}", derivs.first);
//! println!("f'(2) = {}", derivs.eval_first(complex(2)).unwrap());
//! ```

pub mod consts;
pub mod numerical;
pub mod primitive;
pub mod symbolic;

use deriv_parser::parser::{ast::Expr, Parser};
use numerical::{ctxt::Ctxt, error::Error, eval::Eval};
use rug::Complex;
use symbolic::derivative;

/// An expression bundled with its first and second derivatives.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivatives {
    /// The parsed expression.
    pub original: Expr,

    /// The first derivative of the expression.
    pub first: Expr,

    /// The second derivative of the expression.
    pub second: Expr,
}

impl Derivatives {
    /// Evaluates the original expression at the given point.
    pub fn eval(&self, at: Complex) -> Result<Complex, Error> {
        self.original.eval(&Ctxt::new(at))
    }

    /// Evaluates the first derivative at the given point.
    pub fn eval_first(&self, at: Complex) -> Result<Complex, Error> {
        self.first.eval(&Ctxt::new(at))
    }

    /// Evaluates the second derivative at the given point.
    pub fn eval_second(&self, at: Complex) -> Result<Complex, Error> {
        self.second.eval(&Ctxt::new(at))
    }
}

/// Parses the given source string and differentiates it twice.
pub fn differentiate(source: &str) -> Result<Derivatives, Error> {
    let mut parser = Parser::new(source)?;
    let original = parser.try_parse_full::<Expr>()?;
    let first = derivative(&original);
    let second = derivative(&first);
    Ok(Derivatives { original, first, second })
}
