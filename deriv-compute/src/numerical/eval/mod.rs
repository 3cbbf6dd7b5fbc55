//! Folds an expression tree into a single [`Complex`] value.

mod binary;
mod call;
mod literal;

use super::{ctxt::Ctxt, error::Error};
use deriv_parser::parser::ast::Expr;
use rug::Complex;

/// Trait for types that can be evaluated under a [`Ctxt`].
pub trait Eval {
    /// Evaluate the expression, returning the value it folds to.
    fn eval(&self, ctxt: &Ctxt) -> Result<Complex, Error>;
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<Complex, Error> {
        match self {
            Expr::Num(num) => num.eval(ctxt),
            Expr::Var(var) => var.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::complex;
    use deriv_parser::parser::Parser;

    fn eval_str(source: &str, at: f64) -> Result<Complex, Error> {
        let expr = Parser::new(source)
            .and_then(|mut parser| parser.try_parse_full::<Expr>())
            .unwrap();
        expr.eval(&Ctxt::real(at))
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval_str("1 + 2 * 3", 0.0).unwrap(), complex(7));
        assert_eq!(eval_str("((1 + 9) / 5) * 3", 0.0).unwrap(), complex(6));
        assert_eq!(eval_str("10 - 2 - 3", 0.0).unwrap(), complex(5));
    }

    #[test]
    fn exponentiation_is_right_associative() {
        assert_eq!(eval_str("2^3^2", 0.0).unwrap(), complex(512));
    }

    #[test]
    fn variable_binding() {
        assert_eq!(eval_str("3 * x + 1", 4.0).unwrap(), complex(13));
        assert_eq!(eval_str("x^2", -3.0).unwrap(), complex(9));
    }

    #[test]
    fn division_by_zero_fails() {
        let err = eval_str("1 / x", 0.0).unwrap_err();

        // the spans point at the offending divisor
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn log_of_zero_fails() {
        assert!(eval_str("log(x)", 0.0).is_err());
        assert!(eval_str("log(x - 2)", 2.0).is_err());
        assert!(eval_str("log(x)", 2.0).is_ok());
    }

    #[test]
    fn cot_of_zero_fails() {
        assert!(eval_str("cot(x)", 0.0).is_err());
        assert!(eval_str("cot(x)", 1.0).is_ok());
    }

    #[test]
    fn tan_of_zero_is_zero() {
        assert_eq!(eval_str("tan(x)", 0.0).unwrap(), complex(0));
    }

    #[test]
    fn tan_is_not_guarded_at_its_poles() {
        // pi/2 truncated to finite precision misses the exact pole, so tan just gets very large
        let expr = Parser::new("tan(x)")
            .and_then(|mut parser| parser.try_parse_full::<Expr>())
            .unwrap();
        let half_pi = complex(&*crate::consts::PI) / 2;
        let value = expr.eval(&Ctxt::new(half_pi)).unwrap();
        assert!(value.real().to_f64().abs() > 1e10);
    }

    #[test]
    fn tree_survives_a_failed_evaluation() {
        let expr = Parser::new("1 / x")
            .and_then(|mut parser| parser.try_parse_full::<Expr>())
            .unwrap();

        assert!(expr.eval(&Ctxt::real(0.0)).is_err());
        assert_eq!(expr.eval(&Ctxt::real(2.0)).unwrap(), complex(0.5));
    }
}
