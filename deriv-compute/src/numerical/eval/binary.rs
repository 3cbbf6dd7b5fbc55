use crate::numerical::{
    ctxt::Ctxt,
    error::{DivisionByZero, Error},
    eval::Eval,
};
use deriv_parser::parser::ast::{BinOpKind, Binary};
use rug::{ops::Pow, Complex};

/// True when both parts of the value are exactly zero.
pub(crate) fn is_zero(value: &Complex) -> bool {
    value.real().is_zero() && value.imag().is_zero()
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<Complex, Error> {
        let lhs = self.lhs.eval(ctxt)?;
        let rhs = self.rhs.eval(ctxt)?;
        match self.op {
            BinOpKind::Add => Ok(lhs + rhs),
            BinOpKind::Sub => Ok(lhs - rhs),
            BinOpKind::Mul => Ok(lhs * rhs),
            BinOpKind::Div => {
                if is_zero(&rhs) {
                    return Err(Error::new(vec![self.rhs.span()], DivisionByZero));
                }
                Ok(lhs / rhs)
            },

            // principal branch of the complex power
            BinOpKind::Exp => Ok(lhs.pow(rhs)),
        }
    }
}
