use crate::numerical::{
    ctxt::Ctxt,
    error::{DivisionByZero, Error, LogarithmDomain},
    eval::{binary::is_zero, Eval},
};
use deriv_parser::parser::ast::{Call, Func};
use rug::Complex;

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<Complex, Error> {
        let arg = self.arg.eval(ctxt)?;
        match self.func {
            Func::Sin => Ok(arg.sin()),
            Func::Cos => Ok(arg.cos()),

            // rounding keeps finite-precision arguments off the exact poles of `tan`, so there is
            // no zero to test for here; the result near a pole is simply a very large number
            Func::Tan => Ok(arg.tan()),
            Func::Cot => {
                let tan = arg.tan();
                if is_zero(&tan) {
                    return Err(Error::new(vec![self.span()], DivisionByZero));
                }
                Ok(tan.recip())
            },
            Func::Log => {
                if is_zero(&arg) {
                    return Err(Error::new(vec![self.span()], LogarithmDomain));
                }
                Ok(arg.ln())
            },
        }
    }
}
