use crate::{
    numerical::{ctxt::Ctxt, error::Error, eval::Eval},
    primitive::complex,
};
use deriv_parser::parser::ast::{LitNum, LitVar};
use rug::Complex;

impl Eval for LitNum {
    fn eval(&self, _: &Ctxt) -> Result<Complex, Error> {
        Ok(complex(self.value))
    }
}

impl Eval for LitVar {
    fn eval(&self, ctxt: &Ctxt) -> Result<Complex, Error> {
        Ok(ctxt.var().clone())
    }
}
