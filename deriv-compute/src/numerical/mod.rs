pub mod ctxt;
pub mod error;
pub mod eval;
