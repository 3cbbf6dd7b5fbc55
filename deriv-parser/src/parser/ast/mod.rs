pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;

pub use binary::{BinOpKind, Binary};
pub use call::{Call, Func};
pub use expr::Expr;
pub use literal::{LitNum, LitVar};
