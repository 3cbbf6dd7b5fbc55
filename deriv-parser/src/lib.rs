//! Tokenizer and recursive-descent parser for arithmetic expressions in one free variable.
//!
//! The grammar, lowest precedence first:
//!
//! ```text
//! expr     := term (('+' | '-') term)*
//! term     := factor (('*' | '/') factor)*
//! factor   := basic ('^' factor)?
//! basic    := constant | variable | funcname '(' expr ')' | '(' expr ')'
//! constant := digit+ ('.' digit+)?
//! variable := 'x'
//! funcname := 'sin' | 'cos' | 'tan' | 'cot' | 'log'
//! ```
//!
//! `log` denotes the natural logarithm. There is no implicit multiplication and no unary minus;
//! the sign of a constant is always a separate binary `-`.

pub mod parser;
pub mod tokenizer;
