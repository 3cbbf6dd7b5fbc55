pub mod ast;
pub mod error;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use deriv_error::ErrorKind;
use error::{Error, ExpectedEof, UnexpectedEof};
use std::ops::Range;

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source. Fails if the source cannot be tokenized.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
        })
    }

    /// Creates an error that points at the next significant token, or the end of the source code
    /// if there is none.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the next non-whitespace token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the kind of the next non-whitespace token without advancing the cursor. Returns
    /// [`None`] if only whitespace remains.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(UnexpectedEof))
    }

    /// Attempts to parse a value from the stream of tokens. All the tokens must be consumed by
    /// the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.peek_kind().is_none() {
            Ok(value)
        } else {
            Err(self.error(ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{BinOpKind, Binary, Call, Expr, Func, LitNum, LitVar};

    /// Parses the full source string into an expression tree.
    fn parse(source: &str) -> Result<Expr, Error> {
        Parser::new(source)?.try_parse_full::<Expr>()
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), Expr::Num(LitNum {
            value: 16.0,
            span: 0..2,
        }));
    }

    #[test]
    fn literal_float_round_trips() {
        assert_eq!(parse("301.875").unwrap(), Expr::Num(LitNum {
            value: 301.875,
            span: 0..7,
        }));
    }

    #[test]
    fn literal_variable() {
        assert_eq!(parse("x").unwrap(), Expr::Var(LitVar { span: 0..1 }));
    }

    #[test]
    fn binary_left_associativity() {
        let expr = parse("1 - 2 + 3").unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Num(LitNum {
                    value: 1.0,
                    span: 0..1,
                })),
                op: BinOpKind::Sub,
                rhs: Box::new(Expr::Num(LitNum {
                    value: 2.0,
                    span: 4..5,
                })),
                span: 0..5,
            })),
            op: BinOpKind::Add,
            rhs: Box::new(Expr::Num(LitNum {
                value: 3.0,
                span: 8..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn exponent_binds_tighter_than_product() {
        // `2^3*5` groups as `(2^3)*5`, not `2^(3*5)`
        let expr = parse("2^3*5").unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Num(LitNum {
                    value: 2.0,
                    span: 0..1,
                })),
                op: BinOpKind::Exp,
                rhs: Box::new(Expr::Num(LitNum {
                    value: 3.0,
                    span: 2..3,
                })),
                span: 0..3,
            })),
            op: BinOpKind::Mul,
            rhs: Box::new(Expr::Num(LitNum {
                value: 5.0,
                span: 4..5,
            })),
            span: 0..5,
        }));
    }

    #[test]
    fn exponent_right_associativity() {
        // `2^3^4` groups as `2^(3^4)`
        let expr = parse("2^3^4").unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Num(LitNum {
                value: 2.0,
                span: 0..1,
            })),
            op: BinOpKind::Exp,
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Num(LitNum {
                    value: 3.0,
                    span: 2..3,
                })),
                op: BinOpKind::Exp,
                rhs: Box::new(Expr::Num(LitNum {
                    value: 4.0,
                    span: 4..5,
                })),
                span: 2..5,
            })),
            span: 0..5,
        }));
    }

    #[test]
    fn power_tower() {
        let expr = parse("2^3^4^x").unwrap();
        assert_eq!(expr.to_string(), "(2 ^ (3 ^ (4 ^ x)))");
    }

    #[test]
    fn function_call() {
        let expr = parse("sin(3*x)").unwrap();

        assert_eq!(expr, Expr::Call(Call {
            func: Func::Sin,
            arg: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Num(LitNum {
                    value: 3.0,
                    span: 4..5,
                })),
                op: BinOpKind::Mul,
                rhs: Box::new(Expr::Var(LitVar { span: 6..7 })),
                span: 4..7,
            })),
            span: 0..8,
        }));
    }

    #[test]
    fn parenthesized_group_adds_no_node() {
        assert_eq!(parse("(x)").unwrap(), Expr::Var(LitVar { span: 1..2 }));
    }

    #[test]
    fn nested_function_calls() {
        let expr = parse("sin(cos(tan(cot(log(x + 2)))))").unwrap();
        assert_eq!(expr.to_string(), "sin(cos(tan(cot(log((x + 2))))))");
    }

    #[test]
    fn mixed_precedence() {
        let expr = parse("7+ cos(2 + x) ^2* 3 - 5.234").unwrap();
        assert_eq!(expr.to_string(), "((7 + ((cos((2 + x)) ^ 2) * 3)) - 5.234)");
    }

    #[test]
    fn implicit_multiplication_is_rejected() {
        let err = parse("3x").unwrap_err();
        assert!(format!("{:?}", err.kind).contains("UnexpectedToken"));

        assert!(parse("(1+2)(3+4)").is_err());
        assert!(parse("2 x").is_err());
    }

    #[test]
    fn function_call_requires_parentheses() {
        let err = parse("sin 3 + 4").unwrap_err();
        assert!(format!("{:?}", err.kind).contains("opening: true"));

        assert!(parse("sin").is_err());
    }

    #[test]
    fn dangling_operator_is_rejected() {
        let err = parse("1 +").unwrap_err();
        assert!(format!("{:?}", err.kind).contains("UnexpectedEof"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
    }

    #[test]
    fn empty_parentheses_are_rejected() {
        assert!(parse("()").is_err());
        assert!(parse("sin()").is_err());
    }
}
