use super::{
    binary::{BinOpKind, Binary},
    call::{Call, FUNCTION_NAMES},
    literal::{LitNum, LitVar},
};
use crate::{
    parser::{
        error::{Error, UnexpectedEof, UnexpectedToken},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// The tokens that may start a `basic` operand.
const OPERAND_STARTERS: &[TokenKind] = &[
    TokenKind::Num,
    TokenKind::Var,
    TokenKind::Sin,
    TokenKind::Cos,
    TokenKind::Tan,
    TokenKind::Cot,
    TokenKind::Log,
    TokenKind::OpenParen,
];

/// The tokens that may legally follow a completed operand.
const OPERAND_FOLLOWERS: &[TokenKind] = &[
    TokenKind::Add,
    TokenKind::Sub,
    TokenKind::Mul,
    TokenKind::Div,
    TokenKind::Exp,
    TokenKind::CloseParen,
];

/// A single node of an expression tree.
///
/// Every non-leaf node exclusively owns its children; a sub-expression that is needed twice is
/// always cloned, never shared, so discarding a root discards the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant, such as `3.5`.
    Num(LitNum),

    /// The free variable `x`.
    Var(LitVar),

    /// A function call, such as `sin(x)`.
    Call(Call),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Num(num) => num.span.clone(),
            Expr::Var(var) => var.span.clone(),
            Expr::Call(call) => call.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl Parse for Expr {
    /// `expr := term (('+' | '-') term)*`, left-associative.
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let mut lhs = term(input)?;
        loop {
            let op = match input.peek_kind() {
                Some(TokenKind::Add) => BinOpKind::Add,
                Some(TokenKind::Sub) => BinOpKind::Sub,
                _ => break,
            };
            input.next_token()?;
            let rhs = term(input)?;
            lhs = Expr::Binary(Binary::new(op, lhs, rhs));
        }
        Ok(lhs)
    }
}

/// `term := factor (('*' | '/') factor)*`, left-associative.
fn term(input: &mut Parser) -> Result<Expr, Error> {
    let mut lhs = factor(input)?;
    loop {
        let op = match input.peek_kind() {
            Some(TokenKind::Mul) => BinOpKind::Mul,
            Some(TokenKind::Div) => BinOpKind::Div,
            _ => break,
        };
        input.next_token()?;
        let rhs = factor(input)?;
        lhs = Expr::Binary(Binary::new(op, lhs, rhs));
    }
    Ok(lhs)
}

/// `factor := basic ('^' factor)?`.
///
/// The right-hand side is parsed by a recursive call to `factor` itself, so `2^3^4` structures as
/// `2^(3^4)`; right-associativity is built into the shape of the recursion.
fn factor(input: &mut Parser) -> Result<Expr, Error> {
    let lhs = basic(input)?;
    if input.peek_kind() == Some(TokenKind::Exp) {
        input.next_token()?;
        let rhs = factor(input)?;
        return Ok(Expr::Binary(Binary::new(BinOpKind::Exp, lhs, rhs)));
    }
    Ok(lhs)
}

/// `basic := constant | variable | funcname '(' expr ')' | '(' expr ')'`.
fn basic(input: &mut Parser) -> Result<Expr, Error> {
    let expr = match input.peek_kind() {
        Some(TokenKind::Num) => Expr::Num(LitNum::parse(input)?),
        Some(TokenKind::Var) => Expr::Var(LitVar::parse(input)?),
        Some(kind) if FUNCTION_NAMES.contains(&kind) => Expr::Call(Call::parse(input)?),
        Some(TokenKind::OpenParen) => {
            input.next_token()?;
            let inner = Expr::parse(input)?;
            match input.peek_kind() {
                Some(TokenKind::CloseParen) => input.next_token()?,
                Some(found) => {
                    return Err(input.error(UnexpectedToken {
                        expected: &[TokenKind::CloseParen],
                        found,
                    }));
                },
                None => return Err(input.error(UnexpectedEof)),
            };
            // a parenthesized group contributes no node of its own
            inner
        },
        Some(found) => {
            return Err(input.error(UnexpectedToken {
                expected: OPERAND_STARTERS,
                found,
            }));
        },
        None => return Err(input.error(UnexpectedEof)),
    };

    // a completed operand may only be followed by an operator, a closing parenthesis, or the end
    // of the expression; this is what rejects implicit multiplication such as `3x`
    match input.peek_kind() {
        None => Ok(expr),
        Some(kind) if OPERAND_FOLLOWERS.contains(&kind) => Ok(expr),
        Some(found) => Err(input.error(UnexpectedToken {
            expected: OPERAND_FOLLOWERS,
            found,
        })),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(num) => num.fmt(f),
            Expr::Var(var) => var.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}
