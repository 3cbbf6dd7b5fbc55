//! Symbolic differentiation of expression trees with respect to the free variable.
//!
//! Differentiation is a pure tree-to-tree transformation: the input tree is only read, and every
//! node of the output is newly built. No algebraic simplification is performed, so the output
//! spells out each rule verbatim (the derivative of `2 * x` is `((0 * x) + (2 * 1))`, not `2`).
//! The output is an ordinary expression tree and can be evaluated, displayed, or differentiated
//! again.

use deriv_parser::parser::ast::{BinOpKind, Binary, Call, Expr, Func, LitNum};
use std::ops::Range;

/// Builds a constant node.
///
/// Nodes built during differentiation have no source text of their own, so they inherit the span
/// of the node whose derivative they are part of. Reports that point into the source stay
/// meaningful for trees that have been differentiated.
fn num(value: f64, span: &Range<usize>) -> Expr {
    Expr::Num(LitNum { value, span: span.clone() })
}

/// Builds a function call node, inheriting the given span.
fn call(func: Func, arg: Expr, span: &Range<usize>) -> Expr {
    Expr::Call(Call {
        func,
        arg: Box::new(arg),
        span: span.clone(),
    })
}

/// Builds a binary node. Its span is derived from its children as usual.
fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary(Binary::new(op, lhs, rhs))
}

/// The derivative of the outer function alone, evaluated at the argument. The chain-rule factor
/// is applied by the caller.
fn function_rule(func: Func, arg: &Expr, span: &Range<usize>) -> Expr {
    match func {
        // cos(a)
        Func::Sin => call(Func::Cos, arg.clone(), span),

        // -1 * sin(a)
        Func::Cos => binary(
            BinOpKind::Mul,
            num(-1.0, span),
            call(Func::Sin, arg.clone(), span),
        ),

        // 1 / cos(a)^2
        Func::Tan => binary(
            BinOpKind::Div,
            num(1.0, span),
            binary(
                BinOpKind::Exp,
                call(Func::Cos, arg.clone(), span),
                num(2.0, span),
            ),
        ),

        // -1 / sin(a)^2
        Func::Cot => binary(
            BinOpKind::Div,
            num(-1.0, span),
            binary(
                BinOpKind::Exp,
                call(Func::Sin, arg.clone(), span),
                num(2.0, span),
            ),
        ),

        // 1 / a
        Func::Log => binary(BinOpKind::Div, num(1.0, span), arg.clone()),
    }
}

/// Differentiates the expression with respect to the free variable, returning a new tree.
pub fn derivative(expr: &Expr) -> Expr {
    match expr {
        Expr::Num(num_lit) => num(0.0, &num_lit.span),
        Expr::Var(var) => num(1.0, &var.span),

        // chain rule: (f(a))' = a' * f'(a)
        Expr::Call(call_expr) => binary(
            BinOpKind::Mul,
            derivative(&call_expr.arg),
            function_rule(call_expr.func, &call_expr.arg, &call_expr.span),
        ),

        Expr::Binary(bin) => {
            let a = bin.lhs.as_ref();
            let b = bin.rhs.as_ref();
            match bin.op {
                // (a + b)' = a' + b'
                BinOpKind::Add => binary(BinOpKind::Add, derivative(a), derivative(b)),

                // (a - b)' = a' - b'
                BinOpKind::Sub => binary(BinOpKind::Sub, derivative(a), derivative(b)),

                // (a * b)' = a' * b + a * b'
                BinOpKind::Mul => binary(
                    BinOpKind::Add,
                    binary(BinOpKind::Mul, derivative(a), b.clone()),
                    binary(BinOpKind::Mul, a.clone(), derivative(b)),
                ),

                // (a / b)' = (a' * b - a * b') / b^2
                BinOpKind::Div => binary(
                    BinOpKind::Div,
                    binary(
                        BinOpKind::Sub,
                        binary(BinOpKind::Mul, derivative(a), b.clone()),
                        binary(BinOpKind::Mul, a.clone(), derivative(b)),
                    ),
                    binary(BinOpKind::Exp, b.clone(), num(2.0, &bin.rhs.span())),
                ),

                // the base and the exponent may both contain the variable, so neither the plain
                // power rule nor the exponential rule is enough on its own:
                // (a ^ b)' = (a ^ b) * (b' * log(a) + b * (a' / a))
                BinOpKind::Exp => binary(
                    BinOpKind::Mul,
                    Expr::Binary(bin.clone()),
                    binary(
                        BinOpKind::Add,
                        binary(
                            BinOpKind::Mul,
                            derivative(b),
                            call(Func::Log, a.clone(), &bin.lhs.span()),
                        ),
                        binary(
                            BinOpKind::Mul,
                            b.clone(),
                            binary(BinOpKind::Div, derivative(a), a.clone()),
                        ),
                    ),
                ),
            }
        },
    }
}
