use core::fmt;
use std::result;

use crate::expr::{BinaryOp, Expr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Overflow { op: BinaryOp, lhs: i32, rhs: i32 },
    DivisionByZero { lhs: i32 },
}

pub type Result<T> = result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Overflow { op, lhs, rhs } => {
                write!(f, "integer overflow while computing {op}({lhs}, {rhs})")
            }
            Error::DivisionByZero { lhs } => write!(f, "division by zero in div({lhs}, 0)"),
        }
    }
}

impl std::error::Error for Error {}

impl BinaryOp {
    /// Applies the operator without wrapping. Division truncates toward zero.
    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32> {
        let result = match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Div => {
                if rhs == 0 {
                    return Err(Error::DivisionByZero { lhs });
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(Error::Overflow { op: self, lhs, rhs })
    }
}

enum Op<'a> {
    Eval(&'a Expr),
    Apply(BinaryOp),
    Discard,
}

/// Evaluates `expr` with an explicit work stack, so deep trees do not grow the call stack.
///
/// Operands are evaluated left to right. The value bound by a `let` is computed once when
/// the `let` is reached (its result is discarded) and again at every use of the variable.
#[tracing::instrument(level = "debug", skip_all, ret, err(level = "debug", Display))]
pub fn evaluate(expr: &Expr) -> Result<i32> {
    let mut ops = vec![Op::Eval(expr)];
    let mut values: Vec<i32> = Vec::new();

    while let Some(op) = ops.pop() {
        match op {
            Op::Eval(Expr::Integer(n)) => values.push(*n),
            Op::Eval(Expr::Binary { op, lhs, rhs }) => {
                ops.push(Op::Apply(*op));
                ops.push(Op::Eval(rhs));
                ops.push(Op::Eval(lhs));
            }
            Op::Eval(Expr::Let { name, bound, body }) => {
                tracing::trace!(%name, "entering let");
                ops.push(Op::Eval(body));
                ops.push(Op::Discard);
                ops.push(Op::Eval(bound));
            }
            Op::Eval(Expr::Variable { resolved, .. }) => ops.push(Op::Eval(resolved)),
            Op::Apply(op) => {
                let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                    unreachable!("'{op}' applied with fewer than two operands");
                };
                values.push(op.apply(lhs, rhs)?);
            }
            Op::Discard => {
                values.pop();
            }
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        _ => unreachable!("evaluation left {} values", values.len()),
    }
}
