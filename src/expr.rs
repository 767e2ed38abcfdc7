use core::fmt;
use std::rc::Rc;

use crate::{eval, lexer::Keyword};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn keyword(self) -> Keyword {
        match self {
            BinaryOp::Add => Keyword::Add,
            BinaryOp::Sub => Keyword::Sub,
            BinaryOp::Mul => Keyword::Mult,
            BinaryOp::Div => Keyword::Div,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Parsed expression tree.
///
/// A `Let` and every `Variable` referring to it share the bound operand through an
/// [`Rc`], so the tree is a DAG rooted at each `Let` and never contains a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Integer(i32),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Let {
        name: String,
        bound: Rc<Expr>,
        body: Box<Expr>,
    },
    Variable {
        name: String,
        resolved: Rc<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn evaluate(&self) -> eval::Result<i32> {
        eval::evaluate(self)
    }

    /// Number of nodes in the tree. A variable counts as one node; its operand is counted at the `Let`.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            match expr {
                Expr::Integer(_) => {}
                Expr::Binary { lhs, rhs, .. } => {
                    pending.push(lhs);
                    pending.push(rhs);
                }
                Expr::Let { bound, body, .. } => {
                    pending.push(bound);
                    pending.push(body);
                }
                Expr::Variable { .. } => {}
            }
        }
        count
    }
}

/// Prints the expression back in source form, e.g. `let(a, 5, add(a, a))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Integer(val) => write!(f, "{val}"),
            Expr::Binary { op, lhs, rhs } => write!(f, "{op}({lhs}, {rhs})"),
            Expr::Let { name, bound, body } => write!(f, "let({name}, {bound}, {body})"),
            Expr::Variable { name, .. } => write!(f, "{name}"),
        }
    }
}
