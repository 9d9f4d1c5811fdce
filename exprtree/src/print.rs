use crate::parser::{Assoc, BINARY_ASSOC};
use crate::tree::{BinaryOp, Expr, ExprTree, UnaryOp};
use std::fmt;

// binding strength while printing, numbers never need parens
fn binding(expr: &Expr) -> usize {
    match expr {
        Expr::Number(_) => 5,
        Expr::Unary(_, _) => 4,
        Expr::Binary(BinaryOp::Multiply, _, _) | Expr::Binary(BinaryOp::Divide, _, _) => 3,
        Expr::Binary(BinaryOp::Add, _, _) | Expr::Binary(BinaryOp::Subtract, _, _) => 2,
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prec = binding(self);
        match self {
            Expr::Number(num) => write!(f, "{}", num),
            Expr::Unary(op, operand) => {
                let sign = match op {
                    UnaryOp::Identity => '+',
                    UnaryOp::Negate => '-',
                };
                if binding(operand) < prec {
                    write!(f, "{}({})", sign, operand)
                } else {
                    write!(f, "{}{}", sign, operand)
                }
            }
            Expr::Binary(op, lhs, rhs) => {
                // an operand binding equally only goes bare on the side the
                // parser groups towards: (10 - 4) - 3 or 10 - (4 - 3)
                let lh = if binding(lhs) < prec
                    || (binding(lhs) == prec && BINARY_ASSOC != Assoc::Left)
                {
                    format!("({})", lhs)
                } else {
                    format!("{}", lhs)
                };
                let rh = if binding(rhs) < prec
                    || (binding(rhs) == prec && BINARY_ASSOC != Assoc::Right)
                {
                    format!("({})", rhs)
                } else {
                    format!("{}", rhs)
                };
                write!(f, "{} {} {}", lh, op, rh)
            }
        }
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root())
    }
}
