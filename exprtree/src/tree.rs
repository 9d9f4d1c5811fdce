use crate::error::ExprError;
use crate::parser::{RPNExpr, ShuntingParser};
use lexers::{ArithToken, ArithTokenizer};
use log::debug;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum UnaryOp {
    Identity,
    Negate,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    fn from_symbol(op: char) -> Option<BinaryOp> {
        match op {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Subtract),
            '*' => Some(BinaryOp::Multiply),
            '/' => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        }
    }
}

/// A node of the expression tree. Every node owns its children.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Number(f64),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn eval(&self) -> Result<f64, ExprError> {
        match self {
            Expr::Number(num) => Ok(*num),
            Expr::Unary(UnaryOp::Identity, operand) => operand.eval(),
            Expr::Unary(UnaryOp::Negate, operand) => Ok(-operand.eval()?),
            Expr::Binary(op, lhs, rhs) => {
                let (l, r) = (lhs.eval()?, rhs.eval()?);
                match op {
                    BinaryOp::Add => Ok(l + r),
                    BinaryOp::Subtract => Ok(l - r),
                    BinaryOp::Multiply => Ok(l * r),
                    BinaryOp::Divide if r == 0.0 => Err(ExprError::DivisionByZero),
                    BinaryOp::Divide => Ok(l / r),
                }
            }
        }
    }
}

/// A parsed expression, evaluated as often as needed.
#[derive(Clone, PartialEq, Debug)]
pub struct ExprTree {
    root: Expr,
}

impl ExprTree {
    pub fn parse_str(expr: &str) -> Result<ExprTree, ExprError> {
        Self::parse(&mut ArithTokenizer::new(expr.chars()))
    }

    /// Blank input is not an error, it yields a tree that evaluates to 0.
    pub fn parse<I: Iterator<Item = char>>(
        lex: &mut ArithTokenizer<I>,
    ) -> Result<ExprTree, ExprError> {
        if !lex.has_next() {
            return Ok(ExprTree { root: Expr::Number(0.0) });
        }
        Self::from_rpn(ShuntingParser::parse(lex)?)
    }

    pub fn from_rpn(rpn: RPNExpr) -> Result<ExprTree, ExprError> {
        fn operand(stack: &mut Vec<Expr>, op: &ArithToken) -> Result<Box<Expr>, ExprError> {
            match stack.pop() {
                Some(node) => Ok(Box::new(node)),
                None => Err(ExprError::malformed(format!("missing operand for '{}'", op))),
            }
        }

        let mut stack = Vec::new();
        for token in rpn.0 {
            let node = match token {
                ArithToken::Number(ref num) => match num.parse::<f64>() {
                    Ok(value) => Expr::Number(value),
                    Err(_) => return Err(ExprError::malformed(format!("bad number '{}'", num))),
                },
                ArithToken::BOp(symbol) => {
                    let op = BinaryOp::from_symbol(symbol).ok_or_else(|| {
                        ExprError::malformed(format!("unknown operator '{}'", symbol))
                    })?;
                    let rhs = operand(&mut stack, &token)?;
                    let lhs = operand(&mut stack, &token)?;
                    Expr::Binary(op, lhs, rhs)
                }
                ArithToken::UPlus => Expr::Unary(UnaryOp::Identity, operand(&mut stack, &token)?),
                ArithToken::UMinus => Expr::Unary(UnaryOp::Negate, operand(&mut stack, &token)?),
                other => return Err(ExprError::malformed(format!("illegal token '{}'", other))),
            };
            stack.push(node);
        }

        let root = stack.pop().ok_or_else(|| ExprError::malformed("nothing to evaluate"))?;
        if !stack.is_empty() {
            return Err(ExprError::malformed(format!(
                "{} operand(s) without an operator", stack.len())));
        }
        let tree = ExprTree { root };
        debug!("tree: {}", tree);
        Ok(tree)
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    pub fn eval(&self) -> Result<f64, ExprError> {
        self.root.eval()
    }
}
