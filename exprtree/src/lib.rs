//! Arithmetic expressions: tokenize, reorder into postfix with the
//! shunting-yard algorithm, fold the postfix sequence into a tree and
//! evaluate it.
//!
//! ```
//! assert_eq!(exprtree::eval_str("(2+3)*4"), Ok(20.0));
//! ```

pub use error::ExprError;
pub use parser::{precedence, Assoc, RPNExpr, ShuntingParser};
pub use tree::{BinaryOp, Expr, ExprTree, UnaryOp};

mod error;
pub mod parser;

mod tree;
mod print;

pub fn eval_str(expr: &str) -> Result<f64, ExprError> {
    ExprTree::parse_str(expr)?.eval()
}
