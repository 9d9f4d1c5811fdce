use lexers::LexError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,
    #[error("division by zero")]
    DivisionByZero,
}

impl ExprError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ExprError::MalformedExpression(reason.into())
    }
}

impl From<LexError> for ExprError {
    fn from(err: LexError) -> Self {
        ExprError::malformed(err.to_string())
    }
}
