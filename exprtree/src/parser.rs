use crate::error::ExprError;
use lexers::{ArithToken, ArithTokenizer, LexError};
use log::{debug, trace};
use std::fmt;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Assoc {
    Left,
    Right,
}

// Operators of equal precedence don't pop each other off the stack unless
// they're left associative, so by default 10-4-3 groups as 10-(4-3).
#[cfg(not(feature = "left-assoc"))]
pub(crate) const BINARY_ASSOC: Assoc = Assoc::Right;
#[cfg(feature = "left-assoc")]
pub(crate) const BINARY_ASSOC: Assoc = Assoc::Left;

pub fn precedence(token: &ArithToken) -> Result<(usize, Assoc), ExprError> {
    match *token {
        ArithToken::OParen | ArithToken::CParen => Ok((1, Assoc::Left)), // keep at bottom
        ArithToken::BOp('+') | ArithToken::BOp('-') => Ok((2, BINARY_ASSOC)),
        ArithToken::BOp('*') | ArithToken::BOp('/') => Ok((3, BINARY_ASSOC)),
        ArithToken::UPlus | ArithToken::UMinus => Ok((4, Assoc::Right)),
        ref other => Err(ExprError::malformed(format!("illegal token '{}'", other))),
    }
}

/// Tokens in postfix order, ready to be folded into an `ExprTree`.
#[derive(PartialEq, Debug)]
pub struct RPNExpr(pub Vec<ArithToken>);

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens = self.0.iter().map(|t| t.to_string()).collect::<Vec<String>>();
        write!(f, "{}", tokens.join(" "))
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ExprError> {
        Self::parse(&mut ArithTokenizer::new(expr.chars()))
    }

    pub fn parse(
        lex: &mut impl Iterator<Item = Result<ArithToken, LexError>>,
    ) -> Result<RPNExpr, ExprError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            let token = token?;
            trace!("shift {} onto {:?}", token, stack);
            match token {
                ArithToken::Number(_) => out.push(token),
                ArithToken::OParen => stack.push(token),
                ArithToken::CParen => loop {
                    match stack.pop() {
                        Some(ArithToken::OParen) => break,
                        Some(top) => out.push(top),
                        None => return Err(ExprError::UnmatchedParenthesis),
                    }
                },
                _ if stack.is_empty() => stack.push(token),
                _ => {
                    let (prec_rhs, assoc_rhs) = precedence(&token)?;
                    while let Some(top) = stack.last() {
                        let (prec_lhs, _) = precedence(top)?;
                        if prec_lhs < prec_rhs
                            || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Right)
                        {
                            break;
                        }
                        out.extend(stack.pop());
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                ArithToken::OParen => return Err(ExprError::UnmatchedParenthesis),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}
