#![deny(warnings)]

use std::fmt;
use std::iter::Filter;
use thiserror::Error;

use crate::scanner::Scanner;


#[derive(Clone, PartialEq, Debug)]
pub enum ArithToken {
    Unknown(String),
    Number(String),
    BOp(char),
    UPlus, UMinus,
    OParen, CParen,
}

impl fmt::Display for ArithToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithToken::Unknown(lexeme) => write!(f, "{}", lexeme),
            ArithToken::Number(num) => write!(f, "{}", num),
            ArithToken::BOp(op) => write!(f, "{}", op),
            ArithToken::UPlus => write!(f, "u+"),
            ArithToken::UMinus => write!(f, "u-"),
            ArithToken::OParen => write!(f, "("),
            ArithToken::CParen => write!(f, ")"),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum LexError {
    #[error("unary '{0}' is missing its operand")]
    DanglingUnary(char),
}

fn not_whitespace(c: &char) -> bool { !c.is_whitespace() }

type Compact<I> = Filter<I, fn(&char) -> bool>;

/// Splits an arithmetic expression into tokens. Whitespace is dropped
/// before scanning so it never separates or breaks a token.
pub struct ArithTokenizer<I: Iterator<Item=char>> {
    src: Scanner<Compact<I>>,
    prev: Option<char>, // last character consumed
}

impl<I: Iterator<Item=char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        let compact = source.filter(not_whitespace as fn(&char) -> bool);
        ArithTokenizer{src: Scanner::new(compact), prev: None}
    }

    pub fn has_next(&mut self) -> bool {
        self.src.peek().is_some()
    }

    // a sign is unary unless it follows an operand: a digit or a ')'
    fn makes_unary(prev: Option<char>) -> bool {
        match prev {
            None => true,
            Some(')') => false,
            Some(c) => !c.is_ascii_digit(),
        }
    }

    fn scan_number(&mut self) -> String {
        self.src.skip_all_if(char::is_ascii_digit);
        if self.src.accept(&'.').is_some() {
            self.src.skip_all_if(char::is_ascii_digit);
        }
        self.src.extract_string()
    }

    fn get_token(&mut self) -> Option<Result<ArithToken, LexError>> {
        let first = self.src.peek()?;
        if first.is_ascii_digit() {
            let num = self.scan_number();
            self.prev = num.chars().last();
            return Some(Ok(ArithToken::Number(num)));
        }
        self.src.next();
        self.src.ignore();
        let token = match first {
            '+' | '-' if Self::makes_unary(self.prev) => {
                if !self.has_next() {
                    return Some(Err(LexError::DanglingUnary(first)));
                }
                if first == '+' { ArithToken::UPlus } else { ArithToken::UMinus }
            }
            '+' | '-' | '*' | '/' => ArithToken::BOp(first),
            '(' => ArithToken::OParen,
            ')' => ArithToken::CParen,
            other => ArithToken::Unknown(other.to_string()),
        };
        self.prev = Some(first);
        Some(Ok(token))
    }
}

impl<I: Iterator<Item=char>> Iterator for ArithTokenizer<I> {
    type Item = Result<ArithToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}
