mod scanner;
mod arith_tokenizer;

pub use scanner::Scanner;
pub use arith_tokenizer::{ArithToken, ArithTokenizer, LexError};

#[cfg(test)]
mod arith_tokenizer_test;
