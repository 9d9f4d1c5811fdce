use crate::arith_tokenizer::{ArithToken, ArithTokenizer, LexError};

fn tokenize(src: &str) -> Vec<ArithToken> {
    ArithTokenizer::new(src.chars()).map(|t| t.unwrap()).collect()
}

#[test]
fn basic_ops() {
    let mut lx = ArithTokenizer::new("3+4*2/-(1-5)".chars());
    let expect = [
        ArithToken::Number(format!("3")),
        ArithToken::BOp('+'),
        ArithToken::Number(format!("4")),
        ArithToken::BOp('*'),
        ArithToken::Number(format!("2")),
        ArithToken::BOp('/'),
        ArithToken::UMinus,
        ArithToken::OParen,
        ArithToken::Number(format!("1")),
        ArithToken::BOp('-'),
        ArithToken::Number(format!("5")),
        ArithToken::CParen,
    ];
    for exp_token in expect.iter() {
        let token = lx.next().unwrap();
        assert_eq!(Ok(exp_token.clone()), token);
    }
    assert_eq!(lx.next(), None);
}

#[test]
fn whitespace_is_dropped() {
    let expect = tokenize("+(-20+(5-10.5))*7/12.3");
    assert_eq!(tokenize("+( -20 + (5 -10.5) ) * 7 / 12.3"), expect);
    assert_eq!(tokenize(" 1 2 . 5\t+\n3"), tokenize("12.5+3"));
    assert_eq!(expect[0], ArithToken::UPlus);
    assert_eq!(expect[2], ArithToken::UMinus);
    assert_eq!(expect[8], ArithToken::Number(format!("10.5")));
}

#[test]
fn numbers() {
    assert_eq!(tokenize("0.25"), vec![ArithToken::Number(format!("0.25"))]);
    assert_eq!(tokenize("007"), vec![ArithToken::Number(format!("007"))]);
    // a trailing dot stays with the literal
    assert_eq!(tokenize("5."), vec![ArithToken::Number(format!("5."))]);
    assert_eq!(tokenize(".5"), vec![
        ArithToken::Unknown(format!(".")),
        ArithToken::Number(format!("5")),
    ]);
    assert_eq!(tokenize("1.2.3"), vec![
        ArithToken::Number(format!("1.2")),
        ArithToken::Unknown(format!(".")),
        ArithToken::Number(format!("3")),
    ]);
}

#[test]
fn unary_ops() {
    assert_eq!(tokenize("2---3"), vec![
        ArithToken::Number(format!("2")),
        ArithToken::BOp('-'),
        ArithToken::UMinus,
        ArithToken::UMinus,
        ArithToken::Number(format!("3")),
    ]);
    assert_eq!(tokenize("(1)+-+2"), vec![
        ArithToken::OParen,
        ArithToken::Number(format!("1")),
        ArithToken::CParen,
        ArithToken::BOp('+'),
        ArithToken::UMinus,
        ArithToken::UPlus,
        ArithToken::Number(format!("2")),
    ]);
    // the char before the sign decides, so a dangling '.' makes it unary
    assert_eq!(tokenize("5.-3"), vec![
        ArithToken::Number(format!("5.")),
        ArithToken::UMinus,
        ArithToken::Number(format!("3")),
    ]);
}

#[test]
fn dangling_unary() {
    let mut lx = ArithTokenizer::new("2*-".chars());
    assert_eq!(lx.next(), Some(Ok(ArithToken::Number(format!("2")))));
    assert_eq!(lx.next(), Some(Ok(ArithToken::BOp('*'))));
    assert_eq!(lx.next(), Some(Err(LexError::DanglingUnary('-'))));
    assert_eq!(lx.next(), None);

    let mut lx = ArithTokenizer::new(" + ".chars());
    assert_eq!(lx.next(), Some(Err(LexError::DanglingUnary('+'))));

    // a trailing binary operator is left for the parser to reject
    assert_eq!(tokenize("2-"), vec![
        ArithToken::Number(format!("2")),
        ArithToken::BOp('-'),
    ]);
}

#[test]
fn has_next() {
    let mut lx = ArithTokenizer::new("  \t ".chars());
    assert!(!lx.has_next());
    assert_eq!(lx.next(), None);

    let mut lx = ArithTokenizer::new("7 ".chars());
    assert!(lx.has_next());
    assert_eq!(lx.next(), Some(Ok(ArithToken::Number(format!("7")))));
    assert!(!lx.has_next());
}

#[test]
fn unknown_chars() {
    assert_eq!(tokenize("&(x)"), vec![
        ArithToken::Unknown(format!("&")),
        ArithToken::OParen,
        ArithToken::Unknown(format!("x")),
        ArithToken::CParen,
    ]);
    assert_eq!(ArithToken::UMinus.to_string(), "u-");
    assert_eq!(ArithToken::BOp('/').to_string(), "/");
}
