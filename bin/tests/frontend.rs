//! End-to-end checks of the front-end pipeline: source text through the
//! scanner, scanned tokens into a hand-built tree, tree through both
//! printers.

use ast::{AstPrinter, Expr, RpnPrinter};
use pretty_assertions::assert_eq;
use scanner::{Literal, Scanner, Token, TokenKind};

fn number_value(token: &Token) -> f64 {
    match token.literal {
        Some(Literal::Number(n)) => n,
        _ => panic!("expected a number token, got {token}"),
    }
}

#[test]
fn scanned_tokens_drive_the_printers() {
    let (tokens, errors) = Scanner::new("-123 * (45.67)").scan_tokens();
    assert!(errors.is_empty());
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );

    // Built by hand the way a parser would, reusing the scanned operator
    // tokens.
    let expr = Expr::binary(
        Expr::unary(tokens[0].clone(), Expr::literal(number_value(&tokens[1]))),
        tokens[2].clone(),
        Expr::grouping(Expr::literal(number_value(&tokens[4]))),
    );

    assert_eq!(AstPrinter.print(&expr), "(* (- 123) (group 45.67))");
    assert_eq!(RpnPrinter.print(&expr), "123 - 45.67 group *");
}

#[test]
fn diagnostics_accumulate_without_stopping_the_scan() {
    let (tokens, errors) = Scanner::new("1 @ 2 # \"open").scan_tokens();

    assert_eq!(errors.0.len(), 3);
    assert_eq!(
        errors.to_string(),
        "[line 1] Error: Unexpected character '@'.\n\
         [line 1] Error: Unexpected character '#'.\n\
         [line 1] Error: Unterminated string."
    );

    // The valid tokens around the errors still come through, EOF included.
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
}
