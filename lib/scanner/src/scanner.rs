use std::fmt::Display;

use itertools::Itertools;

mod token;
pub use token::{Literal, Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("[line {line}] Error: Unexpected character '{character}'.")]
    UnexpectedCharacter { character: char, line: usize },
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },
}

#[derive(thiserror::Error, Debug, Default, PartialEq)]
pub struct Errors(pub Vec<Error>);

impl Errors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|e| e.to_string()).join("\n"))
    }
}

pub struct Scanner {
    start: usize,
    current: usize,
    line: usize,
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Errors,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            start: 0,
            current: 0,
            line: 1,
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Errors::default(),
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None)
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        self.tokens.push(Token {
            kind,
            lexeme: self.source[self.start..self.current].iter().collect(),
            literal,
            line: self.line,
        })
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.source.get(self.current);
        self.current += 1;
        c.copied()
    }

    fn consume_if_matches(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(c) if c == expected => {
                self.consume();
                true
            }
            _ => false,
        }
    }

    /// Scans the whole source in one pass. Errors never abort the scan, they
    /// accumulate while scanning resumes at the next character, so the token
    /// list (always terminated by exactly one `Eof`) is returned alongside
    /// every diagnostic that was collected on the way.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Errors) {
        while let Some(c) = self.consume() {
            self.start = self.current - 1;
            match c {
                '(' => self.add_token(TokenKind::LeftParen),
                ')' => self.add_token(TokenKind::RightParen),
                '{' => self.add_token(TokenKind::LeftBrace),
                '}' => self.add_token(TokenKind::RightBrace),
                ',' => self.add_token(TokenKind::Comma),
                '.' => self.add_token(TokenKind::Dot),
                '-' => self.add_token(TokenKind::Minus),
                '+' => self.add_token(TokenKind::Plus),
                ';' => self.add_token(TokenKind::Semicolon),
                '*' => self.add_token(TokenKind::Star),

                '!' => {
                    if self.consume_if_matches('=') {
                        self.add_token(TokenKind::BangEqual)
                    } else {
                        self.add_token(TokenKind::Bang)
                    }
                }

                '=' => {
                    if self.consume_if_matches('=') {
                        self.add_token(TokenKind::EqualEqual)
                    } else {
                        self.add_token(TokenKind::Equal)
                    }
                }

                '<' => {
                    if self.consume_if_matches('=') {
                        self.add_token(TokenKind::LessEqual)
                    } else {
                        self.add_token(TokenKind::Less)
                    }
                }

                '>' => {
                    if self.consume_if_matches('=') {
                        self.add_token(TokenKind::GreaterEqual)
                    } else {
                        self.add_token(TokenKind::Greater)
                    }
                }

                '/' => {
                    if self.consume_if_matches('/') {
                        // Comment, runs to end of line. The newline itself is
                        // left for the main loop so line accounting stays in
                        // one place.
                        while self.peek().is_some_and(|c| c != '\n') {
                            self.consume();
                        }
                    } else {
                        self.add_token(TokenKind::Slash)
                    }
                }

                '"' => self.string(),

                d if d.is_ascii_digit() => self.number(),

                a if a.is_ascii_alphabetic() || a == '_' => self.identifier(),

                ' ' | '\r' | '\t' => (),

                '\n' => self.line += 1,

                c => self
                    .errors
                    .0
                    .push(Error::UnexpectedCharacter { character: c, line: self.line }),
            }
        }
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.line,
        });

        log::debug!(
            "scanned {} tokens, {} errors",
            self.tokens.len(),
            self.errors.0.len()
        );
        (self.tokens, self.errors)
    }

    fn string(&mut self) {
        // Strings may span lines; report an unterminated one against the
        // line where it opened.
        let opening_line = self.line;
        loop {
            match self.consume() {
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => (),
                None => {
                    // The lexeme is abandoned, no token for it.
                    self.errors.0.push(Error::UnterminatedString { line: opening_line });
                    return;
                }
            }
        }
        let value = String::from_iter(&self.source[self.start + 1..self.current - 1]);
        // A multi-line string belongs to the line where it opened, not where
        // it closed.
        self.tokens.push(Token {
            kind: TokenKind::Str,
            lexeme: self.source[self.start..self.current].iter().collect(),
            literal: Some(Literal::Str(value)),
            line: opening_line,
        });
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.consume();
        }

        // A fractional part only if the dot is followed by a digit, so
        // `123.` scans as a number and then a dot.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.consume();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.consume();
            }
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        // Digits with at most one interior dot always parse.
        let value = lexeme.parse().unwrap();
        self.add_literal_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.consume();
        }
        self.add_token(TokenKind::Identifier);
    }
}
