//! Compact token notation for tests.
//!
//! `PROGRAM_START IDENTIFIER(x) ASSIGN NUMBER(1) COMMAND_END PROGRAM_END`
//!
//! Kinds without a parenthesized literal get a conventional one (`;` for `COMMAND_END`,
//! the lowercased kind name for keywords). Literals cannot contain whitespace.

use tpa_core::{Token, TokenKind};

use crate::{Program, Result, TreePrinter, parse};

pub fn tokens(notation: &str) -> Vec<Token> {
    notation.split_whitespace().map(token).collect()
}

fn token(word: &str) -> Token {
    let (name, value) = match word.split_once('(') {
        Some((name, rest)) if rest.ends_with(')') => (name, Some(&rest[..rest.len() - 1])),
        _ => (word, None),
    };
    let kind = TokenKind::from_name(name).unwrap_or_else(|| panic!("unknown kind `{name}`"));
    let value = value.map_or_else(|| default_literal(kind), str::to_owned);
    Token::new(kind, value)
}

fn default_literal(kind: TokenKind) -> String {
    let literal = match kind {
        TokenKind::BlockStart => "{",
        TokenKind::BlockEnd => "}",
        TokenKind::Assign => "=",
        TokenKind::CommandEnd => ";",
        TokenKind::ArgumentSeparator => ",",
        TokenKind::LeftParen => "(",
        TokenKind::RightParen => ")",
        TokenKind::GreaterEqual => ">=",
        TokenKind::Less => "<",
        TokenKind::Equal => "==",
        TokenKind::Greater => ">",
        TokenKind::LessEqual => "<=",
        TokenKind::Sum => "+",
        TokenKind::Subtract => "-",
        TokenKind::Multiply => "*",
        TokenKind::Divide => "/",
        other => return other.as_str().to_lowercase(),
    };
    literal.to_owned()
}

pub fn parse_notation(notation: &str) -> Result<Program> {
    parse(&tokens(notation))
}

/// Parses and renders; panics on parse failure.
pub fn dump(notation: &str) -> String {
    let program = parse_notation(notation).expect("notation should parse");
    TreePrinter::new(&program.to_syntax()).dump()
}

/// Parses and returns the error message; panics on success.
pub fn dump_err(notation: &str) -> String {
    match parse_notation(notation) {
        Ok(program) => panic!("expected parse failure, got {program:?}"),
        Err(e) => e.to_string(),
    }
}
