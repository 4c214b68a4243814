use std::fmt::{self, Display};

use crate::loc::Loc;

/// A lexical token, grouping a `TokenKind` with the location it started at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub loc: Loc,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Ident(String),
    Str(String),
    Float(f64),
    Colon,
    Equal,
    Arrow,
    Backslash,
    Dot,
    LParen,
    RParen,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(v) => write!(f, "ID <{v}>"),
            TokenKind::Str(v) => write!(f, "STRING <\"{v}\">"),
            TokenKind::Float(v) => write!(f, "FLOAT <{v}>"),
            TokenKind::Colon => write!(f, "COLON"),
            TokenKind::Equal => write!(f, "EQUAL"),
            TokenKind::Arrow => write!(f, "ARROW"),
            TokenKind::Backslash => write!(f, "BACKSLASH"),
            TokenKind::Dot => write!(f, "DOT"),
            TokenKind::LParen => write!(f, "LPAREN"),
            TokenKind::RParen => write!(f, "RPAREN"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
