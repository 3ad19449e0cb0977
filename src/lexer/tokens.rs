use lazy_static::lazy_static;
use std::{borrow::Cow, collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("ARRAY", TokenKind::Array);
        map.insert("BEGIN", TokenKind::Begin);
        map.insert("ELSE", TokenKind::Else);
        map.insert("END", TokenKind::End);
        map.insert("IF", TokenKind::If);
        map.insert("OF", TokenKind::Of);
        map.insert("OR", TokenKind::Or);
        map.insert("PROGRAM", TokenKind::Program);
        map.insert("PROCEDURE", TokenKind::Procedure);
        map.insert("THEN", TokenKind::Then);
        map.insert("TYPE", TokenKind::Type);
        map.insert("VAR", TokenKind::Var);
        map
    };

    /// Every operator and punctuation spelling. Two-character entries are
    /// tried first with one character of lookahead.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("*", TokenKind::Multiplication);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("/", TokenKind::Divide);
        map.insert(";", TokenKind::Semicolon);
        map.insert(",", TokenKind::Comma);
        map.insert("(", TokenKind::LeftParen);
        map.insert(")", TokenKind::RightParen);
        map.insert("[", TokenKind::LeftBracket);
        map.insert("]", TokenKind::RightBracket);
        map.insert("=", TokenKind::Eq);
        map.insert(">", TokenKind::Greater);
        map.insert("<", TokenKind::Less);
        map.insert(":", TokenKind::Colon);
        map.insert(".", TokenKind::Dot);
        map.insert(">=", TokenKind::GreaterEq);
        map.insert("<=", TokenKind::LessEq);
        map.insert("<>", TokenKind::NotEq);
        map.insert(":=", TokenKind::Assign);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Array,
    Begin,
    Else,
    End,
    If,
    Of,
    Or,
    Program,
    Procedure,
    Then,
    Type,
    Var,

    Multiplication,
    Plus,
    Minus,
    Divide,

    Semicolon,
    Comma,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Colon,
    Dot,

    Eq,
    Greater,
    Less,
    LessEq,
    GreaterEq,
    NotEq,

    Assign, // :=

    Identifier,
    String,
    Integer,
    Float,

    // Comments are skipped by the lexer and never emitted.
    LineComment,
    BlockComment,

    Bad,
    EOF,
}

impl TokenKind {
    /// Stable uppercase name used by the token stream rendering.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Array => "ARRAY",
            TokenKind::Begin => "BEGIN",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Of => "OF",
            TokenKind::Or => "OR",
            TokenKind::Program => "PROGRAM",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Then => "THEN",
            TokenKind::Type => "TYPE",
            TokenKind::Var => "VAR",
            TokenKind::Multiplication => "MULTIPLICATION",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Eq => "EQ",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::LessEq => "LESS_EQ",
            TokenKind::GreaterEq => "GREATER_EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::Bad => "BAD",
            TokenKind::EOF => "EOF",
        }
    }

    pub fn from_keyword(spelling: &str) -> Option<TokenKind> {
        RESERVED_LOOKUP.get(spelling).copied()
    }

    pub fn from_operator(spelling: &str) -> Option<TokenKind> {
        OPERATOR_LOOKUP.get(spelling).copied()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source bytes. Not necessarily UTF-8: a BAD token may hold a
    /// single byte of a multi-byte sequence.
    pub lexeme: Vec<u8>,
    pub position: Position,
}

impl Token {
    pub fn lexeme_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.lexeme)
    }
}

/// Lossy for non-UTF-8 lexemes. `write_tokens` keeps the raw bytes.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} \"{}\"", self.kind, self.position, self.lexeme_str())
    }
}
