use tracing::{debug, trace};

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Hand-written scanner over an owned byte buffer.
///
/// Classification is ASCII-only and every byte advances the column by one,
/// so non-ASCII text is counted the way it is stored.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<u8>,
    pos: usize,
    line: u32,
    column: u32,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<Vec<u8>>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            column: 0,
            finished: false,
        }
    }

    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn current(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// The byte after `current`.
    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        let Some(byte) = self.current() else {
            return;
        };

        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the next token. Whitespace and comments before it are
    /// consumed. Once the buffer is exhausted every call returns a fresh
    /// EOF token at the final position.
    pub fn next_token(&mut self) -> Token {
        loop {
            let start = self.current_position();

            let Some(byte) = self.current() else {
                return MK_TOKEN!(TokenKind::EOF, "", start);
            };

            match byte {
                b if is_whitespace(b) => self.advance_while(is_whitespace),
                b if b.is_ascii_digit() => return self.number(),
                b if b.is_ascii_alphabetic() || b == b'_' => return self.identifier(),
                b'\'' => return self.string_literal(),
                b'/' if self.peek() == Some(b'/') => self.skip_line_comment(),
                b'{' => {
                    if !self.skip_block_comment() {
                        debug!(%start, "unterminated block comment");
                        return MK_TOKEN!(TokenKind::Bad, "{", start);
                    }
                }
                _ => return self.operator_or_punctuation(),
            }
        }
    }

    /// Drains the lexer, EOF token included.
    pub fn tokenize_all(&mut self) -> Vec<Token> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::EOF;
            tokens.push(token);

            if done {
                break;
            }
        }

        debug!(count = tokens.len(), "tokenized source");
        tokens
    }

    fn number(&mut self) -> Token {
        let start = self.current_position();
        let begin = self.pos;

        self.advance_while(|b| b.is_ascii_digit());

        let kind = if self.current() == Some(b'.') {
            self.advance();
            self.advance_while(|b| b.is_ascii_digit());
            TokenKind::Float
        } else {
            TokenKind::Integer
        };

        MK_TOKEN!(kind, &self.source[begin..self.pos], start)
    }

    fn identifier(&mut self) -> Token {
        let start = self.current_position();
        let begin = self.pos;

        self.advance_while(|b| b.is_ascii_alphanumeric() || b == b'_');

        let value = &self.source[begin..self.pos];
        let kind = std::str::from_utf8(value)
            .ok()
            .and_then(TokenKind::from_keyword)
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, value, start)
    }

    fn string_literal(&mut self) -> Token {
        let start = self.current_position();

        self.advance();
        let begin = self.pos;
        self.advance_while(|b| b != b'\'' && b != b'\n');
        let content = &self.source[begin..self.pos];

        if self.current() == Some(b'\'') {
            let token = MK_TOKEN!(TokenKind::String, content, start);
            self.advance();
            return token;
        }

        debug!(%start, "unterminated string literal");
        MK_TOKEN!(TokenKind::Bad, content, start)
    }

    /// Consumes `//` through the end of the line, newline included.
    fn skip_line_comment(&mut self) {
        let start = self.current_position();

        self.advance_while(|b| b != b'\n');
        self.advance();

        trace!(%start, "skipped line comment");
    }

    /// Consumes `{ ... }`. Returns false when the input ran out before the
    /// closing brace, in which case the rest of the buffer is gone.
    fn skip_block_comment(&mut self) -> bool {
        let start = self.current_position();

        self.advance();
        self.advance_while(|b| b != b'}');

        if self.at_eof() {
            return false;
        }

        self.advance();
        trace!(%start, "skipped block comment");
        true
    }

    fn operator_or_punctuation(&mut self) -> Token {
        let start = self.current_position();
        let begin = self.pos;

        if self.peek().is_some() {
            let pair = &self.source[begin..begin + 2];

            if let Some(kind) = lookup_operator(pair) {
                self.advance();
                self.advance();
                return MK_TOKEN!(kind, &self.source[begin..self.pos], start);
            }
        }

        self.advance();
        let single = &self.source[begin..self.pos];

        match lookup_operator(single) {
            Some(kind) => MK_TOKEN!(kind, single, start),
            None => {
                debug!(%start, byte = single[0], "unrecognised character");
                MK_TOKEN!(TokenKind::Bad, single, start)
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to and including EOF, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.kind == TokenKind::EOF;
        Some(token)
    }
}

fn lookup_operator(spelling: &[u8]) -> Option<TokenKind> {
    std::str::from_utf8(spelling)
        .ok()
        .and_then(TokenKind::from_operator)
}

/// Matches C `isspace`: space, tab, newline, carriage return, vertical tab
/// and form feed.
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

pub fn tokenize(source: impl Into<Vec<u8>>) -> Vec<Token> {
    Lexer::new(source).tokenize_all()
}
