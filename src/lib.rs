#![allow(clippy::module_inception)]

use std::{fmt::Display, io::Write};

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::tokens::{Token, TokenKind},
};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Location of the first character of a token. Lines start at 1, columns
/// at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        crate::MK_POSITION!(1, 0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// Writes one rendered token per line. Lexemes are written as raw bytes.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> std::io::Result<()> {
    for token in tokens {
        write!(out, "{} {} \"", token.kind, token.position)?;
        out.write_all(&token.lexeme)?;
        out.write_all(b"\"\n")?;
    }

    out.flush()
}

pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

/// Fails on the first `BAD` token.
pub fn validate(tokens: &[Token]) -> Result<(), Error> {
    match tokens.iter().find(|token| token.kind == TokenKind::Bad) {
        Some(token) => Err(Error::MalformedToken {
            lexeme: token.lexeme_str().into_owned(),
            position: token.position,
        }),
        None => Ok(()),
    }
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;

    source
        .split('\n')
        .nth(index)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

pub fn render_diagnostic(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: MalformedToken (Could not classify `@`)
        -> prog.pas
          |
        3 | x := @;
          | -----^
    */

    let mut rendered = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    rendered.push_str(&format!("-> {}\n", file));

    let Some(position) = error.get_position() else {
        return rendered;
    };
    let Some(line_text) = get_line(source, position.line) else {
        return rendered;
    };

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$}\n", "|"));
    rendered.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_diagnostic(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(|c: char| c == ' ' || c == '\t');
    (trimmed, string.len() - trimmed.len())
}
