use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::Position;

/// Everything that can go wrong around the lexer. Scanning itself never
/// fails; malformed input only becomes an error when a caller validates
/// the token stream.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Usage: lexer <input_file>")]
    MissingArgument,
    #[error("Cannot open file {}", .path.display())]
    CannotOpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write token stream: {0}")]
    Output(#[from] io::Error),
    #[error("malformed token {lexeme:?} at {position}")]
    MalformedToken { lexeme: String, position: Position },
    #[error("found {count} malformed token(s)")]
    MalformedTokens { count: usize },
}

impl Error {
    pub fn get_position(&self) -> Option<Position> {
        match self {
            Error::MalformedToken { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::MissingArgument => "MissingArgument",
            Error::CannotOpenFile { .. } => "CannotOpenFile",
            Error::Output(_) => "Output",
            Error::MalformedToken { .. } => "MalformedToken",
            Error::MalformedTokens { .. } => "MalformedTokens",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::MissingArgument => {
                ErrorTip::Suggestion(String::from("Pass the path of a source file to tokenize"))
            }
            Error::CannotOpenFile { source, .. } => ErrorTip::Suggestion(source.to_string()),
            Error::Output(_) => ErrorTip::None,
            Error::MalformedToken { lexeme, .. } => {
                ErrorTip::Suggestion(format!("Could not classify `{}`", lexeme))
            }
            Error::MalformedTokens { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
