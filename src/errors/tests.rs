//! Unit tests for error handling.

use std::{io, path::PathBuf};

use pretty_assertions::assert_eq;

use crate::errors::errors::{Error, ErrorTip};
use crate::Position;

#[test]
fn test_missing_argument_message() {
    let error = Error::MissingArgument;

    assert_eq!(error.get_error_name(), "MissingArgument");
    assert_eq!(error.to_string(), "Usage: lexer <input_file>");
    assert!(error.get_position().is_none());
}

#[test]
fn test_cannot_open_file() {
    let error = Error::CannotOpenFile {
        path: PathBuf::from("missing.pas"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };

    assert_eq!(error.get_error_name(), "CannotOpenFile");
    assert_eq!(error.to_string(), "Cannot open file missing.pas");
    assert_eq!(error.get_tip().to_string(), "No such file or directory");
}

#[test]
fn test_output_error_from_io() {
    let error: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();

    assert_eq!(error.get_error_name(), "Output");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_malformed_token_position() {
    let error = Error::MalformedToken {
        lexeme: "@".to_string(),
        position: Position::new(4, 2),
    };

    assert_eq!(error.get_position(), Some(Position::new(4, 2)));
    assert_eq!(error.to_string(), "malformed token \"@\" at (4, 2)");
}

#[test]
fn test_malformed_token_tip() {
    let error = Error::MalformedToken {
        lexeme: "{".to_string(),
        position: Position::start(),
    };

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Could not classify `{`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_malformed_tokens_count() {
    let error = Error::MalformedTokens { count: 3 };

    assert_eq!(error.get_error_name(), "MalformedTokens");
    assert_eq!(error.to_string(), "found 3 malformed token(s)");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
