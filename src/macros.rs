//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_POSITION!` - Creates a Position from a line and column

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - A `&str` or `&[u8]` holding the token's source bytes
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42", start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: ::std::vec::Vec::from($lexeme),
            position: $position,
        }
    };
}

/// Creates a Position instance.
///
/// ```ignore
/// assert_eq!(MK_POSITION!(1, 0), Position::start());
/// ```
#[macro_export]
macro_rules! MK_POSITION {
    ($line:expr, $column:expr) => {
        $crate::Position {
            line: $line,
            column: $column,
        }
    };
}
