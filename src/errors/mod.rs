//! Error types and error reporting.
//!
//! The lexer recovers from malformed input on its own, so these errors
//! cover the surroundings:
//!
//! - Command-line and file access failures
//! - Output failures while rendering the token stream
//! - `BAD` tokens rejected by an explicit validation pass

pub mod errors;

#[cfg(test)]
mod tests;
