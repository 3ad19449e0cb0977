//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of positioned tokens. It handles:
//!
//! - Recognition of keywords, identifiers, numbers, strings and operators
//! - Line (`// ...`) and block (`{ ... }`) comments, which are skipped
//! - Recovery from malformed input through `BAD` tokens
//! - Line and column tracking for every token

pub mod lexer;
pub mod tokens;
