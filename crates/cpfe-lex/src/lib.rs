//! Lexical analysis: a twin-buffer, explicit-state DFA scanner.
//!
//! Tokenizes source text into the 56-terminal alphabet consumed by
//! `cpfe_par`, reporting over-length identifiers and unrecognized
//! character patterns as token categories rather than panics.

pub mod buffer;
pub mod dfa;
pub mod keyword;
pub mod lexer;
pub mod token;

pub use lexer::{strip_comments, Lexer};
pub use token::{Token, TokenCategory, TokenKind};
