//! cellml-text-lex - The scanner for the equation surface syntax.
//!
//! Converts an input string into a stream of [`Token`]s. The scanner is a
//! single left-to-right pass with one bit of mode state (whether a `{ ... }`
//! parameter block is currently open, which changes keyword-table lookup
//! order and which characters continue a word) and one-character lookahead
//! for multi-character operators (`==`, `<=`, `<>`, `>=`, `//`, `/*`).
//!
//! Lookahead beyond one character — deciding whether `sel` opens a
//! function call or a block statement — is the parser's job, done by
//! cloning the [`Scanner`] and restoring it if the tentative parse fails.

pub mod cursor;
pub mod keywords;
mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
