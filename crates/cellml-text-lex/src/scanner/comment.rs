//! Comment scanning.
//!
//! Comments are tokens, not whitespace: the parser collects consecutive
//! single-line comments as context for the XML it is about to emit, so the
//! scanner hands them back rather than discarding them in place.
//!
//! A single-line comment runs to the end of the line (the terminator
//! itself is left for the next call to skip as whitespace). A multiline
//! comment runs until `*/`; reaching the end of input first is reported as
//! an incomplete comment, mirroring the same failure mode as an
//! unterminated string.

use super::core::Scanner;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    pub(crate) fn scan_single_line_comment(&mut self) -> TokenKind {
        let mut contents = String::new();
        while !self.cursor.is_at_end() && !matches!(self.cursor.current(), '\r' | '\n') {
            contents.push(self.cursor.advance());
        }
        TokenKind::LineComment(contents)
    }

    pub(crate) fn scan_multiline_comment(&mut self) -> TokenKind {
        let mut contents = String::new();
        loop {
            if self.cursor.is_at_end() {
                return TokenKind::Invalid("The comment is incomplete.".to_string());
            }
            if self.cursor.current() == '*' && self.cursor.peek(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return TokenKind::BlockComment(contents);
            }
            contents.push(self.cursor.advance());
        }
    }
}
