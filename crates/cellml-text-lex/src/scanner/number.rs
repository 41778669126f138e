//! Number literal scanning.
//!
//! A number is a run of digits, an optional fractional part (`.` followed
//! by digits), and an optional exponent: `e`/`E`, an optional sign, then a
//! run of digits. Once an exponent marker is seen it is always consumed —
//! there is no backtracking to treat a trailing `e` as the start of an
//! identifier — so `2e` with nothing after the `e` is reported invalid
//! rather than split into the number `2` and an identifier `e`. A lexeme
//! that is syntactically complete is always a `Number` token, even if its
//! magnitude overflows `f64` on parsing (e.g. 400 digits); the original
//! scanner treats that as an informational condition that never reaches
//! the parser, so it is not modelled here at all.

use super::core::Scanner;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    pub(crate) fn scan_number(&mut self) -> TokenKind {
        let mut lexeme = String::new();

        while self.cursor.current().is_ascii_digit() {
            lexeme.push(self.cursor.advance());
        }

        if self.cursor.current() == '.' && self.cursor.peek(1).is_ascii_digit() {
            lexeme.push(self.cursor.advance());
            while self.cursor.current().is_ascii_digit() {
                lexeme.push(self.cursor.advance());
            }
        }

        if matches!(self.cursor.current(), 'e' | 'E') {
            lexeme.push(self.cursor.advance());
            if matches!(self.cursor.current(), '+' | '-') {
                lexeme.push(self.cursor.advance());
            }
            if !self.cursor.current().is_ascii_digit() {
                return TokenKind::Invalid("The exponent has no digits.".to_string());
            }
            while self.cursor.current().is_ascii_digit() {
                lexeme.push(self.cursor.advance());
            }
        }

        TokenKind::Number(lexeme)
    }
}
