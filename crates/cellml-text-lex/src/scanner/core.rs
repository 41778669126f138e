//! The main scanner struct, its token dispatch, and parameter-block state.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scans an input string into a stream of [`Token`]s, one call to
/// [`Scanner::next_token`] at a time.
///
/// A `Scanner` is cheaply [`Clone`]able: the parser takes a full value-copy
/// snapshot before trying a tentative parse (e.g. to decide whether `sel`
/// is being called as a function or opening a block) and restores it by
/// simply overwriting `self` with the clone if the tentative parse fails.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) within_parameter_block: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            cursor: Cursor::new(text),
            within_parameter_block: false,
        }
    }

    /// Whether a `{` parameter block is currently open.
    pub fn within_parameter_block(&self) -> bool {
        self.within_parameter_block
    }

    /// Scan and consume the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.cursor.position();
        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Eof, position);
        }

        let c = self.cursor.current();
        let kind = match c {
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_word(),
            c if c.is_ascii_digit() => self.scan_number(),
            '.' if self.cursor.peek(1).is_ascii_digit() => self.scan_number(),
            '"' => self.scan_string(),
            '=' => {
                self.cursor.advance();
                if self.cursor.current() == '=' {
                    self.cursor.advance();
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }
            '<' => {
                self.cursor.advance();
                match self.cursor.current() {
                    '=' => {
                        self.cursor.advance();
                        TokenKind::Leq
                    }
                    '>' => {
                        self.cursor.advance();
                        TokenKind::Neq
                    }
                    _ => TokenKind::Lt,
                }
            }
            '>' => {
                self.cursor.advance();
                if self.cursor.current() == '=' {
                    self.cursor.advance();
                    TokenKind::Geq
                } else {
                    TokenKind::Gt
                }
            }
            '/' => {
                self.cursor.advance();
                match self.cursor.current() {
                    '/' => {
                        self.cursor.advance();
                        self.scan_single_line_comment()
                    }
                    '*' => {
                        self.cursor.advance();
                        self.scan_multiline_comment()
                    }
                    _ => TokenKind::Divide,
                }
            }
            '{' => {
                self.cursor.advance();
                self.within_parameter_block = true;
                TokenKind::OpeningCurlyBracket
            }
            '}' => {
                self.cursor.advance();
                self.within_parameter_block = false;
                TokenKind::ClosingCurlyBracket
            }
            '\'' => {
                self.cursor.advance();
                TokenKind::Quote
            }
            ',' => {
                self.cursor.advance();
                TokenKind::Comma
            }
            '+' => {
                self.cursor.advance();
                TokenKind::Plus
            }
            '-' => {
                self.cursor.advance();
                TokenKind::Minus
            }
            '*' => {
                self.cursor.advance();
                TokenKind::Times
            }
            ':' => {
                self.cursor.advance();
                TokenKind::Colon
            }
            ';' => {
                self.cursor.advance();
                TokenKind::SemiColon
            }
            '(' => {
                self.cursor.advance();
                TokenKind::OpeningBracket
            }
            ')' => {
                self.cursor.advance();
                TokenKind::ClosingBracket
            }
            other => {
                self.cursor.advance();
                TokenKind::Unknown(other.to_string())
            }
        };

        Token::new(kind, position)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current(), ' ' | '\t' | '\r' | '\n') {
            self.cursor.advance();
        }
    }
}
