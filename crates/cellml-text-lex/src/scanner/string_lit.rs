//! String literal scanning.
//!
//! A string is whatever lies between a pair of double quotes on the same
//! logical line; there is no escape syntax. Running into a carriage
//! return, a line feed or the end of input before the closing quote is an
//! incomplete string.

use super::core::Scanner;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    pub(crate) fn scan_string(&mut self) -> TokenKind {
        self.cursor.advance();

        let mut contents = String::new();
        loop {
            if self.cursor.is_at_end() {
                return TokenKind::Invalid("The string is incomplete.".to_string());
            }
            match self.cursor.current() {
                '"' => {
                    self.cursor.advance();
                    return TokenKind::StringLiteral(contents);
                }
                '\r' | '\n' => return TokenKind::Invalid("The string is incomplete.".to_string()),
                _ => contents.push(self.cursor.advance()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Scanner;
    use crate::token::TokenKind;

    #[test]
    fn simple_string() {
        assert_eq!(
            Scanner::new("\"hello\"").next_token().kind,
            TokenKind::StringLiteral("hello".to_string())
        );
    }

    #[test]
    fn empty_string() {
        assert_eq!(
            Scanner::new("\"\"").next_token().kind,
            TokenKind::StringLiteral(String::new())
        );
    }

    #[test]
    fn unterminated_string_at_eof() {
        assert_eq!(
            Scanner::new("\"hello").next_token().kind,
            TokenKind::Invalid("The string is incomplete.".to_string())
        );
    }

    #[test]
    fn unterminated_string_at_newline() {
        assert_eq!(
            Scanner::new("\"hello\nworld\"").next_token().kind,
            TokenKind::Invalid("The string is incomplete.".to_string())
        );
    }
}
