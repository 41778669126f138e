//! Character cursor used by the scanner.
//!
//! Tracks a 1-based line and 0-based column, matching
//! [`cellml_text_util::Position`]. A newline resets the column to zero and
//! advances the line; every other character advances the column by one.

use cellml_text_util::Position;

/// A cursor over the characters of a single input string.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// The character at the cursor, or `'\0'` at the end of input.
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// The character `offset` characters ahead of the cursor, or `'\0'`
    /// past the end of input.
    pub fn peek(&self, offset: usize) -> char {
        self.source[self.position..].chars().nth(offset).unwrap_or('\0')
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consume the current character and return it, or `'\0'` at the end
    /// of input.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.source[self.position..].chars().next() else {
            return '\0';
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        c
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_line_one_column_zero() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.position(), Position::new(1, 0));
        assert_eq!(cursor.current(), 'a');
    }

    #[test]
    fn advance_moves_column_forward() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(1, 1));
        assert_eq!(cursor.current(), 'b');
    }

    #[test]
    fn newline_resets_column_and_advances_line() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(2, 0));
        assert_eq!(cursor.current(), 'b');
    }

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new("xyz");
        assert_eq!(cursor.peek(0), 'x');
        assert_eq!(cursor.peek(1), 'y');
        assert_eq!(cursor.peek(2), 'z');
        assert_eq!(cursor.peek(3), '\0');
        assert_eq!(cursor.current(), 'x');
    }

    #[test]
    fn at_end_past_final_character() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), '\0');
    }
}
