//! Word scanning: keywords, SI units, identifiers, and cmeta-id-shaped
//! identifiers.
//!
//! A word continues past its first letter/underscore on any letter, digit
//! or underscore; inside a parameter block, `.` and `-` continue it too, so
//! that SI-prefix-bearing and cmeta-id-bearing variable references can be
//! written without quoting. A word that isn't a keyword is classified by
//! stripping its underscores, dots and hyphens: if nothing is left it is
//! unrecognizable; if what's left still has a `.` or `-` it is a cmeta id,
//! otherwise a plain identifier.

use super::core::Scanner;
use crate::keywords;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    pub(crate) fn scan_word(&mut self) -> TokenKind {
        let mut word = String::new();
        loop {
            let c = self.cursor.current();
            let continues = c.is_ascii_alphanumeric()
                || c == '_'
                || (self.within_parameter_block && (c == '-' || c == '.'));
            if !continues {
                break;
            }
            word.push(self.cursor.advance());
        }

        if let Some(kind) = keywords::resolve(&word, self.within_parameter_block) {
            return kind;
        }

        let stripped: String = word.chars().filter(|c| !matches!(c, '_' | '.' | '-')).collect();
        if stripped.is_empty() {
            TokenKind::Unknown(word)
        } else if word.contains('.') || word.contains('-') {
            TokenKind::CmetaId(word)
        } else {
            TokenKind::Identifier(word)
        }
    }
}
