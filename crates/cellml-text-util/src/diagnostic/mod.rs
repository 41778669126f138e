//! Parser diagnostics: the two-severity message model described by the
//! translator this workspace implements.
//!
//! Unlike a general compiler diagnostic type, a [`Message`] here carries no
//! error code, no notes, no help text and no source snippet — the system it
//! mirrors has never needed any of those, and adding them would be pure
//! invention.

use crate::Position;
use std::fmt;

/// Diagnostic severity.
///
/// # Examples
///
/// ```
/// use cellml_text_util::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Fatal: the parser stops at the first one.
    Error,
    /// Accumulated: parsing continues.
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single parser message, carrying the position of the offending token.
///
/// # Examples
///
/// ```
/// use cellml_text_util::{Level, Message, Position};
///
/// let msg = Message::error(Position::new(1, 4), "'=' is expected, but ';' was found instead.");
/// assert_eq!(msg.level, Level::Error);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub position: Position,
    pub text: String,
}

impl Message {
    pub fn new(level: Level, position: Position, text: impl Into<String>) -> Self {
        Self {
            level,
            position,
            text: text.into(),
        }
    }

    pub fn error(position: Position, text: impl Into<String>) -> Self {
        Self::new(Level::Error, position, text)
    }

    pub fn warning(position: Position, text: impl Into<String>) -> Self {
        Self::new(Level::Warning, position, text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.position, self.text)
    }
}

/// Render a list of messages the way the original `printMessages` helper
/// does: a header with the count, then one `[line, col]: text` line each.
///
/// # Examples
///
/// ```
/// use cellml_text_util::{Message, Position};
/// use cellml_text_util::diagnostic::format_messages;
///
/// let messages = vec![Message::error(Position::new(1, 0), "bad token")];
/// let report = format_messages(&messages);
/// assert!(report.starts_with("Messages from parser (1)\n"));
/// ```
pub fn format_messages(messages: &[Message]) -> String {
    let mut out = format!("Messages from parser ({})\n", messages.len());
    for message in messages {
        out.push_str(&message.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warning.to_string(), "warning");
    }

    #[test]
    fn message_display_matches_original_format() {
        let message = Message::error(Position::new(2, 5), "An identifier is expected, but ';' was found instead.");
        assert_eq!(
            message.to_string(),
            "[2, 5]: An identifier is expected, but ';' was found instead."
        );
    }

    #[test]
    fn format_messages_lists_header_and_each_message() {
        let messages = vec![
            Message::error(Position::new(1, 0), "first"),
            Message::warning(Position::new(2, 3), "second"),
        ];
        let report = format_messages(&messages);
        assert_eq!(
            report,
            "Messages from parser (2)\n[1, 0]: first\n[2, 3]: second\n"
        );
    }

    #[test]
    fn format_messages_empty_list() {
        assert_eq!(format_messages(&[]), "Messages from parser (0)\n");
    }
}
