//! Top-level entry point: turns a CellML Text equation block into either its
//! Content-MathML translation or a listing of the diagnostics that stopped
//! translation.
//!
//! This mirrors the reference implementation's `process()`: parse the whole
//! input, and depending on whether that succeeded, serialize the XML tree or
//! format the message list. Neither path is fallible from the caller's point
//! of view — a syntax error is reported in the returned string, not via
//! `Result`.

pub mod error;

use cellml_text_parse::Parser;
use cellml_text_util::diagnostic::format_messages;
use cellml_text_xml::NodeHandle;

/// Translates `text` (one or more `lhs = rhs;` statements) into a
/// Content-MathML document.
///
/// When `domain_aware` is set, every number and derivative order must carry
/// a `{unit}` block and the resulting `cn`/`degree` elements carry a
/// `cellml:units` attribute; when unset, unit blocks are rejected and the
/// attribute is never emitted.
///
/// On a parse error, returns a human-readable listing of every diagnostic
/// raised instead of a MathML document.
///
/// # Examples
///
/// ```
/// let xml = cellml_text::process("a = b;", true);
/// assert!(xml.contains("<apply>"));
/// ```
pub fn process(text: &str, domain_aware: bool) -> String {
    let mut parser = Parser::new(text, domain_aware);

    if parser.parse_expressions(true) {
        parser.document().to_xml_string()
    } else {
        format_messages(parser.messages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_parse_returns_mathml() {
        let xml = process("a = b;", true);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<eq />"));
    }

    #[test]
    fn failed_parse_returns_message_listing() {
        let report = process("a = b", true);
        assert!(report.starts_with("Messages from parser ("));
    }
}
