//! Comment absorption: every call that expects a token first drains any
//! comments sitting in front of it, folding consecutive single-line
//! comments into one XML `Comment` node and discarding multiline comments
//! outright.

use cellml_text_lex::TokenKind;
use cellml_text_xml::{create_node, NodeHandle, NodeKind, NodeRef};

use crate::Parser;

/// XML comments may not contain `--`; substitute it with its numeric
/// character reference before the text ever reaches a `Comment` node.
fn escape_comment(text: &str) -> String {
    text.replace("--", "&#45;&#45;")
}

impl<'a> Parser<'a> {
    /// Consumes single-line and multiline comment tokens until a non-comment
    /// token is reached, leaving that token current. Consecutive single-line
    /// comments on strictly consecutive source lines are joined with `\n`
    /// into one `Comment` node appended to `target`; a line-number gap
    /// flushes the run so far and starts a new one. Multiline comments never
    /// join a run and never flush one — they are silently skipped.
    pub(crate) fn absorb_comments(&mut self, target: Option<&NodeRef>) {
        let mut run: Option<(u32, String)> = None;

        loop {
            match &self.current.kind {
                TokenKind::LineComment(text) => {
                    let line = self.current.position.line;
                    let text = escape_comment(text);

                    run = Some(match run.take() {
                        Some((prev_line, mut joined)) if line == prev_line + 1 => {
                            joined.push('\n');
                            joined.push_str(&text);
                            (line, joined)
                        }
                        Some((_, joined)) => {
                            self.flush_comment_run(target, joined);
                            (line, text)
                        }
                        None => (line, text),
                    });
                }
                TokenKind::BlockComment(_) => {
                    // Ignored unconditionally: neither joins nor flushes a
                    // pending single-line comment run.
                }
                _ => {
                    if let Some((_, joined)) = run {
                        self.flush_comment_run(target, joined);
                    }
                    return;
                }
            }

            self.advance();
        }
    }

    fn flush_comment_run(&self, target: Option<&NodeRef>, text: String) {
        let Some(target) = target else { return };
        let text = if text.is_empty() { " ".to_string() } else { text };
        target.add_child(create_node(NodeKind::Comment, text, None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_xml(text: &str) -> String {
        let mut parser = Parser::new(text, true);
        parser.parse_expressions(true);
        parser.document().to_xml_string()
    }

    #[test]
    fn consecutive_line_comments_join_into_one_node() {
        let xml = document_xml("// one\n// two\na = b;\n");
        assert!(xml.contains("one\n    two") || xml.contains("one\ntwo"));
    }

    #[test]
    fn a_line_gap_starts_a_new_comment_run() {
        let xml = document_xml("// one\n\n// two\na = b;\n");
        assert_eq!(xml.matches("<!--").count(), 2);
    }

    #[test]
    fn double_hyphen_is_escaped() {
        let xml = document_xml("// a--b\na = b;\n");
        assert!(xml.contains("&#45;&#45;"));
        assert!(!xml.contains("a--b"));
    }

    #[test]
    fn multiline_comments_are_dropped_silently() {
        let xml = document_xml("/* gone */\na = b;\n");
        assert!(!xml.contains("<!--"));
    }
}
