//! Recursive-descent parser turning a CellML Text equation block into a
//! Content-MathML tree.
//!
//! [`Parser`] wraps a [`cellml_text_lex::Scanner`] with one token of
//! lookahead (`current`) and drives it through the statement grammar
//! (`lhs = rhs;`), the nine layers of `expr` operator precedence, and the
//! `sel`/`sel...endsel` piecewise grammar in `piecewise`. `elements` builds
//! the MathML fragments each production emits; none of that file touches the
//! scanner or the message list, which keeps the construction logic testable
//! on its own.

mod comments;
mod elements;
mod expr;
mod piecewise;
mod sigil;

use std::rc::Rc;

use cellml_text_lex::{Scanner, Token, TokenKind};
use cellml_text_util::Message;
use cellml_text_xml::{create_node, NodeHandle, NodeKind, NodeRef};

use sigil::substitute_specials;

const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

/// What kind of statement the last partial parse landed on.
///
/// Full parsing (see [`Parser::parse_expressions`]) never looks at this: it
/// is only meaningful after a partial parse, used by a caller that is
/// classifying one line of a `sel...endsel` block at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Statement {
    #[default]
    Unknown,
    Normal,
    PiecewiseSel,
    PiecewiseCase,
    PiecewiseOtherwise,
    PiecewiseEndSel,
}

/// A CellML Text parser bound to one source string.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    domain_aware: bool,
    messages: Vec<Message>,
    document: NodeRef,
    math_element: NodeRef,
    statement: Statement,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token of `text`.
    ///
    /// `domain_aware` controls whether numbers and derivative orders carry
    /// a `cellml:units` attribute (and whether their `{...}` unit block is
    /// required at all); see [`crate::elements`].
    pub fn new(text: &'a str, domain_aware: bool) -> Self {
        let mut scanner = Scanner::new(text);
        let current = scanner.next_token();

        let document = create_node(NodeKind::Root, "", None);
        document.add_child(create_node(
            NodeKind::Declaration,
            "xml version=\"1.0\" encoding=\"UTF-8\"",
            None,
        ));

        let math_element = create_node(NodeKind::Element, "math", None);
        math_element.declare_namespace("", MATHML_NAMESPACE);
        document.add_child(Rc::clone(&math_element));

        Self {
            scanner,
            current,
            domain_aware,
            messages: Vec::new(),
            document,
            math_element,
            statement: Statement::default(),
        }
    }

    /// The document built so far, rooted above the `math` element.
    pub fn document(&self) -> NodeRef {
        Rc::clone(&self.document)
    }

    /// Diagnostics accumulated during parsing, in the order they were
    /// raised.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The statement kind a partial parse (`full_parsing = false`) landed
    /// on.
    pub fn statement(&self) -> Statement {
        self.statement
    }

    pub fn domain_aware(&self) -> bool {
        self.domain_aware
    }

    /// Parses every `lhs = rhs;` statement up to end of file when
    /// `full_parsing` is set, appending each to the `math` element.
    ///
    /// When unset, parses (or classifies) exactly one statement against the
    /// document root instead of the `math` element — used to drive a
    /// `sel...endsel` block one clause at a time, where each clause can
    /// itself be a full statement, a `case`/`otherwise` label, or `endsel`.
    pub fn parse_expressions(&mut self, full_parsing: bool) -> bool {
        if full_parsing {
            while !matches!(self.current.kind, TokenKind::Eof) {
                let math_element = Rc::clone(&self.math_element);
                if !self.expect(
                    Some(&math_element),
                    "An identifier or 'ode'",
                    |kind| matches!(kind, TokenKind::Identifier(_) | TokenKind::Ode),
                ) {
                    return false;
                }

                if !self.parse_statement(&math_element, true) {
                    return false;
                }

                self.advance();
            }

            return true;
        }

        let document = Rc::clone(&self.document);

        if !self.expect(
            Some(&document),
            "An identifier, 'ode', 'case', 'otherwise' or 'endsel'",
            |kind| {
                matches!(
                    kind,
                    TokenKind::Identifier(_)
                        | TokenKind::Ode
                        | TokenKind::Case
                        | TokenKind::Otherwise
                        | TokenKind::EndSel
                )
            },
        ) {
            return false;
        }

        match self.current.kind {
            TokenKind::Case => {
                self.statement = Statement::PiecewiseCase;
                return true;
            }
            TokenKind::Otherwise => {
                self.statement = Statement::PiecewiseOtherwise;
                return true;
            }
            TokenKind::EndSel => {
                self.statement = Statement::PiecewiseEndSel;
                return true;
            }
            _ => {}
        }

        self.parse_statement(&document, false)
    }

    /// `lhs = rhs;`, with `lhs` an identifier or a derivative identifier.
    ///
    /// When `full_parsing` is false this only gets as far as telling a
    /// bare `sel` apart from a `sel(...)` function call (recording the
    /// result in [`Parser::statement`]) and returns — the caller is
    /// expected to re-drive parsing of the individual clauses itself.
    fn parse_statement(&mut self, target: &NodeRef, full_parsing: bool) -> bool {
        let lhs_element = match &self.current.kind {
            TokenKind::Identifier(name) => Some(elements::new_identifier_element(name)),
            TokenKind::Ode => self.parse_derivative_identifier(target),
            _ => None,
        };

        let Some(lhs_element) = lhs_element else {
            return false;
        };

        self.advance();

        if !self.expect_eq(target) {
            return false;
        }

        let apply_element = target.new_element_child("apply");

        self.advance();

        if !full_parsing {
            if matches!(self.current.kind, TokenKind::Sel) {
                self.advance();
                self.statement = if self.is_token(None, |kind| matches!(kind, TokenKind::OpeningBracket)) {
                    Statement::Normal
                } else {
                    Statement::PiecewiseSel
                };
            } else {
                self.statement = Statement::Normal;
            }

            return true;
        }

        let rhs_element = if matches!(self.current.kind, TokenKind::Sel) {
            let snapshot = (self.scanner.clone(), self.current.clone());

            self.advance();
            let sel_function = self.is_token(None, |kind| matches!(kind, TokenKind::OpeningBracket));

            self.scanner = snapshot.0;
            self.current = snapshot.1;

            if sel_function {
                self.parse_normal_mathematical_expression(target)
            } else {
                self.parse_piecewise_mathematical_expression(target)
            }
        } else {
            self.parse_normal_mathematical_expression(target)
        };

        let Some(rhs_element) = rhs_element else {
            return false;
        };

        if !self.expect_semicolon(target) {
            return false;
        }

        apply_element.add_child(create_node(NodeKind::Element, "eq", None));
        apply_element.add_child(lhs_element);
        apply_element.add_child(rhs_element);

        true
    }

    fn advance(&mut self) {
        self.current = self.scanner.next_token();
    }

    /// Drains leading comments (attaching any line-comment run to `target`)
    /// and reports whether the resulting current token satisfies `matches`.
    /// Does not consume the matched token.
    fn is_token(&mut self, target: Option<&NodeRef>, matches: impl Fn(&TokenKind) -> bool) -> bool {
        self.absorb_comments(target);
        matches(&self.current.kind)
    }

    /// As [`Parser::is_token`], but records a diagnostic and returns false
    /// when the current token does not satisfy `matches`: either the
    /// scanner's own "this lexeme is malformed" error, or a generic
    /// "X is expected, but Y was found instead." message.
    fn expect(&mut self, target: Option<&NodeRef>, expected: &str, matches: impl Fn(&TokenKind) -> bool) -> bool {
        self.absorb_comments(target);

        if matches(&self.current.kind) {
            return true;
        }

        if let TokenKind::Invalid(message) = &self.current.kind {
            self.messages.push(Message::error(self.current.position, message.clone()));
            return false;
        }

        self.unexpected_token(expected, true);
        false
    }

    fn expect_one(&mut self, target: Option<&NodeRef>, expected: &str, kind: TokenKind) -> bool {
        self.expect(target, expected, move |found| *found == kind)
    }

    fn expect_eq(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "'='", TokenKind::Eq)
    }

    fn expect_semicolon(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "';'", TokenKind::SemiColon)
    }

    fn expect_comma(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "','", TokenKind::Comma)
    }

    fn expect_colon(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "':'", TokenKind::Colon)
    }

    fn expect_opening_bracket(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "'('", TokenKind::OpeningBracket)
    }

    fn expect_closing_bracket(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "')'", TokenKind::ClosingBracket)
    }

    fn expect_opening_curly_bracket(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "'{'", TokenKind::OpeningCurlyBracket)
    }

    fn expect_closing_curly_bracket(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "'}'", TokenKind::ClosingCurlyBracket)
    }

    fn expect_endsel(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "'endsel'", TokenKind::EndSel)
    }

    fn expect_dimensionless(&mut self, target: &NodeRef) -> bool {
        self.expect_one(Some(target), "'dimensionless'", TokenKind::Dimensionless)
    }

    fn expect_identifier(&mut self, target: &NodeRef) -> bool {
        self.expect(Some(target), "An identifier", |kind| matches!(kind, TokenKind::Identifier(_)))
    }

    fn expect_identifier_or_si_unit(&mut self, target: &NodeRef) -> bool {
        self.expect(
            Some(target),
            "An identifier or an SI unit (e.g. 'second')",
            |kind| matches!(kind, TokenKind::Identifier(_)) || kind.is_si_unit(),
        )
    }

    /// A number token whose lexeme, read as a signed integer after an
    /// optional leading `+`/`-`, is strictly positive. Used for derivative
    /// orders, which may not be zero or negative.
    fn expect_strictly_positive_integer(&mut self, target: &NodeRef) -> bool {
        let sign = self.consume_optional_sign();

        const EXPECTED: &str = "A strictly positive integer number";

        if !self.expect(Some(target), EXPECTED, |kind| matches!(kind, TokenKind::Number(_))) {
            return false;
        }

        let TokenKind::Number(lexeme) = &self.current.kind else {
            unreachable!("expect() only returns true for a Number token here");
        };

        let magnitude: i64 = lexeme.parse().unwrap_or(0);
        let value = if sign < 0 { -magnitude } else { magnitude };

        if value <= 0 {
            let prefix = match sign {
                1 => "+",
                -1 => "-",
                _ => "",
            };
            let found = format!("'{prefix}{lexeme}'");
            self.unexpected_token_message(EXPECTED, &found);
            return false;
        }

        true
    }

    /// Consumes a leading `+` or `-`, returning `1`, `-1` or `0`.
    fn consume_optional_sign(&mut self) -> i8 {
        if self.is_token(None, |kind| matches!(kind, TokenKind::Plus)) {
            self.advance();
            1
        } else if self.is_token(None, |kind| matches!(kind, TokenKind::Minus)) {
            self.advance();
            -1
        } else {
            0
        }
    }

    /// Records "X is expected, but Y was found instead.", with `apply_sigil`
    /// choosing whether the found lexeme goes through [`substitute_specials`]
    /// first. The primary-expression fallback in `expr` does not apply it;
    /// every other call site does.
    fn unexpected_token(&mut self, expected: &str, apply_sigil: bool) {
        let rendered = self.current.kind.to_string();
        let found = if matches!(self.current.kind, TokenKind::Eof) {
            rendered
        } else if apply_sigil {
            format!("'{}'", substitute_specials(&rendered))
        } else {
            format!("'{rendered}'")
        };

        self.unexpected_token_message(expected, &found);
    }

    fn unexpected_token_message(&mut self, expected: &str, found: &str) {
        self.messages.push(Message::error(
            self.current.position,
            format!("{expected} is expected, but {found} was found instead."),
        ));
    }

    pub(crate) fn push_error(&mut self, text: impl Into<String>) {
        self.messages.push(Message::error(self.current.position, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, domain_aware: bool) -> Parser<'_> {
        let mut parser = Parser::new(text, domain_aware);
        parser.parse_expressions(true);
        parser
    }

    #[test]
    fn simple_assignment_produces_an_eq_apply() {
        let parser = parse("a = b;", true);
        assert!(parser.messages().is_empty());
        let xml = parser.document().to_xml_string();
        assert!(xml.contains("<eq />"));
    }

    #[test]
    fn missing_semicolon_is_an_error() {
        let parser = parse("a = b", true);
        assert!(!parser.messages().is_empty());
    }

    #[test]
    fn unknown_lhs_token_reports_expected_identifier_or_ode() {
        let mut parser = Parser::new("1 = b;", true);
        assert!(!parser.parse_expressions(true));
        assert_eq!(parser.messages().len(), 1);
        assert!(parser.messages()[0].to_string().contains("An identifier or 'ode'"));
    }

    #[test]
    fn plain_mode_parses_numbers_without_a_unit_block() {
        let parser = parse("a = 3;", false);
        assert!(parser.messages().is_empty());
        assert!(!parser.document().to_xml_string().contains("cellml:units"));
    }
}
