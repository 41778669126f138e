//! The `sel`/`sel...endsel` piecewise grammar, covering both of its surface
//! forms: `sel(case c1: e1, case c2: e2, otherwise: eN)` (the "function"
//! form, usable anywhere an expression is) and `sel case c1: e1; ...;
//! otherwise: eN; endsel` (the "block" form, only usable as the entire RHS
//! of a statement — [`Parser::parse_statement`] tells the two apart with a
//! one-token lookahead before calling in here).

use cellml_text_lex::TokenKind;
use cellml_text_xml::{create_node, NodeHandle, NodeKind, NodeRef};

use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_piecewise_mathematical_expression(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.advance();

        let sel_function = self.is_token(Some(target), |kind| matches!(kind, TokenKind::OpeningBracket));

        let piecewise_element = create_node(NodeKind::Element, "piecewise", None);

        if sel_function {
            self.advance();
            if !self.expect(Some(&piecewise_element), "'case' or 'otherwise'", |kind| {
                matches!(kind, TokenKind::Case | TokenKind::Otherwise)
            }) {
                return None;
            }
        } else if !self.expect(Some(&piecewise_element), "'(', 'case' or 'otherwise'", |kind| {
            matches!(kind, TokenKind::OpeningBracket | TokenKind::Case | TokenKind::Otherwise)
        }) {
            return None;
        }

        let mut has_otherwise_clause = false;

        loop {
            let is_case = matches!(self.current.kind, TokenKind::Case);
            let condition_element = if is_case {
                self.advance();
                let condition = self.parse_normal_mathematical_expression(&piecewise_element)?;
                Some(condition)
            } else if has_otherwise_clause {
                self.push_error("There can only be one 'otherwise' clause.");
                return None;
            } else {
                has_otherwise_clause = true;
                self.advance();
                None
            };

            if !self.expect_colon(&piecewise_element) {
                return None;
            }

            self.advance();
            let expression_element = self.parse_normal_mathematical_expression(&piecewise_element)?;

            let trailer_ok = if sel_function {
                self.expect(Some(&piecewise_element), "',' or ')'", |kind| {
                    matches!(kind, TokenKind::Comma | TokenKind::ClosingBracket)
                })
            } else {
                self.expect_semicolon(&piecewise_element)
            };
            if !trailer_ok {
                return None;
            }

            let piece_or_otherwise = create_node(NodeKind::Element, if is_case { "piece" } else { "otherwise" }, None);
            piece_or_otherwise.add_child(expression_element);
            if let Some(condition_element) = condition_element {
                piece_or_otherwise.add_child(condition_element);
            }
            piecewise_element.add_child(piece_or_otherwise);

            if (sel_function && matches!(self.current.kind, TokenKind::Comma)) || !sel_function {
                self.advance();
            }

            let done = if sel_function {
                self.is_token(Some(target), |kind| matches!(kind, TokenKind::ClosingBracket))
            } else {
                self.is_token(Some(target), |kind| matches!(kind, TokenKind::EndSel))
            };
            if done {
                break;
            }

            let has_next_clause = if sel_function {
                self.expect(Some(&piecewise_element), "'case' or 'otherwise'", |kind| {
                    matches!(kind, TokenKind::Case | TokenKind::Otherwise)
                })
            } else {
                self.expect(Some(&piecewise_element), "'case', 'otherwise' or 'endsel'", |kind| {
                    matches!(kind, TokenKind::Case | TokenKind::Otherwise | TokenKind::EndSel)
                })
            };
            if !has_next_clause {
                return None;
            }
        }

        let closed = if sel_function {
            self.expect_closing_bracket(target)
        } else {
            self.expect_endsel(target)
        };
        if !closed {
            return None;
        }

        self.advance();

        Some(piecewise_element)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use cellml_text_xml::NodeRef;

    use crate::Parser;

    fn rhs_of(text: &str) -> NodeRef {
        let mut parser = Parser::new(text, true);
        assert!(parser.parse_expressions(true), "{:?}", parser.messages());

        let document = parser.document();
        let math = Rc::clone(&document.borrow().children[1]);
        let apply = Rc::clone(&math.borrow().children[0]);
        Rc::clone(&apply.borrow().children[2])
    }

    fn element_name(node: &NodeRef) -> String {
        node.borrow().name.clone()
    }

    fn children(node: &NodeRef) -> Vec<NodeRef> {
        node.borrow().children.clone()
    }

    #[test]
    fn function_form_emits_piece_per_case_and_one_otherwise() {
        let rhs = rhs_of("a = sel(case b : c, case d : e, otherwise : f);");
        assert_eq!(element_name(&rhs), "piecewise");
        let kids = children(&rhs);
        assert_eq!(kids.len(), 3);
        assert_eq!(element_name(&kids[0]), "piece");
        assert_eq!(element_name(&kids[1]), "piece");
        assert_eq!(element_name(&kids[2]), "otherwise");
    }

    #[test]
    fn piece_element_has_expression_then_condition() {
        let rhs = rhs_of("a = sel(case b : c, otherwise : f);");
        let piece = &children(&rhs)[0];
        let piece_children = children(piece);
        assert_eq!(element_name(&piece_children[0]), "ci"); // expression "c"
        assert_eq!(element_name(&piece_children[1]), "ci"); // condition "b"
    }

    #[test]
    fn block_form_is_equivalent_to_function_form() {
        let rhs = rhs_of("a = sel case b : c; case d : e; otherwise : f; endsel;");
        assert_eq!(element_name(&rhs), "piecewise");
        let kids = children(&rhs);
        assert_eq!(kids.len(), 3);
        assert_eq!(element_name(&kids[2]), "otherwise");
    }

    #[test]
    fn a_second_otherwise_clause_is_an_error() {
        let mut parser = Parser::new("a = sel(case b : c, otherwise : d, otherwise : e);", true);
        assert!(!parser.parse_expressions(true));
        assert!(parser
            .messages()
            .iter()
            .any(|m| m.text.contains("only one 'otherwise' clause")));
    }

    #[test]
    fn piecewise_with_only_an_otherwise_clause() {
        let rhs = rhs_of("a = sel(otherwise : b);");
        let kids = children(&rhs);
        assert_eq!(kids.len(), 1);
        assert_eq!(element_name(&kids[0]), "otherwise");
    }
}
