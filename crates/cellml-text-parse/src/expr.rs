//! The expression grammar: nine layers of binary-operator precedence
//! (`parse_normal_mathematical_expression` down to `..._9`, lowest
//! precedence first) bottoming out at identifiers, derivatives, numbers,
//! constants, function calls, parenthesized expressions and `sel(...)`.
//!
//! Each layer parses one operand through the layer below it, then loops
//! consuming `<operator> <operand>` pairs at its own precedence. Operators
//! drawn from `{+, *, and, or, xor}` are n-ary: repeating the same operator
//! flattens into one `apply` with more than two children instead of nesting
//! binary `apply`s.

use cellml_text_lex::TokenKind;
use cellml_text_xml::{create_node, NodeHandle, NodeKind, NodeRef};

use crate::elements;
use crate::Parser;

/// Operators that flatten into one n-ary `apply` when repeated at the same
/// precedence layer, rather than nesting.
fn is_nary_operator(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus | TokenKind::Times | TokenKind::And | TokenKind::Or | TokenKind::Xor
    )
}

impl<'a> Parser<'a> {
    /// `<operand> [<operator> <operand> <operator> <operand> ...]`, where
    /// `operand` comes from `next_layer` and `operator` is any token
    /// `is_operator` accepts.
    fn parse_binary_layer(
        &mut self,
        target: &NodeRef,
        is_operator: impl Fn(&TokenKind) -> bool,
        next_layer: impl Fn(&mut Self, &NodeRef) -> Option<NodeRef>,
    ) -> Option<NodeRef> {
        let mut result = next_layer(self, target)?;
        let mut prev_operator: Option<TokenKind> = None;

        loop {
            self.absorb_comments(Some(target));

            let operator = self.current.kind.clone();
            if !is_operator(&operator) {
                return Some(result);
            }

            self.advance();
            let other_operand = next_layer(self, target)?;

            if prev_operator.as_ref() == Some(&operator) && is_nary_operator(&operator) {
                result.add_child(other_operand);
            } else {
                let apply_element = create_node(NodeKind::Element, "apply", None);
                apply_element.add_child(create_node(NodeKind::Element, elements::mathml_name(&operator), None));
                apply_element.add_child(result);
                apply_element.add_child(other_operand);
                result = apply_element;
            }

            prev_operator = Some(operator);
        }
    }

    /// Layer 1: `or`.
    pub(crate) fn parse_normal_mathematical_expression(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.parse_binary_layer(target, |kind| matches!(kind, TokenKind::Or), Self::parse_expression_layer_2)
    }

    /// Layer 2: `and`.
    fn parse_expression_layer_2(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.parse_binary_layer(target, |kind| matches!(kind, TokenKind::And), Self::parse_expression_layer_3)
    }

    /// Layer 3: `xor`.
    fn parse_expression_layer_3(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.parse_binary_layer(target, |kind| matches!(kind, TokenKind::Xor), Self::parse_expression_layer_4)
    }

    /// Layer 4: `==`, `<>`.
    fn parse_expression_layer_4(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.parse_binary_layer(
            target,
            |kind| matches!(kind, TokenKind::EqEq | TokenKind::Neq),
            Self::parse_expression_layer_5,
        )
    }

    /// Layer 5: `<`, `>`, `<=`, `>=`.
    fn parse_expression_layer_5(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.parse_binary_layer(
            target,
            |kind| matches!(kind, TokenKind::Lt | TokenKind::Gt | TokenKind::Leq | TokenKind::Geq),
            Self::parse_expression_layer_6,
        )
    }

    /// Layer 6: `+`, `-`.
    fn parse_expression_layer_6(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.parse_binary_layer(
            target,
            |kind| matches!(kind, TokenKind::Plus | TokenKind::Minus),
            Self::parse_expression_layer_7,
        )
    }

    /// Layer 7: `*`, `/`.
    fn parse_expression_layer_7(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.parse_binary_layer(
            target,
            |kind| matches!(kind, TokenKind::Times | TokenKind::Divide),
            Self::parse_expression_layer_8,
        )
    }

    /// Layer 8: unary `not`, unary `+`/`-`.
    fn parse_expression_layer_8(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.absorb_comments(Some(target));

        let operator = self.current.kind.clone();
        let is_prefix = matches!(operator, TokenKind::Not | TokenKind::Plus | TokenKind::Minus);

        if !is_prefix {
            return self.parse_expression_layer_9(target);
        }

        self.advance();

        let operand = if matches!(operator, TokenKind::Not) {
            self.parse_normal_mathematical_expression(target)?
        } else {
            self.parse_expression_layer_8(target)?
        };

        let result = create_node(NodeKind::Element, "apply", None);
        result.add_child(create_node(NodeKind::Element, elements::mathml_name(&operator), None));
        result.add_child(operand);

        Some(result)
    }

    /// Layer 9: the primary expression — an identifier, `ode(...)`, a
    /// number, a mathematical constant, a function call, `sel(...)` or a
    /// parenthesized expression.
    fn parse_expression_layer_9(&mut self, target: &NodeRef) -> Option<NodeRef> {
        let kind = self.current.kind.clone();

        let result = match &kind {
            TokenKind::Identifier(name) => Some(elements::new_identifier_element(name)),
            TokenKind::Ode => self.parse_derivative_identifier(target),
            TokenKind::Number(_) => self.parse_number(target),
            _ if kind.is_mathematical_constant() => Some(elements::new_mathematical_constant_element(&kind)),
            _ if kind.is_one_argument_function() => self.parse_mathematical_function(target, true, false, false),
            TokenKind::Sel => self.parse_piecewise_mathematical_expression(target),
            _ if kind.is_one_or_two_argument_function() => self.parse_mathematical_function(target, true, true, false),
            _ if kind.is_two_argument_function() => self.parse_mathematical_function(target, false, true, false),
            _ if kind.is_two_or_more_argument_function() => self.parse_mathematical_function(target, false, true, true),
            TokenKind::OpeningBracket => self.parse_parenthesized_mathematical_expression(target),
            _ => {
                self.unexpected_token(
                    "An identifier, 'ode', a number, a mathematical function, a mathematical constant or '('",
                    false,
                );
                None
            }
        }?;

        self.advance();
        Some(result)
    }

    fn parse_parenthesized_mathematical_expression(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.advance();

        let result = self.parse_normal_mathematical_expression(target)?;

        if !self.expect_closing_bracket(target) {
            return None;
        }

        Some(result)
    }

    pub(crate) fn parse_derivative_identifier(&mut self, target: &NodeRef) -> Option<NodeRef> {
        self.advance();
        if !self.expect_opening_bracket(target) {
            return None;
        }

        self.advance();
        if !self.expect_identifier(target) {
            return None;
        }
        let TokenKind::Identifier(f) = self.current.kind.clone() else { unreachable!() };

        self.advance();
        if !self.expect_comma(target) {
            return None;
        }

        self.advance();
        if !self.expect_identifier(target) {
            return None;
        }
        let TokenKind::Identifier(x) = self.current.kind.clone() else { unreachable!() };

        self.advance();
        if !self.expect(Some(target), "',' or ')'", |kind| {
            matches!(kind, TokenKind::Comma | TokenKind::ClosingBracket)
        }) {
            return None;
        }

        if !matches!(self.current.kind, TokenKind::Comma) {
            return Some(elements::new_derivative_element(&f, &x));
        }

        self.advance();
        if !self.expect_strictly_positive_integer(target) {
            return None;
        }
        let TokenKind::Number(order) = self.current.kind.clone() else { unreachable!() };

        if self.domain_aware() {
            self.advance();
            if !self.expect_opening_curly_bracket(target) {
                return None;
            }

            self.advance();
            if !self.expect_dimensionless(target) {
                return None;
            }

            self.advance();
            if !self.expect_closing_curly_bracket(target) {
                return None;
            }
        }

        self.advance();
        if !self.expect_closing_bracket(target) {
            return None;
        }

        Some(elements::new_derivative_element_with_order(&f, &x, &order, self.domain_aware()))
    }

    fn parse_number(&mut self, target: &NodeRef) -> Option<NodeRef> {
        let TokenKind::Number(number) = self.current.kind.clone() else {
            unreachable!("only called with a Number token current")
        };
        let mut unit = String::new();

        if self.domain_aware() {
            self.advance();
            if !self.expect_opening_curly_bracket(target) {
                return None;
            }

            self.advance();
            if !self.expect_identifier_or_si_unit(target) {
                return None;
            }
            unit = self.current.kind.to_string();

            self.advance();
            if !self.expect_closing_curly_bracket(target) {
                return None;
            }
        }

        Some(elements::new_number_element(&number, &unit, self.domain_aware()))
    }

    pub(crate) fn parse_mathematical_function(
        &mut self,
        target: &NodeRef,
        one_argument: bool,
        two_arguments: bool,
        more_arguments: bool,
    ) -> Option<NodeRef> {
        let kind = self.current.kind.clone();

        self.advance();
        if !self.expect_opening_bracket(target) {
            return None;
        }

        self.advance();
        let mut arguments = vec![self.parse_normal_mathematical_expression(target)?];

        let wants_second_argument = (one_argument && two_arguments && self.is_token(Some(target), |kind| matches!(kind, TokenKind::Comma)))
            || (!one_argument && two_arguments);

        if wants_second_argument {
            if !one_argument && two_arguments && !self.expect_comma(target) {
                return None;
            }

            self.advance();
            arguments.push(self.parse_normal_mathematical_expression(target)?);
        }

        while two_arguments && more_arguments && self.is_token(Some(target), |kind| matches!(kind, TokenKind::Comma)) {
            self.advance();
            arguments.push(self.parse_normal_mathematical_expression(target)?);
        }

        if !self.expect_closing_bracket(target) {
            return None;
        }

        Some(elements::new_mathematical_function_element(&kind, arguments, self.domain_aware()))
    }
}
