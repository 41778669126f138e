//! Construction of the Content-MathML fragments the parser emits.
//!
//! Every function here builds a detached [`NodeRef`] (or a small tree of
//! them) from already-parsed pieces; none of them touch the scanner or the
//! parser's message list. Keeping them free functions rather than `Parser`
//! methods makes that boundary explicit.

use std::rc::Rc;

use cellml_text_lex::TokenKind;
use cellml_text_xml::{create_node, NodeHandle, NodeKind, NodeRef};

pub(crate) const CELLML_NAMESPACE: &str = "http://www.cellml.org/cellml/2.0#";

/// The MathML element name for an operator, function or constant token.
/// Tokens with no arithmetic meaning (keywords like `model`, `comp`, ...)
/// fall back to `"???"`, matching the source this table is grounded on; in
/// practice this grammar never reaches `mathml_name` with one of those,
/// since they cannot appear in an operator or primary-expression position.
pub(crate) fn mathml_name(kind: &TokenKind) -> &'static str {
    use TokenKind::*;
    match kind {
        And => "and",
        Or => "or",
        Xor => "xor",
        Not => "not",
        Abs => "abs",
        Ceil => "ceiling",
        Exp => "exp",
        Fact => "factorial",
        Floor => "floor",
        Ln => "ln",
        Sqr => "power",
        Sqrt => "root",
        Min => "min",
        Max => "max",
        Gcd => "gcd",
        Lcm => "lcm",
        Sin => "sin",
        Cos => "cos",
        Tan => "tan",
        Sec => "sec",
        Csc => "csc",
        Cot => "cot",
        Sinh => "sinh",
        Cosh => "cosh",
        Tanh => "tanh",
        Sech => "sech",
        Csch => "csch",
        Coth => "coth",
        Asin => "arcsin",
        Acos => "arccos",
        Atan => "arctan",
        Asec => "arcsec",
        Acsc => "arccsc",
        Acot => "arccot",
        Asinh => "arcsinh",
        Acosh => "arccosh",
        Atanh => "arctanh",
        Asech => "arcsech",
        Acsch => "arccsch",
        Acoth => "arccoth",
        Log => "log",
        Pow => "power",
        Rem => "rem",
        Root => "root",
        True => "true",
        False => "false",
        Nan => "notanumber",
        Pi => "pi",
        Inf => "infinity",
        E => "exponentiale",
        EqEq => "eq",
        Neq => "neq",
        Lt => "lt",
        Leq => "leq",
        Gt => "gt",
        Geq => "geq",
        Plus => "plus",
        Minus => "minus",
        Times => "times",
        Divide => "divide",
        _ => "???",
    }
}

/// `<ci>value</ci>`
pub(crate) fn new_identifier_element(value: &str) -> NodeRef {
    let element = create_node(NodeKind::Element, "ci", None);
    element.add_child(create_node(NodeKind::Text, value, None));
    element
}

/// `apply/diff/bvar[ci x]/ci[f]`, no order.
pub(crate) fn new_derivative_element(f: &str, x: &str) -> NodeRef {
    let derivative = create_node(NodeKind::Element, "apply", None);
    let bvar = create_node(NodeKind::Element, "bvar", None);

    derivative.add_child(create_node(NodeKind::Element, "diff", None));
    derivative.add_child(Rc::clone(&bvar));
    derivative.add_child(new_identifier_element(f));

    bvar.add_child(new_identifier_element(x));

    derivative
}

/// As above, plus a `degree/cn[order]` child of `bvar`.
pub(crate) fn new_derivative_element_with_order(f: &str, x: &str, order: &str, domain_aware: bool) -> NodeRef {
    let derivative = create_node(NodeKind::Element, "apply", None);
    let bvar = create_node(NodeKind::Element, "bvar", None);
    let degree = create_node(NodeKind::Element, "degree", None);
    let cn = create_node(NodeKind::Element, "cn", None);

    derivative.add_child(create_node(NodeKind::Element, "diff", None));
    derivative.add_child(Rc::clone(&bvar));
    derivative.add_child(new_identifier_element(f));

    bvar.add_child(new_identifier_element(x));
    bvar.add_child(Rc::clone(&degree));
    degree.add_child(Rc::clone(&cn));

    cn.add_child(create_node(NodeKind::Text, order, None));
    if domain_aware {
        cn.add_attribute("units", "dimensionless", Some("cellml"));
        cn.declare_namespace("cellml", CELLML_NAMESPACE);
    }

    derivative
}

/// `<cn>number</cn>`, split into mantissa/`sep`/exponent when the lexeme
/// carries an `e`/`E` notation marker.
pub(crate) fn new_number_element(number: &str, unit: &str, domain_aware: bool) -> NodeRef {
    let element = create_node(NodeKind::Element, "cn", None);

    match number.find(['e', 'E']) {
        None => {
            element.add_child(create_node(NodeKind::Text, number, None));
        }
        Some(e_pos) => {
            element.add_attribute("type", "e-notation", None);
            element.add_child(create_node(NodeKind::Text, &number[..e_pos], None));
            element.add_child(create_node(NodeKind::Element, "sep", None));
            element.add_child(create_node(NodeKind::Text, &number[e_pos + 1..], None));
        }
    }

    if domain_aware {
        element.add_attribute("units", unit, Some("cellml"));
        element.declare_namespace("cellml", CELLML_NAMESPACE);
    }

    element
}

pub(crate) fn new_mathematical_constant_element(kind: &TokenKind) -> NodeRef {
    create_node(NodeKind::Element, mathml_name(kind), None)
}

/// `apply/<name>/args...`, with the `log`/`root` two-argument forms
/// wrapping their second argument in `logbase`/`degree` ahead of the
/// principal (first) argument, `sqr` appending an implicit `cn[2]`, and
/// every other multi-argument function appending the rest of its
/// arguments after the first.
pub(crate) fn new_mathematical_function_element(kind: &TokenKind, arguments: Vec<NodeRef>, domain_aware: bool) -> NodeRef {
    let element = create_node(NodeKind::Element, "apply", None);
    element.add_child(create_node(NodeKind::Element, mathml_name(kind), None));

    if arguments.len() == 2 {
        match kind {
            TokenKind::Log => {
                let logbase = create_node(NodeKind::Element, "logbase", None);
                logbase.add_child(Rc::clone(&arguments[1]));
                element.add_child(logbase);
            }
            TokenKind::Root => {
                let degree = create_node(NodeKind::Element, "degree", None);
                degree.add_child(Rc::clone(&arguments[1]));
                element.add_child(degree);
            }
            _ => {}
        }
    }

    element.add_child(Rc::clone(&arguments[0]));

    if arguments.len() == 1 {
        if matches!(kind, TokenKind::Sqr) {
            element.add_child(new_number_element("2", "dimensionless", domain_aware));
        }
    } else if kind.is_two_or_more_argument_function() {
        for argument in &arguments[1..] {
            element.add_child(Rc::clone(argument));
        }
    } else if !matches!(kind, TokenKind::Log | TokenKind::Root) {
        element.add_child(Rc::clone(&arguments[1]));
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellml_text_xml::NodeHandle;

    #[test]
    fn mathml_name_spot_checks() {
        assert_eq!(mathml_name(&TokenKind::Ceil), "ceiling");
        assert_eq!(mathml_name(&TokenKind::Fact), "factorial");
        assert_eq!(mathml_name(&TokenKind::Asin), "arcsin");
        assert_eq!(mathml_name(&TokenKind::Nan), "notanumber");
        assert_eq!(mathml_name(&TokenKind::Inf), "infinity");
        assert_eq!(mathml_name(&TokenKind::E), "exponentiale");
        assert_eq!(mathml_name(&TokenKind::EqEq), "eq");
        assert_eq!(mathml_name(&TokenKind::Neq), "neq");
        assert_eq!(mathml_name(&TokenKind::Times), "times");
        assert_eq!(mathml_name(&TokenKind::Divide), "divide");
    }

    #[test]
    fn unrecognized_token_falls_back_to_placeholder() {
        assert_eq!(mathml_name(&TokenKind::Model), "???");
    }

    #[test]
    fn identifier_element_wraps_a_ci_text_node() {
        let element = new_identifier_element("x");
        assert_eq!(element.to_xml_string(), "<ci>\n  x\n</ci>\n");
    }

    #[test]
    fn plain_number_has_a_single_text_child_and_no_units() {
        let element = new_number_element("42", "", false);
        assert_eq!(element.to_xml_string(), "<cn>\n  42\n</cn>\n");
    }

    #[test]
    fn domain_aware_number_carries_cellml_units() {
        let element = new_number_element("5", "kilogram", true);
        let xml = element.to_xml_string();
        assert!(xml.contains("cellml:units=\"kilogram\""));
        assert!(xml.contains("xmlns:cellml=\"http://www.cellml.org/cellml/2.0#\""));
    }

    #[test]
    fn e_notation_number_splits_into_mantissa_sep_exponent() {
        let element = new_number_element("2.5e10", "", false);
        let xml = element.to_xml_string();
        assert!(xml.contains("type=\"e-notation\""));
        assert!(xml.contains("2.5"));
        assert!(xml.contains("<sep />"));
        assert!(xml.contains("10"));
    }

    #[test]
    fn derivative_without_order_has_no_degree() {
        let element = new_derivative_element("f", "x");
        assert!(!element.to_xml_string().contains("degree"));
    }

    #[test]
    fn derivative_with_order_attaches_units_when_domain_aware() {
        let element = new_derivative_element_with_order("f", "x", "2", true);
        let xml = element.to_xml_string();
        assert!(xml.contains("<degree>"));
        assert!(xml.contains("cellml:units=\"dimensionless\""));
    }

    #[test]
    fn derivative_with_order_omits_units_in_plain_mode() {
        let element = new_derivative_element_with_order("f", "x", "2", false);
        assert!(!element.to_xml_string().contains("cellml:units"));
    }
}
