//! A small in-memory XML tree with an indented pretty-printer.
//!
//! This mirrors a minimal DOM: five node kinds (`Root`, `Declaration`,
//! `Element`, `Text`, `Comment`), ordered attributes, ordered children, and
//! optional namespace prefixes. It performs no attribute-value escaping —
//! callers are expected to pre-escape values that need it, since none of the
//! values this workspace ever writes (numbers, identifiers, unit names)
//! require escaping.
//!
//! Nodes are reference-counted (`Rc<RefCell<Node>>`) so a caller can retain a
//! handle to an interior node — e.g. the `math` element — while handing the
//! tree root to someone else; ownership is still strictly a tree, children
//! never alias across parents.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

/// The kind of a node in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Declaration,
    Element,
    Text,
    Comment,
}

/// A single attribute, in insertion order on its owning element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub namespace_prefix: Option<String>,
}

impl Attribute {
    fn qualified_name(&self) -> String {
        match &self.namespace_prefix {
            Some(prefix) => format!("{prefix}:{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A node in the tree.
///
/// `name` doubles as the tag name for `Element`, the raw text for `Text`,
/// the comment payload for `Comment`, and the declaration body for
/// `Declaration` (e.g. `xml version="1.0" encoding="UTF-8"`) — the same
/// overloading the reference implementation uses.
#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub name: String,
    pub namespace_prefix: Option<String>,
    pub attributes: Vec<Attribute>,
    pub children: Vec<NodeRef>,
}

/// A shared handle to a [`Node`].
pub type NodeRef = Rc<RefCell<Node>>;

impl Node {
    fn new(kind: NodeKind, name: impl Into<String>, namespace_prefix: Option<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            namespace_prefix,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    fn qualified_name(&self) -> String {
        match &self.namespace_prefix {
            Some(prefix) => format!("{prefix}:{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Create a fresh, parentless node.
///
/// # Examples
///
/// ```
/// use cellml_text_xml::{create_node, NodeKind};
///
/// let element = create_node(NodeKind::Element, "ci", None);
/// ```
pub fn create_node(kind: NodeKind, name: impl Into<String>, namespace_prefix: Option<&str>) -> NodeRef {
    Rc::new(RefCell::new(Node::new(
        kind,
        name,
        namespace_prefix.map(str::to_owned),
    )))
}

/// Operations available on a node handle. Implemented for [`NodeRef`] rather
/// than on `Node` directly since every caller holds a shared handle, never
/// an owned `Node`.
pub trait NodeHandle {
    fn add_child(&self, child: NodeRef);
    fn add_attribute(&self, name: &str, value: &str, namespace_prefix: Option<&str>);
    fn declare_namespace(&self, prefix: &str, uri: &str);
    /// Append a newly created element child and return a handle to it.
    fn new_element_child(&self, name: impl Into<String>) -> NodeRef;
    /// Serialize this node (and its descendants) to a string.
    fn to_xml_string(&self) -> String;
}

impl NodeHandle for NodeRef {
    fn add_child(&self, child: NodeRef) {
        self.borrow_mut().children.push(child);
    }

    fn add_attribute(&self, name: &str, value: &str, namespace_prefix: Option<&str>) {
        self.borrow_mut().attributes.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
            namespace_prefix: namespace_prefix.map(str::to_owned),
        });
    }

    fn declare_namespace(&self, prefix: &str, uri: &str) {
        let key = if prefix.is_empty() {
            "xmlns".to_string()
        } else {
            format!("xmlns:{prefix}")
        };
        self.borrow_mut().attributes.push(Attribute {
            name: key,
            value: uri.to_string(),
            namespace_prefix: None,
        });
    }

    fn new_element_child(&self, name: impl Into<String>) -> NodeRef {
        let child = create_node(NodeKind::Element, name, None);
        self.add_child(Rc::clone(&child));
        child
    }

    fn to_xml_string(&self) -> String {
        let mut out = String::new();
        write_node(&self.borrow(), &mut out, 0);
        out
    }
}

fn write_node(node: &Node, out: &mut String, indent: usize) {
    let pad = " ".repeat(indent);
    match node.kind {
        NodeKind::Root => {
            for child in &node.children {
                write_node(&child.borrow(), out, 0);
            }
        }
        NodeKind::Declaration => {
            let _ = writeln!(out, "{pad}<?{}?>", node.name);
        }
        NodeKind::Element => {
            let qname = node.qualified_name();
            let _ = write!(out, "{pad}<{qname}");
            for attribute in &node.attributes {
                let _ = write!(out, " {}=\"{}\"", attribute.qualified_name(), attribute.value);
            }
            if node.children.is_empty() {
                let _ = writeln!(out, " />");
            } else {
                let _ = writeln!(out, ">");
                for child in &node.children {
                    write_node(&child.borrow(), out, indent + 2);
                }
                let _ = writeln!(out, "{pad}</{qname}>");
            }
        }
        NodeKind::Text => {
            let _ = writeln!(out, "{pad}{}", node.name);
        }
        NodeKind::Comment => {
            let _ = writeln!(out, "{pad}<!-- {} -->", node.name);
        }
    }
}
