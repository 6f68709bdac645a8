//! Document tree model
//!
//! All values are immutable once built: parsing creates them, printing only
//! reads them, and equality is structural throughout.

use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result, Span};

/// An order-preserving attribute map
///
/// Keys are unique and iteration reproduces insertion order, which is what
/// printing emits; equality is order-sensitive because attribute order is
/// part of the round-trip contract.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Attributes(pub(crate) IndexMap<String, String>);

impl Attributes {
    /// Creates a new empty attribute map
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the number of attributes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map contains no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value for `key` if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Inserts a key-value pair
    ///
    /// A repeated key keeps its original position and takes the new value;
    /// the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns true if the map contains `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns an iterator over the keys in insertion order
    pub fn keys(&self) -> Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over key-value pairs in insertion order
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Attributes {}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Attributes {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Attributes {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Element node: name, attributes and ordered children
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes and no children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute, preserving insertion order
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Appends a child node
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Returns true if the element has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// One node of the document tree
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Element with attributes and children
    Element(Element),
    /// Literal text run; never contains `<` or a line break
    Text(String),
    /// Comment body between `<!--` and `-->`
    Comment(String),
    /// `<?xml ... ?>` header attributes; valid only as the first node of a
    /// document
    Prolog(Attributes),
}

impl Node {
    /// Returns the element if this node is one, None otherwise
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Returns the text run if this node is one, None otherwise
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the comment body if this node is one, None otherwise
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Self::Comment(s) => Some(s),
            _ => None,
        }
    }
}

/// XML document: prolog attributes plus a single root element
///
/// An absent prolog is the empty attribute map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub prolog: Attributes,
    pub root: Element,
}

impl Document {
    /// Creates a document without a prolog
    pub fn new(root: Element) -> Self {
        Self {
            prolog: Attributes::new(),
            root,
        }
    }

    /// Creates a document with the given prolog attributes
    pub fn with_prolog(prolog: Attributes, root: Element) -> Self {
        Self { prolog, root }
    }

    /// Flattens into the node-sequence form: the prolog node first when
    /// present, then the root element.
    pub fn into_nodes(self) -> Vec<Node> {
        let mut nodes = Vec::new();
        if !self.prolog.is_empty() {
            nodes.push(Node::Prolog(self.prolog));
        }
        nodes.push(Node::Element(self.root));
        nodes
    }

    /// Rebuilds a document from a node sequence: at most one prolog node,
    /// only in first position, and exactly one element.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self> {
        let mut prolog = Attributes::new();
        let mut root = None;
        for (idx, node) in nodes.into_iter().enumerate() {
            match node {
                Node::Prolog(attrs) if idx == 0 => prolog = attrs,
                Node::Prolog(_) => {
                    return Err(structural("prolog must be the first node"));
                }
                Node::Element(el) => {
                    if root.is_some() {
                        return Err(structural("more than one root element"));
                    }
                    root = Some(el);
                }
                Node::Text(_) | Node::Comment(_) => {
                    return Err(structural("only elements are allowed at document level"));
                }
            }
        }
        match root {
            Some(root) => Ok(Self { prolog, root }),
            None => Err(structural("missing root element")),
        }
    }
}

fn structural(message: &str) -> Error {
    Error::with_message(ErrorKind::StructuralMismatch, Span::empty(), message)
}
