//! Printer producing compact or pretty text from a document tree
//!
//! Each function is the print direction of the matching parser rule. The
//! closing tag is emitted from the same `name` field as the opening tag, so
//! printing can never produce the mismatch that parsing rejects. Indentation
//! is the only state threaded through the recursion: `None` for compact
//! output, `Some(level)` for pretty output at `level` spaces.

use crate::error::{Error, ErrorKind, Result, Span};
use crate::model::{Attributes, Document, Element, Node};

/// Output layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No inserted whitespace or line breaks
    Compact,
    /// Four spaces per nesting level, one node per line
    Pretty,
}

/// Spaces added per nesting level in pretty mode
const INDENT_STEP: usize = 4;

/// Document printer
#[derive(Clone, Copy, Debug)]
pub struct Printer {
    mode: Mode,
}

impl Printer {
    /// Create a printer for the given mode
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Render a document: the prolog when non-empty, then the root element.
    pub fn print(&self, document: &Document) -> Result<String> {
        let mut out = String::new();
        if !document.prolog.is_empty() {
            out.push_str("<?xml ");
            write_attributes(&mut out, &document.prolog);
            out.push_str("?>");
            self.line_break(&mut out);
        }
        self.print_container(&document.root, self.root_indent(), &mut out)?;
        Ok(out)
    }

    const fn root_indent(&self) -> Option<usize> {
        match self.mode {
            Mode::Compact => None,
            Mode::Pretty => Some(0),
        }
    }

    fn line_break(&self, out: &mut String) {
        if matches!(self.mode, Mode::Pretty) {
            out.push('\n');
        }
    }

    /// Opening tag, children one level deeper, closing tag from the same
    /// name field.
    fn print_container(
        &self,
        element: &Element,
        indent: Option<usize>,
        out: &mut String,
    ) -> Result<()> {
        push_indent(out, indent);
        out.push('<');
        write_tag_head(out, &element.name, &element.attributes);
        out.push('>');
        self.line_break(out);

        for child in &element.children {
            self.print_node(child, indent.map(|level| level + INDENT_STEP), out)?;
            self.line_break(out);
        }

        push_indent(out, indent);
        out.push_str("</");
        out.push_str(&element.name);
        out.push('>');
        Ok(())
    }

    /// Route one content node to the form that can represent it: elements
    /// with children to the container form, childless elements to the
    /// self-closing form.
    fn print_node(&self, node: &Node, indent: Option<usize>, out: &mut String) -> Result<()> {
        match node {
            Node::Element(el) if !el.children.is_empty() => {
                self.print_container(el, indent, out)
            }
            Node::Element(el) => {
                push_indent(out, indent);
                print_empty_tag(el, out)
            }
            Node::Comment(body) => {
                push_indent(out, indent);
                out.push_str("<!--");
                out.push_str(body);
                out.push_str("-->");
                Ok(())
            }
            Node::Text(value) => {
                push_indent(out, indent);
                out.push_str(value);
                Ok(())
            }
            Node::Prolog(_) => Err(Error::with_message(
                ErrorKind::StructuralMismatch,
                Span::empty(),
                "prolog is only valid at the start of a document",
            )),
        }
    }
}

/// Self-closing form; fails on elements that carry children.
fn print_empty_tag(element: &Element, out: &mut String) -> Result<()> {
    if !element.children.is_empty() {
        return Err(Error::with_message(
            ErrorKind::StructuralMismatch,
            Span::empty(),
            "element with children cannot use the self-closing form",
        ));
    }
    out.push('<');
    write_tag_head(out, &element.name, &element.attributes);
    out.push_str("/>");
    Ok(())
}

/// Name, then one space and the attribute list when it is non-empty; an
/// empty map emits nothing, not a stray space.
fn write_tag_head(out: &mut String, name: &str, attributes: &Attributes) {
    out.push_str(name);
    if !attributes.is_empty() {
        out.push(' ');
        write_attributes(out, attributes);
    }
}

/// Pairs in iteration order, joined by single spaces, values quoted
/// verbatim.
fn write_attributes(out: &mut String, attributes: &Attributes) {
    for (idx, (key, value)) in attributes.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(key);
        out.push('=');
        out.push('"');
        out.push_str(value);
        out.push('"');
    }
}

fn push_indent(out: &mut String, indent: Option<usize>) {
    if let Some(level) = indent {
        for _ in 0..level {
            out.push(' ');
        }
    }
}
