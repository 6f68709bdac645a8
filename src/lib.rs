//! xmlcodec - invertible parser and printer for a constrained XML dialect
//!
//! Parsing builds an ordered document tree; printing renders a tree back to
//! text in compact or pretty form. Over the accepted subset the two
//! directions are mutual inverses: printing a parsed document in the mode
//! its source was written in reproduces the source byte for byte, and
//! parsing printed output rebuilds the same tree.
//!
//! # Quick Start
//!
//! ```
//! use xmlcodec::{from_str, to_xml, Mode};
//! # fn main() -> Result<(), xmlcodec::Error> {
//! let text = "<config><entry name=\"retries\"/></config>";
//! let doc = from_str(text)?;
//! assert_eq!(doc.root.name, "config");
//! assert_eq!(to_xml(&doc, Mode::Compact)?, text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod input;
pub use input::Input;

pub mod cursor;
pub use cursor::Cursor;

pub mod model;
pub use model::{Attributes, Document, Element, Node};

pub mod parser;
pub use parser::Parser;

pub mod printer;
pub use printer::{Mode, Printer};

/// Parse a document from a string
pub fn from_str(s: &str) -> Result<Document> {
    let input = Input::from_str(s);
    let mut parser = Parser::new(input.as_str());
    parser.parse()
}

/// Parse a document from raw bytes, validating UTF-8 first
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    let input = Input::from_bytes(bytes)?;
    let mut parser = Parser::new(input.as_str());
    parser.parse()
}

/// Render a document in the requested mode
pub fn to_xml(document: &Document, mode: Mode) -> Result<String> {
    Printer::new(mode).print(document)
}
