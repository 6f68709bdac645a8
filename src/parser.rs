//! Recursive-descent parser for the XML dialect
//!
//! Every method below is the parse direction of one grammar rule; the print
//! direction of the same rule lives in [`crate::printer`]. The parser is
//! whitespace-flexible (any run of horizontal whitespace where the grammar
//! skips, any run of line breaks where it breaks), so the same input parses
//! identically whether it was written compact or indented; only the printer
//! is mode-parameterized.
//!
//! Alternation backtracks by saving and restoring the cursor. The one piece
//! of cross-field validation is the opening/closing tag-name check in
//! [`Parser::container`].

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind, Result, Span};
use crate::model::{Attributes, Document, Element, Node};

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse a complete document: optional prolog, one root element, end of
    /// input.
    pub fn parse(&mut self) -> Result<Document> {
        let save = self.cursor;
        let prolog = match self.prolog() {
            Ok(attrs) => {
                self.cursor.skip_vertical_whitespace();
                attrs
            }
            Err(_) => {
                self.cursor = save;
                Attributes::new()
            }
        };

        let root = self.container()?;

        if !self.cursor.is_eof() {
            return Err(self.error_here(ErrorKind::TrailingInput));
        }

        Ok(Document { prolog, root })
    }

    /// `<?xml` whitespace(1+) attribute-list whitespace(0+) `?>`
    fn prolog(&mut self) -> Result<Attributes> {
        self.expect_literal("<?xml")?;
        if self.cursor.skip_horizontal_whitespace() == 0 {
            return Err(self.expected("whitespace after <?xml"));
        }
        let attrs = self.attribute_list()?;
        self.cursor.skip_horizontal_whitespace();
        self.expect_literal("?>")?;
        Ok(attrs)
    }

    /// Opening tag, recursively parsed content, matching closing tag.
    fn container(&mut self) -> Result<Element> {
        self.cursor.skip_horizontal_whitespace();
        let (name, attributes) = self.opening_tag()?;
        self.cursor.skip_vertical_whitespace();

        let mut children = Vec::new();
        loop {
            // Terminator lookahead: indentation then `</`.
            let save = self.cursor;
            self.cursor.skip_horizontal_whitespace();
            if self.cursor.eat("</") {
                let close = self.cursor.take_while(|c| c != '>').to_string();
                self.expect_char('>')?;
                if close != name {
                    return Err(self.error_here(ErrorKind::MismatchedTag { open: name, close }));
                }
                break;
            }
            self.cursor = save;

            let child = self.content()?;
            self.cursor.skip_vertical_whitespace();
            children.push(child);
        }

        Ok(Element {
            name,
            attributes,
            children,
        })
    }

    /// Ordered alternation: container, empty element, comment, text.
    ///
    /// A mismatched-tag failure is not a branch to backtrack from: once an
    /// opening tag has parsed, no later alternative can match at the same
    /// position, so the check's result is propagated as the parse error.
    fn content(&mut self) -> Result<Node> {
        let save = self.cursor;
        match self.container() {
            Ok(el) => return Ok(Node::Element(el)),
            Err(e) if matches!(e.kind(), ErrorKind::MismatchedTag { .. }) => return Err(e),
            Err(_) => self.cursor = save,
        }

        self.cursor.skip_horizontal_whitespace();
        let save = self.cursor;

        match self.empty_tag() {
            Ok(el) => return Ok(Node::Element(el)),
            Err(_) => self.cursor = save,
        }
        match self.comment() {
            Ok(text) => return Ok(Node::Comment(text)),
            Err(_) => self.cursor = save,
        }
        self.text().map(Node::Text)
    }

    /// `<` tag-head `>` with the self-closing form excluded.
    fn opening_tag(&mut self) -> Result<(String, Attributes)> {
        self.expect_char('<')?;
        if self.cursor.current() == Some('/') {
            return Err(self.expected("tag name"));
        }
        let (name, attrs) = self.tag_head()?;
        if self.cursor.current() == Some('/') {
            return Err(self.expected(">"));
        }
        self.expect_char('>')?;
        Ok((name, attrs))
    }

    /// `<` tag-head `/>` as a childless element.
    fn empty_tag(&mut self) -> Result<Element> {
        self.expect_char('<')?;
        if self.cursor.current() == Some('/') {
            return Err(self.expected("tag name"));
        }
        let (name, attributes) = self.tag_head()?;
        self.expect_char('/')?;
        self.expect_char('>')?;
        Ok(Element {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Tag name plus optional attribute list; trailing horizontal
    /// whitespace is consumed so both `<a>` and `<a >` reach the `>`.
    fn tag_head(&mut self) -> Result<(String, Attributes)> {
        let name = self.tag_name()?;
        let attrs = self.attribute_list_opt();
        self.cursor.skip_horizontal_whitespace();
        Ok((name, attrs))
    }

    /// Maximal run of Unicode letters, at least one.
    fn tag_name(&mut self) -> Result<String> {
        let name = self.cursor.take_while(char::is_alphabetic);
        if name.is_empty() {
            return Err(self.error_here(ErrorKind::InvalidName));
        }
        Ok(name.to_string())
    }

    /// Whitespace-then-attributes when present, the empty map otherwise.
    ///
    /// Absence and the empty map are deliberately the same value; the
    /// printer emits no whitespace clause for an empty map, which is what
    /// keeps `<a>` and `<a >` round-tripping to the same canonical text.
    fn attribute_list_opt(&mut self) -> Attributes {
        let save = self.cursor;
        if self.cursor.skip_horizontal_whitespace() == 0 {
            return Attributes::new();
        }
        match self.attribute_list() {
            Ok(attrs) => attrs,
            Err(_) => {
                self.cursor = save;
                Attributes::new()
            }
        }
    }

    /// One or more attributes separated by horizontal whitespace, folded
    /// left to right; a repeated key keeps its first position and takes the
    /// last value.
    fn attribute_list(&mut self) -> Result<Attributes> {
        let mut attrs = Attributes::new();
        let (key, value) = self.attribute()?;
        attrs.insert(key, value);
        loop {
            let save = self.cursor;
            if self.cursor.skip_horizontal_whitespace() == 0 {
                break;
            }
            match self.attribute() {
                Ok((key, value)) => {
                    attrs.insert(key, value);
                }
                Err(_) => {
                    self.cursor = save;
                    break;
                }
            }
        }
        Ok(attrs)
    }

    /// `key="value"`; the key is the run up to `=`, stopping at a tag
    /// boundary.
    fn attribute(&mut self) -> Result<(String, String)> {
        let key = self
            .cursor
            .take_while(|c| !matches!(c, '=' | '<' | '>' | '/'))
            .to_string();
        self.expect_char('=')?;
        let value = self.quoted_string()?;
        Ok((key, value))
    }

    /// `"` literal-run `"`; no escape processing.
    fn quoted_string(&mut self) -> Result<String> {
        self.expect_char('"')?;
        let Some(value) = self.cursor.take_until("\"") else {
            return Err(self.error_here(ErrorKind::UnterminatedString));
        };
        let value = value.to_string();
        self.cursor.advance();
        Ok(value)
    }

    /// `<!--` shortest-run `-->`; the body is kept literally and may
    /// contain `<`.
    fn comment(&mut self) -> Result<String> {
        self.expect_literal("<!--")?;
        let Some(body) = self.cursor.take_until("-->") else {
            return Err(self.error_here(ErrorKind::UnterminatedComment));
        };
        let body = body.to_string();
        self.cursor.eat("-->");
        Ok(body)
    }

    /// Run of at least one character excluding `<` and line breaks, after
    /// optional horizontal whitespace.
    fn text(&mut self) -> Result<String> {
        self.cursor.skip_horizontal_whitespace();
        let run = self.cursor.take_while(|c| !matches!(c, '<' | '\n' | '\r'));
        if run.is_empty() {
            return Err(self.expected("text"));
        }
        Ok(run.to_string())
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        if self.cursor.consume(expected) {
            Ok(())
        } else {
            Err(self.expected(&expected.to_string()))
        }
    }

    fn expect_literal(&mut self, literal: &str) -> Result<()> {
        if self.cursor.eat(literal) {
            Ok(())
        } else {
            Err(self.expected(literal))
        }
    }

    fn expected(&self, expected: &str) -> Error {
        let found = match self.cursor.current() {
            Some(c) => c.to_string(),
            None => "end of input".to_string(),
        };
        self.error_here(ErrorKind::Expected {
            expected: expected.to_string(),
            found,
        })
    }

    fn error_here(&self, kind: ErrorKind) -> Error {
        let pos = self.cursor.position();
        Error::new(kind, Span::new(pos, pos))
    }
}
