//! Error types for xmlcodec

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required literal, delimiter or pattern is absent
    Expected { expected: String, found: String },
    /// Quoted attribute value without a closing quote
    UnterminatedString,
    /// Comment without a closing `-->`
    UnterminatedComment,
    /// Tag name missing or not a run of letters
    InvalidName,
    /// Closing tag name differs from the opening tag name
    MismatchedTag { open: String, close: String },
    /// Input continues past the end of the document
    TrailingInput,
    /// Byte input is not valid UTF-8
    InvalidUtf8,
    /// A tree shape the selected print form cannot represent
    StructuralMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::UnterminatedString => write!(f, "unterminated quoted string"),
            Self::UnterminatedComment => write!(f, "unterminated comment"),
            Self::InvalidName => write!(f, "invalid tag name"),
            Self::MismatchedTag { open, close } => {
                write!(f, "mismatched closing tag: opened <{open}>, closed </{close}>")
            }
            Self::TrailingInput => write!(f, "unexpected input after document end"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
            Self::StructuralMismatch => write!(f, "tree shape not printable in this form"),
        }
    }
}

/// Main error type for xmlcodec
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        let pos = Pos::new(offset, line, col);
        Self::new(kind, Span::new(pos, pos))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for xmlcodec
pub type Result<T> = std::result::Result<T, Error>;
