//! Input abstraction for parse sources

use crate::error::{Error, ErrorKind, Result, Span};

/// Input source abstraction
#[derive(Clone, Copy, Debug)]
pub struct Input<'a> {
    source: &'a str,
    filename: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Create from string
    pub const fn from_str(source: &'a str) -> Self {
        Self {
            source,
            filename: None,
        }
    }

    /// Create from byte slice, validating UTF-8
    pub fn from_bytes(source: &'a [u8]) -> Result<Self> {
        let source = std::str::from_utf8(source)
            .map_err(|_| Error::new(ErrorKind::InvalidUtf8, Span::empty()))?;
        Ok(Self {
            source,
            filename: None,
        })
    }

    /// Set filename for error reporting
    pub const fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Get source text
    pub const fn as_str(&self) -> &'a str {
        self.source
    }

    /// Get filename if set
    pub const fn filename(&self) -> Option<&str> {
        self.filename
    }

    /// Get length in bytes
    pub const fn len(&self) -> usize {
        self.source.len()
    }

    /// Check if empty
    pub const fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Self::from_str(s)
    }
}
