//! Character cursor for navigating input with position tracking
//!
//! The cursor is `Copy`, so a caller can save it before an alternative and
//! restore it on failure; backtracking in the parser is a plain assignment.

use crate::error::Pos;

/// Cursor over a source string with line/column tracking
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create cursor from source text
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Remaining input
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Get current character without consuming
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance cursor by one character
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    /// Consume character if it matches
    pub fn consume(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `literal` if the remaining input starts with it
    pub fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            for _ in literal.chars() {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    /// Longest run of characters satisfying `pred`, possibly empty
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if pred(c) {
                self.advance();
            } else {
                break;
            }
        }
        self.slice_from(start)
    }

    /// Everything before the first occurrence of `literal`, leaving the
    /// cursor on the literal; `None` if the literal never occurs
    pub fn take_until(&mut self, literal: &str) -> Option<&'a str> {
        let start = self.pos;
        while !self.is_eof() {
            if self.rest().starts_with(literal) {
                return Some(self.slice_from(start));
            }
            self.advance();
        }
        None
    }

    /// Skip spaces and tabs, returning the number of bytes skipped
    pub fn skip_horizontal_whitespace(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.current(), Some(' ' | '\t')) {
            self.advance();
        }
        self.pos - start
    }

    /// Skip line breaks, returning the number of bytes skipped
    pub fn skip_vertical_whitespace(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.current(), Some('\n' | '\r')) {
            self.advance();
        }
        self.pos - start
    }

    /// Get current position
    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Get slice from start to current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }
}
