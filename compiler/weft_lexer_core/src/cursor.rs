//! Character cursor over in-memory source text.
//!
//! The tokenizer reads its input one `char` at a time through the
//! [`CharCursor`] trait. Consumption is append-only: there is no way to
//! move the cursor backwards, only to look at the next character or the
//! one most recently consumed.
//!
//! [`SourceCursor`] is the standard implementation over a `&str`. It tracks
//! the byte offset alongside a 1-based line/column pair so every token and
//! error can be located in the source.

use crate::span::Position;

/// Character-level read access used by the tokenizer.
///
/// End of input is signalled by `None` from [`peek`](Self::peek) and
/// [`next`](Self::next); once reached, it is sticky.
pub trait CharCursor {
    /// Returns the next character without consuming it.
    fn peek(&self) -> Option<char>;

    /// Consumes and returns the next character.
    fn next(&mut self) -> Option<char>;

    /// Returns the most recently consumed character.
    fn peek_prev(&self) -> Option<char>;

    /// Returns `true` once every character has been consumed.
    fn eof(&self) -> bool {
        self.peek().is_none()
    }

    /// Returns `true` only before any character has been consumed.
    fn sof(&self) -> bool;

    /// Location of the next unconsumed character.
    fn position(&self) -> Position;

    /// Consume characters while `pred` holds for the next one.
    ///
    /// Returns the consumed run. Stops at end of input.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String
    where
        Self: Sized,
    {
        let mut taken = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            taken.push(c);
            self.next();
        }
        taken
    }

    /// Consume characters while `pred` holds, returning how many were eaten.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.next();
            count += 1;
        }
        count
    }
}

/// Cursor over a borrowed source string.
///
/// Line breaks are `\n`, `\r\n`, or a lone `\r`; a `\r\n` pair advances the
/// line counter once.
#[derive(Clone, Debug)]
pub struct SourceCursor<'a> {
    source: &'a str,
    /// Byte offset of the next unconsumed character.
    pos: usize,
    line: u32,
    column: u32,
    prev: Option<char>,
}

impl<'a> SourceCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            prev: None,
        }
    }

    /// Unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn offset(&self) -> u32 {
        u32::try_from(self.pos).unwrap_or(u32::MAX)
    }
}

impl CharCursor for SourceCursor<'_> {
    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        let breaks_line = c == '\n' || (c == '\r' && self.peek() != Some('\n'));
        if breaks_line {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.prev = Some(c);
        Some(c)
    }

    #[inline]
    fn peek_prev(&self) -> Option<char> {
        self.prev
    }

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    fn sof(&self) -> bool {
        self.pos == 0
    }

    fn position(&self) -> Position {
        Position::new(self.offset(), self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
