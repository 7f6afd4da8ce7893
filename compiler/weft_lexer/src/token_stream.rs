//! Pull-based tokenizer for Weft markup.
//!
//! # Design
//!
//! Each request runs the dispatch loop (`TokenStream::dispatch`): it looks
//! at the next character and the current [`LexMode`], then hands off to one
//! focused producer (`tag`, `class`, `attribute`, `content`, `indent`, ...)
//! that consumes exactly the characters of its token. A branch that does not
//! produce a token (opening or closing an attribute list, skipping attribute
//! separators) always consumes at least one character before looping, so the
//! number of dispatch steps is bounded by the input length. The loop guard
//! enforces a hard ceiling on top of that.
//!
//! One token of lookahead is cached for [`TokenStream::peek`].
//!
//! Errors are fatal. They all leave through `TokenStream::read_next`, which
//! passes them to the [`TokenStream::error`] hook and makes the stream
//! return the same error from then on.

use std::iter::FusedIterator;

use tracing::{debug, trace};
use weft_lexer_core::{CharCursor, Position, SourceCursor, Span};

use crate::config::LexerConfig;
use crate::lex_error::LexError;
use crate::mode::{LexMode, LoopGuard};
use crate::token::{Token, TokenKind};

/// Tokenizer bound to a single cursor.
pub struct TokenStream<C> {
    cursor: C,
    mode: LexMode,
    /// The first line's indentation has not been emitted yet.
    sof_indent_pending: bool,
    guard: LoopGuard,
    lookahead: Option<Token>,
    exhausted: bool,
    failure: Option<LexError>,
}

impl<'a> TokenStream<SourceCursor<'a>> {
    /// Tokenize in-memory source with a loop ceiling sized to it.
    pub fn from_source(source: &'a str) -> Self {
        Self::with_config(SourceCursor::new(source), LexerConfig::for_source(source))
    }
}

impl<C: CharCursor> TokenStream<C> {
    pub fn new(cursor: C) -> Self {
        Self::with_config(cursor, LexerConfig::default())
    }

    pub fn with_config(cursor: C, config: LexerConfig) -> Self {
        Self {
            cursor,
            mode: LexMode::Normal,
            sof_indent_pending: true,
            guard: LoopGuard::new(config.loop_limit),
            lookahead: None,
            exhausted: false,
            failure: None,
        }
    }

    /// Current lexing mode.
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Returns the next token without consuming it.
    ///
    /// Repeated calls return the same token until [`next`](Self::next) is
    /// called. `Ok(None)` means the input is exhausted.
    pub fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        if self.lookahead.is_none() {
            self.lookahead = self.read_next()?;
        }
        Ok(self.lookahead.as_ref())
    }

    /// Returns and consumes the next token.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible pull API; `into_tokens` is the Iterator view"
    )]
    pub fn next(&mut self) -> Result<Option<Token>, LexError> {
        match self.lookahead.take() {
            Some(token) => Ok(Some(token)),
            None => self.read_next(),
        }
    }

    /// Returns `true` when no tokens remain.
    pub fn eof(&mut self) -> Result<bool, LexError> {
        Ok(self.peek()?.is_none())
    }

    /// Drain the stream into a vector.
    ///
    /// Not restartable: once exhausted, further calls return an empty vector.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next()? {
            tokens.push(token);
        }
        debug!(
            count = tokens.len(),
            steps = self.guard.steps(),
            "tokenization complete"
        );
        Ok(tokens)
    }

    /// Hook invoked with every fatal error before it is returned.
    ///
    /// Does nothing here. A recovering tokenizer would turn the error into a
    /// token at this point instead of aborting.
    #[allow(
        clippy::unused_self,
        reason = "extension point for error recovery"
    )]
    pub fn error(&mut self, _error: &LexError) {}

    /// Iterator over the remaining tokens.
    ///
    /// Yields `Err` at most once, then stops.
    pub fn into_tokens(self) -> Tokens<C> {
        Tokens {
            stream: self,
            done: false,
        }
    }

    fn read_next(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        if self.exhausted {
            return Ok(None);
        }
        match self.dispatch() {
            Ok(Some(token)) => {
                trace!(kind = token.kind.name(), at = %token.span.start, "token");
                Ok(Some(token))
            }
            Ok(None) => {
                self.exhausted = true;
                Ok(None)
            }
            Err(error) => {
                debug!(code = error.code(), %error, "tokenization failed");
                self.error(&error);
                self.failure = Some(error.clone());
                Err(error)
            }
        }
    }

    // ─── Dispatch ──────────────────────────────────────────────────────

    fn dispatch(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            if !self.guard.tick() {
                return Err(LexError::loop_limit_exceeded(
                    self.guard.limit(),
                    self.cursor.position(),
                ));
            }

            let Some(ch) = self.cursor.peek() else {
                return Ok(None);
            };
            let start = self.cursor.position();

            if self.sof_indent_pending && self.cursor.sof() {
                self.sof_indent_pending = false;
                return Ok(Some(self.indent(start)));
            }

            if is_line_terminator(ch) {
                if self.mode == LexMode::PipeText {
                    self.set_mode(LexMode::Normal);
                }
                return Ok(Some(self.indent(start)));
            }

            match self.mode {
                LexMode::Normal | LexMode::PipeText => {}
                LexMode::AttributeList => match ch {
                    '(' => return Err(LexError::nested_attribute_block(start)),
                    ')' => {
                        self.cursor.next();
                        self.set_mode(LexMode::Normal);
                        continue;
                    }
                    _ => {
                        self.cursor.eat_while(is_attribute_separator);
                        if self.cursor.peek().is_some_and(is_attribute_start) {
                            let start = self.cursor.position();
                            return self.attribute(start).map(Some);
                        }
                        continue;
                    }
                },
            }

            return match ch {
                '|' => Ok(Some(self.pipe(start))),
                '.' => {
                    self.cursor.next();
                    Ok(Some(self.class(start)))
                }
                '#' => {
                    self.cursor.next();
                    Ok(Some(self.id(start)))
                }
                c if is_indent(c) => {
                    // exactly one separator
                    self.cursor.next();
                    Ok(Some(self.content(start)))
                }
                // Pipe text has no tags or attribute lists.
                _ if self.mode == LexMode::PipeText => Ok(Some(self.content(start))),
                '(' => {
                    self.cursor.next();
                    self.set_mode(LexMode::AttributeList);
                    continue;
                }
                // Stray closer outside a list: consumed and ignored.
                ')' => {
                    self.cursor.next();
                    continue;
                }
                c if is_tag_start(c) => Ok(Some(self.tag(start))),
                c => Err(LexError::unexpected_char(c, start)),
            };
        }
    }

    fn set_mode(&mut self, mode: LexMode) {
        trace!(from = ?self.mode, to = ?mode, "mode");
        self.mode = mode;
    }

    fn finish(&self, kind: TokenKind, start: Position) -> Token {
        Token::new(kind, Span::new(start, self.cursor.position()))
    }

    // ─── Indentation ───────────────────────────────────────────────────

    /// Indentation of the line at the cursor.
    ///
    /// Consumes any line terminators first. Lines holding nothing but
    /// whitespace are blank: the depth reported is that of the next line
    /// with content (or of the trailing whitespace at end of input).
    fn indent(&mut self, start: Position) -> Token {
        let mut depth = self.cursor.eat_while(is_indent);
        while self.cursor.peek().is_some_and(is_line_terminator) {
            self.cursor.eat_while(is_line_terminator);
            depth = self.cursor.eat_while(is_indent);
        }
        self.finish(TokenKind::Indent(depth), start)
    }

    // ─── Structure ─────────────────────────────────────────────────────

    fn tag(&mut self, start: Position) -> Token {
        let name = self.cursor.take_while(is_tag_char);
        self.finish(TokenKind::Tag(name), start)
    }

    fn class(&mut self, start: Position) -> Token {
        let name = self.cursor.take_while(is_css_name_char);
        self.finish(TokenKind::Class(name), start)
    }

    fn id(&mut self, start: Position) -> Token {
        let name = self.cursor.take_while(is_css_name_char);
        self.finish(TokenKind::Id(name), start)
    }

    // ─── Text ──────────────────────────────────────────────────────────

    fn pipe(&mut self, start: Position) -> Token {
        self.cursor.next(); // consume '|'
        self.cursor.eat_while(is_indent);
        self.set_mode(LexMode::PipeText);
        self.finish(TokenKind::Pipe, start)
    }

    fn content(&mut self, start: Position) -> Token {
        let text = self.cursor.take_while(|c| !is_line_terminator(c));
        self.finish(TokenKind::Content(text), start)
    }

    // ─── Attributes ────────────────────────────────────────────────────

    fn attribute(&mut self, start: Position) -> Result<Token, LexError> {
        let name = self.cursor.take_while(is_attribute_name_char);
        let value = if self.cursor.peek() == Some('=') {
            self.cursor.next();
            if self.cursor.peek() != Some('"') {
                return Err(LexError::missing_attribute_quote(self.cursor.position()));
            }
            self.cursor.next(); // opening quote
            Some(self.quoted_value()?)
        } else {
            None
        };
        Ok(self.finish(TokenKind::Attribute { name, value }, start))
    }

    /// Scan a quoted value up to its closing quote, which is consumed.
    ///
    /// A quote preceded by a backslash does not close the value. The
    /// backslash stays in the returned text.
    fn quoted_value(&mut self) -> Result<String, LexError> {
        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(LexError::unterminated_attribute_value(
                        self.cursor.position(),
                    ))
                }
                Some(c) if is_line_terminator(c) => {
                    return Err(LexError::unterminated_attribute_value(
                        self.cursor.position(),
                    ))
                }
                Some('"') if self.cursor.peek_prev() != Some('\\') => {
                    self.cursor.next();
                    return Ok(value);
                }
                Some(c) => {
                    value.push(c);
                    self.cursor.next();
                }
            }
        }
    }
}

/// Iterator adapter returned by [`TokenStream::into_tokens`].
pub struct Tokens<C> {
    stream: TokenStream<C>,
    done: bool,
}

impl<C: CharCursor> Iterator for Tokens<C> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.stream.next() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl<C: CharCursor> FusedIterator for Tokens<C> {}

// ─── Character classes ─────────────────────────────────────────────────

#[inline]
fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Whitespace that does not end a line.
#[inline]
fn is_indent(c: char) -> bool {
    c.is_whitespace() && !is_line_terminator(c)
}

#[inline]
fn is_tag_start(c: char) -> bool {
    c.is_ascii_lowercase()
}

#[inline]
fn is_tag_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

#[inline]
fn is_css_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[inline]
fn is_attribute_start(c: char) -> bool {
    c.is_ascii_lowercase()
}

#[inline]
fn is_attribute_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '-'
}

/// Anything between attribute entries: commas, spaces, stray symbols.
/// Parentheses and line ends are left for the dispatcher.
#[inline]
fn is_attribute_separator(c: char) -> bool {
    !c.is_ascii_lowercase() && c != '(' && c != ')' && !is_line_terminator(c)
}
