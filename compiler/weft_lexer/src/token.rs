//! Token types produced by the tokenizer.

use std::fmt;

use weft_lexer_core::Span;

/// What a token is.
///
/// End of input is not a variant: the stream signals it by returning `None`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Element name, `[a-z0-9-]+`.
    Tag(String),
    /// `.name` shorthand, `[a-zA-Z0-9]+` (the dot is not stored).
    Class(String),
    /// `#name` shorthand, `[a-zA-Z0-9]+` (the hash is not stored).
    Id(String),
    /// `|` starting a literal text line.
    Pipe,
    /// Entry of a parenthesized attribute list.
    ///
    /// `value` is `None` for a boolean attribute. Otherwise it holds the raw
    /// text between the quotes; `\"` is kept as written.
    Attribute { name: String, value: Option<String> },
    /// Raw text running to the end of the line.
    Content(String),
    /// Leading whitespace width of a line. Every whitespace character counts
    /// as one, tabs included.
    Indent(usize),
}

impl TokenKind {
    /// Short lowercase name of the token kind, for listings and logs.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Tag(_) => "tag",
            TokenKind::Class(_) => "class",
            TokenKind::Id(_) => "id",
            TokenKind::Pipe => "pipe",
            TokenKind::Attribute { .. } => "attribute",
            TokenKind::Content(_) => "content",
            TokenKind::Indent(_) => "indent",
        }
    }

    pub fn attribute(name: impl Into<String>, value: Option<&str>) -> Self {
        TokenKind::Attribute {
            name: name.into(),
            value: value.map(str::to_owned),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Tag(name) => write!(f, "tag {name}"),
            TokenKind::Class(name) => write!(f, "class .{name}"),
            TokenKind::Id(name) => write!(f, "id #{name}"),
            TokenKind::Pipe => f.write_str("pipe"),
            TokenKind::Attribute { name, value: None } => write!(f, "attribute {name}"),
            TokenKind::Attribute {
                name,
                value: Some(value),
            } => write!(f, "attribute {name}=\"{value}\""),
            TokenKind::Content(text) => write!(f, "content {text:?}"),
            TokenKind::Indent(depth) => write!(f, "indent {depth}"),
        }
    }
}

/// A token with its location in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind, self.span.start)
    }
}

/// Strip spans from a token sequence.
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind.clone()).collect()
}
