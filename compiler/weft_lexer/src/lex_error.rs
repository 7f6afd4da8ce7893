//! Fatal tokenizer errors.
//!
//! Every error stops tokenization. The error carries WHAT went wrong
//! (`kind`) and WHERE (`position` of the offending character, or of the
//! point where input ran out).

use thiserror::Error;
use weft_lexer_core::Position;

/// A fatal tokenizer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("error[{}] at {}: {}", .kind.code(), .position, .kind)]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE it went wrong.
    pub position: Position,
}

/// What kind of tokenizer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Character matches no rule in the current mode.
    #[error("unrecognized character {found:?}")]
    UnexpectedChar { found: char },
    /// `(` while an attribute list is already open.
    #[error("open attributes char \"(\" was found inside an attribute definition")]
    NestedAttributeBlock,
    /// `=` not followed by `"`.
    #[error("expected '\"' to begin the attribute value")]
    MissingAttributeQuote,
    /// Line or input ended before the closing `"`.
    #[error("reached the end of the line without a matching '\"' to close the attribute value")]
    UnterminatedAttributeValue,
    /// The dispatch loop ran more times than the configured ceiling allows.
    #[error("loop limit of {limit} dispatch steps reached")]
    LoopLimitExceeded { limit: usize },
}

impl LexErrorKind {
    /// Stable error code, `W0001`..`W0005`.
    pub fn code(&self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedChar { .. } => "W0001",
            LexErrorKind::NestedAttributeBlock => "W0002",
            LexErrorKind::MissingAttributeQuote => "W0003",
            LexErrorKind::UnterminatedAttributeValue => "W0004",
            LexErrorKind::LoopLimitExceeded { .. } => "W0005",
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError { kind, position }
    }

    pub fn unexpected_char(found: char, position: Position) -> Self {
        Self::new(LexErrorKind::UnexpectedChar { found }, position)
    }

    pub fn nested_attribute_block(position: Position) -> Self {
        Self::new(LexErrorKind::NestedAttributeBlock, position)
    }

    pub fn missing_attribute_quote(position: Position) -> Self {
        Self::new(LexErrorKind::MissingAttributeQuote, position)
    }

    pub fn unterminated_attribute_value(position: Position) -> Self {
        Self::new(LexErrorKind::UnterminatedAttributeValue, position)
    }

    pub fn loop_limit_exceeded(limit: usize, position: Position) -> Self {
        Self::new(LexErrorKind::LoopLimitExceeded { limit }, position)
    }

    /// Stable error code of the underlying kind.
    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

#[cfg(test)]
mod tests;
