//! Low-level building blocks for the Weft tokenizer.
//!
//! Provides the [`CharCursor`] abstraction the tokenizer reads characters
//! through, a [`SourceCursor`] implementation over in-memory `&str` source,
//! and the [`Position`]/[`Span`] types used to locate tokens and errors.

mod cursor;
mod span;

pub use cursor::{CharCursor, SourceCursor};
pub use span::{Position, Span};
