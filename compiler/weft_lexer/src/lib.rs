//! Tokenizer for Weft, a compact indentation-sensitive markup language.
//!
//! ```text
//! div.box#main(title="hi", hidden) Hello
//!   | literal text
//! ```
//!
//! The tokenizer turns source text into a flat sequence of [`Token`]s:
//! `Indent` at the start of every line, then tags, `.class` and `#id`
//! shorthands, attribute list entries, `|` pipe markers, and raw content.
//! Nesting is left to the parser, which reads it from the `Indent` depths.
//!
//! Tokens are pulled lazily through [`TokenStream`], or collected at once
//! with [`tokenize`]. Any lexical error is fatal and ends the stream.

mod config;
mod lex_error;
mod mode;
mod token;
mod token_stream;

pub use config::{LexerConfig, DEFAULT_LOOP_LIMIT};
pub use lex_error::{LexError, LexErrorKind};
pub use mode::LexMode;
pub use token::{kinds, Token, TokenKind};
pub use token_stream::{TokenStream, Tokens};
pub use weft_lexer_core::{CharCursor, Position, SourceCursor, Span};

/// Tokenize `source` completely.
///
/// Uses [`LexerConfig::for_source`], so the loop ceiling grows with the input.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    TokenStream::from_source(source).run()
}

/// Tokenize `source` with an explicit configuration.
pub fn tokenize_with_config(source: &str, config: LexerConfig) -> Result<Vec<Token>, LexError> {
    TokenStream::with_config(SourceCursor::new(source), config).run()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_nested_document() {
        let source = "ul.menu\n  li(data-id=\"1\") One\n  li(data-id=\"2\", active) Two\n";
        let tokens = tokenize(source).unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Indent(0),
                TokenKind::Tag("ul".into()),
                TokenKind::Class("menu".into()),
                TokenKind::Indent(2),
                TokenKind::Tag("li".into()),
                TokenKind::attribute("data-id", Some("1")),
                TokenKind::Content("One".into()),
                TokenKind::Indent(2),
                TokenKind::Tag("li".into()),
                TokenKind::attribute("data-id", Some("2")),
                TokenKind::attribute("active", None),
                TokenKind::Content("Two".into()),
                TokenKind::Indent(0),
            ]
        );
    }

    #[test]
    fn tokenize_with_config_applies_limit() {
        let config = LexerConfig::default().with_loop_limit(1);
        let err = tokenize_with_config("div span", config).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::LoopLimitExceeded { limit: 1 });
    }

    #[test]
    fn for_source_limit_never_below_default() {
        assert_eq!(LexerConfig::for_source("").loop_limit, DEFAULT_LOOP_LIMIT);
        let long = "p\n".repeat(1_000);
        assert_eq!(LexerConfig::for_source(&long).loop_limit, 8_016);
    }
}
