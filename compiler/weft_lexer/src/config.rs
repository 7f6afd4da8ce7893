//! Tokenizer configuration.

/// Default ceiling on dispatch steps per token stream.
pub const DEFAULT_LOOP_LIMIT: usize = 500;

/// Knobs for a [`TokenStream`](crate::TokenStream).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// Hard ceiling on the number of dispatch steps a stream may take over
    /// its whole lifetime. Exceeding it fails with `LoopLimitExceeded`.
    pub loop_limit: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            loop_limit: DEFAULT_LOOP_LIMIT,
        }
    }
}

impl LexerConfig {
    /// Configuration whose loop ceiling scales with the size of `source`.
    ///
    /// Each dispatch step either consumes a character or yields a token, and
    /// a character yields at most a couple of steps, so `4 * chars + 16`
    /// never trips on well-formed input. The fixed default stays the floor.
    pub fn for_source(source: &str) -> Self {
        let chars = source.chars().count();
        Self {
            loop_limit: chars
                .saturating_mul(4)
                .saturating_add(16)
                .max(DEFAULT_LOOP_LIMIT),
        }
    }

    #[must_use]
    pub fn with_loop_limit(mut self, loop_limit: usize) -> Self {
        self.loop_limit = loop_limit;
        self
    }
}
