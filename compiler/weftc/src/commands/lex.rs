//! The `lex` command: tokenize a file and list its tokens.

use weft_lexer::{tokenize_with_config, LexError, LexerConfig};

use super::{read_source, CommandError};

/// Flags accepted by `weft lex`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LexOptions {
    /// Fixed loop ceiling; `None` sizes it to the input.
    pub loop_limit: Option<usize>,
    /// Print full spans instead of start positions.
    pub spans: bool,
}

impl LexOptions {
    fn config(&self, source: &str) -> LexerConfig {
        match self.loop_limit {
            Some(limit) => LexerConfig::default().with_loop_limit(limit),
            None => LexerConfig::for_source(source),
        }
    }
}

/// Parse `lex` flags. Arguments that are not flags are ignored.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CommandError> {
    let mut options = LexOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--loop-limit=") {
            let limit = value.parse().map_err(|_| CommandError::InvalidOption {
                flag: "--loop-limit",
                value: value.to_string(),
            })?;
            options.loop_limit = Some(limit);
        } else if arg == "--spans" {
            options.spans = true;
        }
    }
    Ok(options)
}

/// Tokenize `source` and render one line per token.
pub fn render_tokens(source: &str, options: &LexOptions) -> Result<Vec<String>, LexError> {
    let tokens = tokenize_with_config(source, options.config(source))?;
    Ok(tokens
        .iter()
        .map(|token| {
            if options.spans {
                format!("{} @ {}", token.kind, token.span)
            } else {
                format!("{} @ {}", token.kind, token.span.start)
            }
        })
        .collect())
}

/// Lex a file (or stdin for `-`) and display the token stream.
pub fn lex_file(path: &str, options: &LexOptions) {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match render_tokens(&source, options) {
        Ok(lines) => {
            println!("Tokens for '{}' ({} tokens):", path, lines.len());
            for line in lines {
                println!("  {line}");
            }
        }
        Err(error) => {
            eprintln!("{path}: {error}");
            std::process::exit(1);
        }
    }
}
