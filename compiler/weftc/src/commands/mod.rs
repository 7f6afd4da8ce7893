//! Command handlers for the Weft CLI.
//!
//! Each submodule implements one command. Shared utilities like
//! [`read_source`] live here in the module root.

use std::io::Read;

use thiserror::Error;

mod explain;
mod lex;

pub use explain::{explain_error, explanation};
pub use lex::{lex_file, parse_lex_options, render_tokens, LexOptions};

/// Failure to obtain source text for a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for {flag}: '{value}'")]
    InvalidOption { flag: &'static str, value: String },
}

/// Read source text from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &str) -> Result<String, CommandError> {
    if path == "-" {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(e) => Err(classify_io_error("<stdin>", e)),
        };
    }
    std::fs::read_to_string(path).map_err(|e| classify_io_error(path, e))
}

fn classify_io_error(path: &str, error: std::io::Error) -> CommandError {
    match error.kind() {
        std::io::ErrorKind::NotFound => CommandError::NotFound(path.to_string()),
        std::io::ErrorKind::PermissionDenied => CommandError::PermissionDenied(path.to_string()),
        std::io::ErrorKind::InvalidData => CommandError::InvalidUtf8(path.to_string()),
        _ => CommandError::Io {
            path: path.to_string(),
            source: error,
        },
    }
}
