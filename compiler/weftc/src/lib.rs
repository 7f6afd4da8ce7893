//! Weft command-line driver.
//!
//! The `weft` binary is a thin shell over [`commands`]; everything it does
//! is reachable from here so integration tests can call it directly.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from the environment.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=weft_lexer=trace`. Set `WEFT_LOG_TREE=1` for
/// hierarchical span output instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("WEFT_LOG_TREE").is_some();
        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_indent_lines(true)
        });
        let flat_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(tree_layer)
            .with(flat_layer)
            .init();
    });
}
