//! Weft CLI
//!
//! Tokenizer driver for Weft markup.

use weftc::commands::{explain_error, lex_file, parse_lex_options};

fn main() {
    weftc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with("--")) else {
                eprintln!("Usage: weft lex <file.weft | -> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --spans              Print full token spans");
                eprintln!("  --loop-limit=<n>     Fixed dispatch step ceiling");
                std::process::exit(1);
            };

            let options = match parse_lex_options(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };

            lex_file(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Weft {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: weft --explain <ERROR_CODE>");
                eprintln!("Example: weft --explain W0004");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Weft markup tokenizer");
    println!();
    println!("Usage: weft <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.weft>      Tokenize and display tokens ('-' reads stdin)");
    println!("  --explain <code>     Explain an error code (e.g., W0004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --spans              Print full token spans");
    println!("  --loop-limit=<n>     Fixed dispatch step ceiling");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=weft_lexer=trace   Trace every token and mode change");
    println!("  WEFT_LOG_TREE=1             Hierarchical log output");
}
