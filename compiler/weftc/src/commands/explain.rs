//! The `explain` command: display documentation for tokenizer error codes.

/// Long-form description of an error code, if it exists.
pub fn explanation(code: &str) -> Option<&'static str> {
    let doc = match code.to_ascii_uppercase().as_str() {
        "W0001" => {
            "W0001: unrecognized character\n\n\
             The character at this position starts no token. Lines hold a tag\n\
             (lowercase letters, digits, '-'), '.class', '#id', an attribute\n\
             list in parentheses, or '|' for literal text. Tags are lowercase:\n\n\
             \x20   Div      // error\n\
             \x20   div      // ok"
        }
        "W0002" => {
            "W0002: nested attribute list\n\n\
             An attribute list was opened while another was still open.\n\
             Attribute lists do not nest; close the first one with ')':\n\n\
             \x20   div(a(b)      // error\n\
             \x20   div(a)(b)     // ok"
        }
        "W0003" => {
            "W0003: attribute value without quotes\n\n\
             An attribute name followed by '=' must be followed by a\n\
             double-quoted value:\n\n\
             \x20   a(href=/home)     // error\n\
             \x20   a(href=\"/home\")   // ok"
        }
        "W0004" => {
            "W0004: unterminated attribute value\n\n\
             The line or the input ended before the closing '\"'. Values\n\
             cannot span lines. A quote preceded by a backslash does not\n\
             close the value:\n\n\
             \x20   div(title=\"a\\\"b\")   // value is a\\\"b"
        }
        "W0005" => {
            "W0005: loop limit reached\n\n\
             The tokenizer took more dispatch steps than its configured\n\
             ceiling allows. Raise it with --loop-limit=<n>, or omit the\n\
             flag to size the ceiling to the input."
        }
        _ => return None,
    };
    Some(doc)
}

/// Print the documentation for `code`, or exit with an error.
pub fn explain_error(code: &str) {
    if let Some(doc) = explanation(code) {
        println!("{doc}");
    } else {
        eprintln!("Unknown error code: {code}");
        eprintln!();
        eprintln!("Codes have the format WXXXX where X is a digit (W0001-W0005).");
        std::process::exit(1);
    }
}
