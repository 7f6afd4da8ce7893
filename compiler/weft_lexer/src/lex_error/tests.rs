use super::*;
use pretty_assertions::assert_eq;

#[test]
fn error_construction() {
    let at = Position::new(4, 1, 5);
    let err = LexError::nested_attribute_block(at);
    assert_eq!(err.position, at);
    assert_eq!(err.kind, LexErrorKind::NestedAttributeBlock);
}

#[test]
fn unexpected_char_names_the_character() {
    let err = LexError::unexpected_char('%', Position::new(3, 1, 4));
    assert_eq!(
        err.to_string(),
        "error[W0001] at 1:4: unrecognized character '%'"
    );
}

#[test]
fn display_includes_code_and_position() {
    let err = LexError::unterminated_attribute_value(Position::new(14, 1, 15));
    let rendered = err.to_string();
    assert!(rendered.starts_with("error[W0004] at 1:15: "), "{rendered}");
    assert!(rendered.contains("close the attribute value"), "{rendered}");
}

#[test]
fn loop_limit_message_carries_limit() {
    let err = LexError::loop_limit_exceeded(500, Position::START);
    assert_eq!(err.kind, LexErrorKind::LoopLimitExceeded { limit: 500 });
    assert!(err.to_string().contains("500"));
}

#[test]
fn codes_are_distinct() {
    let kinds = [
        LexErrorKind::UnexpectedChar { found: 'x' },
        LexErrorKind::NestedAttributeBlock,
        LexErrorKind::MissingAttributeQuote,
        LexErrorKind::UnterminatedAttributeValue,
        LexErrorKind::LoopLimitExceeded { limit: 1 },
    ];
    let mut codes: Vec<_> = kinds.iter().map(LexErrorKind::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}

#[test]
fn error_equality() {
    let a = LexError::missing_attribute_quote(Position::new(9, 1, 10));
    let b = LexError::missing_attribute_quote(Position::new(9, 1, 10));
    let c = LexError::missing_attribute_quote(Position::new(9, 2, 1));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.code(), "W0003");
}
