use super::*;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn peek_does_not_consume() {
    let cursor = SourceCursor::new("abc");
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.peek(), Some('a'));
    assert!(cursor.sof());
}

#[test]
fn next_consumes_in_order() {
    let mut cursor = SourceCursor::new("hi");
    assert_eq!(cursor.next(), Some('h'));
    assert_eq!(cursor.next(), Some('i'));
    assert_eq!(cursor.next(), None);
    assert!(cursor.eof());
}

#[test]
fn eof_on_empty_source() {
    let cursor = SourceCursor::new("");
    assert!(cursor.eof());
    assert!(cursor.sof());
    assert_eq!(cursor.peek(), None);
}

#[test]
fn eof_is_sticky() {
    let mut cursor = SourceCursor::new("x");
    cursor.next();
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.peek_prev(), Some('x'));
}

// === Start of input ===

#[test]
fn sof_only_before_first_char() {
    let mut cursor = SourceCursor::new("ab");
    assert!(cursor.sof());
    cursor.next();
    assert!(!cursor.sof());
    cursor.next();
    assert!(!cursor.sof());
}

// === Previous character ===

#[test]
fn peek_prev_tracks_last_consumed() {
    let mut cursor = SourceCursor::new(r#"a\""#);
    assert_eq!(cursor.peek_prev(), None);
    cursor.next();
    assert_eq!(cursor.peek_prev(), Some('a'));
    cursor.next();
    assert_eq!(cursor.peek_prev(), Some('\\'));
    assert_eq!(cursor.peek(), Some('"'));
}

// === Multi-byte characters ===

#[test]
fn multibyte_chars_advance_by_utf8_width() {
    let mut cursor = SourceCursor::new("é✓x");
    assert_eq!(cursor.next(), Some('é'));
    assert_eq!(cursor.position().offset, 2);
    assert_eq!(cursor.next(), Some('✓'));
    assert_eq!(cursor.position().offset, 5);
    assert_eq!(cursor.position().column, 3);
    assert_eq!(cursor.rest(), "x");
}

// === Positions ===

#[test]
fn position_starts_at_one_one() {
    let cursor = SourceCursor::new("div");
    assert_eq!(cursor.position(), Position::START);
}

#[test]
fn newline_advances_line() {
    let mut cursor = SourceCursor::new("a\nb");
    cursor.next();
    cursor.next();
    assert_eq!(cursor.position(), Position::new(2, 2, 1));
}

#[test]
fn crlf_counts_as_one_line_break() {
    let mut cursor = SourceCursor::new("a\r\nb");
    cursor.eat_while(|c| c != 'b');
    assert_eq!(cursor.position().line, 2);
    assert_eq!(cursor.position().column, 1);
}

#[test]
fn lone_carriage_return_breaks_line() {
    let mut cursor = SourceCursor::new("a\rb");
    cursor.eat_while(|c| c != 'b');
    assert_eq!(cursor.position().line, 2);
}

#[test]
fn tab_is_one_column() {
    let mut cursor = SourceCursor::new("\t\tx");
    cursor.eat_while(char::is_whitespace);
    assert_eq!(cursor.position().column, 3);
}

// === take_while / eat_while ===

#[test]
fn take_while_returns_run() {
    let mut cursor = SourceCursor::new("div.box");
    let tag = cursor.take_while(|c| c.is_ascii_lowercase());
    assert_eq!(tag, "div");
    assert_eq!(cursor.peek(), Some('.'));
}

#[test]
fn take_while_empty_run() {
    let mut cursor = SourceCursor::new(".box");
    assert_eq!(cursor.take_while(|c| c.is_ascii_lowercase()), "");
    assert!(cursor.sof());
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = SourceCursor::new("    ");
    assert_eq!(cursor.eat_while(|c| c == ' '), 4);
    assert!(cursor.eof());
}

// === Property tests ===

mod proptest_cursor {
    use super::super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn consuming_everything_reaches_source_len(source in "\\PC{0,64}") {
            let mut cursor = SourceCursor::new(&source);
            let mut seen = String::new();
            while let Some(c) = cursor.next() {
                seen.push(c);
            }
            prop_assert_eq!(&seen, &source);
            prop_assert!(cursor.eof());
            prop_assert_eq!(cursor.position().offset as usize, source.len());
        }

        #[test]
        fn line_counter_matches_newlines(
            lines in proptest::collection::vec("[a-z ]{0,8}", 1..8)
        ) {
            let source = lines.join("\n");
            let mut cursor = SourceCursor::new(&source);
            cursor.eat_while(|_| true);
            prop_assert_eq!(cursor.position().line as usize, lines.len());
        }
    }
}
