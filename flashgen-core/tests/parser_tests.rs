use flashgen_core::{parse, parse_with, ExtraFields, Flashcard, ParseOptions};
use pretty_assertions::assert_eq;

#[test]
fn empty_input() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n   \n\t\n").is_empty());
}

#[test]
fn comma_pairs_in_order() {
    let cards = parse("apple, jablko\ncar, auto");
    assert_eq!(
        cards,
        vec![Flashcard::new("apple", "jablko"), Flashcard::new("car", "auto")]
    );
}

#[test]
fn tab_separated() {
    assert_eq!(parse("apple\tjablko"), vec![Flashcard::new("apple", "jablko")]);
}

#[test]
fn rows_with_empty_side_dropped() {
    let cards = parse("onlyfront,\n,onlyback\nvalid, ok");
    assert_eq!(cards, vec![Flashcard::new("valid", "ok")]);
}

#[test]
fn blank_and_undelimited_lines_skipped() {
    let text = "\n  hello , ahoj  \n\nno delimiter here\n\n  dog\tpes\n";
    assert_eq!(
        parse(text),
        vec![Flashcard::new("hello", "ahoj"), Flashcard::new("dog", "pes")]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse("one, jedna\r\ntwo, dva\r\n"),
        vec![Flashcard::new("one", "jedna"), Flashcard::new("two", "dva")]
    );
}

#[test]
fn extra_fragments_ignored_by_default() {
    assert_eq!(parse("a,b,c"), vec![Flashcard::new("a", "b")]);
    // mixed delimiters count the same
    assert_eq!(parse("a\tb,c"), vec![Flashcard::new("a", "b")]);
}

#[test]
fn extra_fragments_joined_when_asked() {
    let opts = ParseOptions {
        extra_fields: ExtraFields::JoinIntoBack,
    };
    assert_eq!(
        parse_with("a, b, c\nx\ty", &opts),
        vec![Flashcard::new("a", "b, c"), Flashcard::new("x", "y")]
    );
}

#[test]
fn unicode_passes_through() {
    assert_eq!(
        parse("žluťoučký kůň, yellow horse"),
        vec![Flashcard::new("žluťoučký kůň", "yellow horse")]
    );
}

#[test]
fn cards_serialize_with_front_and_back_keys() {
    let v = serde_json::to_value(Flashcard::new("car", "auto")).unwrap();
    assert_eq!(v, serde_json::json!({ "front": "car", "back": "auto" }));
}

#[test]
fn byte_order_mark_stripped() {
    assert_eq!(
        parse("\u{FEFF}apple, jablko\ncar, auto"),
        vec![Flashcard::new("apple", "jablko"), Flashcard::new("car", "auto")]
    );
    // a front made only of a BOM is empty
    assert!(parse("\u{FEFF}, x").is_empty());
}
