use document_core::{Document, LineEnding, Position, TextStats};

#[test]
fn test_crlf_round_trip() {
    let raw = "first\r\nsecond\r\nthird";
    let doc = Document::load(raw);

    assert_eq!(doc.buffer().text(), "first\nsecond\nthird");
    assert_eq!(doc.line_ending(), LineEnding::Crlf);
    assert_eq!(doc.serialize(), raw);
}

#[test]
fn test_lf_input_stays_lf() {
    let doc = Document::load("plain\ntext");
    assert_eq!(doc.line_ending(), LineEnding::Lf);
    assert_eq!(doc.serialize(), "plain\ntext");
}

#[test]
fn test_line_ending_override() {
    let mut doc = Document::new("a\nb");
    doc.set_line_ending(LineEnding::Crlf);
    assert_eq!(doc.serialize(), "a\r\nb");
}

#[test]
fn test_edits_survive_serialization() {
    let mut doc = Document::load("hello\r\nworld");
    doc.insert(5, "!").unwrap();
    assert_eq!(doc.serialize(), "hello!\r\nworld");

    doc.undo();
    assert_eq!(doc.serialize(), "hello\r\nworld");
}

#[test]
fn test_caret_status_line() {
    let mut doc = Document::new("hello\nworld");

    doc.set_caret(0).unwrap();
    assert_eq!(doc.caret_position(), Position::new(1, 1));

    doc.set_caret(6).unwrap();
    assert_eq!(doc.caret_position(), Position::new(2, 1));

    doc.set_caret(11).unwrap();
    assert_eq!(doc.caret_position(), Position::new(2, 6));
}

#[test]
fn test_counter_labels_scenario() {
    let doc = Document::empty();
    assert_eq!(doc.stats(), TextStats { words: 0, letters: 0 });

    let doc = Document::new("two words");
    assert_eq!(doc.stats(), TextStats { words: 2, letters: 8 });
}

#[test]
fn test_word_count_ignores_line_endings_from_load() {
    let doc = Document::load("one\r\ntwo");
    assert_eq!(doc.stats().words, 2);
}
