use document_core::{Document, SearchOptions, replace_all, search};

fn main() {
    let mut doc = Document::load("hello world\r\nsecond line");
    println!("loaded {} lines", doc.buffer().line_count());

    // A status bar pulls counters and caret position after each change.
    doc.buffer_mut().subscribe(|change| {
        println!(
            "change @{} (-{} +{}) v{}",
            change.offset, change.removed_len, change.inserted_len, change.version
        );
    });

    doc.insert(5, ",").unwrap();
    doc.set_caret(6).unwrap();
    let position = doc.caret_position();
    println!("caret at line {}, column {}", position.line, position.column);
    println!(
        "words: {} | letters: {}",
        doc.stats().words,
        doc.stats().letters
    );

    // Find & replace dialog flow.
    let text = doc.buffer().text();
    if let Some(m) = search::find_forward(&text, "world", SearchOptions::default(), 0).unwrap() {
        println!("found at {}..{}", m.start, m.end);
    }
    let replaced = replace_all(&text, "l", "L", SearchOptions::default()).unwrap();
    let len = doc.buffer().len_chars();
    doc.replace_range(0, len, &replaced.text).unwrap();
    println!("replaced {} occurrences", replaced.count);

    // One undo reverses the whole replacement.
    doc.undo();
    assert_eq!(doc.buffer().text(), "hello, world\nsecond line");

    // Serialization restores the file's original CRLF endings.
    println!("serialized: {:?}", doc.serialize());
}
