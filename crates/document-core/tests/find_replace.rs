use document_core::{
    SearchMatch, SearchOptions, TextBuffer, find_backward, find_forward, replace_all,
    replace_first,
};

#[test]
fn test_find_forward_from_offset() {
    let text = "Hello hello HELLO";

    let m = find_forward(text, "hello", SearchOptions::default(), 0)
        .unwrap()
        .unwrap();
    assert_eq!((m.start, m.end), (6, 11));

    // From past the match, a case-sensitive search misses; no wrap is performed.
    let m = find_forward(text, "hello", SearchOptions::default(), 7).unwrap();
    assert_eq!(m, None);
}

#[test]
fn test_find_backward_from_offset() {
    let text = "Hello hello HELLO";
    let options = SearchOptions {
        case_sensitive: false,
        whole_word: false,
    };

    let m = find_backward(text, "hello", options, text.chars().count())
        .unwrap()
        .unwrap();
    assert_eq!((m.start, m.end), (12, 17));

    let m = find_backward(text, "hello", options, 5).unwrap().unwrap();
    assert_eq!((m.start, m.end), (0, 5));
}

#[test]
fn test_replace_all_scenarios() {
    let r = replace_all("cat cat cat", "cat", "dog", SearchOptions::default()).unwrap();
    assert_eq!(r.text, "dog dog dog");
    assert_eq!(r.count, 3);

    // The non-overlapping resume rule prevents growth within one call.
    let r = replace_all("aaa", "a", "aa", SearchOptions::default()).unwrap();
    assert_eq!(r.text, "aaaaaa");
    assert_eq!(r.count, 3);
}

#[test]
fn test_replace_first_only() {
    let r = replace_first("one two one", "one", "1", SearchOptions::default()).unwrap();
    assert_eq!(r.text, "1 two one");
    assert_eq!(r.count, 1);
}

#[test]
fn test_replace_all_applied_through_buffer_is_one_undo_step() {
    let mut buffer = TextBuffer::new("cat cat cat");

    let r = replace_all(&buffer.text(), "cat", "dog", SearchOptions::default()).unwrap();
    let len = buffer.len_chars();
    buffer.replace_range(0, len, &r.text).unwrap();

    assert_eq!(buffer.text(), "dog dog dog");
    assert_eq!(buffer.undo_depth(), 1);

    assert!(buffer.undo());
    assert_eq!(buffer.text(), "cat cat cat");
}

#[test]
fn test_search_positions_select_in_buffer() {
    // Find/select flow: locate a match, then read it back through the buffer.
    let buffer = TextBuffer::new("say: 你好, world");
    let m = find_forward(&buffer.text(), "你好", SearchOptions::default(), 0)
        .unwrap()
        .unwrap();
    assert_eq!(m, SearchMatch { start: 5, end: 7 });
    assert_eq!(buffer.text_range(m.start, m.end), Ok("你好".to_string()));
}

#[test]
fn test_whole_word_end_to_end() {
    let options = SearchOptions {
        case_sensitive: true,
        whole_word: true,
    };
    let r = replace_all("foobar foo barfoo foo", "foo", "qux", options).unwrap();
    assert_eq!(r.text, "foobar qux barfoo qux");
    assert_eq!(r.count, 2);
}
