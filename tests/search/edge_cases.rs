//! Degenerate inputs: empty indexes, odd queries, sloppy index files.

use super::common::docs_site;
use docsearch::{decode_index, search, IndexError, IndexedPage};

#[test]
fn test_empty_index_returns_nothing() {
    assert!(search(&[], "install").is_empty());
}

#[test]
fn test_queries_below_two_chars_return_nothing() {
    let pages = docs_site();
    for raw in ["", " ", "i", "  i  ", "\t\n"] {
        assert!(search(&pages, raw).is_empty(), "{:?} should not search", raw);
    }
}

#[test]
fn test_two_chars_after_trim_is_enough() {
    let pages = docs_site();
    assert!(!search(&pages, "  in  ").is_empty());
}

#[test]
fn test_internal_whitespace_is_kept() {
    let pages = vec![IndexedPage::new("/s", "S", "run  init")];
    assert!(search(&pages, "run init").is_empty());
    assert_eq!(search(&pages, "run  init").len(), 1);
}

#[test]
fn test_blank_page_never_matches() {
    let pages = vec![IndexedPage::new("/blank", "", "")];
    assert!(search(&pages, "ab").is_empty());
    assert!(search(&pages, " x").is_empty());
}

#[test]
fn test_lenient_decoding_of_sloppy_index() {
    let body = br#"[
        {"url": "/a", "title": null, "content": 42},
        {"url": "/b", "title": "Beta"},
        {"url": "/c", "title": true, "content": "ok"}
    ]"#;
    let pages = decode_index(body).expect("lenient decode");
    assert_eq!(pages[0].title, "");
    assert_eq!(pages[0].content, "42");
    assert_eq!(pages[1].content, "");
    assert_eq!(pages[2].title, "true");

    let results = search(&pages, "42");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].page.url, "/a");
}

#[test]
fn test_non_array_index_is_a_decode_error() {
    let err = decode_index(br#"{"pages": []}"#).unwrap_err();
    assert!(matches!(err, IndexError::Decode(_)));
}

#[test]
fn test_unicode_case_folding_in_queries() {
    let pages = vec![IndexedPage::new("/de", "Straße", "ÜBERSICHT der Optionen")];
    assert_eq!(search(&pages, "übersicht").len(), 1);
    assert_eq!(search(&pages, "STRASSE").len(), 0);
    assert_eq!(search(&pages, "straße").len(), 1);
}
