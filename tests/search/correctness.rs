//! Matching correctness against the fixture docs site.

use super::common::docs_site;
use docsearch::{search, IndexedPage};

fn urls(results: &[docsearch::MatchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.page.url.clone()).collect()
}

#[test]
fn test_title_match_outranks_content_matches() {
    let pages = docs_site();
    let results = search(&pages, "install");
    assert_eq!(
        urls(&results),
        vec![
            "/docs/installation",
            "/docs/quickstart",
            "/docs/plugins",
            "/docs/faq"
        ]
    );
    let scores: Vec<u32> = results.iter().map(|r| r.score.get()).collect();
    assert_eq!(scores, vec![0, 11, 37, 47]);
}

#[test]
fn test_every_result_contains_the_query() {
    let pages = docs_site();
    for query in ["the", "build", "plugin", "toml"] {
        for result in search(&pages, query) {
            assert!(
                result.page.haystack().contains(query),
                "{} returned for {:?} without containing it",
                result.page.url,
                query
            );
        }
    }
}

#[test]
fn test_pages_without_occurrence_are_excluded() {
    let pages = docs_site();
    let results = search(&pages, "build");
    assert_eq!(urls(&results), vec!["/docs/faq", "/docs/plugins"]);
}

#[test]
fn test_query_is_trimmed_and_lowercased() {
    let pages = docs_site();
    assert_eq!(urls(&search(&pages, "  TOML ")), vec!["/docs/configuration"]);
    assert_eq!(urls(&search(&pages, "PaTh")), vec!["/docs/installation"]);
}

#[test]
fn test_match_across_title_content_boundary() {
    let pages = vec![IndexedPage::new("/x", "Getting", "Started quickly")];
    let results = search(&pages, "getting started");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score.get(), 0);
}

#[test]
fn test_phrase_is_matched_literally() {
    let pages = vec![
        IndexedPage::new("/a", "A", "run init in a directory"),
        IndexedPage::new("/b", "B", "init then run"),
    ];
    assert_eq!(urls(&search(&pages, "run init")), vec!["/a"]);
}

#[test]
fn test_score_counts_characters_not_bytes() {
    let pages = vec![IndexedPage::new("/é", "Éléments", "über alles")];
    let results = search(&pages, "über");
    assert_eq!(results.len(), 1);
    // "éléments " is nine characters, eleven bytes
    assert_eq!(results[0].score.get(), 9);
}
