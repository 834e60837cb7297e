//! Rendering matches into result entries.

use super::common::docs_site;
use docsearch::{render, search, IndexedPage, Query, ResultPanel, SearchConfig};

fn render_for(pages: &[IndexedPage], raw: &str) -> ResultPanel {
    let query = Query::parse(raw, 2);
    let results = search(pages, raw);
    render(&results, query.as_ref(), &SearchConfig::default())
}

#[test]
fn test_short_page_snippet_has_no_ellipses() {
    let pages = vec![IndexedPage::new(
        "/fox",
        "Animals",
        "The quick brown fox jumps over the lazy dog",
    )];
    let panel = render_for(&pages, "fox");
    assert_eq!(
        panel.entries()[0].snippet,
        "The quick brown fox jumps over the lazy dog"
    );
}

#[test]
fn test_snippet_window_and_ellipses() {
    let content = format!("{}needle{}", "a".repeat(100), "b".repeat(100));
    let pages = vec![IndexedPage::new("/long", "Long", content)];
    let panel = render_for(&pages, "needle");
    let snippet = &panel.entries()[0].snippet;

    let expected = format!("…{}needle{}…", "a".repeat(40), "b".repeat(60));
    assert_eq!(snippet, &expected);
}

#[test]
fn test_title_only_match_uses_content_opening() {
    let content = "c".repeat(300);
    let pages = vec![IndexedPage::new("/t", "Release Notes", content)];
    let panel = render_for(&pages, "release");
    let snippet = &panel.entries()[0].snippet;
    assert_eq!(snippet, &format!("{}…", "c".repeat(120)));
}

#[test]
fn test_title_only_match_with_empty_content() {
    let pages = vec![IndexedPage::new("/t", "Release Notes", "")];
    let panel = render_for(&pages, "release");
    assert_eq!(panel.entries()[0].snippet, "…");
}

#[test]
fn test_snippet_preserves_original_case() {
    let pages = docs_site();
    let panel = render_for(&pages, "toml");
    assert!(panel.entries()[0].snippet.contains("TOML"));
}

#[test]
fn test_markup_is_carried_as_text() {
    let pages = vec![IndexedPage::new(
        "/xss",
        "<script>alert(1)</script>",
        "Use <b>bold</b> sparingly",
    )];
    let panel = render_for(&pages, "bold");
    let entry = &panel.entries()[0];
    assert_eq!(entry.title, "<script>alert(1)</script>");
    assert_eq!(entry.snippet, "Use <b>bold</b> sparingly");
}

#[test]
fn test_entries_carry_url_and_title() {
    let pages = docs_site();
    let panel = render_for(&pages, "install");
    let first = &panel.entries()[0];
    assert_eq!(first.url, "/docs/installation");
    assert_eq!(first.title, "Installation");
}

#[test]
fn test_no_match_renders_placeholder() {
    let pages = docs_site();
    assert_eq!(
        render_for(&pages, "kubernetes"),
        ResultPanel::Empty {
            message: "No matches found.".to_string()
        }
    );
}

#[test]
fn test_short_query_renders_hidden() {
    let pages = docs_site();
    assert_eq!(render_for(&pages, "i"), ResultPanel::Hidden);
    assert_eq!(render_for(&pages, "   "), ResultPanel::Hidden);
}

#[test]
fn test_custom_window_and_message() {
    let config = SearchConfig {
        snippet_before: 3,
        snippet_after: 3,
        empty_message: "Nothing here.".to_string(),
        ..SearchConfig::default()
    };
    let pages = vec![IndexedPage::new("/w", "W", "0123456789needle0123456789")];
    let query = Query::parse("needle", 2);
    let results = search(&pages, "needle");
    let panel = render(&results, query.as_ref(), &config);
    assert_eq!(panel.entries()[0].snippet, "…789needle012…");

    let nothing = render(&[], query.as_ref(), &config);
    assert_eq!(
        nothing,
        ResultPanel::Empty {
            message: "Nothing here.".to_string()
        }
    );
}

#[test]
fn test_word_final_sigma_centers_snippet() {
    let content = "Intro text. ΟΔΟΣ is the main street guide and more text follows here.";
    let pages = vec![IndexedPage::new("/greek", "Streets", content)];
    let panel = render_for(&pages, "ΟΔΟΣ");
    assert_eq!(panel.entries().len(), 1);
    // whole match window, no fallback ellipsis
    assert_eq!(panel.entries()[0].snippet, content);
}

#[test]
fn test_word_final_sigma_window_on_long_content() {
    let content = format!("{} ΟΔΟΣ {}", "a".repeat(100), "b".repeat(100));
    let pages = vec![IndexedPage::new("/greek", "Streets", content)];
    let panel = render_for(&pages, "ΟΔΟΣ");
    let snippet = &panel.entries()[0].snippet;
    assert!(snippet.starts_with('…'));
    assert!(snippet.contains("ΟΔΟΣ"));
    assert!(snippet.ends_with('…'));
}
