//! Properties of snippet extraction.

use docsearch::render::snippet::{extract_snippet, SnippetWindow, ELLIPSIS};
use proptest::prelude::*;

fn content_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dA-D .]{0,300}").expect("valid regex")
}

fn needle_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{2,5}").expect("valid regex")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A content match is always visible in the snippet.
    #[test]
    fn prop_snippet_contains_match(content in content_strategy(), needle in needle_strategy()) {
        let snippet = extract_snippet(&content, &needle, SnippetWindow::default());
        if content.to_lowercase().contains(&needle) {
            prop_assert!(
                snippet.to_lowercase().contains(&needle),
                "snippet {:?} lost needle {:?}",
                snippet,
                needle
            );
        }
    }

    /// Snippets never exceed the window plus two ellipses.
    #[test]
    fn prop_snippet_length_bounded(
        content in content_strategy(),
        needle in needle_strategy(),
        before in 0usize..50,
        after in 0usize..70,
    ) {
        let window = SnippetWindow { before, after, fallback: 120 };
        let snippet = extract_snippet(&content, &needle, window);
        let len = snippet.chars().count();
        if content.to_lowercase().contains(&needle) {
            prop_assert!(len <= before + needle.chars().count() + after + 2);
        } else {
            prop_assert!(len <= 121);
        }
    }

    /// A leading ellipsis appears exactly when text before the window was cut.
    #[test]
    fn prop_leading_ellipsis_iff_cut(content in content_strategy(), needle in needle_strategy()) {
        let window = SnippetWindow::default();
        if let Some(byte) = content.to_lowercase().find(&needle) {
            let start = content[..byte].chars().count();
            let snippet = extract_snippet(&content, &needle, window);
            prop_assert_eq!(snippet.starts_with(ELLIPSIS), start > window.before);
        }
    }

    /// Without a content match the snippet is the trimmed opening plus `…`.
    #[test]
    fn prop_fallback_shape(content in content_strategy()) {
        let snippet = extract_snippet(&content, "zz", SnippetWindow::default());
        let opening: String = content.chars().take(120).collect();
        prop_assert_eq!(snippet, format!("{}{}", opening.trim(), ELLIPSIS));
    }
}
