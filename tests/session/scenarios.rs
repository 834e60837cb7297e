//! The user-visible flows: type, pause, look, click away, come back.

use super::common::{advance, docs_site, local, Harness, StaticSource, SurfaceEvent, DEBOUNCE};
use docsearch::PointerTarget;
use std::rc::Rc;

fn harness() -> (Harness, Rc<StaticSource>) {
    let source = Rc::new(StaticSource::new(docs_site()));
    (Harness::new(source.clone()), source)
}

#[tokio::test(start_paused = true)]
async fn test_fast_typing_runs_one_search_for_final_text() {
    local(async {
        let (h, source) = harness();
        assert_eq!(h.session.config().debounce(), DEBOUNCE);

        h.session.on_query_changed("i");
        advance(40).await;
        h.session.on_query_changed("in");
        advance(40).await;
        h.session.on_query_changed("install");

        advance(DEBOUNCE.as_millis() as u64 - 1).await;
        assert!(h.surface.snapshot().events().is_empty());
        assert_eq!(source.calls(), 0);

        advance(2).await;
        assert_eq!(h.session.stats().evaluations, 1);
        assert_eq!(source.calls(), 1);
        assert_eq!(
            h.shown_urls(),
            vec![
                "/docs/installation",
                "/docs/quickstart",
                "/docs/plugins",
                "/docs/faq"
            ]
        );
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_no_match_shows_placeholder() {
    local(async {
        let (h, _source) = harness();
        h.session.on_query_changed("kubernetes");
        advance(200).await;
        assert_eq!(
            h.last_event(),
            Some(SurfaceEvent::Placeholder("No matches found.".to_string()))
        );
        assert!(h.visible());
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_clearing_the_input_hides_results() {
    local(async {
        let (h, _source) = harness();
        h.session.on_query_changed("install");
        advance(200).await;
        assert!(h.visible());

        h.session.on_query_changed("");
        advance(200).await;
        assert!(!h.visible());
        assert_eq!(h.session.stats().matcher_runs, 1);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_outside_click_hides_and_focus_restores() {
    local(async {
        let (h, source) = harness();
        h.session.on_query_changed("plugin");
        advance(200).await;
        assert_eq!(h.shown_urls(), vec!["/docs/plugins"]);

        h.session.on_pointer(PointerTarget::Outside);
        assert!(!h.visible());

        // Refocusing with the text still in the box brings results back
        // without waiting for the debounce.
        h.session.on_focus("plugin");
        advance(1).await;
        assert_eq!(h.shown_urls(), vec!["/docs/plugins"]);
        assert_eq!(source.calls(), 1);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_clicks_inside_keep_results_open() {
    local(async {
        let (h, _source) = harness();
        h.session.on_query_changed("install");
        advance(200).await;

        h.session.on_pointer(PointerTarget::Results);
        h.session.on_pointer(PointerTarget::Input);
        assert!(h.visible());
        assert_eq!(h.shown_urls().len(), 4);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_escape_hides_results() {
    local(async {
        let (h, _source) = harness();
        h.session.on_query_changed("install");
        advance(200).await;
        assert!(h.visible());

        h.session.on_escape();
        assert_eq!(h.last_event(), Some(SurfaceEvent::Hidden));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_focus_checks_raw_length() {
    local(async {
        let (h, source) = harness();

        // Two raw characters pass the focus gate, then fail the trimmed
        // query check: the panel is hidden and nothing is fetched.
        h.session.on_focus(" i");
        advance(1).await;
        assert_eq!(h.session.stats().evaluations, 1);
        assert_eq!(h.last_event(), Some(SurfaceEvent::Hidden));
        assert_eq!(source.calls(), 0);

        h.session.on_focus("i");
        advance(1).await;
        assert_eq!(h.session.stats().evaluations, 1);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_focus_leaves_pending_debounce_alone() {
    local(async {
        let (h, _source) = harness();
        h.session.on_query_changed("build");
        advance(50).await;
        h.session.on_focus("build");
        advance(1).await;
        assert_eq!(h.session.stats().evaluations, 1);
        assert!(h.session.has_pending_query());

        advance(100).await;
        assert_eq!(h.session.stats().evaluations, 2);
        assert_eq!(h.shown_urls(), vec!["/docs/faq", "/docs/plugins"]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_single_page_index_walkthrough() {
    local(async {
        let pages = vec![docsearch::IndexedPage::new(
            "/a",
            "Alpha Guide",
            "Install the alpha tool",
        )];
        let source = Rc::new(super::common::FlakySource::new(1, pages));
        let h = Harness::new(source.clone());

        // Load fails: nothing shown, nothing thrown.
        h.session.on_query_changed("alpha");
        advance(200).await;
        assert!(!h.visible());

        // Next query retries and finds the page at offset 0.
        let panel = h.session.evaluate("alpha").await.expect("newest evaluation");
        assert_eq!(panel.entries().len(), 1);
        assert_eq!(h.shown_urls(), vec!["/a"]);
        assert_eq!(source.calls(), 2);

        let panel = h.session.evaluate("zzz").await.expect("newest evaluation");
        assert_eq!(
            panel,
            docsearch::ResultPanel::Empty {
                message: "No matches found.".to_string()
            }
        );

        let runs = h.session.stats().matcher_runs;
        h.session.on_query_changed("a");
        advance(200).await;
        assert!(!h.visible());
        assert_eq!(h.session.stats().matcher_runs, runs);
    })
    .await;
}
