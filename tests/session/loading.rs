//! Lazy index loading as seen through a session.

use super::common::{advance, docs_site, local, FlakySource, GatedSource, Harness, StaticSource, SurfaceEvent};
use docsearch::IndexError;
use std::rc::Rc;

#[tokio::test(start_paused = true)]
async fn test_index_not_fetched_until_first_real_query() {
    local(async {
        let source = Rc::new(StaticSource::new(docs_site()));
        let h = Harness::new(source.clone());

        h.session.on_query_changed("x");
        advance(200).await;
        h.session.on_focus("y");
        advance(200).await;
        assert_eq!(source.calls(), 0);
        assert!(!h.session.store().is_loaded());

        h.session.on_query_changed("config");
        advance(200).await;
        assert_eq!(source.calls(), 1);
        assert!(h.session.store().is_loaded());
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_index_fetched_once_across_many_queries() {
    local(async {
        let source = Rc::new(StaticSource::new(docs_site()));
        let h = Harness::new(source.clone());

        for query in ["install", "build", "plugin", "toml", "path"] {
            h.session.on_query_changed(query);
            advance(200).await;
        }
        assert_eq!(source.calls(), 1);
        assert_eq!(h.session.stats().matcher_runs, 5);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_failed_load_hides_then_retries() {
    local(async {
        let source = Rc::new(FlakySource::new(1, docs_site()));
        let h = Harness::new(source.clone());

        h.session.on_query_changed("install");
        advance(200).await;
        assert_eq!(h.last_event(), Some(SurfaceEvent::Hidden));
        assert!(!h.session.store().is_loaded());

        h.session.on_query_changed("install ");
        advance(200).await;
        assert_eq!(source.calls(), 2);
        assert_eq!(h.shown_urls().len(), 4);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_persistent_failure_never_shows_placeholder() {
    local(async {
        let source = Rc::new(FlakySource::always_failing());
        let h = Harness::new(source.clone());

        for query in ["install", "build", "plugin"] {
            h.session.on_query_changed(query);
            advance(200).await;
            assert_eq!(h.last_event(), Some(SurfaceEvent::Hidden));
        }
        assert_eq!(source.calls(), 3);
        assert_eq!(h.session.stats().matcher_runs, 0);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_empty_index_hides_instead_of_placeholder() {
    local(async {
        let source = Rc::new(StaticSource::new(Vec::new()));
        let h = Harness::new(source.clone());

        h.session.on_query_changed("install");
        advance(200).await;
        assert_eq!(h.last_event(), Some(SurfaceEvent::Hidden));

        // An empty array is a successful load; it is not retried.
        h.session.on_query_changed("build");
        advance(200).await;
        assert_eq!(source.calls(), 1);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_queries_during_load_share_one_fetch() {
    local(async {
        let (source, gate) = GatedSource::new();
        let source = Rc::new(source);
        let h = Harness::new(source.clone());

        h.session.on_query_changed("install");
        advance(200).await;
        h.session.on_focus("install");
        advance(1).await;
        h.session.on_query_changed("build");
        advance(200).await;

        assert_eq!(source.calls(), 1);
        assert_eq!(gate.pending(), 1);
        assert!(h.session.store().is_loading());

        assert!(gate.release(Ok(docs_site())));
        advance(1).await;
        assert_eq!(h.shown_urls(), vec!["/docs/faq", "/docs/plugins"]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_failed_shared_load_retries_on_next_query() {
    local(async {
        let (source, gate) = GatedSource::new();
        let source = Rc::new(source);
        let h = Harness::new(source.clone());

        h.session.on_query_changed("install");
        advance(200).await;
        assert!(gate.release(Err(IndexError::Status {
            url: "/search.json".to_string(),
            status: 503,
        })));
        advance(1).await;
        assert!(!h.visible());

        h.session.on_query_changed("install");
        advance(200).await;
        assert_eq!(source.calls(), 2);
        assert!(gate.release(Ok(docs_site())));
        advance(1).await;
        assert_eq!(h.shown_urls().len(), 4);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_flush_waits_out_an_in_flight_load() {
    local(async {
        let (source, gate) = GatedSource::new();
        let h = Harness::new(Rc::new(source));

        h.session.on_query_changed("install");
        advance(200).await;
        assert!(h.session.store().is_loading());

        let release = async {
            advance(10).await;
            gate.release(Ok(docs_site()))
        };
        let (panel, released) = futures::join!(h.session.flush("install"), release);
        assert!(released);
        assert_eq!(panel.map(|p| p.entries().len()), Some(4));
        assert_eq!(h.shown_urls().len(), 4);
        assert_eq!(h.session.store().loaded().map(|index| index.len()), Some(5));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_flush_runs_a_pending_debounce_now() {
    local(async {
        let source = Rc::new(StaticSource::new(docs_site()));
        let h = Harness::new(source.clone());

        h.session.on_query_changed("build");
        let panel = h.session.flush("build").await;
        assert_eq!(panel.map(|p| p.entries().len()), Some(2));
        assert!(!h.session.has_pending_query());

        advance(200).await;
        assert_eq!(h.session.stats().evaluations, 1);
        assert_eq!(h.session.flush("build").await, None);
    })
    .await;
}
