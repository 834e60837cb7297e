// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser bindings for the docs search box.
//!
//! One call wires an existing search input and results container to a
//! `SearchSession`:
//!
//! ```js
//! import init, { mountDocsSearch } from "./docsearch.js";
//! await init();
//! mountDocsSearch();                                // all defaults
//! mountDocsSearch({ indexUrl: "/docs/search.json" }); // or tuned
//! ```
//!
//! Everything here is glue. The browser event loop is the `Runtime`,
//! `fetch()` is the `IndexSource`, and the results container is the
//! `ResultSurface`. Event listeners live as long as the page does.

use super::Runtime;
use crate::config::SearchConfig;
use crate::error::IndexError;
use crate::index::{decode_index, FetchFuture, IndexSource};
use crate::render::{ResultEntry, ResultSurface};
use crate::session::{PointerTarget, SearchSession};
use crate::types::IndexedPage;
use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::{Promise, Uint8Array};
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, HtmlInputElement, KeyboardEvent, Node, Request, RequestCache,
    RequestInit, Response,
};

const VISIBLE_CLASS: &str = "is-visible";
const ITEM_CLASS: &str = "docs-search__item";
const ITEM_TITLE_CLASS: &str = "docs-search__item-title";
const ITEM_SNIPPET_CLASS: &str = "docs-search__item-snippet";
const EMPTY_CLASS: &str = "docs-search__empty";

static LOGGING: Once = Once::new();

/// The page's event loop: `spawn_local` for tasks, `setTimeout` for time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = duration.as_millis().min(i32::MAX as u128) as i32;
        let promise = Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().and_then(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                    .ok()
            });
            if scheduled.is_none() {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
        .boxed_local()
    }
}

/// Loads the index with `window.fetch`, bypassing the HTTP cache.
#[derive(Debug, Clone)]
pub struct BrowserFetchSource {
    url: String,
}

impl BrowserFetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl IndexSource for BrowserFetchSource {
    fn fetch(&self) -> FetchFuture {
        let url = self.url.clone();
        async move { fetch_index(&url).await }.boxed_local()
    }

    fn location(&self) -> &str {
        &self.url
    }
}

async fn fetch_index(url: &str) -> Result<Vec<IndexedPage>, IndexError> {
    let network = |e: JsValue| IndexError::Network {
        url: url.to_string(),
        message: js_message(&e),
    };

    let window = web_sys::window().ok_or_else(|| IndexError::Network {
        url: url.to_string(),
        message: "no window".to_string(),
    })?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &init).map_err(network)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    if !response.ok() {
        return Err(IndexError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(network)?)
        .await
        .map_err(network)?;
    decode_index(&Uint8Array::new(&buffer).to_vec())
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// The results container, filled with text nodes only.
pub struct DomSurface {
    document: Document,
    container: Element,
}

impl DomSurface {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    fn clear(&self) {
        self.container.set_text_content(None);
    }

    fn set_visible(&self, visible: bool) {
        let _ = self
            .container
            .class_list()
            .toggle_with_force(VISIBLE_CLASS, visible);
    }

    fn text_block(&self, class: &str, text: &str) -> Result<Element, JsValue> {
        let block = self.document.create_element("div")?;
        block.set_class_name(class);
        block.append_child(&self.document.create_text_node(text))?;
        Ok(block)
    }

    fn append_entry(&self, entry: &ResultEntry) -> Result<(), JsValue> {
        let item = self.document.create_element("a")?;
        item.set_class_name(ITEM_CLASS);
        item.set_attribute("href", &entry.url)?;
        item.append_child(&self.text_block(ITEM_TITLE_CLASS, &entry.title)?)?;
        item.append_child(&self.text_block(ITEM_SNIPPET_CLASS, &entry.snippet)?)?;
        self.container.append_child(&item)?;
        Ok(())
    }
}

impl ResultSurface for DomSurface {
    fn hide(&mut self) {
        self.clear();
        self.set_visible(false);
    }

    fn show_placeholder(&mut self, message: &str) {
        self.clear();
        match self.text_block(EMPTY_CLASS, message) {
            Ok(block) => {
                let _ = self.container.append_child(&block);
            }
            Err(e) => tracing::warn!(error = %js_message(&e), "failed to render placeholder"),
        }
        self.set_visible(true);
    }

    fn show_entries(&mut self, entries: &[ResultEntry]) {
        self.clear();
        for entry in entries {
            if let Err(e) = self.append_entry(entry) {
                tracing::warn!(url = %entry.url, error = %js_message(&e), "failed to render result");
            }
        }
        self.set_visible(true);
    }
}

/// Attach docs search to the page.
///
/// `options` is an optional object of `SearchConfig` fields (camelCase).
/// Returns `false`, and does nothing, if the input or results element is
/// missing from the page.
#[wasm_bindgen(js_name = mountDocsSearch)]
pub fn mount_docs_search(options: JsValue) -> Result<bool, JsValue> {
    LOGGING.call_once(|| {
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(tracing::Level::INFO)
                .build(),
        );
    });

    let config: SearchConfig = if options.is_undefined() || options.is_null() {
        SearchConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let input = document
        .query_selector(&config.input_selector)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let results = document.query_selector(&config.results_selector)?;
    let (Some(input), Some(results)) = (input, results) else {
        tracing::debug!("docs search elements not found; not mounting");
        return Ok(false);
    };

    let source = Rc::new(BrowserFetchSource::new(config.index_url.clone()));
    let surface = Box::new(DomSurface::new(document.clone(), results.clone()));
    let session = SearchSession::new(config, source, Rc::new(BrowserRuntime), surface);

    {
        let session = session.clone();
        let field = input.clone();
        listen(&input, "input", move |_event: Event| {
            session.on_query_changed(&field.value());
        })?;
    }

    {
        let session = session.clone();
        let field = input.clone();
        listen(&input, "focus", move |_event: Event| {
            session.on_focus(&field.value());
        })?;
    }

    {
        let session = session.clone();
        let field = input.clone();
        listen(&input, "keydown", move |event: Event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if escape {
                let _ = field.blur();
                session.on_escape();
            }
        })?;
    }

    {
        let session = session.clone();
        let field: Node = input.clone().into();
        let panel: Node = results.clone().into();
        listen(&document, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            session.on_pointer(classify_click(target.as_ref(), &field, &panel));
        })?;
    }

    tracing::info!("docs search mounted");
    Ok(true)
}

fn classify_click(target: Option<&Node>, input: &Node, results: &Node) -> PointerTarget {
    match target {
        Some(node) if node.is_same_node(Some(input)) => PointerTarget::Input,
        Some(node) if results.contains(Some(node)) => PointerTarget::Results,
        _ => PointerTarget::Outside,
    }
}

fn listen<F>(target: &web_sys::EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
