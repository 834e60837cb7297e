//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical test doubles for the two seams of a search session:
//! index sources and result surfaces.

#![doc(hidden)]

use crate::error::IndexError;
use crate::index::{FetchFuture, IndexSource};
use crate::render::{ResultEntry, ResultSurface};
use crate::types::IndexedPage;
use futures::channel::oneshot;
use futures::future::FutureExt;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Create a page with a derived URL.
pub fn make_page(id: usize, title: &str, content: &str) -> IndexedPage {
    IndexedPage::new(format!("/doc/{}", id), title, content)
}

/// Always succeeds with the same pages; counts fetches.
#[derive(Debug, Default)]
pub struct StaticSource {
    pages: Vec<IndexedPage>,
    calls: Cell<usize>,
}

impl StaticSource {
    pub fn new(pages: Vec<IndexedPage>) -> Self {
        Self {
            pages,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl IndexSource for StaticSource {
    fn fetch(&self) -> FetchFuture {
        self.calls.set(self.calls.get() + 1);
        let pages = self.pages.clone();
        async move { Ok(pages) }.boxed_local()
    }

    fn location(&self) -> &str {
        "static"
    }
}

/// Fails with a network error for the first `failures` fetches, then
/// succeeds.
#[derive(Debug)]
pub struct FlakySource {
    failures: usize,
    pages: Vec<IndexedPage>,
    calls: Cell<usize>,
}

impl FlakySource {
    pub fn new(failures: usize, pages: Vec<IndexedPage>) -> Self {
        Self {
            failures,
            pages,
            calls: Cell::new(0),
        }
    }

    /// Never succeeds.
    pub fn always_failing() -> Self {
        Self::new(usize::MAX, Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl IndexSource for FlakySource {
    fn fetch(&self) -> FetchFuture {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        let result = if call <= self.failures {
            Err(IndexError::Network {
                url: "flaky".to_string(),
                message: format!("simulated failure #{}", call),
            })
        } else {
            Ok(self.pages.clone())
        };
        async move { result }.boxed_local()
    }

    fn location(&self) -> &str {
        "flaky"
    }
}

type Responder = oneshot::Sender<Result<Vec<IndexedPage>, IndexError>>;

/// A source whose fetches stay pending until the test releases them, in
/// order. Used to hold a load open while other events happen.
#[derive(Debug)]
pub struct GatedSource {
    responders: Rc<RefCell<VecDeque<Responder>>>,
    calls: Cell<usize>,
}

/// The test's handle on a `GatedSource`.
#[derive(Debug, Clone)]
pub struct Gate {
    responders: Rc<RefCell<VecDeque<Responder>>>,
}

impl GatedSource {
    pub fn new() -> (Self, Gate) {
        let responders = Rc::new(RefCell::new(VecDeque::new()));
        let gate = Gate {
            responders: responders.clone(),
        };
        let source = Self {
            responders,
            calls: Cell::new(0),
        };
        (source, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl IndexSource for GatedSource {
    fn fetch(&self) -> FetchFuture {
        self.calls.set(self.calls.get() + 1);
        let (tx, rx) = oneshot::channel();
        self.responders.borrow_mut().push_back(tx);
        async move {
            rx.await.unwrap_or_else(|_| {
                Err(IndexError::Network {
                    url: "gated".to_string(),
                    message: "gate dropped".to_string(),
                })
            })
        }
        .boxed_local()
    }

    fn location(&self) -> &str {
        "gated"
    }
}

impl Gate {
    /// Complete the oldest pending fetch. Returns false if none was pending.
    pub fn release(&self, result: Result<Vec<IndexedPage>, IndexError>) -> bool {
        match self.responders.borrow_mut().pop_front() {
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }

    /// Fetches issued but not yet released.
    pub fn pending(&self) -> usize {
        self.responders.borrow().len()
    }
}

/// Everything a surface was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Hidden,
    Placeholder(String),
    Entries(Vec<ResultEntry>),
}

/// Records surface calls for assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&SurfaceEvent> {
        self.events.last()
    }

    /// Whether the panel would currently be on screen.
    pub fn is_visible(&self) -> bool {
        !matches!(self.last(), None | Some(SurfaceEvent::Hidden))
    }

    /// URLs currently shown, in order.
    pub fn shown_urls(&self) -> Vec<String> {
        match self.last() {
            Some(SurfaceEvent::Entries(entries)) => {
                entries.iter().map(|e| e.url.clone()).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl ResultSurface for RecordingSurface {
    fn hide(&mut self) {
        self.events.push(SurfaceEvent::Hidden);
    }

    fn show_placeholder(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Placeholder(message.to_string()));
    }

    fn show_entries(&mut self, entries: &[ResultEntry]) {
        self.events.push(SurfaceEvent::Entries(entries.to_vec()));
    }
}

/// A surface the test keeps a handle to after giving it to a session.
#[derive(Debug, Default, Clone)]
pub struct SharedSurface {
    inner: Rc<RefCell<RecordingSurface>>,
}

impl SharedSurface {
    pub fn snapshot(&self) -> RecordingSurface {
        self.inner.borrow().clone()
    }
}

impl ResultSurface for SharedSurface {
    fn hide(&mut self) {
        self.inner.borrow_mut().hide();
    }

    fn show_placeholder(&mut self, message: &str) {
        self.inner.borrow_mut().show_placeholder(message);
    }

    fn show_entries(&mut self, entries: &[ResultEntry]) {
        self.inner.borrow_mut().show_entries(entries);
    }
}
