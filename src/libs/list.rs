//! Paginated remote list controller.
//!
//! One [`ListController`] backs one table on a dashboard page (reservations,
//! barcodes, products, pricing...). It owns the filter parameters, the current
//! page and page size, the rows of the last successful fetch and the
//! loading/error flags, and it talks to the backend through a
//! [`PageTransport`].
//!
//! ## Request lifecycle
//!
//! ```text
//! Idle ──refresh()──▶ Loading ──┬─ Success   ──▶ Idle (items, total_count)
//!                               ├─ Cancelled ──▶ Idle (untouched)
//!                               └─ Failed    ──▶ Idle (error, no items)
//! ```
//!
//! At most one request is active per controller. Starting a new one cancels the
//! previous token first, and a request that completes after being superseded
//! has no effect on state, whatever order the responses arrive in. Transport
//! failures are absorbed into the `error` flag; they never escape `refresh`.
//! Export flows that need to see failures use [`ListController::fetch_page`] or
//! [`ListController::fetch_all`] instead, which propagate errors and leave the
//! controller state alone.
//!
//! Parameter setters never fetch on their own. Whoever drives the controller
//! (a page, a command) calls `refresh` after changing them.

use crate::api::{Page, PageTransport};
use crate::libs::cancel::CancelToken;
use crate::libs::error::Result;
use crate::libs::params::{ListQuery, Params};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Filter key set by [`ListController::search`].
pub const SEARCH_PARAM: &str = "search";

/// Snapshot of everything a table needs to render.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub params: Params,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<T>,
    pub total_count: u64,
    pub loading: bool,
    pub error: bool,
}

impl<T> ListState<T> {
    fn new(params: Params, page_size: u32) -> Self {
        Self {
            params,
            page: 1,
            page_size,
            items: Vec::new(),
            total_count: 0,
            loading: false,
            error: false,
        }
    }

    /// `ceil(total_count / page_size)`, or 0 when the page size is 0.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(self.page_size))
    }
}

/// How a single `refresh` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Rows were stored; carries how many.
    Loaded(usize),
    /// Superseded or closed; state was left to the newer request.
    Cancelled,
    /// Transport failed; `error` is set and `items` emptied.
    Failed,
}

struct Shared<T> {
    state: ListState<T>,
    /// Bumped by every request and by `close`; a completing request only
    /// commits while its generation is still current.
    generation: u64,
    active: Option<CancelToken>,
}

/// Marks the end of a request, whether it completed or its future was
/// dropped. Only the current generation may clear `loading` and `active`.
struct InFlight<'a, T> {
    shared: &'a Mutex<Shared<T>>,
    generation: u64,
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        let mut shared = self.shared.lock();
        if shared.generation == self.generation {
            shared.active = None;
            shared.state.loading = false;
        }
    }
}

pub struct ListController<T, Tr> {
    shared: Arc<Mutex<Shared<T>>>,
    transport: Arc<Tr>,
}

impl<T, Tr> Clone for ListController<T, Tr> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T, Tr> ListController<T, Tr>
where
    Tr: PageTransport<T>,
{
    pub fn new(transport: Tr, initial: Params) -> Self {
        Self::with_page_size(transport, initial, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(transport: Tr, initial: Params, page_size: u32) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: ListState::new(initial, page_size),
                generation: 0,
                active: None,
            })),
            transport: Arc::new(transport),
        }
    }

    pub fn transport(&self) -> &Tr {
        &self.transport
    }

    /// Fetches the current page with `overrides` layered over the stored
    /// parameters for this request only.
    ///
    /// Cancels any request still in flight before issuing the new one.
    pub async fn refresh(&self, overrides: Option<&Params>) -> RefreshOutcome {
        let resource = self.transport.resource().to_string();

        let (generation, token, query) = {
            let mut shared = self.shared.lock();
            if let Some(previous) = shared.active.take() {
                previous.cancel();
                debug!(resource = %resource, generation = shared.generation, "cancelled superseded request");
            }

            shared.generation += 1;
            let token = CancelToken::new();
            shared.active = Some(token.clone());
            shared.state.loading = true;

            let params = match overrides {
                Some(overrides) => shared.state.params.merged(overrides),
                None => shared.state.params.clone(),
            };
            let query = ListQuery::new(&params, shared.state.page, shared.state.page_size);
            (shared.generation, token, query)
        };

        debug!(resource = %resource, generation, page = query.page, page_size = query.page_size, "issuing list request");
        let in_flight = InFlight {
            shared: &self.shared,
            generation,
        };
        let result = token
            .guard(self.transport.fetch_page(&query, &token))
            .await
            .and_then(|page| page);
        drop(in_flight);

        let mut shared = self.shared.lock();
        if shared.generation != generation || token.is_cancelled() {
            debug!(resource = %resource, generation, "dropping response of superseded request");
            return RefreshOutcome::Cancelled;
        }

        match result {
            Ok(page) => {
                let count = page.rows.len();
                shared.state.items = page.rows;
                shared.state.total_count = page.total_count;
                shared.state.error = false;
                RefreshOutcome::Loaded(count)
            }
            Err(e) if e.is_cancelled() => RefreshOutcome::Cancelled,
            Err(e) => {
                warn!(resource = %resource, error = %e, "list request failed");
                shared.state.items.clear();
                shared.state.total_count = 0;
                shared.state.error = true;
                RefreshOutcome::Failed
            }
        }
    }

    /// Merges `partial` into the stored parameters. `null` removes a filter.
    pub fn set_params(&self, partial: &Params) {
        self.shared.lock().state.params.merge(partial);
    }

    /// Sets the search filter and goes back to the first page. Empty text
    /// clears the filter.
    pub fn search(&self, text: &str) {
        let mut shared = self.shared.lock();
        let text = text.trim();
        if text.is_empty() {
            shared.state.params.remove(SEARCH_PARAM);
        } else {
            shared.state.params.set(SEARCH_PARAM, Value::String(text.to_string()));
        }
        shared.state.page = 1;
    }

    /// Moves to a 1-based page; 0 is treated as 1.
    pub fn go_to_page(&self, page: u32) {
        self.shared.lock().state.page = page.max(1);
    }

    /// Changes the page size and returns to the first page, so the current
    /// page can never point past the last one.
    pub fn set_page_size(&self, page_size: u32) {
        let mut shared = self.shared.lock();
        shared.state.page_size = page_size;
        shared.state.page = 1;
    }

    /// Cancels the active request, if any. Used when the owning page goes away.
    pub fn close(&self) {
        let mut shared = self.shared.lock();
        if let Some(active) = shared.active.take() {
            active.cancel();
        }
        shared.generation += 1;
        shared.state.loading = false;
    }

    pub fn total_pages(&self) -> u64 {
        self.shared.lock().state.total_pages()
    }

    pub fn page(&self) -> u32 {
        self.shared.lock().state.page
    }

    pub fn page_size(&self) -> u32 {
        self.shared.lock().state.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.shared.lock().state.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.shared.lock().state.loading
    }

    pub fn has_error(&self) -> bool {
        self.shared.lock().state.error
    }

    pub fn params(&self) -> Params {
        self.shared.lock().state.params.clone()
    }

    /// The query the next `refresh` without overrides would send.
    pub fn current_query(&self) -> ListQuery {
        let shared = self.shared.lock();
        ListQuery::new(&shared.state.params, shared.state.page, shared.state.page_size)
    }

    /// Fetches one page directly, propagating failures. Controller state is
    /// not touched.
    pub async fn fetch_page(&self, query: &ListQuery) -> Result<Page<T>> {
        self.transport.fetch_page(query, &CancelToken::new()).await
    }

    /// Walks every page for the current filters and returns all rows.
    ///
    /// Stops at the reported total or at the first empty page. Any failure is
    /// returned to the caller.
    pub async fn fetch_all(&self) -> Result<Vec<T>> {
        let (params, page_size) = {
            let shared = self.shared.lock();
            (shared.state.params.clone(), shared.state.page_size.max(1))
        };

        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let query = ListQuery::new(&params, page, page_size);
            let fetched = self.fetch_page(&query).await?;
            let done = fetched.rows.is_empty();
            rows.extend(fetched.rows);
            if done || rows.len() as u64 >= fetched.total_count {
                break;
            }
            page += 1;
        }

        debug!(resource = %self.transport.resource(), rows = rows.len(), pages = page, "fetched all pages");
        Ok(rows)
    }
}

impl<T: Clone, Tr> ListController<T, Tr> {
    pub fn snapshot(&self) -> ListState<T> {
        self.shared.lock().state.clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.shared.lock().state.items.clone()
    }
}
