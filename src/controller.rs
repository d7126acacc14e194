//! Fetch lifecycle for the paginated results view.
//!
//! Drives one backend fetch per query or page change and keeps the
//! displayed result consistent when the user navigates faster than the
//! backend answers: fetches are never cancelled, but only the response of
//! the most recently issued request may be committed to the display slot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::oui::SearchResponse;
use crate::repository::{DEFAULT_PAGE_SIZE, OuiReader, SearchQuery};

/// Lifecycle of the results view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(SearchResponse),
    Failure(String),
}

struct DisplaySlot {
    seq: u64,
    state: FetchState,
}

/// Issues backend searches and owns the single displayed-result slot.
///
/// Every fetch carries a monotonically increasing sequence number; a
/// settled response is applied to the slot only while its number is still
/// the highest issued, so a slow stale response can never overwrite a
/// newer one.
#[derive(Clone)]
pub struct SearchController<B> {
    backend: B,
    issued: Arc<AtomicU64>,
    display: Arc<RwLock<DisplaySlot>>,
}

impl<B: OuiReader> SearchController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            issued: Arc::new(AtomicU64::new(0)),
            display: Arc::new(RwLock::new(DisplaySlot {
                seq: 0,
                state: FetchState::Idle,
            })),
        }
    }

    /// Currently displayed state.
    pub fn state(&self) -> FetchState {
        self.display
            .read()
            .expect("display slot lock poisoned")
            .state
            .clone()
    }

    /// Issues one fetch for `query` at `page` and returns its settled
    /// outcome.
    ///
    /// The outcome is always returned to the caller; the shared display
    /// slot is only updated when no newer fetch has been issued meanwhile.
    pub async fn load(&self, query: &str, page: usize) -> FetchState {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.commit(seq, FetchState::Loading);

        let search = SearchQuery::new(query).paginate(page, DEFAULT_PAGE_SIZE);
        let outcome = match self.backend.search(search).await {
            Ok(response) => FetchState::Success(response),
            Err(err) => {
                log::error!("Search for {query:?} page {page} failed: {err}");
                FetchState::Failure(err.to_string())
            }
        };

        self.commit(seq, outcome.clone());
        outcome
    }

    /// Writes `state` to the display slot unless a newer fetch was issued.
    fn commit(&self, seq: u64, state: FetchState) {
        if seq != self.issued.load(Ordering::SeqCst) {
            return;
        }
        let mut slot = self.display.write().expect("display slot lock poisoned");
        if seq >= slot.seq {
            slot.seq = seq;
            slot.state = state;
        }
    }
}

/// Canonical URL of a results page.
///
/// The page number lives in the query string so reloading or sharing the
/// URL reproduces the same page.
pub fn page_href(query: &str, page: usize) -> String {
    format!("/{}?page={page}", urlencoding::encode(query))
}
