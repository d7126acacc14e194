//! In-memory backend stand-in for isolating services in tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::oui::SearchResponse;
use crate::repository::errors::{BackendError, BackendResult};
use crate::repository::{OuiReader, SearchQuery};

/// Scripted backend: answers queued responses in order and records every
/// query it receives. Clones share the same script and call log.
#[derive(Clone, Default)]
pub struct MockOuiBackend {
    responses: Arc<Mutex<VecDeque<BackendResult<SearchResponse>>>>,
    calls: Arc<Mutex<Vec<SearchQuery>>>,
}

impl MockOuiBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next response returned by [`OuiReader::search`].
    pub fn push_response(&self, response: BackendResult<SearchResponse>) {
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .push_back(response);
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

impl OuiReader for MockOuiBackend {
    async fn search(&self, query: SearchQuery) -> BackendResult<SearchResponse> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(query);

        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Network("no scripted response".to_string())))
    }
}
