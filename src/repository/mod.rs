use crate::domain::oui::SearchResponse;
use crate::repository::errors::BackendResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use self::http::HttpOuiClient;

/// Page size used for every results page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// One backend lookup, built per navigation event and discarded after the
/// fetch settles.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub term: String,
    pub pagination: Option<Pagination>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read access to the remote lookup backend.
#[allow(async_fn_in_trait)]
pub trait OuiReader {
    /// Issues a single paginated search against the backend.
    async fn search(&self, query: SearchQuery) -> BackendResult<SearchResponse>;
}
