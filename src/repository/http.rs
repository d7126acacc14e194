//! Reqwest-backed client for the lookup backend.

use std::time::Duration;

use serde_json::Value;

use crate::domain::oui::SearchResponse;
use crate::repository::errors::{BackendError, BackendResult};
use crate::repository::{OuiReader, SearchQuery};

/// HTTP client for the remote lookup API.
///
/// Holds one pooled `reqwest` client with an explicit request timeout;
/// cheap to clone and share across workers.
#[derive(Clone)]
pub struct HttpOuiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpOuiClient {
    /// Builds a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> BackendResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn query_url(&self, term: &str) -> String {
        format!("{}/{}", self.base_url, term)
    }

    /// Fetches `{base}/{term}` with the given query parameters and returns
    /// the upstream status alongside the parsed JSON body.
    ///
    /// Non-2xx responses with a readable JSON body are returned as `Ok` so
    /// the caller can pass the upstream status through; an unreadable body
    /// surfaces the upstream status (or a parse failure on a 2xx).
    pub async fn fetch_raw(
        &self,
        term: &str,
        params: &[(String, String)],
    ) -> BackendResult<(u16, Value)> {
        let mut request = self.http.get(self.query_url(term));
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(BackendError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(BackendError::from)?;

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok((status.as_u16(), value)),
            Err(_) if !status.is_success() => Err(BackendError::UpstreamStatus(status.as_u16())),
            Err(e) => Err(BackendError::Parse(e.to_string())),
        }
    }
}

impl OuiReader for HttpOuiClient {
    async fn search(&self, query: SearchQuery) -> BackendResult<SearchResponse> {
        let mut request = self.http.get(self.query_url(&query.term));
        if let Some(pagination) = &query.pagination {
            request = request.query(&[
                ("page", pagination.page.to_string()),
                ("limit", pagination.per_page.to_string()),
            ]);
        }

        let response = request.send().await.map_err(BackendError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}
