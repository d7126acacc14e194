//! Single-shot upstream fetch for data clients.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use serde_json::{Value, json};

use crate::repository::HttpOuiClient;
use crate::repository::errors::BackendError;

/// Query-string parameters forwarded verbatim to the backend.
pub const FORWARDED_PARAMS: [&str; 2] = ["page", "limit"];

/// Issues one backend request for `term` and renders the outcome for a
/// data client: the upstream body pretty-printed with the upstream status,
/// or a JSON error body on failure. No retries, no caching.
pub async fn proxy_search(client: &HttpOuiClient, term: &str, query_string: &str) -> HttpResponse {
    let params = forwarded_params(query_string);

    match client.fetch_raw(term, &params).await {
        Ok((status, body)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            json_response(status, &body)
        }
        Err(err) => {
            log::error!("Upstream lookup for {term:?} failed: {err}");
            error_response(&err)
        }
    }
}

/// JSON error body in the backend's own error shape.
pub fn error_body(status: StatusCode, message: &str) -> HttpResponse {
    json_response(status, &json!({ "count": 0, "error": message }))
}

fn error_response(err: &BackendError) -> HttpResponse {
    let status = match err {
        BackendError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        BackendError::UpstreamStatus(code) => StatusCode::from_u16(*code)
            .ok()
            .filter(|status| !status.is_success())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        BackendError::Network(_) | BackendError::Parse(_) => StatusCode::BAD_GATEWAY,
    };

    error_body(status, &err.to_string())
}

fn json_response(status: StatusCode, body: &Value) -> HttpResponse {
    let body = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(body)
}

/// Extracts the `page`/`limit` pairs from a raw query string, preserving
/// the caller's values untouched.
fn forwarded_params(query_string: &str) -> Vec<(String, String)> {
    query_string
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(name, _)| FORWARDED_PARAMS.contains(name))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
