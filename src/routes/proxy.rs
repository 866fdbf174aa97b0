//! `/api/*` reverse proxy to the backend survey API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server, so the backend session cookie
//! is stored first-party and no CORS setup is needed. Status codes and plain
//! text error bodies are relayed unchanged because the client classifies
//! failures by exactly those two values.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the upstream request.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 5] = [
    header::ACCEPT,
    header::ACCEPT_LANGUAGE,
    header::AUTHORIZATION,
    header::CONTENT_TYPE,
    header::COOKIE,
];

/// Response headers copied back to the browser.
const RELAYED_RESPONSE_HEADERS: [HeaderName; 4] =
    [header::CACHE_CONTROL, header::CONTENT_TYPE, header::LOCATION, header::SET_COOKIE];

pub const UPSTREAM_UNAVAILABLE: &str = "upstream API unavailable";

/// Prefix stripped from incoming paths before forwarding.
pub const API_PREFIX: &str = "/api";

/// Still-encoded request path with the `/api` prefix removed.
pub fn upstream_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix(API_PREFIX).unwrap_or(path)
}

/// Join the backend base URL with the forwarded path and query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Copy the allow-listed headers, keeping repeated values (`set-cookie`).
pub fn copy_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    uri: Uri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Built from the raw URI so percent-escapes reach the backend untouched.
    let url = upstream_url(&state.api_base_url, upstream_path(&uri), uri.query());
    tracing::debug!(%method, %url, "forwarding api request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(copy_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await;

    let resp = match upstream {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            return (StatusCode::BAD_GATEWAY, UPSTREAM_UNAVAILABLE).into_response();
        }
    };

    let status = resp.status();
    let relayed = copy_headers(resp.headers(), &RELAYED_RESPONSE_HEADERS);
    match resp.bytes().await {
        Ok(bytes) => {
            if status.is_server_error() {
                tracing::warn!(%method, %url, %status, "upstream returned server error");
            }
            (status, relayed, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "failed to read upstream body");
            (StatusCode::BAD_GATEWAY, UPSTREAM_UNAVAILABLE).into_response()
        }
    }
}
