//! REST API helpers for communicating with the survey backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent to the `/api`
//! prefix that the server forwards to the backend.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response becomes an [`ApiError`] holding the status and the
//! plain-text body, which is exactly what `util::response_error` classifies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, UserLoginRequest, UserRegisterRequest, UserResponse};

/// Path prefix the server proxies to the backend API.
pub const API_PREFIX: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_PREFIX}/{}", path.trim_start_matches('/'))
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable() -> ApiError {
    ApiError::transport("not available on server")
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    leptos::logging::warn!("api request to {} failed: {status}", resp.url());
    ApiError::new(status, body)
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::transport(err.to_string())
}

/// Log in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] with the backend status and body when the credentials
/// are rejected, or status `0` when the request could not be sent.
pub async fn login(request: &UserLoginRequest) -> Result<UserResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("auth/login"))
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<UserResponse>().await.map_err(transport_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Register a new account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns [`ApiError`] when the backend rejects the registration (for
/// example a duplicate email) or the request could not be sent.
pub async fn register(request: &UserRegisterRequest) -> Result<UserResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("auth/register"))
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<UserResponse>().await.map_err(transport_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// End the backend session via `GET /api/auth/logout`.
///
/// Failures are logged and otherwise ignored; the local session flag is
/// cleared by the caller regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::get(&endpoint("auth/logout")).send().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}
