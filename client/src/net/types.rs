//! Wire types shared with the survey API.
//!
//! The backend serializes DTOs in camelCase, so every type here renames its
//! fields accordingly. Error bodies are plain text and are carried verbatim
//! in [`ApiError`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// User returned by the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Numeric user identifier assigned by the backend.
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Backend role name (e.g. `"USER"`).
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
}

/// Failed API call: the HTTP status plus the raw response body.
///
/// Transport failures that never produced a response use status `0` and
/// carry the transport error text as the body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request failed with status {status}: {body}")]
pub struct ApiError {
    pub status: u16,
    pub body: String,
}

impl ApiError {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Error for a request that never received an HTTP response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }
}
