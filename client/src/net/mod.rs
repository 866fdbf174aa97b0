//! Networking modules for the survey REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the shared wire schema,
//! including the `ApiError` consumed by the response-error classifier.

pub mod api;
pub mod types;
