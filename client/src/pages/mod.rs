//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, API calls, alert
//! handling) and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod register;
