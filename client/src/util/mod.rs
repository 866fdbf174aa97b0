//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and the pure
//! validation/classification logic from page and component code.

pub mod dark_mode;
pub mod persistence;
pub mod response_error;
pub mod validation;
