//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the persistent chrome and shared dialogs while
//! reading/writing state from Leptos context providers.

pub mod alert_modal;
pub mod form_field;
pub mod header;
