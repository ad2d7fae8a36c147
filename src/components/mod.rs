//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render card bodies and the notification stack while reading
//! shared state from Leptos context providers.

pub mod field_list;
pub mod toast_host;
