//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session, dashboard-details, and notification state shared between pages
//! through Leptos context.

pub mod details;
pub mod session;
pub mod toast;
