//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so they can be tested natively.

pub mod auth;
pub mod format;
pub mod storage;
