//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` interprets replies from the two endpoints, `http` moves bytes over
//! `gloo-net`, and `types` defines the wire schema and the open profile model.

pub mod api;
pub mod http;
pub mod types;
