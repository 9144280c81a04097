//! Networking modules for the editor's HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the requests and `types` defines the JSON response shapes.

pub mod api;
pub mod types;
