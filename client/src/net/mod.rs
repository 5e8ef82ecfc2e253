//! Networking modules for same-origin REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` calls the server's proxy endpoints and `types` defines the payloads
//! those endpoints relay from the upstream API.

pub mod api;
pub mod types;
