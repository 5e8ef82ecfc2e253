//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decision logic free of Leptos so it can be unit
//! tested without a reactive runtime.

pub mod auth;
pub mod meta;
