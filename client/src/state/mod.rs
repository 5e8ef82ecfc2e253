//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided through Leptos context rather than module globals so
//! components and tests can supply their own instances.

pub mod session;
