//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own request forwarding and response interpretation so
//! route handlers can stay focused on extraction and auth plumbing.

pub mod proxy;
