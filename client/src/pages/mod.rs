//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` is public. Every other page is mounted under `/studio`, whose
//! parent route renders `studio::StudioLayout` (Auth Gate + navigation).

pub mod gallery;
pub mod home;
pub mod profile;
pub mod project;
pub mod projects;
pub mod studio;
