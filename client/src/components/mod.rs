//! Reusable UI building blocks shared by pages.

pub mod auth_gate;
pub mod login_prompt;
pub mod nav_shell;
