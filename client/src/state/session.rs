//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root provides one `SessionHandle` through Leptos context. The Auth
//! Gate reads it through the `SessionProvider` trait; pages invalidate it when
//! a proxy call reports an authentication failure. Nothing here is global:
//! tests build their own providers.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::User;

/// Observable session status consumed by the Auth Gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    pub is_logged_in: bool,
    pub is_loading: bool,
}

/// Authentication state tracking the current user, loading status and
/// whether a login prompt was requested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub login_prompt: bool,
}

impl SessionState {
    /// Initial state while `/api/user/me` is still in flight.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true, login_prompt: false }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus { is_logged_in: self.user.is_some(), is_loading: self.loading }
    }

    /// Finish initial resolution with whatever user the server reported.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Drop the user after the upstream rejected the session.
    pub fn invalidate(&mut self) {
        self.user = None;
        self.loading = false;
    }

    pub fn require_login(&mut self) {
        self.login_prompt = true;
    }

    pub fn dismiss_login_prompt(&mut self) {
        self.login_prompt = false;
    }
}

/// Read side of the session plus the login-required callback.
pub trait SessionProvider {
    fn status(&self) -> SessionStatus;
    fn handle_login_required(&self);
}

/// Context handle around the reactive session signal.
#[derive(Clone, Copy)]
pub struct SessionHandle(pub RwSignal<SessionState>);

impl SessionHandle {
    #[must_use]
    pub fn new(state: SessionState) -> Self {
        Self(RwSignal::new(state))
    }

    pub fn user(&self) -> Option<User> {
        self.0.with(|s| s.user.clone())
    }

    /// Gate-relevant status, notifying only when it actually changes.
    #[must_use]
    pub fn status_memo(&self) -> Memo<SessionStatus> {
        let signal = self.0;
        Memo::new(move |_| signal.with(SessionState::status))
    }

    pub fn login_prompt_open(&self) -> bool {
        self.0.with(|s| s.login_prompt)
    }

    pub fn resolve(&self, user: Option<User>) {
        self.0.update(|s| s.resolve(user));
    }

    pub fn dismiss_login_prompt(&self) {
        self.0.update(SessionState::dismiss_login_prompt);
    }

    /// Convert a proxy result for display, invalidating the session on
    /// `NotAuthenticated` / `TokenExpired`.
    pub fn settle<T>(&self, result: Result<T, ApiError>) -> Result<T, String> {
        result.map_err(|e| {
            if e.is_auth_failure() {
                self.0.update(SessionState::invalidate);
            }
            e.to_string()
        })
    }
}

impl SessionProvider for SessionHandle {
    fn status(&self) -> SessionStatus {
        self.0.with(SessionState::status)
    }

    fn handle_login_required(&self) {
        self.0.update(SessionState::require_login);
    }
}
