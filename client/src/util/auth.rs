//! Auth Gate decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `AuthGate` component re-runs `run_gate` from an effect every time the
//! session status changes. The logic lives here, free of Leptos, so it can be
//! driven by a fake `SessionProvider` in tests.
//!
//! The guard only acts on the transition into `Redirect`: repeated runs with
//! the same logged-out status never fire the callback or navigate again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::{SessionProvider, SessionStatus};

/// Public root the gate sends logged-out visitors to.
pub const PUBLIC_ROOT: &str = "/";

/// What the gate renders for a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    Loading,
    Redirect,
    Protected,
}

/// Side effect the gate must perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    RequireLogin,
}

#[must_use]
pub fn gate_view(status: SessionStatus) -> GateView {
    if status.is_loading {
        GateView::Loading
    } else if !status.is_logged_in {
        GateView::Redirect
    } else {
        GateView::Protected
    }
}

/// Remembers the last view so actions fire once per transition.
#[derive(Debug, Default)]
pub struct GateGuard {
    last: Option<GateView>,
}

impl GateGuard {
    pub fn observe(&mut self, view: GateView) -> Option<GateAction> {
        let previous = self.last.replace(view);
        (view == GateView::Redirect && previous != Some(GateView::Redirect)).then_some(GateAction::RequireLogin)
    }
}

/// Evaluate the gate once: on a fresh transition into the logged-out state,
/// invoke the login-required callback and navigate to the public root.
pub fn run_gate<P, N>(guard: &mut GateGuard, session: &P, navigate: N) -> GateView
where
    P: SessionProvider + ?Sized,
    N: FnOnce(&str),
{
    let view = gate_view(session.status());
    if guard.observe(view) == Some(GateAction::RequireLogin) {
        session.handle_login_required();
        navigate(PUBLIC_ROOT);
    }
    view
}
