use std::cell::{Cell, RefCell};

use super::*;

/// Hand-driven session provider that records callback invocations.
struct FakeSession {
    status: Cell<SessionStatus>,
    login_required_calls: Cell<usize>,
}

impl FakeSession {
    fn new(is_logged_in: bool, is_loading: bool) -> Self {
        Self { status: Cell::new(SessionStatus { is_logged_in, is_loading }), login_required_calls: Cell::new(0) }
    }

    fn set(&self, is_logged_in: bool, is_loading: bool) {
        self.status.set(SessionStatus { is_logged_in, is_loading });
    }
}

impl SessionProvider for FakeSession {
    fn status(&self) -> SessionStatus {
        self.status.get()
    }

    fn handle_login_required(&self) {
        self.login_required_calls.set(self.login_required_calls.get() + 1);
    }
}

/// Run the gate once, returning the view and any navigation target.
fn step(guard: &mut GateGuard, session: &FakeSession, navigations: &RefCell<Vec<String>>) -> GateView {
    run_gate(guard, session, |path| navigations.borrow_mut().push(path.to_owned()))
}

#[test]
fn gate_view_loading_wins_over_login_flag() {
    assert_eq!(gate_view(SessionStatus { is_logged_in: false, is_loading: true }), GateView::Loading);
    assert_eq!(gate_view(SessionStatus { is_logged_in: true, is_loading: true }), GateView::Loading);
}

#[test]
fn gate_view_logged_out_redirects() {
    assert_eq!(gate_view(SessionStatus { is_logged_in: false, is_loading: false }), GateView::Redirect);
}

#[test]
fn gate_view_logged_in_is_protected() {
    assert_eq!(gate_view(SessionStatus { is_logged_in: true, is_loading: false }), GateView::Protected);
}

#[test]
fn loading_issues_no_navigation() {
    for logged_in in [true, false] {
        let session = FakeSession::new(logged_in, true);
        let navigations = RefCell::new(Vec::new());
        let mut guard = GateGuard::default();
        assert_eq!(step(&mut guard, &session, &navigations), GateView::Loading);
        assert!(navigations.borrow().is_empty());
        assert_eq!(session.login_required_calls.get(), 0);
    }
}

#[test]
fn logged_out_prompts_once_and_navigates_to_root() {
    let session = FakeSession::new(false, false);
    let navigations = RefCell::new(Vec::new());
    let mut guard = GateGuard::default();

    assert_eq!(step(&mut guard, &session, &navigations), GateView::Redirect);
    assert_eq!(session.login_required_calls.get(), 1);
    assert_eq!(*navigations.borrow(), vec![PUBLIC_ROOT.to_owned()]);
}

#[test]
fn repeated_logged_out_runs_do_not_duplicate_navigation() {
    let session = FakeSession::new(false, false);
    let navigations = RefCell::new(Vec::new());
    let mut guard = GateGuard::default();

    for _ in 0..5 {
        assert_eq!(step(&mut guard, &session, &navigations), GateView::Redirect);
    }
    assert_eq!(session.login_required_calls.get(), 1);
    assert_eq!(navigations.borrow().len(), 1);
}

#[test]
fn loading_then_logged_out_prompts_after_resolution() {
    let session = FakeSession::new(false, true);
    let navigations = RefCell::new(Vec::new());
    let mut guard = GateGuard::default();

    step(&mut guard, &session, &navigations);
    assert_eq!(session.login_required_calls.get(), 0);

    session.set(false, false);
    assert_eq!(step(&mut guard, &session, &navigations), GateView::Redirect);
    assert_eq!(session.login_required_calls.get(), 1);
    assert_eq!(navigations.borrow().len(), 1);
}

#[test]
fn logged_in_never_invokes_callback() {
    let session = FakeSession::new(true, false);
    let navigations = RefCell::new(Vec::new());
    let mut guard = GateGuard::default();

    for _ in 0..3 {
        assert_eq!(step(&mut guard, &session, &navigations), GateView::Protected);
    }
    assert_eq!(session.login_required_calls.get(), 0);
    assert!(navigations.borrow().is_empty());
}

#[test]
fn session_loss_after_login_prompts_once_per_transition() {
    let session = FakeSession::new(true, false);
    let navigations = RefCell::new(Vec::new());
    let mut guard = GateGuard::default();

    step(&mut guard, &session, &navigations);
    session.set(false, false);
    step(&mut guard, &session, &navigations);
    step(&mut guard, &session, &navigations);
    assert_eq!(session.login_required_calls.get(), 1);

    session.set(true, false);
    step(&mut guard, &session, &navigations);
    session.set(false, false);
    step(&mut guard, &session, &navigations);
    assert_eq!(session.login_required_calls.get(), 2);
    assert_eq!(navigations.borrow().len(), 2);
}

#[test]
fn guard_observe_only_fires_on_redirect_entry() {
    let mut guard = GateGuard::default();
    assert_eq!(guard.observe(GateView::Loading), None);
    assert_eq!(guard.observe(GateView::Redirect), Some(GateAction::RequireLogin));
    assert_eq!(guard.observe(GateView::Redirect), None);
    assert_eq!(guard.observe(GateView::Protected), None);
    assert_eq!(guard.observe(GateView::Redirect), Some(GateAction::RequireLogin));
}
