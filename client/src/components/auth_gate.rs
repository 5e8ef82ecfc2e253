//! Route guard wrapping the authenticated page subtree.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionHandle, SessionProvider};
use crate::util::auth::{GateGuard, GateView, gate_view, run_gate};

/// Render `children` only for a signed-in session.
///
/// While the session resolves a placeholder is shown. Once it resolves
/// logged-out the gate requests a login prompt, navigates to `/` and renders
/// nothing.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let mut guard = GateGuard::default();
    Effect::new(move || {
        run_gate(&mut guard, &session, |path| {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    });

    let status = session.status_memo();
    move || match gate_view(status.get()) {
        GateView::Loading => view! { <div class="gate-loading" aria-busy="true">"Loading your studio…"</div> }.into_any(),
        GateView::Redirect => ().into_any(),
        GateView::Protected => children().into_any(),
    }
}
