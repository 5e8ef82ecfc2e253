//! Navigation bar for the authenticated studio pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionHandle;

#[component]
pub fn NavShell() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let user_name = move || session.user().map(|u| u.display_name()).unwrap_or_default();

    view! {
        <nav class="nav-shell">
            <A href="/">"Cosplanner"</A>
            <A href="/studio/gallery">"Gallery"</A>
            <A href="/studio/projects">"Projects"</A>
            <A href="/studio/profile">"Profile"</A>
            <span class="nav-user">{user_name}</span>
        </nav>
    }
}
