//! Authenticated layout for the `/studio` subtree.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::auth_gate::AuthGate;
use crate::components::nav_shell::NavShell;

#[component]
pub fn StudioLayout() -> impl IntoView {
    view! {
        <AuthGate>
            <NavShell/>
            <main class="studio-main">
                <Outlet/>
            </main>
        </AuthGate>
    }
}
