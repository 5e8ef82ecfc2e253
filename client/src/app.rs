//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::{
    gallery::GalleryPage, home::HomePage, profile::ProfilePage, project::ProjectPage, projects::ProjectsPage,
    studio::StudioLayout,
};
use crate::state::session::{SessionHandle, SessionState};
use crate::util::meta::APP_NAME;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The session
/// starts out resolving; in the browser it settles from `/api/user/me`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new(SessionState::resolving());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = match crate::net::api::fetch_current_user().await {
                Ok(user) => user,
                Err(e) => {
                    log::info!("session unresolved: {e}");
                    None
                }
            };
            session.resolve(user);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/cosplanner.css"/>
        <Title text=APP_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <ParentRoute path=StaticSegment("studio") view=StudioLayout>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
