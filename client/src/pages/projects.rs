//! Project list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/api/projects` once on mount in the browser. An auth failure
//! invalidates the session, which hands control back to the Auth Gate.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::net::types::Project;
use crate::state::session::SessionHandle;
use crate::util::meta::page_title;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let projects = RwSignal::new(None::<Result<Vec<Project>, String>>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_projects().await;
            projects.set(Some(session.settle(result)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Title text=page_title("Projects")/>
        <h1>"Projects"</h1>
        {move || match projects.get() {
            None => view! { <p class="loading">"Loading projects…"</p> }.into_any(),
            Some(Err(message)) => view! { <p class="error">{message}</p> }.into_any(),
            Some(Ok(list)) if list.is_empty() => view! { <p>"No projects yet."</p> }.into_any(),
            Some(Ok(list)) => view! {
                <ul class="project-list">
                    {list
                        .into_iter()
                        .map(|project| {
                            let href = format!("/studio/projects/{}", project.slug);
                            view! {
                                <li>
                                    <A href=href>{project.name}</A>
                                    <p class="project-description">{project.description.unwrap_or_default()}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any(),
        }}
    }
}
