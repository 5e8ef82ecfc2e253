//! Project detail page: time entries logged against one project.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::net::types::{TimeEntry, total_hours};
use crate::state::session::SessionHandle;
use crate::util::meta::page_title;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));
    let entries = RwSignal::new(None::<Result<Vec<TimeEntry>, String>>);

    // Refetch whenever the slug changes.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let slug = slug.get();
            entries.set(None);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_time_entries(&slug).await;
                entries.set(Some(session.settle(result)));
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Title text=move || page_title(&slug.get())/>
        <h1>{move || slug.get()}</h1>
        {move || match entries.get() {
            None => view! { <p class="loading">"Loading time entries…"</p> }.into_any(),
            Some(Err(message)) => view! { <p class="error">{message}</p> }.into_any(),
            Some(Ok(list)) => {
                let total = format!("{:.1} h logged", total_hours(&list));
                view! {
                    <p class="time-total">{total}</p>
                    <table class="time-entries">
                        <tbody>
                            {list
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <tr>
                                            <td>{entry.date.unwrap_or_default()}</td>
                                            <td>{entry.description}</td>
                                            <td>{format!("{:.1}", entry.hours)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }
        }}
    }
}
