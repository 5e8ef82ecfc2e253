//! Public landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::login_prompt::LoginPrompt;
use crate::util::meta::page_title;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=page_title("Home")/>
        <section class="home">
            <h1>"Cosplanner"</h1>
            <p>"Plan builds, track hours, and share progress with your cosplay group."</p>
            <A href="/studio/projects">"Open your studio"</A>
        </section>
        <LoginPrompt/>
    }
}
