//! Gallery page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::util::meta::page_title;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <Title text=page_title("Gallery")/>
        <h1>"Gallery"</h1>
        <p class="gallery-empty">"Finished builds and progress shots from your projects appear here."</p>
    }
}
