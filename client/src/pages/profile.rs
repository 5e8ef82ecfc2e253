//! Profile page for the signed-in user.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::session::SessionHandle;
use crate::util::meta::page_title;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    view! {
        <Title text=page_title("Profile")/>
        <h1>"Profile"</h1>
        {move || {
            session
                .user()
                .map(|user| {
                    let email = user.email.clone().unwrap_or_else(|| "not shared".to_owned());
                    view! {
                        <dl class="profile">
                            <dt>"Name"</dt>
                            <dd>{user.display_name()}</dd>
                            <dt>"Email"</dt>
                            <dd>{email}</dd>
                            <dt>"User ID"</dt>
                            <dd>{user.id}</dd>
                        </dl>
                    }
                })
        }}
    }
}
