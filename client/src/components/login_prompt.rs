//! Login prompt overlay raised by the Auth Gate.

use leptos::prelude::*;

use crate::state::session::SessionHandle;

/// Dismissible notice asking the visitor to sign in.
#[component]
pub fn LoginPrompt() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let on_close = move |_| session.dismiss_login_prompt();

    view! {
        <Show when=move || session.login_prompt_open()>
            <div class="login-prompt" role="dialog" aria-modal="true">
                <h2>"Sign in required"</h2>
                <p>"Your session has ended or you have not signed in yet. Sign in to open your studio."</p>
                <button class="login-prompt-close" on:click=on_close>
                    "Close"
                </button>
            </div>
        </Show>
    }
}
