//! `/chat` and `/chat/:id`: placeholder landing page with a logout control.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::guard::LOGIN_PATH;
use crate::state::session::BrowserSession;
use crate::util::auth::replace;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let logged_out = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move || {
        if logged_out.get() {
            navigate(LOGIN_PATH, replace());
        }
    });

    let on_logout = move |_| {
        session.update(|s| s.logout());
        logged_out.set(true);
    };

    view! {
        <div class="chat-page">
            <div class="chat-page__actions">
                <button class="auth-button auth-button--outline" type="button" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </div>
    }
}
