//! `/login`: username + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::REGISTER_PATH;
use crate::state::session::BrowserSession;
use crate::util::validate::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let destination = RwSignal::new(None::<String>);

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = destination.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let credentials = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::AuthClient;
            use crate::net::flow::{chat_path, chat_title, login_and_open_chat, today_label};
            use crate::net::transport::FetchTransport;

            let client = AuthClient::new(FetchTransport);
            let title = chat_title(&today_label());
            match login_and_open_chat(&client, &credentials, &title, |tokens| session.update(|s| s.establish(tokens)))
                .await
            {
                Ok(chat) => destination.set(Some(chat_path(chat))),
                Err(e) => {
                    log::error!("login failed: {e:?}");
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session, destination);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Enter your credentials to sign in"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="username">"Username"</label>
                    <input
                        id="username"
                        name="username"
                        class="auth-input"
                        type="text"
                        placeholder="Enter your username"
                        required=true
                        disabled=move || busy.get()
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                    <label class="auth-label" for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        class="auth-input"
                        type="password"
                        placeholder="Enter your password"
                        required=true
                        disabled=move || busy.get()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
