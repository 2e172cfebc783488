//! `/register`: account creation followed by automatic sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::LOGIN_PATH;
use crate::state::session::BrowserSession;
use crate::util::validate::validate_register;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
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
        let credentials =
            match validate_register(&username.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
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
            use crate::net::flow::{chat_path, chat_title, register_and_open_chat, today_label};
            use crate::net::transport::FetchTransport;

            let client = AuthClient::new(FetchTransport);
            let title = chat_title(&today_label());
            match register_and_open_chat(&client, &credentials, &title, |tokens| {
                session.update(|s| s.establish(tokens));
            })
            .await
            {
                Ok(chat) => destination.set(Some(chat_path(chat))),
                Err(e) => {
                    log::error!("registration failed: {e:?}");
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
                <h1>"Register"</h1>
                <p class="auth-card__subtitle">"Create a new account"</p>
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
                    <label class="auth-label" for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        class="auth-input"
                        type="email"
                        placeholder="Enter your email"
                        required=true
                        disabled=move || busy.get()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                    <label class="auth-label" for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        class="auth-input"
                        type="password"
                        placeholder="At least 8 characters"
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
                        {move || if busy.get() { "Loading..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
