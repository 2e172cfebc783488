//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session::BrowserSession;
use crate::state::storage::{DocumentCookies, LocalStorage};
use crate::util::auth::RouteGuard;

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
/// Restores the session from browser storage once and provides it as
/// context; pages read and mutate it through `RwSignal<BrowserSession>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(BrowserSession::restore(LocalStorage, DocumentCookies));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-frontend.css"/>
        <Title text="Chat"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=(StaticSegment("chat"), ParamSegment("id")) view=ChatPage/>
            </Routes>
        </Router>
    }
}
