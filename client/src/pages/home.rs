//! `/`: one-shot bootstrap redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::BrowserSession;
use crate::util::auth::replace;

/// Sends the visitor to `/chat` or `/login` once, based on whether an access
/// token is persisted. Renders nothing.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = session.with_untracked(|s| s.landing_path());
        navigate(target, replace());
    });
}
