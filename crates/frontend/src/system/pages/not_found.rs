use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let session = use_session();
    let home = move || {
        session
            .role()
            .map(|r| r.landing_path())
            .unwrap_or(contracts::system::routing::LOGIN_PATH)
    };

    view! {
        <div class="not-found">
            <div class="not-found__icon">{icon("search")}</div>
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a class="btn-primary" href=home>"Back to home"</a>
        </div>
    }
}
