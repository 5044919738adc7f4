use contracts::system::access::{Action, PageKey};
use leptos::prelude::*;

use super::context::use_session;
use crate::shared::icons::icon;

/// Renders `children` only when the signed-in role may perform `action`
/// on `page`. Mutating actions also need the page's mutate flag.
/// Hidden controls leave no placeholder.
#[component]
pub fn RequireAction(page: PageKey, action: Action, children: ChildrenFn) -> impl IntoView {
    let access = use_session().page_access(page);

    view! {
        <Show when=move || access.get().allows(action)>
            {children()}
        </Show>
    }
}

/// In-place replacement for a page the current role may not open.
#[component]
pub fn AccessRestricted(page: PageKey) -> impl IntoView {
    let session = use_session();
    let role_label = move || session.role().map(|r| r.label()).unwrap_or_default();

    view! {
        <div class="access-restricted">
            <div class="access-restricted__icon">{icon("alert-triangle")}</div>
            <h2>"Access Restricted"</h2>
            <p>{page.restriction_notice()}</p>
            <p class="access-restricted__role">
                "Signed in as " <strong>{role_label}</strong>
            </p>
        </div>
    }
}
