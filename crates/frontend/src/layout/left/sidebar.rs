//! Role-filtered navigation menu.

use contracts::system::access::compose_nav;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    // Recomputed whenever the role changes.
    let entries = Memo::new(move |_| compose_nav(&session.state()));

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__role">
                {move || session.role().map(|r| view! {
                    <span class=r.badge_class()>{r.label()}</span>
                })}
            </div>
            {move || entries.get().into_iter().map(|entry| {
                let path = entry.path();
                view! {
                    <a
                        href=path
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || location.pathname.get() == path
                    >
                        <div class="app-sidebar__item-content">
                            {icon(entry.icon)}
                            <span>{entry.label}</span>
                        </div>
                    </a>
                }
            }).collect_view()}
        </div>
    }
}
