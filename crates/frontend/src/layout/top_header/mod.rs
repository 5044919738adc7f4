//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and portal title
//! - Demo role switcher (demo mode only)
//! - Signed-in user and logout

use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
fn RoleSwitcher() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let on_change = move |ev: leptos::ev::Event| {
        let Ok(role) = event_target_value(&ev).parse::<Role>() else {
            return;
        };
        match session.switch_role(role) {
            Ok(identity) => toast.info(format!("Now viewing as {}", identity.role.label())),
            Err(e) => toast.error(e.to_string()),
        }
    };

    view! {
        <label class="top-header__switcher" title="Switch demo role">
            {icon("users")}
            <select
                prop:value=move || session.role().map(|r| r.slug()).unwrap_or_default()
                on:change=on_change
            >
                {Role::ALL.into_iter().map(|r| view! {
                    <option value=r.slug()>{r.label()}</option>
                }).collect_view()}
            </select>
        </label>
    }
}

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let toast = use_toast();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    // The route guard sends the now signed-out visitor to /login.
    let logout = move |_| {
        session.logout();
        toast.info("You have been signed out");
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let title = ctx.config().barangay_name;

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                {icon("heart")}
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <Show when=move || ctx.demo_mode()>
                    <RoleSwitcher />
                </Show>

                <div class="top-header__user">
                    {icon("user")}
                    <div class="top-header__user-text">
                        <span class="top-header__user-name">
                            {move || session.identity().map(|i| i.name).unwrap_or_default()}
                        </span>
                        <span class="top-header__user-role">
                            {move || session.role().map(|r| r.label()).unwrap_or_default()}
                        </span>
                    </div>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
