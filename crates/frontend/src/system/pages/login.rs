use contracts::system::auth::{demo_identity, LoginRequest, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_global_context;
use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let toast = use_toast();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Resident);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // The route guard moves a signed-in session to its landing page.
    let submit = move |request: LoginRequest| {
        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match session.login(request).await {
                Ok(identity) => {
                    toast.success(format!("Welcome, {}", identity.name));
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    toast.error(e.to_string());
                }
            }
            set_is_loading.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(LoginRequest {
            email: email.get(),
            password: password.get(),
            role: role.get(),
        });
    };

    let quick_login = move |r: Role| {
        let identity = demo_identity(r);
        set_email.set(identity.email.clone());
        set_password.set("demo".to_string());
        set_role.set(r);
        submit(LoginRequest {
            email: identity.email,
            password: "demo".to_string(),
            role: r,
        });
    };

    let barangay_name = ctx.config().barangay_name;

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__logo">{icon("heart")}</div>
                <h1>{barangay_name}</h1>
                <h2>"Sign in to the portal"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="name@barangay.gov.ph"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="role">"Sign in as"</label>
                        <select
                            id="role"
                            prop:value=move || role.get().slug()
                            on:change=move |ev| {
                                if let Ok(r) = event_target_value(&ev).parse::<Role>() {
                                    set_role.set(r);
                                }
                            }
                            disabled=move || is_loading.get()
                        >
                            {Role::ALL.into_iter().map(|r| view! {
                                <option value=r.slug()>{r.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <Show when=move || ctx.demo_mode()>
                    <div class="login-info">
                        <p>"Quick demo login"</p>
                        <div class="login-demo-roles">
                            {Role::ALL.into_iter().map(|r| view! {
                                <button
                                    type="button"
                                    class="login-demo-role"
                                    on:click=move |_| quick_login(r)
                                    disabled=move || is_loading.get()
                                >
                                    <span class=r.badge_class()>{r.label()}</span>
                                    <span class="login-demo-role__description">{r.description()}</span>
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
