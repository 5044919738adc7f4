use contracts::shared::error::ValidationErrors;
use contracts::system::auth::Role;
use contracts::system::users::{next_user_id, CreateUserDto, UserAccount};
use leptos::prelude::*;

use crate::shared::components::FieldError;

#[component]
pub fn CreateUserForm(
    /// Accounts already listed; the new id follows the highest one
    existing: Signal<Vec<UserAccount>>,
    on_close: Callback<()>,
    on_created: Callback<UserAccount>,
) -> impl IntoView {
    let form = RwSignal::new(CreateUserDto::default());
    let errors = RwSignal::new(None::<ValidationErrors>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = existing.with_untracked(|users| next_user_id(users));
        match form.get_untracked().into_account(id) {
            Ok(account) => {
                log::info!("user account {} created with role {}", account.id, account.role);
                on_created.run(account);
            }
            Err(e) => errors.set(Some(e)),
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Add User"</h3>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Full Name *"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="name" />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email *"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="email" />
                    </div>

                    <div class="form-group">
                        <label for="role">"Role *"</label>
                        <select
                            id="role"
                            prop:value=move || form.get().role.map(|r| r.slug()).unwrap_or_default()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                let role = Role::ALL.into_iter().find(|r| r.slug() == value);
                                form.update(|f| f.role = role);
                            }
                        >
                            <option value="">"Select role"</option>
                            {Role::ALL.into_iter().map(|r| view! {
                                <option value=r.slug()>{r.label()}</option>
                            }).collect_view()}
                        </select>
                        <FieldError errors=errors field="role" />
                    </div>

                    <div class="form-group">
                        <label for="password">"Temporary Password *"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="password" />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">"Create User"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
