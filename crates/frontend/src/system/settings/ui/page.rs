use contracts::shared::error::ValidationErrors;
use contracts::system::access::{Action, PageKey};
use contracts::system::preferences::{PasswordChangeDto, Preferences};
use leptos::prelude::*;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::{FieldError, PageHeader};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAction;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let access = session.page_access(PageKey::Settings);
    let identity = session.identity();

    let name = RwSignal::new(identity.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let email = RwSignal::new(identity.as_ref().map(|i| i.email.clone()).unwrap_or_default());
    let role_label = identity.map(|i| i.role.label()).unwrap_or_default();

    let defaults = Preferences::default();
    let email_notifications = RwSignal::new(defaults.email_notifications);
    let sms_notifications = RwSignal::new(defaults.sms_notifications);
    let system_alerts = RwSignal::new(defaults.system_alerts);
    let compact_mode = RwSignal::new(defaults.compact_mode);
    let show_tooltips = RwSignal::new(defaults.show_tooltips);

    let password = RwSignal::new(PasswordChangeDto::default());
    let password_errors = RwSignal::new(None::<ValidationErrors>);

    let on_save = move |_| {
        if let Err(e) = password.with_untracked(|p| p.validate()) {
            password_errors.set(Some(e));
            toast.error("Please fix the highlighted fields");
            return;
        }
        password_errors.set(None);
        let prefs = Preferences {
            email_notifications: email_notifications.get_untracked(),
            sms_notifications: sms_notifications.get_untracked(),
            system_alerts: system_alerts.get_untracked(),
            compact_mode: compact_mode.get_untracked(),
            show_tooltips: show_tooltips.get_untracked(),
        };
        log::debug!("preferences saved: {:?}", prefs);
        let changed_password = !password.with_untracked(|p| p.is_blank());
        password.set(PasswordChangeDto::default());
        toast.success(if changed_password {
            "Settings saved and password updated"
        } else {
            "Settings saved"
        });
    };

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::Settings.title()
                subtitle=Signal::derive(move || {
                    access.get().description("Manage your profile and notification preferences")
                })
                view_only=Signal::derive(move || access.get().is_view_only())
            >
                <RequireAction page=PageKey::Settings action=Action::SavePreferences>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save>
                        "Save Changes"
                    </Button>
                </RequireAction>
            </PageHeader>

            <div class="settings-grid">
                <div class="card">
                    <h3 class="card__title">{icon("user")}" Profile"</h3>
                    <div class="form-group">
                        <label>"Full Name"</label>
                        <Input value=name />
                    </div>
                    <div class="form-group">
                        <label>"Email"</label>
                        <Input value=email />
                    </div>
                    <div class="form-group">
                        <label>"Role"</label>
                        <input type="text" value=role_label readonly=true />
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">{icon("info")}" Notifications"</h3>
                    <Flex vertical=true>
                        <Switch checked=email_notifications label="Email notifications" />
                        <Switch checked=sms_notifications label="SMS notifications" />
                        <Switch checked=system_alerts label="System alerts" />
                    </Flex>
                    <h3 class="card__title">"Display"</h3>
                    <Flex vertical=true>
                        <Switch checked=compact_mode label="Compact mode" />
                        <Switch checked=show_tooltips label="Show tooltips" />
                    </Flex>
                </div>

                <div class="card">
                    <h3 class="card__title">"Change Password"</h3>
                    <p class="card__subtitle">"Leave blank to keep your current password."</p>
                    <div class="form-group">
                        <label for="current-password">"Current Password"</label>
                        <input
                            type="password"
                            id="current-password"
                            prop:value=move || password.get().current
                            on:input=move |ev| password.update(|p| p.current = event_target_value(&ev))
                        />
                        <FieldError errors=password_errors field="current" />
                    </div>
                    <div class="form-group">
                        <label for="new-password">"New Password"</label>
                        <input
                            type="password"
                            id="new-password"
                            prop:value=move || password.get().new
                            on:input=move |ev| password.update(|p| p.new = event_target_value(&ev))
                        />
                        <FieldError errors=password_errors field="new" />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">"Confirm New Password"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            prop:value=move || password.get().confirm
                            on:input=move |ev| password.update(|p| p.confirm = event_target_value(&ev))
                        />
                        <FieldError errors=password_errors field="confirm" />
                    </div>
                </div>
            </div>
        </div>
    }
}
