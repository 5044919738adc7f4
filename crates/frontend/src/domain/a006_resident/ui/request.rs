use contracts::domain::a006_resident::{RequestType, ServiceRequestDto, SubmittedRequest};
use contracts::shared::error::ValidationErrors;
use contracts::system::access::{Action, PageKey};
use leptos::prelude::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::{FieldError, PageHeader};
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireAction;

#[component]
pub fn FileRequestPage() -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(ServiceRequestDto::default());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let submitted = RwSignal::new(None::<SubmittedRequest>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().submit(today()) {
            Ok(request) => {
                toast.success(format!(
                    "Request submitted. Tracking number: {}",
                    request.tracking_number
                ));
                form.set(ServiceRequestDto::default());
                errors.set(None);
                submitted.set(Some(request));
            }
            Err(e) => errors.set(Some(e)),
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::ResidentRequest.title()
                subtitle="Report an issue or request a barangay service"
            >
                {()}
            </PageHeader>

            {move || submitted.get().map(|r| view! {
                <div class="card request-receipt">
                    {icon("check-circle")}
                    <div>
                        <strong>{r.kind.label()}</strong>
                        <div>{format!("Tracking number: {}", r.tracking_number)}</div>
                        <small>{format!("Filed {} \u{00b7} {}", format_date(r.submitted_on), r.status)}</small>
                    </div>
                </div>
            })}

            <RequireAction page=PageKey::ResidentRequest action=Action::FileRequest>
                <form class="card details-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="request-kind">"Type of Request"</label>
                        <select
                            id="request-kind"
                            prop:value=move || form.get().kind.map(|k| k.value()).unwrap_or_default()
                            on:change=move |ev| {
                                let kind = RequestType::from_value(&event_target_value(&ev));
                                form.update(|f| f.kind = kind);
                            }
                        >
                            <option value="">"Select type of request"</option>
                            {RequestType::ALL.into_iter().map(|k| view! {
                                <option value=k.value()>{k.label()}</option>
                            }).collect_view()}
                        </select>
                        <FieldError errors=errors field="kind" />
                    </div>

                    <div class="form-group">
                        <label for="request-location">"Location"</label>
                        <input
                            type="text"
                            id="request-location"
                            placeholder="Street, purok or landmark"
                            prop:value=move || form.get().location
                            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="location" />
                    </div>

                    <div class="form-group">
                        <label for="request-description">"Description"</label>
                        <textarea
                            id="request-description"
                            rows="4"
                            placeholder="Describe the issue or the service you need"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="description" />
                    </div>

                    <div class="form-group">
                        <label for="request-contact">"Contact Number (optional)"</label>
                        <input
                            type="tel"
                            id="request-contact"
                            placeholder="09XX XXX XXXX"
                            prop:value=move || form.get().contact
                            on:input=move |ev| form.update(|f| f.contact = event_target_value(&ev))
                        />
                    </div>

                    <div class="details-actions">
                        <button type="submit" class="btn-primary">{icon("send")}" Submit Request"</button>
                    </div>
                </form>
            </RequireAction>
        </div>
    }
}
