use contracts::domain::a006_resident::MY_COMPLAINTS;
use contracts::system::access::{Action, PageKey};
use leptos::prelude::*;

use crate::shared::components::{PageHeader, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireAction;

#[component]
pub fn MyComplaintsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader
                title=PageKey::ResidentComplaints.title()
                subtitle="Follow the progress of issues you reported"
            >
                <RequireAction page=PageKey::ResidentComplaints action=Action::FileComplaint>
                    <a href=PageKey::ResidentRequest.path() class="btn-primary">
                        {icon("plus")}" File New Complaint"
                    </a>
                </RequireAction>
            </PageHeader>

            <div class="complaint-list">
                {MY_COMPLAINTS.iter().map(|c| view! {
                    <div class="card complaint-card">
                        <div class="complaint-card__header">
                            <div>
                                <strong>{c.kind.clone()}</strong>
                                <small>{c.id.clone()}</small>
                            </div>
                            <StatusBadge label=c.status.clone() />
                        </div>
                        <p>{c.description.clone()}</p>
                        <div class="complaint-card__meta">
                            <span>{icon("map-pin")}{c.location.clone()}</span>
                            <span>{icon("calendar")}{format!("Filed {}", format_date(c.date_submitted))}</span>
                            <span>{format!("Updated {}", format_date(c.last_update))}</span>
                        </div>
                        <div class="complaint-card__remarks">
                            {icon("info")}
                            {c.remarks.clone()}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
