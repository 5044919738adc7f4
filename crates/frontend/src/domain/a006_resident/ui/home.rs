use contracts::domain::a006_resident::{portal_summary, MY_VACCINATIONS};
use contracts::system::access::PageKey;
use leptos::prelude::*;

use crate::shared::components::{PageHeader, StatCard, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

const QUICK_LINKS: [(PageKey, &str, &str); 5] = [
    (PageKey::ResidentHealth, "heart", "View your family's health records"),
    (PageKey::ResidentQrCode, "qr-code", "Show your ID at the health center"),
    (PageKey::ResidentPermits, "building", "Track business permit applications"),
    (PageKey::ResidentComplaints, "message-square", "Follow up on your complaints"),
    (PageKey::ResidentRequest, "send", "Report an issue or request a service"),
];

#[component]
pub fn ResidentHomePage() -> impl IntoView {
    let session = use_session();
    let summary = portal_summary();
    let greeting = Signal::derive(move || {
        let name = session.identity().map(|i| i.name).unwrap_or_default();
        format!("Welcome, {}. Access barangay health services online.", name)
    });

    view! {
        <div class="page">
            <PageHeader title=PageKey::ResidentHome.title() subtitle=greeting>
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Family Members" icon_name="users" value=summary.family_members.to_string() />
                <StatCard label="Active Permits" icon_name="building" value=summary.active_permits.to_string() />
                <StatCard label="Open Complaints" icon_name="message-square" value=summary.open_complaints.to_string() />
                <StatCard label="Vaccinations" icon_name="syringe" value=summary.vaccinations.to_string() />
            </div>

            <div class="quick-links">
                {QUICK_LINKS.iter().map(|(page, icon_name, hint)| view! {
                    <a href=page.path() class="quick-link card">
                        <span class="quick-link__icon">{icon(icon_name)}</span>
                        <div>
                            <div class="quick-link__title">{page.title()}</div>
                            <small>{*hint}</small>
                        </div>
                        {icon("chevron-right")}
                    </a>
                }).collect_view()}
            </div>

            <div class="card">
                <h3 class="card__title">"Upcoming and Recent Vaccinations"</h3>
                <ul class="schedule-list">
                    {MY_VACCINATIONS.iter().map(|v| view! {
                        <li class="schedule-list__item">
                            {icon("syringe")}
                            <div>
                                <div class="schedule-list__title">{format!("{} \u{00b7} {}", v.member, v.vaccine)}</div>
                                <div class="schedule-list__meta">{format_date(v.date)}</div>
                            </div>
                            <StatusBadge label=v.status.clone() />
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
