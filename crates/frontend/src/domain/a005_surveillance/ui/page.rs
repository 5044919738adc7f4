use contracts::domain::a005_surveillance::{Trend, OUTBREAK_ALERTS, WEEKLY_STATS};
use contracts::shared::status::StatusTone;
use contracts::system::access::{Action, PageKey};
use leptos::prelude::*;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::{PageHeader, StatCard, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAction;

fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "trending-up",
        Trend::Falling => "trending-down",
        Trend::Stable => "activity",
    }
}

/// Weekly disease counters and active outbreak alerts. Captains see the
/// page without the alert management controls.
#[component]
pub fn SurveillancePage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let access = session.page_access(PageKey::Surveillance);

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::Surveillance.title()
                subtitle=Signal::derive(move || {
                    access.get().description("Disease monitoring and outbreak alerts")
                })
                view_only=Signal::derive(move || access.get().is_view_only())
            >
                <RequireAction page=PageKey::Surveillance action=Action::ManageOutbreakAlerts>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| toast.info("New outbreak alert drafted")
                    >
                        {icon("bug")}" New Alert"
                    </Button>
                </RequireAction>
            </PageHeader>

            <div class="stat-grid">
                {WEEKLY_STATS.iter().map(|stat| view! {
                    // more cases than last week is a bad sign
                    <StatCard
                        label=stat.label.clone()
                        icon_name=stat.icon.clone()
                        value=stat.value.to_string()
                        change=stat.change_label()
                        positive=Some(!stat.is_increase())
                        subtitle="vs. last week"
                    />
                }).collect_view()}
            </div>

            <div class="card">
                <h3 class="card__title">{icon("alert-triangle")}" Active Outbreak Alerts"</h3>
                <div class="alert-list">
                    {OUTBREAK_ALERTS.iter().map(|alert| {
                        let id = alert.id;
                        let disease = alert.disease.clone();
                        let trend_tone = if alert.trend == Trend::Rising {
                            StatusTone::Danger
                        } else {
                            StatusTone::Info
                        };
                        view! {
                            <div class="alert-card">
                                <div class="alert-card__header">
                                    <strong>{alert.disease.clone()}</strong>
                                    <StatusBadge label=alert.severity.clone() />
                                </div>
                                <p>{alert.summary()}</p>
                                <div class="alert-card__meta">
                                    <span class=trend_tone.css_class()>
                                        {icon(trend_icon(alert.trend))}
                                        {alert.trend.label()}
                                    </span>
                                    <small>{format!("Updated {}", format_date(alert.last_update))}</small>
                                </div>
                                <RequireAction page=PageKey::Surveillance action=Action::ManageOutbreakAlerts>
                                    {
                                        let disease = disease.clone();
                                        view! {
                                            <div class="alert-card__actions">
                                                <button
                                                    class="btn-link"
                                                    on:click=move |_| {
                                                        log::info!("outbreak alert {} escalated", id);
                                                        toast.success(format!("{} alert sent to purok leaders", disease));
                                                    }
                                                >
                                                    {icon("send")}" Notify Puroks"
                                                </button>
                                            </div>
                                        }
                                    }
                                </RequireAction>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
