use contracts::dashboards::d400_overview::{
    DISEASE_DISTRIBUTION, HEALTH_ALERTS, MONTHLY_SUMMARY, RECENT_ACTIVITIES, STAT_CARDS,
    UPCOMING_SCHEDULES, WEEKLY_ACTIVITY,
};
use contracts::system::access::{Action, PageKey};
use leptos::prelude::*;

use super::health_index_meter::HealthIndexMeter;
use crate::layout::global_context::use_global_context;
use crate::shared::components::{BarChart, PageHeader, StatCard, ToneBadge};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAction;

fn activity_icon(kind: &str) -> &'static str {
    match kind {
        "health" => "stethoscope",
        "permit" => "clipboard-check",
        "vaccine" => "syringe",
        "alert" => "alert-triangle",
        "complaint" => "droplets",
        _ => "activity",
    }
}

/// Staff landing page
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let access = session.page_access(PageKey::Dashboard);
    let dashboard = ctx.config().dashboard;
    let (score, max) = (dashboard.health_index_score, dashboard.health_index_max);

    let subtitle = Signal::derive(move || {
        let name = session.identity().map(|i| i.name).unwrap_or_default();
        access
            .get()
            .description(&format!("Welcome back, {}. Here is today's overview.", name))
    });

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::Dashboard.title()
                subtitle=subtitle
                view_only=Signal::derive(move || access.get().is_view_only())
            >
                {()}
            </PageHeader>

            <div class="stat-grid">
                {STAT_CARDS.iter().map(|card| view! {
                    <StatCard
                        label=card.title.clone()
                        icon_name=card.icon.clone()
                        value=card.value.clone()
                        change=card.change.clone()
                        positive=card.positive
                    />
                }).collect_view()}
            </div>

            <div class="dashboard-grid">
                <RequireAction page=PageKey::Dashboard action=Action::ViewHealthIndex>
                    <HealthIndexMeter score=score max=max />
                </RequireAction>
                <BarChart title="Weekly Consultations" points=WEEKLY_ACTIVITY.clone() />
                <BarChart title="Disease Distribution" points=DISEASE_DISTRIBUTION.clone() unit="%" />
            </div>

            <div class="dashboard-grid">
                <div class="card">
                    <h3 class="card__title">"Recent Activity"</h3>
                    <ul class="activity-list">
                        {RECENT_ACTIVITIES.iter().map(|a| view! {
                            <li class="activity-list__item">
                                <span class="activity-list__icon">{icon(activity_icon(&a.kind))}</span>
                                <div class="activity-list__text">
                                    <div class="activity-list__action">{a.action.clone()}</div>
                                    <div class="activity-list__meta">
                                        {format!("{} \u{00b7} {}", a.user, a.time)}
                                    </div>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="card">
                    <h3 class="card__title">"Upcoming Schedules"</h3>
                    <ul class="schedule-list">
                        {UPCOMING_SCHEDULES.iter().map(|s| view! {
                            <li class="schedule-list__item">
                                {icon("calendar")}
                                <div>
                                    <div class="schedule-list__title">{s.title.clone()}</div>
                                    <div class="schedule-list__meta">
                                        {format!("{} \u{00b7} {}", s.date, s.location)}
                                    </div>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="card">
                    <h3 class="card__title">"Health Alerts"</h3>
                    {HEALTH_ALERTS.iter().map(|alert| view! {
                        <div class="alert-card">
                            <div class="alert-card__header">
                                <strong>{alert.title.clone()}</strong>
                                <ToneBadge tone=alert.tone>{alert.badge.clone()}</ToneBadge>
                            </div>
                            <p>{alert.message.clone()}</p>
                            <small>{alert.footer.clone()}</small>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="card">
                <h3 class="card__title">"Monthly Summary"</h3>
                <table class="summary-table">
                    <tbody>
                        {MONTHLY_SUMMARY.iter().map(|row| {
                            let trend_class = if row.is_up() {
                                "stat-card__change stat-card__change--up"
                            } else {
                                "stat-card__change stat-card__change--down"
                            };
                            view! {
                                <tr>
                                    <td>{row.label.clone()}</td>
                                    <td class="summary-table__value">{row.value.clone()}</td>
                                    <td class=trend_class>
                                        {icon(if row.is_up() { "trending-up" } else { "trending-down" })}
                                        {row.trend.clone()}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
