use contracts::domain::a004_wastewater::{COMPLAINTS, SCHEDULES, SERVICE_TRACKING};
use contracts::system::access::{Action, PageKey};
use leptos::prelude::*;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::{PageHeader, RowActions, StatCard, StatusBadge, ToneBadge};
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAction;

#[component]
pub fn WastewaterPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let access = session.page_access(PageKey::Wastewater);
    let can_edit = Signal::derive(move || access.get().can_mutate);
    let selected_tab = RwSignal::new("complaints".to_string());

    let open_complaints = COMPLAINTS.iter().filter(|c| c.is_open()).count();
    let completed = SERVICE_TRACKING
        .iter()
        .filter(|s| s.completion_date.is_some())
        .count();

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::Wastewater.title()
                subtitle=Signal::derive(move || {
                    access.get().description("Drainage complaints, desludging schedules and service tracking")
                })
                view_only=Signal::derive(move || access.get().is_view_only())
            >
                <RequireAction page=PageKey::Wastewater action=Action::ScheduleService>
                    <Button on_click=move |_| toast.info("Service scheduling opened")>
                        {icon("calendar")}" Schedule Service"
                    </Button>
                </RequireAction>
                <RequireAction page=PageKey::Wastewater action=Action::FileWastewaterComplaint>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| toast.info("New complaint entry opened")
                    >
                        {icon("plus")}" New Complaint"
                    </Button>
                </RequireAction>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Complaints" icon_name="droplets" value=COMPLAINTS.len().to_string() />
                <StatCard label="Open Complaints" icon_name="alert-triangle" value=open_complaints.to_string() />
                <StatCard label="Scheduled Services" icon_name="calendar" value=SCHEDULES.len().to_string() />
                <StatCard label="Services Completed" icon_name="check-circle" value=completed.to_string() />
            </div>

            <div class="card">
                <TabList selected_value=selected_tab>
                    <Tab value="complaints">"Complaints"</Tab>
                    <Tab value="schedules">"Schedules"</Tab>
                    <Tab value="tracking">"Service Tracking"</Tab>
                </TabList>

                <div class="tab-content">
                    {move || match selected_tab.get().as_str() {
                        "schedules" => view! { <SchedulesTable /> }.into_any(),
                        "tracking" => view! { <TrackingTable /> }.into_any(),
                        _ => view! { <ComplaintsTable editable=can_edit /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ComplaintsTable(editable: Signal<bool>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"ID"</TableHeaderCell>
                    <TableHeaderCell>"Complainant"</TableHeaderCell>
                    <TableHeaderCell>"Type"</TableHeaderCell>
                    <TableHeaderCell>"Location"</TableHeaderCell>
                    <TableHeaderCell>"Submitted"</TableHeaderCell>
                    <TableHeaderCell>"Priority"</TableHeaderCell>
                    <TableHeaderCell>"Assigned To"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>""</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {COMPLAINTS.iter().map(|c| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{c.id.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{c.complainant.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{c.kind.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{c.location.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(c.date_submitted)}</TableCellLayout></TableCell>
                        <TableCell>
                            <TableCellLayout>
                                <ToneBadge tone=c.priority.tone()>{c.priority.label()}</ToneBadge>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell><TableCellLayout>{c.assigned_to.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout><StatusBadge label=c.status.clone() /></TableCellLayout></TableCell>
                        <TableCell><RowActions record=c.id.clone() editable=editable /></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn SchedulesTable() -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Complaint"</TableHeaderCell>
                    <TableHeaderCell>"Service"</TableHeaderCell>
                    <TableHeaderCell>"Location"</TableHeaderCell>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                    <TableHeaderCell>"Time"</TableHeaderCell>
                    <TableHeaderCell>"Team"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {SCHEDULES.iter().map(|s| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{s.complaint_id.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{s.kind.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{s.location.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(s.scheduled_date)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{s.time_slot.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{s.assigned_team.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout><StatusBadge label=s.status.clone() /></TableCellLayout></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn TrackingTable() -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Complaint"</TableHeaderCell>
                    <TableHeaderCell>"Service"</TableHeaderCell>
                    <TableHeaderCell>"Started"</TableHeaderCell>
                    <TableHeaderCell>"Completed"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Notes"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {SERVICE_TRACKING.iter().map(|s| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{s.complaint_id.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{s.service_type.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(s.start_date)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date_opt(s.completion_date)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout><StatusBadge label=s.status.clone() /></TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{s.notes.clone()}</TableCellLayout></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}
