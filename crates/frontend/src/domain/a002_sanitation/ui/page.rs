use contracts::domain::a002_sanitation::{filter_permits, Permit, INSPECTIONS, PERMITS, VIOLATIONS};
use contracts::system::access::{Action, PageKey};
use contracts::usecases::u502_qr_lookup::QrKind;
use leptos::prelude::*;
use thaw::*;

use super::checklist::InspectionChecklistForm;
use crate::layout::toast_service::use_toast;
use crate::layout::Modal;
use crate::shared::components::{PageHeader, RowActions, StatCard, StatusBadge};
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAction;
use crate::usecases::u502_qr_lookup::QrScanner;

#[component]
pub fn SanitationPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let access = session.page_access(PageKey::Sanitation);
    let can_edit = Signal::derive(move || access.get().can_mutate);

    let search_query = RwSignal::new(String::new());
    let selected_tab = RwSignal::new("permits".to_string());
    let show_scan = RwSignal::new(false);
    let show_checklist = RwSignal::new(false);
    let inspecting = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        filter_permits(&PERMITS, &query)
            .into_iter()
            .cloned()
            .collect::<Vec<Permit>>()
    });

    let start_inspection = Callback::new(move |business_name: String| {
        log::debug!("starting inspection of {}", business_name);
        inspecting.set(business_name);
        show_checklist.set(true);
    });
    let on_checklist_done = Callback::new(move |_: ()| show_checklist.set(false));

    let pending = PERMITS.iter().filter(|p| p.awaits_inspection()).count();
    let open_violations = VIOLATIONS.iter().filter(|v| v.status == "Open").count();

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::Sanitation.title()
                subtitle=Signal::derive(move || {
                    access.get().description("Sanitary permits, inspections and violations")
                })
                view_only=Signal::derive(move || access.get().is_view_only())
            >
                <RequireAction page=PageKey::Sanitation action=Action::ScanBusinessQr>
                    <Button on_click=move |_| show_scan.set(true)>
                        {icon("qr-code")}" Scan Business QR"
                    </Button>
                </RequireAction>
                <RequireAction page=PageKey::Sanitation action=Action::IssueViolation>
                    <Button on_click=move |_| toast.info("Violation notice drafted")>
                        {icon("alert-triangle")}" Issue Violation"
                    </Button>
                </RequireAction>
                <RequireAction page=PageKey::Sanitation action=Action::CreatePermit>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| toast.info("New permit application started")
                    >
                        {icon("plus")}" New Permit"
                    </Button>
                </RequireAction>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Permits" icon_name="clipboard-check" value=PERMITS.len().to_string() />
                <StatCard label="Pending Inspection" icon_name="search" value=pending.to_string() />
                <StatCard label="Inspections Done" icon_name="check-circle" value=INSPECTIONS.len().to_string() />
                <StatCard label="Open Violations" icon_name="alert-triangle" value=open_violations.to_string() />
            </div>

            <div class="card">
                <TabList selected_value=selected_tab>
                    <Tab value="permits">"Permits"</Tab>
                    <Tab value="inspections">"Inspections"</Tab>
                    <Tab value="violations">"Violations"</Tab>
                </TabList>

                <div class="tab-content">
                    {move || match selected_tab.get().as_str() {
                        "inspections" => view! { <InspectionsTable /> }.into_any(),
                        "violations" => view! { <ViolationsTable editable=can_edit /> }.into_any(),
                        _ => view! {
                            <div class="table-toolbar">
                                <Input value=search_query placeholder="Search by business, owner or permit ID..." />
                            </div>
                            <PermitsTable rows=filtered on_inspect=start_inspection />
                        }.into_any(),
                    }}
                </div>
            </div>

            <Modal open=show_scan title="Scan Business QR Code">
                <QrScanner kind=QrKind::Business />
            </Modal>

            <Modal open=show_checklist title="Sanitary Inspection Checklist" wide=true>
                {move || view! {
                    <h4 class="checklist__business">{inspecting.get()}</h4>
                    <InspectionChecklistForm business_name=inspecting.get_untracked() on_done=on_checklist_done />
                }}
            </Modal>
        </div>
    }
}

#[component]
fn PermitsTable(rows: Memo<Vec<Permit>>, on_inspect: Callback<String>) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=|| view! { <p class="empty-state">"No permits match your search."</p> }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Permit ID"</TableHeaderCell>
                        <TableHeaderCell>"Business"</TableHeaderCell>
                        <TableHeaderCell>"Owner"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Applied"</TableHeaderCell>
                        <TableHeaderCell>"Expiry"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows.get().into_iter().map(|p| {
                        let awaits = p.awaits_inspection();
                        let name = StoredValue::new(p.business_name.clone());
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{p.id}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <div>{p.business_name}</div>
                                        <small>{p.address}</small>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout>{p.owner}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{p.kind}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date(p.date_applied)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date_opt(p.expiry_date)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout><StatusBadge label=p.status /></TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Show when=move || awaits>
                                            <RequireAction page=PageKey::Sanitation action=Action::StartInspection>
                                                <Button
                                                    size=ButtonSize::Small
                                                    on_click=move |_| on_inspect.run(name.get_value())
                                                >
                                                    "Start Inspection"
                                                </Button>
                                            </RequireAction>
                                        </Show>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </Show>
    }
}

#[component]
fn InspectionsTable() -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                    <TableHeaderCell>"Business"</TableHeaderCell>
                    <TableHeaderCell>"Inspector"</TableHeaderCell>
                    <TableHeaderCell>"Result"</TableHeaderCell>
                    <TableHeaderCell>"Notes"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {INSPECTIONS.iter().map(|i| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{format_date(i.inspection_date)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{i.business_name.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{i.inspector.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout><StatusBadge label=i.result.clone() /></TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{i.notes.clone()}</TableCellLayout></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn ViolationsTable(editable: Signal<bool>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Business"</TableHeaderCell>
                    <TableHeaderCell>"Violation"</TableHeaderCell>
                    <TableHeaderCell>"Issued"</TableHeaderCell>
                    <TableHeaderCell>"Deadline"</TableHeaderCell>
                    <TableHeaderCell>"Fine"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>""</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {VIOLATIONS.iter().map(|v| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{v.business_name.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{v.violation_type.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(v.date_issued)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(v.deadline)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{v.fine_label()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout><StatusBadge label=v.status.clone() /></TableCellLayout></TableCell>
                        <TableCell><RowActions record=v.id.clone() editable=editable approve=true /></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}
