use contracts::domain::a003_immunization::{
    NUTRITION_RECORDS, NUTRITION_STATUS, SMS_REMINDERS, VACCINATION_TREND, VACCINE_RECORDS,
};
use contracts::system::access::{Action, PageKey};
use leptos::prelude::*;
use thaw::*;

use super::timbang::TimbangScheduler;
use crate::layout::toast_service::use_toast;
use crate::shared::components::{BarChart, PageHeader, RowActions, StatCard, StatusBadge};
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAction;
use crate::usecases::u501_fhsis_report::ReportGenerator;

#[component]
pub fn ImmunizationPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let access = session.page_access(PageKey::Immunization);
    let can_edit = Signal::derive(move || access.get().can_mutate);
    let selected_tab = RwSignal::new("vaccines".to_string());

    let due_soon = VACCINE_RECORDS.iter().filter(|v| v.next_dose.is_some()).count();
    let malnourished = NUTRITION_RECORDS
        .iter()
        .filter(|n| n.status != "Normal")
        .count();

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::Immunization.title()
                subtitle=Signal::derive(move || {
                    access.get().description("Child vaccinations, nutrition monitoring and reminders")
                })
                view_only=Signal::derive(move || access.get().is_view_only())
            >
                <RequireAction page=PageKey::Immunization action=Action::ScheduleSmsReminder>
                    <Button on_click=move |_| toast.info("SMS reminder queued for sending")>
                        {icon("message-square")}" Schedule SMS"
                    </Button>
                </RequireAction>
                <RequireAction page=PageKey::Immunization action=Action::RecordVaccination>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| toast.info("Vaccination entry opened")
                    >
                        {icon("syringe")}" Record Vaccination"
                    </Button>
                </RequireAction>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Vaccinations Recorded" icon_name="syringe" value=VACCINE_RECORDS.len().to_string() />
                <StatCard label="Next Doses Scheduled" icon_name="calendar" value=due_soon.to_string() />
                <StatCard label="Children Assessed" icon_name="scale" value=NUTRITION_RECORDS.len().to_string() />
                <StatCard label="Needs Nutrition Follow-up" icon_name="alert-triangle" value=malnourished.to_string() />
            </div>

            <div class="dashboard-grid">
                <BarChart title="Vaccinations per Month" points=VACCINATION_TREND.clone() />
                <BarChart title="Nutrition Status" points=NUTRITION_STATUS.clone() unit="%" />
            </div>

            <div class="card">
                <TabList selected_value=selected_tab>
                    <Tab value="vaccines">"Vaccine Records"</Tab>
                    <Tab value="nutrition">"Nutrition"</Tab>
                    <Tab value="reminders">"SMS Reminders"</Tab>
                </TabList>

                <div class="tab-content">
                    {move || match selected_tab.get().as_str() {
                        "nutrition" => view! { <NutritionTable editable=can_edit /> }.into_any(),
                        "reminders" => view! { <RemindersTable /> }.into_any(),
                        _ => view! { <VaccinesTable editable=can_edit /> }.into_any(),
                    }}
                </div>
            </div>

            <div class="dashboard-grid">
                <TimbangScheduler editable=can_edit />
                <RequireAction page=PageKey::Immunization action=Action::GenerateReport>
                    <ReportGenerator />
                </RequireAction>
            </div>
        </div>
    }
}

#[component]
fn VaccinesTable(editable: Signal<bool>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Child"</TableHeaderCell>
                    <TableHeaderCell>"Age"</TableHeaderCell>
                    <TableHeaderCell>"Parent"</TableHeaderCell>
                    <TableHeaderCell>"Vaccine"</TableHeaderCell>
                    <TableHeaderCell>"Date Given"</TableHeaderCell>
                    <TableHeaderCell>"Next Dose"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>""</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {VACCINE_RECORDS.iter().map(|v| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{v.child_name.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{v.age.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{v.parent.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{v.vaccine.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(v.date_given)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date_opt(v.next_dose)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout><StatusBadge label=v.status.clone() /></TableCellLayout></TableCell>
                        <TableCell><RowActions record=v.child_name.clone() editable=editable /></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn NutritionTable(editable: Signal<bool>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Child"</TableHeaderCell>
                    <TableHeaderCell>"Age"</TableHeaderCell>
                    <TableHeaderCell>"Weight"</TableHeaderCell>
                    <TableHeaderCell>"Height"</TableHeaderCell>
                    <TableHeaderCell>"Last Assessment"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>""</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {NUTRITION_RECORDS.iter().map(|n| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{n.child_name.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{n.age.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format!("{:.1} kg", n.weight_kg)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format!("{} cm", n.height_cm)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(n.last_assessment)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout><StatusBadge label=n.status.clone() /></TableCellLayout></TableCell>
                        <TableCell><RowActions record=n.child_name.clone() editable=editable /></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn RemindersTable() -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Recipient"</TableHeaderCell>
                    <TableHeaderCell>"Phone"</TableHeaderCell>
                    <TableHeaderCell>"Message"</TableHeaderCell>
                    <TableHeaderCell>"Scheduled"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {SMS_REMINDERS.iter().map(|r| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{r.recipient.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{r.phone.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{r.message.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{format_date(r.scheduled_date)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout><StatusBadge label=r.status.clone() /></TableCellLayout></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}
