use contracts::domain::a001_patient::{
    filter_patients, Patient, CONSULTATIONS, CONSULTATION_TREND, DIAGNOSIS_DISTRIBUTION,
    MEDICINES, PATIENTS,
};
use contracts::system::access::{Action, PageKey};
use contracts::usecases::u502_qr_lookup::QrKind;
use leptos::prelude::*;
use thaw::*;

use super::details::NewPatientForm;
use crate::layout::toast_service::use_toast;
use crate::layout::Modal;
use crate::shared::components::{BarChart, PageHeader, RowActions, StatCard, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAction;
use crate::usecases::u502_qr_lookup::QrScanner;

#[component]
pub fn HealthCenterPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let access = session.page_access(PageKey::HealthCenter);
    let can_edit = Signal::derive(move || access.get().can_mutate);

    let patients = RwSignal::new(PATIENTS.clone());
    let search_query = RwSignal::new(String::new());
    let selected_tab = RwSignal::new("patients".to_string());
    let show_add = RwSignal::new(false);
    let show_scan = RwSignal::new(false);

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        patients.with(|list| {
            filter_patients(list, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<Patient>>()
        })
    });

    let low_stock = MEDICINES.iter().filter(|m| m.status != "In Stock").count();

    let on_saved = Callback::new(move |patient: Patient| {
        show_add.set(false);
        toast.success(format!("{} added as {}", patient.name, patient.id));
    });
    let on_cancel = Callback::new(move |_: ()| show_add.set(false));

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::HealthCenter.title()
                subtitle=Signal::derive(move || {
                    access.get().description("Patient records, consultations and medicine inventory")
                })
                view_only=Signal::derive(move || access.get().is_view_only())
            >
                <RequireAction page=PageKey::HealthCenter action=Action::ScanResidentQr>
                    <Button on_click=move |_| show_scan.set(true)>
                        {icon("qr-code")}" Scan Resident QR"
                    </Button>
                </RequireAction>
                <RequireAction page=PageKey::HealthCenter action=Action::CreatePatient>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_add.set(true)>
                        {icon("plus")}" Add Patient"
                    </Button>
                </RequireAction>
            </PageHeader>

            <div class="stat-grid">
                {move || view! {
                    <StatCard
                        label="Registered Patients"
                        icon_name="users"
                        value=patients.with(|p| p.len()).to_string()
                    />
                }}
                <StatCard
                    label="Consultations This Month"
                    icon_name="stethoscope"
                    value=CONSULTATIONS.len().to_string()
                />
                <StatCard
                    label="Medicines Low or Out"
                    icon_name="alert-triangle"
                    value=low_stock.to_string()
                />
            </div>

            <div class="dashboard-grid">
                <BarChart title="Consultation Trend" points=CONSULTATION_TREND.clone() />
                <BarChart title="Top Diagnoses" points=DIAGNOSIS_DISTRIBUTION.clone() unit="%" />
            </div>

            <div class="card">
                <TabList selected_value=selected_tab>
                    <Tab value="patients">"Patients"</Tab>
                    <Tab value="consultations">"Consultations"</Tab>
                    <Tab value="medicines">"Medicine Inventory"</Tab>
                </TabList>

                <div class="tab-content">
                    {move || match selected_tab.get().as_str() {
                        "consultations" => view! { <ConsultationsTable /> }.into_any(),
                        "medicines" => view! { <MedicinesTable editable=can_edit /> }.into_any(),
                        _ => view! {
                            <div class="table-toolbar">
                                <Input value=search_query placeholder="Search by name or patient ID..." />
                            </div>
                            <PatientsTable rows=filtered editable=can_edit />
                        }.into_any(),
                    }}
                </div>
            </div>

            <Modal open=show_add title="Add New Patient">
                <NewPatientForm patients=patients on_saved=on_saved on_cancel=on_cancel />
            </Modal>

            <Modal open=show_scan title="Scan Resident QR Code">
                <QrScanner kind=QrKind::Resident />
            </Modal>
        </div>
    }
}

#[component]
fn PatientsTable(rows: Memo<Vec<Patient>>, editable: Signal<bool>) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=|| view! { <p class="empty-state">"No patients match your search."</p> }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Age / Gender"</TableHeaderCell>
                        <TableHeaderCell>"Address"</TableHeaderCell>
                        <TableHeaderCell>"Last Visit"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows.get().into_iter().map(|p| { let id = p.id.clone(); view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{p.name}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{format!("{} / {}", p.age, p.gender.label())}</TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout>{p.address}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_date(p.last_visit)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout><StatusBadge label=p.status /></TableCellLayout></TableCell>
                            <TableCell><RowActions record=p.id editable=editable /></TableCell>
                        </TableRow>
                    }}).collect_view()}
                </TableBody>
            </Table>
        </Show>
    }
}

#[component]
fn ConsultationsTable() -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                    <TableHeaderCell>"Patient"</TableHeaderCell>
                    <TableHeaderCell>"Symptoms"</TableHeaderCell>
                    <TableHeaderCell>"Diagnosis"</TableHeaderCell>
                    <TableHeaderCell>"Medicine"</TableHeaderCell>
                    <TableHeaderCell>"Attended By"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {CONSULTATIONS.iter().map(|c| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{format_date(c.date)}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{c.patient_name.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{c.symptoms.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{c.diagnosis.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{c.medicine.clone()}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{c.attended_by.clone()}</TableCellLayout></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn MedicinesTable(editable: Signal<bool>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Medicine"</TableHeaderCell>
                    <TableHeaderCell>"Stock"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>""</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {MEDICINES.iter().map(|m| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{m.name.clone()}</TableCellLayout></TableCell>
                        <TableCell>
                            <TableCellLayout>{format!("{} {}", m.stock, m.unit)}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout><StatusBadge label=m.status.clone() /></TableCellLayout>
                        </TableCell>
                        <TableCell><RowActions record=m.name.clone() editable=editable /></TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}
