use contracts::domain::a006_resident::{CONSULTATION_HISTORY, FAMILY_HEALTH, MY_VACCINATIONS};
use contracts::system::access::PageKey;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{PageHeader, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

#[component]
pub fn FamilyHealthPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader
                title=PageKey::ResidentHealth.title()
                subtitle="Health records of your household"
            >
                {()}
            </PageHeader>

            <div class="family-grid">
                {FAMILY_HEALTH.iter().map(|m| view! {
                    <div class="card family-card">
                        <div class="family-card__header">
                            {icon("user")}
                            <div>
                                <strong>{m.name.clone()}</strong>
                                <small>{format!("{} \u{00b7} {} years old", m.relationship, m.age)}</small>
                            </div>
                            <StatusBadge label=m.status.clone() />
                        </div>
                        <dl class="family-card__fields">
                            <dt>"Blood Type"</dt><dd>{m.blood_type.clone()}</dd>
                            <dt>"Conditions"</dt><dd>{m.conditions.clone()}</dd>
                            <dt>"Last Checkup"</dt><dd>{format_date(m.last_checkup)}</dd>
                        </dl>
                    </div>
                }).collect_view()}
            </div>

            <div class="card">
                <h3 class="card__title">"Consultation History"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Patient"</TableHeaderCell>
                            <TableHeaderCell>"Complaint"</TableHeaderCell>
                            <TableHeaderCell>"Diagnosis"</TableHeaderCell>
                            <TableHeaderCell>"Medicine"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {CONSULTATION_HISTORY.iter().map(|v| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{format_date(v.date)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{v.patient.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{v.complaint.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{v.diagnosis.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{v.medicine.clone()}</TableCellLayout></TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>

            <div class="card">
                <h3 class="card__title">"Vaccination Records"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Family Member"</TableHeaderCell>
                            <TableHeaderCell>"Vaccine"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {MY_VACCINATIONS.iter().map(|v| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{v.member.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{v.vaccine.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date(v.date)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout><StatusBadge label=v.status.clone() /></TableCellLayout></TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
