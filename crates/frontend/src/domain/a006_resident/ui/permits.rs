use contracts::domain::a006_resident::MY_PERMITS;
use contracts::system::access::PageKey;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{PageHeader, StatusBadge};
use crate::shared::date_utils::{format_date, format_date_opt};

#[component]
pub fn MyPermitsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader
                title=PageKey::ResidentPermits.title()
                subtitle="Status of your sanitary permit applications"
            >
                {()}
            </PageHeader>

            <div class="card">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Permit ID"</TableHeaderCell>
                            <TableHeaderCell>"Business"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Applied"</TableHeaderCell>
                            <TableHeaderCell>"Approved"</TableHeaderCell>
                            <TableHeaderCell>"Expiry"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {MY_PERMITS.iter().map(|p| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{p.id.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{p.business_name.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{p.kind.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date(p.date_applied)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date_opt(p.date_approved)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date_opt(p.expiry_date)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout><StatusBadge label=p.status.clone() /></TableCellLayout></TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
