use contracts::system::access::PageKey;
use contracts::usecases::u502_qr_lookup::{qr_pattern, resident_qr_id};
use leptos::prelude::*;

use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            log::error!("print failed: {:?}", e);
        }
    }
}

/// Resident ID card with a generated QR matrix
#[component]
pub fn MyQrCodePage() -> impl IntoView {
    let session = use_session();
    let identity = session.identity();
    let name = identity.as_ref().map(|i| i.name.clone()).unwrap_or_default();
    let email = identity.map(|i| i.email).unwrap_or_default();
    let code = resident_qr_id(&name);
    let pattern = qr_pattern(&code);

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::ResidentQrCode.title()
                subtitle="Present this code at the health center or during inspections"
            >
                <button class="btn-secondary" on:click=move |_| print_page()>
                    {icon("printer")}" Print"
                </button>
            </PageHeader>

            <div class="card qr-card">
                <svg class="qr-card__matrix" viewBox="0 0 21 21" shape-rendering="crispEdges">
                    {pattern.iter().enumerate().flat_map(|(i, row)| {
                        row.iter().enumerate().filter(|(_, on)| **on).map(move |(j, _)| view! {
                            <rect x=j.to_string() y=i.to_string() width="1" height="1" fill="currentColor" />
                        })
                    }).collect_view()}
                </svg>
                <div class="qr-card__id">{code.clone()}</div>
                <dl class="qr-card__fields">
                    <dt>"Name"</dt><dd>{name}</dd>
                    <dt>"Email"</dt><dd>{email}</dd>
                </dl>
                <p class="qr-card__hint">
                    {icon("info")}
                    " Health workers scan this code to open your records."
                </p>
            </div>
        </div>
    }
}
