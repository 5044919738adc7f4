use std::rc::Rc;

use contracts::shared::cancel::CancelToken;
use contracts::shared::error::ServiceError;
use contracts::usecases::u502_qr_lookup::{MockQrLookup, QrKind, QrLookupService, ScannedRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_global_context;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::delay::GlooDelay;

/// Camera scan or manual ID entry against the barangay QR registry.
#[component]
pub fn QrScanner(kind: QrKind) -> impl IntoView {
    let ctx = use_global_context();
    let service = StoredValue::new_local(Rc::new(MockQrLookup::new(
        GlooDelay,
        ctx.config().delays.qr_scan_ms,
    )));

    let (is_scanning, set_is_scanning) = signal(false);
    let (record, set_record) = signal(None::<ScannedRecord>);
    let (error_msg, set_error_msg) = signal(None::<String>);
    let manual_id = RwSignal::new(String::new());

    let placeholder = match kind {
        QrKind::Resident => "RES-001",
        QrKind::Business => "BUS-001",
    };

    let cancel = CancelToken::new();
    let token = StoredValue::new(cancel.clone());
    on_cleanup(move || cancel.cancel());

    let finish = move |result: Result<ScannedRecord, ServiceError>| {
        set_is_scanning.set(false);
        match result {
            Ok(r) => set_record.set(Some(r)),
            Err(ServiceError::Cancelled) => {}
            Err(e) => set_error_msg.set(Some(e.to_string())),
        }
    };

    let start_scan = move |_| {
        set_record.set(None);
        set_error_msg.set(None);
        set_is_scanning.set(true);
        let service = service.get_value();
        let cancel = token.get_value();
        spawn_local(async move {
            let result = service.scan(Some(kind), &cancel).await;
            if !cancel.is_cancelled() {
                finish(result);
            }
        });
    };

    let lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = manual_id.get();
        if id.trim().is_empty() {
            return;
        }
        set_record.set(None);
        set_error_msg.set(None);
        let service = service.get_value();
        let cancel = token.get_value();
        spawn_local(async move {
            let result = service.lookup(&id, &cancel).await;
            if !cancel.is_cancelled() {
                finish(result);
            }
        });
    };

    view! {
        <div class="qr-scanner">
            <div class="qr-scanner__viewport" class:qr-scanner__viewport--active=move || is_scanning.get()>
                {move || if is_scanning.get() {
                    view! {
                        <div class="qr-scanner__status">
                            <div class="spinner"></div>
                            <span>{format!("Scanning {} QR code...", kind.label().to_lowercase())}</span>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="qr-scanner__status">
                            {icon("camera")}
                            <span>"Position the QR code within the frame"</span>
                        </div>
                    }.into_any()
                }}
            </div>

            <button
                class="btn-primary qr-scanner__scan"
                on:click=start_scan
                disabled=move || is_scanning.get()
            >
                {icon("qr-code")}
                {move || if is_scanning.get() { " Scanning..." } else { " Start Scanning" }}
            </button>

            <form class="qr-scanner__manual" on:submit=lookup>
                <label for="qr-manual-id">"Or enter ID manually"</label>
                <div class="qr-scanner__manual-row">
                    <input
                        id="qr-manual-id"
                        type="text"
                        placeholder=placeholder
                        prop:value=move || manual_id.get()
                        on:input=move |ev| manual_id.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-secondary">{icon("search")}" Look up"</button>
                </div>
            </form>

            {move || error_msg.get().map(|e| view! {
                <div class="error-message">{icon("x-circle")}{e}</div>
            })}

            {move || record.get().map(|r| view! {
                <div class="qr-result">
                    <div class="qr-result__header">
                        {icon("check-circle")}
                        <strong>"Record found"</strong>
                    </div>
                    <dl class="qr-result__fields">
                        <dt>"ID"</dt><dd>{r.id.clone()}</dd>
                        <dt>"Name"</dt><dd>{r.name.clone()}</dd>
                        <dt>"Type"</dt><dd>{r.kind.label()}</dd>
                        <dt>"Address"</dt><dd>{r.address.clone()}</dd>
                        <dt>"Last Visit"</dt><dd>{format_date(r.last_visit)}</dd>
                    </dl>
                </div>
            })}
        </div>
    }
}
