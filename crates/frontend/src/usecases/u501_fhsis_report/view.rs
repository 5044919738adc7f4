use std::rc::Rc;

use contracts::shared::cancel::CancelToken;
use contracts::shared::error::ServiceError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_fhsis_report::{
    FhsisReport, MockReportService, ReportArtifact, ReportRequest, ReportService,
    REPORT_HIGHLIGHTS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use crate::system::auth::delay::GlooDelay;

#[component]
pub fn ReportGenerator() -> impl IntoView {
    let ctx = use_global_context();
    let toast = use_toast();
    let config = ctx.config();
    let request = ReportRequest::new(config.report.period_month, config.report.period_year);
    let service = StoredValue::new_local(Rc::new(MockReportService::new(
        GlooDelay,
        config.delays.report_stage_ms,
    )));

    let (is_generating, set_is_generating) = signal(false);
    let (progress, set_progress) = signal(0u8);
    let (message, set_message) = signal(String::new());
    let (artifact, set_artifact) = signal(None::<ReportArtifact>);
    let (error_msg, set_error_msg) = signal(None::<String>);

    let cancel = CancelToken::new();
    let token = StoredValue::new(cancel.clone());
    on_cleanup(move || cancel.cancel());

    let on_generate = move |_| {
        set_is_generating.set(true);
        set_progress.set(0);
        set_message.set(String::new());
        set_artifact.set(None);
        set_error_msg.set(None);

        let service = service.get_value();
        let cancel = token.get_value();
        spawn_local(async move {
            let result = service
                .generate(
                    request,
                    &mut |stage| {
                        set_progress.set(stage.progress);
                        set_message.set(stage.message.to_string());
                    },
                    &cancel,
                )
                .await;
            if cancel.is_cancelled() {
                return;
            }
            set_is_generating.set(false);
            match result {
                Ok(a) => {
                    toast.success(format!("{} generated", a.file_name));
                    set_artifact.set(Some(a));
                }
                Err(ServiceError::Cancelled) => {}
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
        });
    };

    let on_download = move |_| {
        if let Some(a) = artifact.get_untracked() {
            toast.info(format!("Downloading {} ({})", a.file_name, a.size_label));
        }
    };

    view! {
        <div class="card report-generator">
            <div class="report-generator__header">
                {icon("file-text")}
                <div>
                    <h3 class="card__title">{FhsisReport::display_name()}</h3>
                    <p class="card__subtitle">{FhsisReport::description()}</p>
                </div>
            </div>

            <div class="report-generator__period">
                {icon("calendar")}
                <span>{format!("Reporting period: {}", request.period_label())}</span>
            </div>

            <ul class="report-generator__highlights">
                {REPORT_HIGHLIGHTS.iter().map(|(label, value)| view! {
                    <li>
                        <span>{*label}</span>
                        <strong>{*value}</strong>
                    </li>
                }).collect_view()}
            </ul>

            <Show when=move || is_generating.get()>
                <div class="progress">
                    <div class="progress__bar" style=move || format!("width: {}%", progress.get())></div>
                </div>
                <div class="report-generator__stage">
                    <Spinner />
                    <span>{move || message.get()}</span>
                    <span class="report-generator__percent">{move || format!("{}%", progress.get())}</span>
                </div>
            </Show>

            {move || error_msg.get().map(|e| view! {
                <div class="error-message">{icon("x-circle")}{e}</div>
            })}

            {move || artifact.get().map(|a| view! {
                <div class="report-generator__done">
                    {icon("check-circle")}
                    <div>
                        <strong>{a.file_name.clone()}</strong>
                        <small>{format!("{} \u{00b7} {}", a.period, a.size_label)}</small>
                    </div>
                    <Button on_click=on_download>
                        {icon("download")}" Download"
                    </Button>
                </div>
            })}

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || is_generating.get())
                on_click=on_generate
            >
                {move || if is_generating.get() { "Generating..." } else { "Generate Report" }}
            </Button>
        </div>
    }
}
