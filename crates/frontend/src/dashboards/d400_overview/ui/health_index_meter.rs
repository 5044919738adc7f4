use contracts::dashboards::d400_overview::HealthIndex;
use contracts::shared::cancel::CancelToken;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Half-circle gauge that counts up to the configured health index.
#[component]
pub fn HealthIndexMeter(score: u32, max: u32) -> impl IntoView {
    let gauge = HealthIndex::new(score, max);
    let (value, set_value) = signal(0u32);

    // Stopped when the dashboard unmounts mid-animation.
    let cancel = CancelToken::new();
    let animation = cancel.clone();
    spawn_local(async move {
        let step_ms = gauge.step_interval_ms();
        for frame in gauge.animation_frames() {
            TimeoutFuture::new(step_ms).await;
            if animation.is_cancelled() {
                return;
            }
            set_value.set(frame);
        }
    });
    on_cleanup(move || cancel.cancel());

    let band = move || gauge.band_of(value.get());
    let needle_style = move || format!("transform: rotate({:.1}deg);", gauge.needle_rotation(value.get()));

    view! {
        <div class="card health-index">
            <h3 class="card__title">"Barangay Health Index"</h3>
            <div class="gauge">
                <div class="gauge__arc"></div>
                <div class="gauge__needle" style=needle_style></div>
                <div class="gauge__hub"></div>
            </div>
            <div class=move || format!("gauge__value {}", band().css_class())>
                {move || value.get()}
                <span class="gauge__max">{format!("/{}", gauge.max)}</span>
            </div>
            <div class=move || format!("gauge__band {}", band().css_class())>
                {move || band().label()}
            </div>
            <div class="gauge__legend">
                <span>"0"</span>
                <span>{gauge.max}</span>
            </div>
        </div>
    }
}
