use contracts::domain::a003_immunization::{TimbangSchedule, TimbangStatus};
use contracts::shared::status::StatusTone;
use leptos::prelude::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::ToneBadge;
use crate::shared::icons::icon;

/// Operation Timbang weighing schedule, one row per purok grouped by week.
/// Confirm buttons only render when `editable` is true.
#[component]
pub fn TimbangScheduler(#[prop(into)] editable: Signal<bool>) -> impl IntoView {
    let toast = use_toast();
    let schedule = RwSignal::new(TimbangSchedule::default());

    let totals = Memo::new(move |_| {
        schedule.with(|s| (s.slots.len(), s.confirmed_count(), s.total_children()))
    });

    let confirm_all = move |_| {
        schedule.update(|s| s.confirm_all());
        toast.success("All weighing sessions confirmed");
    };

    view! {
        <div class="card timbang">
            <div class="card__header">
                <div>
                    <h3 class="card__title">{icon("scale")}" Operation Timbang Schedule"</h3>
                    <p class="card__subtitle">
                        {move || {
                            let (slots, confirmed, children) = totals.get();
                            format!("{} of {} sessions confirmed \u{00b7} {} children due", confirmed, slots, children)
                        }}
                    </p>
                </div>
                <Show when=move || editable.get()>
                    <button class="btn-secondary" on:click=confirm_all>"Confirm All"</button>
                </Show>
            </div>

            {move || schedule.with(|s| s.by_week()).into_iter().map(|(week, slots)| view! {
                <div class="timbang__week">
                    <h4>{week}</h4>
                    {slots.into_iter().map(|slot| {
                        let id = slot.id;
                        let confirmed = slot.status == TimbangStatus::Confirmed;
                        view! {
                            <div class="timbang__slot">
                                {icon("map-pin")}
                                <span class="timbang__purok">{slot.purok}</span>
                                <span class="timbang__due">{format!("{} children", slot.children_due)}</span>
                                <span class="timbang__date">{slot.date.unwrap_or_else(|| "Not scheduled".to_string())}</span>
                                {if confirmed {
                                    view! { <ToneBadge tone=StatusTone::Success>"Confirmed"</ToneBadge> }.into_any()
                                } else {
                                    view! {
                                        <ToneBadge tone=StatusTone::Warning>"Pending"</ToneBadge>
                                        <Show when=move || editable.get()>
                                            <button
                                                class="btn-link"
                                                on:click=move |_| schedule.update(|s| s.confirm(id))
                                            >
                                                "Confirm"
                                            </button>
                                        </Show>
                                    }.into_any()
                                }}
                            </div>
                        }
                    }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}
