use contracts::domain::a002_sanitation::InspectionChecklist;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;

fn selected_file_name(ev: &leptos::ev::Event) -> Option<String> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0).map(|file| file.name())
}

/// Digital checklist filled on site; the photo input opens the device camera.
#[component]
pub fn InspectionChecklistForm(
    #[prop(into)] business_name: String,
    on_done: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let checklist = RwSignal::new(InspectionChecklist::new(business_name));
    let summary = Memo::new(move |_| checklist.with(|c| c.summary()));

    let on_submit = move |_| match checklist.with_untracked(|c| c.submit()) {
        Ok(s) => {
            toast.success(format!(
                "Inspection submitted: {} compliant, {} non-compliant",
                s.compliant, s.non_compliant
            ));
            on_done.run(());
        }
        Err(errors) => toast.error(errors.to_string()),
    };

    view! {
        <div class="checklist">
            <div class="checklist__summary">
                <span class="badge badge--success">
                    {move || format!("{} Compliant", summary.get().compliant)}
                </span>
                <span class="badge badge--danger">
                    {move || format!("{} Non-compliant", summary.get().non_compliant)}
                </span>
                <span class="badge badge--neutral">
                    {move || format!("{} Pending", summary.get().pending)}
                </span>
            </div>

            {move || checklist.with(|c| c.grouped()).into_iter().map(|(category, items)| view! {
                <fieldset class="checklist__group">
                    <legend>{category}</legend>
                    {items.into_iter().map(|item| {
                        let id = item.id;
                        let state_class = match item.compliant {
                            Some(true) => "checklist__item checklist__item--ok",
                            Some(false) => "checklist__item checklist__item--fail",
                            None => "checklist__item",
                        };
                        view! {
                            <div class=state_class>
                                <span class="checklist__label">{item.label}</span>
                                <div class="checklist__controls">
                                    <button
                                        type="button"
                                        class="btn-icon"
                                        class:btn-icon--active=item.compliant == Some(true)
                                        title="Compliant"
                                        on:click=move |_| checklist.update(|c| c.mark(id, true))
                                    >
                                        {icon("check-circle")}
                                    </button>
                                    <button
                                        type="button"
                                        class="btn-icon"
                                        class:btn-icon--active=item.compliant == Some(false)
                                        title="Non-compliant"
                                        on:click=move |_| checklist.update(|c| c.mark(id, false))
                                    >
                                        {icon("x-circle")}
                                    </button>
                                    <label class="btn-icon" title="Attach photo">
                                        {icon("camera")}
                                        <input
                                            type="file"
                                            accept="image/*"
                                            capture="environment"
                                            class="visually-hidden"
                                            on:change=move |ev| {
                                                if let Some(name) = selected_file_name(&ev) {
                                                    checklist.update(|c| c.attach_photo(id, name));
                                                }
                                            }
                                        />
                                    </label>
                                </div>
                                {item.photo.map(|p| view! {
                                    <small class="checklist__photo">{icon("camera")}{p}</small>
                                })}
                            </div>
                        }
                    }).collect_view()}
                </fieldset>
            }).collect_view()}

            <div class="form-group">
                <label for="inspection-notes">"Inspector Notes"</label>
                <textarea
                    id="inspection-notes"
                    rows="3"
                    prop:value=move || checklist.with(|c| c.notes.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        checklist.update(|c| c.notes = value);
                    }
                />
            </div>

            <div class="details-actions">
                <button type="button" class="btn-secondary" on:click=move |_| on_done.run(())>
                    "Cancel"
                </button>
                <button type="button" class="btn-primary" on:click=on_submit>
                    {icon("send")}" Submit Inspection"
                </button>
            </div>
        </div>
    }
}
