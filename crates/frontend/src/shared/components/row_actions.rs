use leptos::prelude::*;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;

/// Trailing cell of a record row: a view button for everyone and an
/// edit (or approve) button only while `editable` holds.
#[component]
pub fn RowActions(
    /// Record id or name used in the notifications
    #[prop(into)]
    record: String,

    /// Page mutate flag
    #[prop(into)]
    editable: Signal<bool>,

    /// Approve instead of edit (violations)
    #[prop(optional)]
    approve: bool,
) -> impl IntoView {
    let toast = use_toast();
    let record = StoredValue::new(record);
    let (edit_icon, verb) = if approve {
        ("check-circle", "Resolved")
    } else {
        ("edit", "Editing")
    };

    view! {
        <div class="row-actions">
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| toast.info(format!("Viewing {}", record.get_value()))
            >
                {icon("eye")}
            </Button>
            <Show when=move || editable.get()>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| toast.info(format!("{} {}", verb, record.get_value()))
                >
                    {icon(edit_icon)}
                </Button>
            </Show>
        </div>
    }
}
