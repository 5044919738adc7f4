use contracts::shared::error::ValidationErrors;
use leptos::prelude::*;

/// Inline message for one form field, shown after a rejected submit.
#[component]
pub fn FieldError(
    errors: RwSignal<Option<ValidationErrors>>,
    field: &'static str,
) -> impl IntoView {
    let message = move || {
        errors.with(|e| {
            e.as_ref()
                .and_then(|e| e.for_field(field))
                .map(|m| m.to_string())
        })
    };

    move || message().map(|m| view! { <div class="form-error">{m}</div> })
}
