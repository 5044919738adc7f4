use contracts::shared::status::StatusTone;
use leptos::prelude::*;

/// Badge coloured by an explicit tone
#[component]
pub fn ToneBadge(
    tone: StatusTone,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("{} {}", tone.css_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Status label of a record row, coloured by its wording
/// ("Approved", "Pending Inspection", "Critical", ...)
#[component]
pub fn StatusBadge(#[prop(into)] label: String) -> impl IntoView {
    let tone = StatusTone::for_label(&label);

    view! {
        <ToneBadge tone=tone>{label}</ToneBadge>
    }
}
