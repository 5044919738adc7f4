use leptos::prelude::*;

/// PageHeader component - title block at the top of every portal page
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Description; for captains it already carries the view-only marker
    #[prop(optional, into)]
    subtitle: Signal<String>,

    /// Shows the "View Only" badge next to the title
    #[prop(optional, into)]
    view_only: Signal<bool>,

    /// Action buttons (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">
                        {title}
                        <Show when=move || view_only.get()>
                            <span class="badge badge--warning page-header__badge">"View Only"</span>
                        </Show>
                    </h1>
                    {move || {
                        let s = subtitle.get();
                        (!s.is_empty()).then(|| view! {
                            <div class="page-header__subtitle">{s}</div>
                        })
                    }}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
