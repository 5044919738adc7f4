use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dialog frame for the portal's forms and widgets.
///
/// Clicking the overlay or the close button sets `open` to false; clicks
/// inside the content are not propagated to the overlay.
/// ```rust
/// let open = RwSignal::new(false);
///
/// view! {
///     <Modal open=open title="Add New Patient">
///         <NewPatientForm on_close=move || open.set(false) />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);

    view! {
        {move || {
            if open.get() {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| open.set(false)
                    >
                        <div
                            class="modal-content"
                            class:modal-content--wide=wide
                            on:click=|e| e.stop_propagation()
                        >
                            <div class="modal-header">
                                <h3>{title.get_value()}</h3>
                                <button class="btn-close" on:click=move |_| open.set(false)>
                                    {icon("x")}
                                </button>
                            </div>
                            {children()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { {()} }.into_any()
            }
        }}
    }
}
