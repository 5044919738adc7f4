use contracts::domain::a001_patient::{Gender, Patient};
use leptos::prelude::*;

use super::view_model::NewPatientViewModel;
use crate::shared::components::FieldError;

#[component]
pub fn NewPatientForm(
    patients: RwSignal<Vec<Patient>>,
    on_saved: Callback<Patient>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = NewPatientViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(patient) = vm.save_command(patients) {
            on_saved.run(patient);
        }
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            <div class="form-group">
                <label for="patient-name">"Full Name"</label>
                <input
                    type="text"
                    id="patient-name"
                    placeholder="Juan Dela Cruz"
                    prop:value=move || vm.form.get().name
                    on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                />
                <FieldError errors=vm.errors field="name" />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="patient-age">"Age"</label>
                    <input
                        type="number"
                        id="patient-age"
                        min="0"
                        prop:value=move || vm.form.get().age
                        on:input=move |ev| vm.form.update(|f| f.age = event_target_value(&ev))
                    />
                    <FieldError errors=vm.errors field="age" />
                </div>

                <div class="form-group">
                    <label for="patient-gender">"Gender"</label>
                    <select
                        id="patient-gender"
                        prop:value=move || vm.form.get().gender.map(|g| g.label()).unwrap_or_default()
                        on:change=move |ev| vm.set_gender(&event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        {Gender::ALL.into_iter().map(|g| view! {
                            <option value=g.label()>{g.label()}</option>
                        }).collect_view()}
                    </select>
                    <FieldError errors=vm.errors field="gender" />
                </div>
            </div>

            <div class="form-group">
                <label for="patient-address">"Address"</label>
                <input
                    type="text"
                    id="patient-address"
                    placeholder="Purok 1, Barangay San Jose"
                    prop:value=move || vm.form.get().address
                    on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                />
                <FieldError errors=vm.errors field="address" />
            </div>

            <div class="details-actions">
                <button
                    type="button"
                    class="btn-secondary"
                    on:click=move |_| {
                        vm.reset();
                        on_cancel.run(());
                    }
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn-primary">"Add Patient"</button>
            </div>
        </form>
    }
}
