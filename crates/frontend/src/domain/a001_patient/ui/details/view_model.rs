use contracts::domain::a001_patient::{next_patient_id, Gender, NewPatientDto, Patient};
use contracts::shared::error::ValidationErrors;
use leptos::prelude::*;

use crate::shared::date_utils::today;

/// ViewModel for the add-patient dialog
#[derive(Clone, Copy)]
pub struct NewPatientViewModel {
    pub form: RwSignal<NewPatientDto>,
    pub errors: RwSignal<Option<ValidationErrors>>,
}

impl NewPatientViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(NewPatientDto::default()),
            errors: RwSignal::new(None),
        }
    }

    pub fn set_gender(&self, value: &str) {
        let gender = Gender::ALL.into_iter().find(|g| g.label() == value);
        self.form.update(|f| f.gender = gender);
    }

    pub fn reset(&self) {
        self.form.set(NewPatientDto::default());
        self.errors.set(None);
    }

    /// Validates the form and appends the new record to `patients`.
    /// Field errors stay on the form; nothing is added when any field fails.
    pub fn save_command(&self, patients: RwSignal<Vec<Patient>>) -> Option<Patient> {
        let id = patients.with_untracked(|list| next_patient_id(list));
        match self.form.get_untracked().into_patient(id, today()) {
            Ok(patient) => {
                log::info!("patient {} registered", patient.id);
                patients.update(|list| list.push(patient.clone()));
                self.reset();
                Some(patient)
            }
            Err(errors) => {
                log::debug!("add patient rejected: {}", errors);
                self.errors.set(Some(errors));
                None
            }
        }
    }
}

impl Default for NewPatientViewModel {
    fn default() -> Self {
        Self::new()
    }
}
