pub mod aggregate;

pub use aggregate::{
    filter_patients, next_patient_id, Consultation, Gender, Medicine, NewPatientDto, Patient,
    CONSULTATIONS, CONSULTATION_TREND, DIAGNOSIS_DISTRIBUTION, MEDICINES, PATIENTS,
};
