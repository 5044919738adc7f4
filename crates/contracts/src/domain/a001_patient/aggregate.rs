use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::error::ValidationErrors;
use crate::shared::mock::{matches_query, series, ymd, SeriesPoint};

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Patient registered at the barangay health center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub address: String,
    #[serde(rename = "lastVisit")]
    pub last_visit: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: String,
    #[serde(rename = "patientName")]
    pub patient_name: String,
    pub date: NaiveDate,
    pub symptoms: String,
    pub diagnosis: String,
    pub medicine: String,
    #[serde(rename = "attendedBy")]
    pub attended_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub stock: u32,
    pub unit: String,
    pub status: String,
}

// ============================================================================
// Add-patient form
// ============================================================================

/// Raw values of the "Add New Patient" dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPatientDto {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub address: String,
}

impl NewPatientDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        if self.age.trim().is_empty() {
            errors.require("age", &self.age);
        } else if !matches!(self.age.trim().parse::<u32>(), Ok(age) if age <= 130) {
            errors.push("age", "Enter an age between 0 and 130");
        }
        if self.gender.is_none() {
            errors.push("gender", "Select a gender");
        }
        errors.require("address", &self.address);
        errors.into_result()
    }

    /// Validated patient record, registered today with status "Active".
    pub fn into_patient(self, id: String, today: NaiveDate) -> Result<Patient, ValidationErrors> {
        self.validate()?;
        let age = self.age.trim().parse::<u32>().unwrap_or_default();
        Ok(Patient {
            id,
            name: self.name.trim().to_string(),
            age,
            gender: self.gender.unwrap_or(Gender::Male),
            address: self.address.trim().to_string(),
            last_visit: today,
            status: "Active".to_string(),
        })
    }
}

/// Next sequential id after the highest `P###` in use.
pub fn next_patient_id(patients: &[Patient]) -> String {
    let highest = patients
        .iter()
        .filter_map(|p| p.id.strip_prefix('P').and_then(|n| n.parse::<u32>().ok()))
        .max()
        .unwrap_or(0);
    format!("P{:03}", highest + 1)
}

/// Patients whose name or id contains the query.
pub fn filter_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    patients
        .iter()
        .filter(|p| matches_query(query, &[&p.name, &p.id]))
        .collect()
}

// ============================================================================
// Mock data
// ============================================================================

pub static PATIENTS: Lazy<Vec<Patient>> = Lazy::new(|| {
    vec![
        patient("P001", "Juan Dela Cruz", 45, Gender::Male, "Zone 1, Purok 3", ymd(2025, 12, 1), "Active"),
        patient("P002", "Maria Santos", 32, Gender::Female, "Zone 2, Purok 1", ymd(2025, 11, 28), "Active"),
        patient("P003", "Pedro Reyes", 58, Gender::Male, "Zone 1, Purok 5", ymd(2025, 11, 25), "Follow-up"),
        patient("P004", "Ana Garcia", 28, Gender::Female, "Zone 3, Purok 2", ymd(2025, 12, 3), "Active"),
        patient("P005", "Jose Rizal", 67, Gender::Male, "Zone 2, Purok 4", ymd(2025, 11, 20), "Critical"),
    ]
});

pub static CONSULTATIONS: Lazy<Vec<Consultation>> = Lazy::new(|| {
    vec![
        consultation("C001", "Juan Dela Cruz", ymd(2025, 12, 1), "Headache, Fever", "Flu", "Paracetamol"),
        consultation(
            "C002",
            "Ana Garcia",
            ymd(2025, 12, 3),
            "Cough, Sore throat",
            "Upper Respiratory Infection",
            "Amoxicillin, Vitamin C",
        ),
        consultation("C003", "Pedro Reyes", ymd(2025, 11, 25), "High blood pressure", "Hypertension", "Amlodipine"),
    ]
});

pub static MEDICINES: Lazy<Vec<Medicine>> = Lazy::new(|| {
    vec![
        medicine("M001", "Paracetamol 500mg", 500, "tablets", "In Stock"),
        medicine("M002", "Amoxicillin 500mg", 200, "capsules", "In Stock"),
        medicine("M003", "Vitamin C 500mg", 300, "tablets", "In Stock"),
        medicine("M004", "Amlodipine 5mg", 50, "tablets", "Low Stock"),
        medicine("M005", "Metformin 500mg", 0, "tablets", "Out of Stock"),
    ]
});

pub static CONSULTATION_TREND: Lazy<Vec<SeriesPoint>> = Lazy::new(|| {
    series(&[("Mon", 12), ("Tue", 18), ("Wed", 15), ("Thu", 22), ("Fri", 19), ("Sat", 8), ("Sun", 4)])
});

pub static DIAGNOSIS_DISTRIBUTION: Lazy<Vec<SeriesPoint>> = Lazy::new(|| {
    series(&[
        ("Respiratory", 30),
        ("Hypertension", 20),
        ("Dengue", 18),
        ("Influenza", 17),
        ("Leptospirosis", 15),
    ])
});

fn patient(
    id: &str,
    name: &str,
    age: u32,
    gender: Gender,
    address: &str,
    last_visit: NaiveDate,
    status: &str,
) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender,
        address: address.to_string(),
        last_visit,
        status: status.to_string(),
    }
}

fn consultation(
    id: &str,
    patient_name: &str,
    date: NaiveDate,
    symptoms: &str,
    diagnosis: &str,
    medicine: &str,
) -> Consultation {
    Consultation {
        id: id.to_string(),
        patient_name: patient_name.to_string(),
        date,
        symptoms: symptoms.to_string(),
        diagnosis: diagnosis.to_string(),
        medicine: medicine.to_string(),
        attended_by: "Maria Santos (BHW)".to_string(),
    }
}

fn medicine(id: &str, name: &str, stock: u32, unit: &str, status: &str) -> Medicine {
    Medicine {
        id: id.to_string(),
        name: name.to_string(),
        stock,
        unit: unit.to_string(),
        status: status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_name_or_id() {
        let found = filter_patients(&PATIENTS, "p003");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Pedro Reyes");

        let found = filter_patients(&PATIENTS, "garcia");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "P004");
        assert_eq!(filter_patients(&PATIENTS, "").len(), 5);
    }

    #[test]
    fn test_next_patient_id() {
        assert_eq!(next_patient_id(&PATIENTS), "P006");
        assert_eq!(next_patient_id(&[]), "P001");
    }

    #[test]
    fn test_new_patient_requires_every_field() {
        let errors = NewPatientDto::default().validate().unwrap_err();
        for field in ["name", "age", "address"] {
            assert_eq!(errors.for_field(field), Some("This field is required"));
        }
        assert_eq!(errors.for_field("gender"), Some("Select a gender"));

        let dto = NewPatientDto {
            age: "two".into(),
            ..NewPatientDto::default()
        };
        assert!(dto.validate().unwrap_err().for_field("age").is_some());
    }

    #[test]
    fn test_new_patient_into_record() {
        let dto = NewPatientDto {
            name: " Liza Soberano ".into(),
            age: "30".into(),
            gender: Some(Gender::Female),
            address: "Zone 1, Purok 1".into(),
        };
        let patient = dto.into_patient(next_patient_id(&PATIENTS), ymd(2025, 12, 4)).unwrap();
        assert_eq!(patient.id, "P006");
        assert_eq!(patient.name, "Liza Soberano");
        assert_eq!(patient.age, 30);
        assert_eq!(patient.status, "Active");
    }
}
