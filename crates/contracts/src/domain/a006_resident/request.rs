use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Wastewater,
    Septic,
    Sanitation,
    Permit,
    Health,
    Other,
}

impl RequestType {
    pub const ALL: [RequestType; 6] = [
        RequestType::Wastewater,
        RequestType::Septic,
        RequestType::Sanitation,
        RequestType::Permit,
        RequestType::Health,
        RequestType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            RequestType::Wastewater => "wastewater",
            RequestType::Septic => "septic",
            RequestType::Sanitation => "sanitation",
            RequestType::Permit => "permit",
            RequestType::Health => "health",
            RequestType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestType::Wastewater => "Wastewater/Drainage Issue",
            RequestType::Septic => "Septic Tank Service",
            RequestType::Sanitation => "Sanitation Complaint",
            RequestType::Permit => "Business Permit Application",
            RequestType::Health => "Health Service Request",
            RequestType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<RequestType> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// "File a Request" form values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceRequestDto {
    pub kind: Option<RequestType>,
    pub location: String,
    pub description: String,
    /// Optional.
    pub contact: String,
}

/// Accepted request, trackable from "My Complaints".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedRequest {
    pub tracking_number: Uuid,
    pub kind: RequestType,
    pub location: String,
    pub description: String,
    pub contact: Option<String>,
    pub submitted_on: NaiveDate,
    pub status: String,
}

impl ServiceRequestDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.kind.is_none() {
            errors.push("kind", "Select type of request");
        }
        errors.require("location", &self.location);
        errors.require("description", &self.description);
        errors.into_result()
    }

    pub fn submit(self, today: NaiveDate) -> Result<SubmittedRequest, ValidationErrors> {
        self.validate()?;
        let mut errors = ValidationErrors::new();
        let Some(kind) = self.kind else {
            errors.push("kind", "Select type of request");
            return Err(errors);
        };
        let contact = self.contact.trim();
        let request = SubmittedRequest {
            tracking_number: Uuid::new_v4(),
            kind,
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            contact: (!contact.is_empty()).then(|| contact.to_string()),
            submitted_on: today,
            status: "Pending".to_string(),
        };
        log::info!("Service request {} filed ({})", request.tracking_number, kind.value());
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mock::ymd;

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = ServiceRequestDto::default().validate().unwrap_err();
        assert_eq!(errors.for_field("kind"), Some("Select type of request"));
        assert_eq!(errors.for_field("location"), Some("This field is required"));
        assert_eq!(errors.for_field("description"), Some("This field is required"));
        assert_eq!(errors.for_field("contact"), None);
    }

    #[test]
    fn test_submit_assigns_tracking_number() {
        let dto = ServiceRequestDto {
            kind: RequestType::from_value("septic"),
            location: "Zone 1, Purok 3".into(),
            description: "Septic tank is full".into(),
            contact: "  ".into(),
        };
        let first = dto.clone().submit(ymd(2025, 12, 4)).unwrap();
        let second = dto.submit(ymd(2025, 12, 4)).unwrap();
        assert_eq!(first.kind, RequestType::Septic);
        assert_eq!(first.contact, None);
        assert_eq!(first.status, "Pending");
        assert_ne!(first.tracking_number, second.tracking_number);
    }
}
