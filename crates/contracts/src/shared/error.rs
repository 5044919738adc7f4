use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::system::access::PageKey;
use crate::system::auth::Role;

/// Failure of a simulated service call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("operation was cancelled")]
    Cancelled,
    #[error("no record found with ID {0}")]
    NotFound(String),
}

/// Login / role-switch failure. The session is never changed when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials, please check your email and password")]
    InvalidCredentials,
    #[error("role switching is only available in demo mode")]
    RoleSwitchDisabled,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Authenticated session lacks permission for a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{role} may not access {page}")]
pub struct AccessDenied {
    pub role: Role,
    pub page: PageKey,
}

/// A single invalid form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "This field is required".to_string(),
        }
    }
}

/// All invalid fields of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a "required" error when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.push(ValidationError::required(field));
        }
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(ValidationError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for a field, used to render the error inline under it.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|e| e.field.as_str()).collect();
        write!(f, "please complete the required fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse portal configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_collects_blank_fields_in_order() {
        let mut errors = ValidationErrors::new();
        errors.require("subject", "  ");
        errors.require("location", "Zone 1");
        errors.require("description", "");

        assert_eq!(errors.0.len(), 2);
        assert_eq!(errors.0[0].field, "subject");
        assert_eq!(errors.for_field("description"), Some("This field is required"));
        assert_eq!(errors.for_field("location"), None);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_errors_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_auth_error_wraps_service_error() {
        let err: AuthError = ServiceError::Cancelled.into();
        assert_eq!(err, AuthError::Service(ServiceError::Cancelled));
        assert_eq!(err.to_string(), "operation was cancelled");
    }
}
