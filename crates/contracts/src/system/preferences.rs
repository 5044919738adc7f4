use serde::{Deserialize, Serialize};

use crate::shared::error::ValidationErrors;

/// Settings page switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub system_alerts: bool,
    pub compact_mode: bool,
    pub show_tooltips: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            system_alerts: true,
            compact_mode: false,
            show_tooltips: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PasswordChangeDto {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChangeDto {
    /// An all-empty form means "keep the current password".
    pub fn is_blank(&self) -> bool {
        self.current.is_empty() && self.new.is_empty() && self.confirm.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        if self.is_blank() {
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        errors.require("current", &self.current);
        if self.new.len() < 8 {
            errors.push("new", "Password must be at least 8 characters");
        }
        if self.confirm != self.new {
            errors.push("confirm", "Passwords do not match");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_password_form_is_accepted() {
        assert!(PasswordChangeDto::default().validate().is_ok());
    }

    #[test]
    fn test_password_change_rules() {
        let dto = PasswordChangeDto {
            current: String::new(),
            new: "short".into(),
            confirm: "shorter".into(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.for_field("current").is_some());
        assert!(errors.for_field("new").is_some());
        assert_eq!(errors.for_field("confirm"), Some("Passwords do not match"));

        let dto = PasswordChangeDto {
            current: "old-password".into(),
            new: "new-password".into(),
            confirm: "new-password".into(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_default_switches() {
        let prefs = Preferences::default();
        assert!(prefs.email_notifications && prefs.system_alerts && prefs.show_tooltips);
        assert!(!prefs.sms_notifications && !prefs.compact_mode);
    }
}
