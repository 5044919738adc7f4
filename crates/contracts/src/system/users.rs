use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::error::ValidationErrors;
use crate::shared::mock::date;
use crate::system::auth::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub last_login_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub password: String,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.require("email", &self.email);
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.push("email", "Enter a valid email address");
        }
        if self.role.is_none() {
            errors.push("role", "Select a role");
        }
        if self.password.len() < 8 {
            errors.push("password", "Password must be at least 8 characters");
        }
        errors.into_result()
    }

    /// New active account that has not signed in yet.
    pub fn into_account(self, id: String) -> Result<UserAccount, ValidationErrors> {
        self.validate()?;
        let role = self.role.unwrap_or(Role::Resident);
        Ok(UserAccount {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            role,
            is_active: true,
            last_login_at: None,
        })
    }
}

/// Next numeric id after the highest one in use.
pub fn next_user_id(users: &[UserAccount]) -> String {
    let highest = users
        .iter()
        .filter_map(|u| u.id.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    (highest + 1).to_string()
}

pub static USERS: Lazy<Vec<UserAccount>> = Lazy::new(|| {
    vec![
        account("1", "Juan Dela Cruz", "juan.delacruz@email.com", Role::Resident, true, date(2025, 12, 3)),
        account("2", "Maria Santos", "maria.santos@barangay.gov.ph", Role::Bhw, true, date(2025, 12, 4)),
        account("3", "Pedro Reyes", "pedro.reyes@barangay.gov.ph", Role::Bsi, true, date(2025, 12, 4)),
        account("4", "Ana Garcia", "ana.garcia@barangay.gov.ph", Role::Clerk, true, date(2025, 12, 4)),
        account("5", "Jose Rizal", "jose.rizal@barangay.gov.ph", Role::Captain, true, date(2025, 12, 3)),
        account("6", "Carlos Mendoza", "carlos.mendoza@email.com", Role::Resident, false, date(2025, 10, 15)),
    ]
});

fn account(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    is_active: bool,
    last_login_at: Option<NaiveDate>,
) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        is_active,
        last_login_at,
    }
}

/// Case-insensitive match on name or email.
pub fn filter_users<'a>(users: &'a [UserAccount], query: &str) -> Vec<&'a UserAccount> {
    let query = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            query.is_empty()
                || u.name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_name_or_email() {
        let found = filter_users(&USERS, "SANTOS");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].role, Role::Bhw);

        assert_eq!(filter_users(&USERS, "@email.com").len(), 2);
        assert_eq!(filter_users(&USERS, "").len(), USERS.len());
    }

    #[test]
    fn test_create_user_validation() {
        let errors = CreateUserDto::default().validate().unwrap_err();
        assert_eq!(errors.for_field("name"), Some("This field is required"));
        assert_eq!(errors.for_field("role"), Some("Select a role"));
        assert!(errors.for_field("password").is_some());

        let dto = CreateUserDto {
            name: "Liza Soberano".into(),
            email: "liza@barangay.gov.ph".into(),
            role: Some(Role::Bhw),
            password: "correct-horse".into(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_into_account_assigns_next_id() {
        let dto = CreateUserDto {
            name: " Liza Soberano ".into(),
            email: "Liza@Barangay.gov.ph".into(),
            role: Some(Role::Clerk),
            password: "correct-horse".into(),
        };
        let account = dto.into_account(next_user_id(&USERS)).unwrap();
        assert_eq!(account.id, "7");
        assert_eq!(account.name, "Liza Soberano");
        assert_eq!(account.email, "liza@barangay.gov.ph");
        assert!(account.is_active);
        assert_eq!(account.last_login_at, None);
    }

    #[test]
    fn test_into_account_rejects_invalid_form() {
        assert!(CreateUserDto::default().into_account("7".into()).is_err());
    }
}
