pub mod client;
pub mod session;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use client::{AuthClient, MockAuthClient};
pub use session::{SessionState, SessionStore};

/// Every portal user acts under exactly one of these roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Resident,
    /// Barangay Health Worker
    Bhw,
    /// Barangay Sanitary Inspector
    Bsi,
    Clerk,
    Captain,
    Sysadmin,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Resident,
        Role::Bhw,
        Role::Bsi,
        Role::Clerk,
        Role::Captain,
        Role::Sysadmin,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Role::Resident => "resident",
            Role::Bhw => "bhw",
            Role::Bsi => "bsi",
            Role::Clerk => "clerk",
            Role::Captain => "captain",
            Role::Sysadmin => "sysadmin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Resident => "Resident",
            Role::Bhw => "Barangay Health Worker",
            Role::Bsi => "Sanitary Inspector",
            Role::Clerk => "Barangay Clerk",
            Role::Captain => "Barangay Captain",
            Role::Sysadmin => "System Administrator",
        }
    }

    /// One-line summary shown next to the quick demo logins.
    pub fn description(self) -> &'static str {
        match self {
            Role::Resident => "Limited view-only access",
            Role::Bhw => "Health services & immunization",
            Role::Bsi => "Sanitation & inspections",
            Role::Clerk => "Full administrative access",
            Role::Captain => "Supervisory read-only",
            Role::Sysadmin => "Full system access",
        }
    }

    /// CSS modifier for role badges.
    pub fn badge_class(self) -> &'static str {
        match self {
            Role::Resident => "role-badge role-badge--resident",
            Role::Bhw => "role-badge role-badge--bhw",
            Role::Bsi => "role-badge role-badge--bsi",
            Role::Clerk => "role-badge role-badge--clerk",
            Role::Captain => "role-badge role-badge--captain",
            Role::Sysadmin => "role-badge role-badge--sysadmin",
        }
    }

    pub fn is_staff(self) -> bool {
        !matches!(self, Role::Resident)
    }

    /// Where a fresh session of this role lands.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Resident => "/resident",
            Role::Bhw | Role::Bsi | Role::Clerk | Role::Captain | Role::Sysadmin => "/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// The signed-in person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// What the login form submits: credentials plus the role being claimed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Canned identity for each role, used by the mock login and the demo
/// role switcher.
pub fn demo_identity(role: Role) -> Identity {
    let (id, name, email) = match role {
        Role::Resident => ("1", "Juan Dela Cruz", "juan.delacruz@email.com"),
        Role::Bhw => ("2", "Maria Santos", "maria.santos@barangay.gov.ph"),
        Role::Bsi => ("3", "Pedro Reyes", "pedro.reyes@barangay.gov.ph"),
        Role::Clerk => ("4", "Ana Garcia", "ana.garcia@barangay.gov.ph"),
        Role::Captain => ("5", "Kap. Jose Rizal", "jose.rizal@barangay.gov.ph"),
        Role::Sysadmin => ("6", "System Admin", "admin@barangay.gov.ph"),
    };
    Identity {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_slug_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.slug().parse::<Role>(), Ok(role));
        }
        assert_eq!(" BHW ".parse::<Role>(), Ok(Role::Bhw));
        assert!("mayor".parse::<Role>().is_err());
    }

    #[test]
    fn test_landing_paths() {
        assert_eq!(Role::Resident.landing_path(), "/resident");
        for role in Role::ALL.into_iter().filter(|r| r.is_staff()) {
            assert_eq!(role.landing_path(), "/dashboard");
        }
    }

    #[test]
    fn test_demo_identity_carries_role() {
        for role in Role::ALL {
            assert_eq!(demo_identity(role).role, role);
        }
        assert_eq!(demo_identity(Role::Captain).name, "Kap. Jose Rizal");
    }
}
