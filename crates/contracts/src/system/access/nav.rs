use crate::system::auth::{Role, SessionState};

use super::PageKey;

/// One sidebar item. Visible iff the session role is in `allowed_roles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub page: PageKey,
    pub icon: &'static str,
    pub allowed_roles: &'static [Role],
}

impl NavEntry {
    pub fn path(&self) -> &'static str {
        self.page.path()
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

const ALL_STAFF: &[Role] = &[Role::Bhw, Role::Bsi, Role::Clerk, Role::Captain, Role::Sysadmin];
const HEALTH_STAFF: &[Role] = &[Role::Bhw, Role::Clerk, Role::Captain, Role::Sysadmin];
const SANITATION_STAFF: &[Role] = &[Role::Bsi, Role::Clerk, Role::Captain, Role::Sysadmin];
const SUPERVISORS: &[Role] = &[Role::Clerk, Role::Captain, Role::Sysadmin];
const ADMINS: &[Role] = &[Role::Sysadmin];
const RESIDENTS: &[Role] = &[Role::Resident];

pub static STAFF_NAV: [NavEntry; 8] = [
    NavEntry {
        label: "Dashboard",
        page: PageKey::Dashboard,
        icon: "layout-dashboard",
        allowed_roles: ALL_STAFF,
    },
    NavEntry {
        label: "Health Center Services",
        page: PageKey::HealthCenter,
        icon: "stethoscope",
        allowed_roles: HEALTH_STAFF,
    },
    NavEntry {
        label: "Sanitation & Permits",
        page: PageKey::Sanitation,
        icon: "clipboard-check",
        allowed_roles: SANITATION_STAFF,
    },
    NavEntry {
        label: "Immunization & Nutrition",
        page: PageKey::Immunization,
        icon: "syringe",
        allowed_roles: HEALTH_STAFF,
    },
    NavEntry {
        label: "Wastewater & Septic",
        page: PageKey::Wastewater,
        icon: "droplets",
        allowed_roles: SANITATION_STAFF,
    },
    NavEntry {
        label: "Health Surveillance",
        page: PageKey::Surveillance,
        icon: "activity",
        allowed_roles: SUPERVISORS,
    },
    NavEntry {
        label: "User Management",
        page: PageKey::Users,
        icon: "users",
        allowed_roles: ADMINS,
    },
    NavEntry {
        label: "Settings",
        page: PageKey::Settings,
        icon: "settings",
        allowed_roles: ALL_STAFF,
    },
];

pub static RESIDENT_NAV: [NavEntry; 6] = [
    NavEntry {
        label: "Home",
        page: PageKey::ResidentHome,
        icon: "home",
        allowed_roles: RESIDENTS,
    },
    NavEntry {
        label: "My Family's Health",
        page: PageKey::ResidentHealth,
        icon: "heart",
        allowed_roles: RESIDENTS,
    },
    NavEntry {
        label: "My QR Code",
        page: PageKey::ResidentQrCode,
        icon: "qr-code",
        allowed_roles: RESIDENTS,
    },
    NavEntry {
        label: "My Business Permits",
        page: PageKey::ResidentPermits,
        icon: "building",
        allowed_roles: RESIDENTS,
    },
    NavEntry {
        label: "My Complaints",
        page: PageKey::ResidentComplaints,
        icon: "alert-triangle",
        allowed_roles: RESIDENTS,
    },
    NavEntry {
        label: "File a Request",
        page: PageKey::ResidentRequest,
        icon: "file-text",
        allowed_roles: RESIDENTS,
    },
];

/// Menu for the current session: the resident list for residents, the
/// staff list otherwise, filtered by role in declared order.
pub fn compose_nav(session: &SessionState) -> Vec<&'static NavEntry> {
    match session.role() {
        Some(role) => super::policy::allowed_nav(role),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::demo_identity;

    #[test]
    fn test_unauthenticated_menu_is_empty() {
        assert!(compose_nav(&SessionState::Unauthenticated).is_empty());
    }

    #[test]
    fn test_resident_menu_uses_resident_list() {
        let session = SessionState::Authenticated(demo_identity(Role::Resident));
        let paths: Vec<&str> = compose_nav(&session).iter().map(|e| e.path()).collect();
        assert_eq!(
            paths,
            vec![
                "/resident",
                "/resident/health",
                "/resident/qrcode",
                "/resident/permits",
                "/resident/complaints",
                "/resident/request",
            ]
        );
    }

    #[test]
    fn test_menu_preserves_declared_order() {
        let session = SessionState::Authenticated(demo_identity(Role::Bsi));
        let labels: Vec<&str> = compose_nav(&session).iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Sanitation & Permits", "Wastewater & Septic", "Settings"]
        );
    }
}
