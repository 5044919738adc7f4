use crate::shared::error::AccessDenied;
use crate::system::access::{can_access, can_mutate, can_perform, Action, PageKey};
use crate::system::auth::{Identity, Role, SessionState};

pub const VIEW_ONLY_SUFFIX: &str = " (View Only Mode)";

/// Access facts a page reads once when it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAccess {
    pub page: PageKey,
    pub role: Option<Role>,
    pub can_mutate: bool,
}

impl PageAccess {
    pub fn new(identity: Option<&Identity>, page: PageKey) -> Self {
        let role = identity.map(|i| i.role);
        Self {
            page,
            role,
            can_mutate: role.map(|r| can_mutate(r, page)).unwrap_or(false),
        }
    }

    pub fn for_session(session: &SessionState, page: PageKey) -> Self {
        Self::new(session.identity(), page)
    }

    pub fn is_view_only(&self) -> bool {
        self.role == Some(Role::Captain)
    }

    /// Page description with the captain's view-only marker appended.
    pub fn description(&self, base: &str) -> String {
        if self.is_view_only() {
            format!("{}{}", base, VIEW_ONLY_SUFFIX)
        } else {
            base.to_string()
        }
    }

    /// Per-action check, narrower than `can_mutate`: a mutating action
    /// also needs this page's mutate flag.
    pub fn allows(&self, action: Action) -> bool {
        let Some(role) = self.role else {
            return false;
        };
        can_perform(role, action) && (self.can_mutate || !action.is_mutation())
    }

    pub fn require(&self) -> Result<Role, AccessDenied> {
        match self.role {
            Some(role) if can_access(role, self.page) => Ok(role),
            Some(role) => Err(AccessDenied {
                role,
                page: self.page,
            }),
            // The guard redirects before a page renders; treat as the least
            // privileged role for the error.
            None => Err(AccessDenied {
                role: Role::Resident,
                page: self.page,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::demo_identity;

    #[test]
    fn test_captain_description_is_marked_view_only() {
        let captain = demo_identity(Role::Captain);
        let access = PageAccess::new(Some(&captain), PageKey::Wastewater);
        assert!(!access.can_mutate);
        assert_eq!(
            access.description("Manage complaints, scheduling, and service tracking"),
            "Manage complaints, scheduling, and service tracking (View Only Mode)"
        );
    }

    #[test]
    fn test_other_roles_keep_plain_description() {
        let clerk = demo_identity(Role::Clerk);
        let access = PageAccess::new(Some(&clerk), PageKey::Wastewater);
        assert!(access.can_mutate);
        assert_eq!(access.description("Manage"), "Manage");
    }

    #[test]
    fn test_no_session_has_no_capabilities() {
        let access = PageAccess::for_session(&SessionState::Unauthenticated, PageKey::Dashboard);
        assert!(!access.can_mutate);
        assert!(!access.allows(Action::ViewHealthIndex));
        assert!(access.require().is_err());
    }

    #[test]
    fn test_mutating_actions_need_page_mutation() {
        for role in Role::ALL {
            let identity = demo_identity(role);
            for page in PageKey::ALL {
                let access = PageAccess::new(Some(&identity), page);
                for action in Action::ALL.into_iter().filter(|a| a.is_mutation()) {
                    if access.allows(action) {
                        assert!(access.can_mutate, "{} may {:?} on read-only {}", role, action, page);
                    }
                }
            }
        }
    }

    #[test]
    fn test_bhw_outside_own_pages_cannot_create() {
        let bhw = demo_identity(Role::Bhw);
        let settings = PageAccess::new(Some(&bhw), PageKey::Settings);
        assert!(!settings.can_mutate);
        assert!(!settings.allows(Action::CreatePatient));
        assert!(settings.allows(Action::SavePreferences));

        let dashboard = PageAccess::new(Some(&bhw), PageKey::Dashboard);
        assert!(!dashboard.allows(Action::RecordVaccination));

        let immunization = PageAccess::new(Some(&bhw), PageKey::Immunization);
        assert!(immunization.allows(Action::RecordVaccination));
    }

    #[test]
    fn test_non_mutating_actions_ignore_page_flag() {
        let captain = demo_identity(Role::Captain);
        let dashboard = PageAccess::new(Some(&captain), PageKey::Dashboard);
        assert!(!dashboard.can_mutate);
        assert!(dashboard.allows(Action::ViewHealthIndex));

        let resident = demo_identity(Role::Resident);
        let request = PageAccess::new(Some(&resident), PageKey::ResidentRequest);
        assert!(!request.can_mutate);
        assert!(request.allows(Action::FileRequest));
    }

    #[test]
    fn test_require_reports_denied_page() {
        let bhw = demo_identity(Role::Bhw);
        let err = PageAccess::new(Some(&bhw), PageKey::Users).require().unwrap_err();
        assert_eq!(err, AccessDenied { role: Role::Bhw, page: PageKey::Users });
        assert_eq!(err.to_string(), "bhw may not access /users");
    }
}
