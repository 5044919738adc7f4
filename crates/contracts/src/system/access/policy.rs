use crate::system::auth::Role;

use super::nav::{NavEntry, RESIDENT_NAV, STAFF_NAV};
use super::{Action, PageKey};

/// Navigation entries a role may use, in declared order. Residents and
/// staff draw from separate lists.
pub fn allowed_nav(role: Role) -> Vec<&'static NavEntry> {
    let source: &'static [NavEntry] = match role {
        Role::Resident => &RESIDENT_NAV,
        Role::Bhw | Role::Bsi | Role::Clerk | Role::Captain | Role::Sysadmin => &STAFF_NAV,
    };
    source.iter().filter(|entry| entry.allows(role)).collect()
}

/// True iff `page` is in the role's navigation set.
pub fn can_access(role: Role, page: PageKey) -> bool {
    allowed_nav(role).iter().any(|entry| entry.page == page)
}

/// Whether create/edit/delete controls render for `role` on `page`.
/// Pairs not granted here are denied.
pub fn can_mutate(role: Role, page: PageKey) -> bool {
    match role {
        // Supervisory read-only, whatever the page.
        Role::Captain => false,
        Role::Resident => false,
        Role::Bhw => matches!(page, PageKey::HealthCenter | PageKey::Immunization),
        Role::Bsi => matches!(page, PageKey::Sanitation | PageKey::Wastewater),
        Role::Clerk | Role::Sysadmin => can_access(role, page),
    }
}

/// Per-action capability table.
pub fn can_perform(role: Role, action: Action) -> bool {
    use Role::*;

    let allowed: &[Role] = match action {
        Action::StartInspection | Action::ScanBusinessQr => &[Bsi, Sysadmin],
        Action::ScanResidentQr
        | Action::CreatePatient
        | Action::RecordVaccination
        | Action::ScheduleSmsReminder
        | Action::GenerateReport => &[Bhw, Clerk, Sysadmin],
        Action::CreatePermit
        | Action::IssueViolation
        | Action::FileWastewaterComplaint
        | Action::ScheduleService => &[Bsi, Clerk, Sysadmin],
        Action::ManageOutbreakAlerts => &[Clerk, Sysadmin],
        Action::ViewHealthIndex => &[Captain, Clerk, Sysadmin],
        Action::ManageUsers => &[Sysadmin],
        Action::SavePreferences => &[Bhw, Bsi, Clerk, Captain, Sysadmin],
        Action::FileRequest | Action::FileComplaint => &[Resident],
    };
    allowed.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(role: Role) -> Vec<PageKey> {
        allowed_nav(role).iter().map(|e| e.page).collect()
    }

    #[test]
    fn test_nav_per_role() {
        use PageKey::*;
        assert_eq!(
            pages(Role::Resident),
            vec![
                ResidentHome,
                ResidentHealth,
                ResidentQrCode,
                ResidentPermits,
                ResidentComplaints,
                ResidentRequest
            ]
        );
        assert_eq!(pages(Role::Bhw), vec![Dashboard, HealthCenter, Immunization, Settings]);
        assert_eq!(pages(Role::Bsi), vec![Dashboard, Sanitation, Wastewater, Settings]);
        let clerk = vec![
            Dashboard,
            HealthCenter,
            Sanitation,
            Immunization,
            Wastewater,
            Surveillance,
            Settings,
        ];
        assert_eq!(pages(Role::Clerk), clerk);
        assert_eq!(pages(Role::Captain), clerk);
        assert_eq!(
            pages(Role::Sysadmin),
            vec![
                Dashboard,
                HealthCenter,
                Sanitation,
                Immunization,
                Wastewater,
                Surveillance,
                Users,
                Settings
            ]
        );
    }

    #[test]
    fn test_every_role_has_non_empty_nav() {
        for role in Role::ALL {
            assert!(!allowed_nav(role).is_empty(), "{} has no navigation", role);
        }
    }

    #[test]
    fn test_resident_and_staff_nav_are_disjoint() {
        let resident = pages(Role::Resident);
        for role in Role::ALL.into_iter().filter(|r| r.is_staff()) {
            assert!(pages(role).iter().all(|p| !resident.contains(p)));
        }
    }

    #[test]
    fn test_mutation_grants() {
        assert!(can_mutate(Role::Bhw, PageKey::HealthCenter));
        assert!(can_mutate(Role::Bhw, PageKey::Immunization));
        assert!(!can_mutate(Role::Bhw, PageKey::Sanitation));
        assert!(!can_mutate(Role::Bhw, PageKey::Settings));
        assert!(can_mutate(Role::Bsi, PageKey::Wastewater));
        assert!(!can_mutate(Role::Bsi, PageKey::HealthCenter));
        assert!(can_mutate(Role::Clerk, PageKey::Surveillance));
        assert!(!can_mutate(Role::Clerk, PageKey::Users));
        assert!(can_mutate(Role::Sysadmin, PageKey::Users));
        assert!(!can_mutate(Role::Sysadmin, PageKey::ResidentRequest));
    }

    #[test]
    fn test_captain_never_mutates() {
        for page in PageKey::ALL {
            assert!(!can_mutate(Role::Captain, page), "captain mutates {}", page);
        }
        assert!(can_access(Role::Captain, PageKey::HealthCenter));
    }

    #[test]
    fn test_resident_never_mutates() {
        for page in PageKey::ALL {
            assert!(!can_mutate(Role::Resident, page));
        }
    }

    #[test]
    fn test_mutation_implies_access() {
        for role in Role::ALL {
            for page in PageKey::ALL {
                if can_mutate(role, page) {
                    assert!(can_access(role, page), "{} mutates {} without access", role, page);
                }
            }
        }
    }

    #[test]
    fn test_inspection_is_narrower_than_page_mutation() {
        assert!(can_mutate(Role::Clerk, PageKey::Sanitation));
        assert!(!can_perform(Role::Clerk, Action::StartInspection));
        assert!(can_perform(Role::Bsi, Action::StartInspection));
        assert!(can_perform(Role::Sysadmin, Action::StartInspection));
    }

    #[test]
    fn test_captain_actions_are_read_only() {
        let allowed: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|a| can_perform(Role::Captain, *a))
            .collect();
        assert_eq!(allowed, vec![Action::ViewHealthIndex, Action::SavePreferences]);
    }

    #[test]
    fn test_action_grants_fit_target_page() {
        for action in Action::ALL {
            let Some(page) = action.target_page() else {
                continue;
            };
            for role in Role::ALL.into_iter().filter(|r| can_perform(*r, action)) {
                assert!(can_mutate(role, page), "{} may {:?} but not edit {}", role, action, page);
            }
        }
    }

    #[test]
    fn test_only_sysadmin_manages_users() {
        for role in Role::ALL {
            assert_eq!(can_perform(role, Action::ManageUsers), role == Role::Sysadmin);
        }
    }
}
