use crate::system::access::{can_access, PageKey};
use crate::system::auth::SessionState;

use super::{AppRoute, LOGIN_PATH};

/// What the router should do for a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render(AppRoute),
    Redirect(&'static str),
    /// Authenticated, but the role lacks the page. Rendered in place.
    AccessRestricted(PageKey),
    NotFound,
}

/// Decide a known route for the current session.
pub fn resolve(session: &SessionState, route: AppRoute) -> GuardOutcome {
    let outcome = match (session.role(), route) {
        (None, AppRoute::Login) => GuardOutcome::Render(route),
        (None, AppRoute::Root | AppRoute::Page(_)) => GuardOutcome::Redirect(LOGIN_PATH),
        (Some(role), AppRoute::Login | AppRoute::Root) => GuardOutcome::Redirect(role.landing_path()),
        (Some(role), AppRoute::Page(page)) => {
            if can_access(role, page) {
                GuardOutcome::Render(route)
            } else {
                log::warn!("Access restricted: {} requested {}", role, page);
                GuardOutcome::AccessRestricted(page)
            }
        }
    };
    log::debug!("Route {} resolved to {:?}", route.path(), outcome);
    outcome
}

/// Like [`resolve`], for a raw path; unknown paths are `NotFound`.
pub fn resolve_path(session: &SessionState, path: &str) -> GuardOutcome {
    match AppRoute::from_path(path) {
        Some(route) => resolve(session, route),
        None => GuardOutcome::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::{demo_identity, Role};

    fn signed_in(role: Role) -> SessionState {
        SessionState::Authenticated(demo_identity(role))
    }

    #[test]
    fn test_unauthenticated_is_sent_to_login() {
        let anon = SessionState::Unauthenticated;
        assert_eq!(resolve_path(&anon, "/resident/health"), GuardOutcome::Redirect("/login"));
        assert_eq!(resolve_path(&anon, "/dashboard"), GuardOutcome::Redirect("/login"));
        assert_eq!(resolve_path(&anon, "/"), GuardOutcome::Redirect("/login"));
        assert_eq!(resolve_path(&anon, "/login"), GuardOutcome::Render(AppRoute::Login));
    }

    #[test]
    fn test_authenticated_login_goes_to_landing() {
        assert_eq!(
            resolve_path(&signed_in(Role::Resident), "/login"),
            GuardOutcome::Redirect("/resident")
        );
        assert_eq!(
            resolve_path(&signed_in(Role::Captain), "/login"),
            GuardOutcome::Redirect("/dashboard")
        );
        assert_eq!(
            resolve_path(&signed_in(Role::Bhw), "/"),
            GuardOutcome::Redirect("/dashboard")
        );
    }

    #[test]
    fn test_users_page_is_restricted_for_non_admins() {
        for role in Role::ALL.into_iter().filter(|r| *r != Role::Sysadmin) {
            assert_eq!(
                resolve_path(&signed_in(role), "/users"),
                GuardOutcome::AccessRestricted(PageKey::Users)
            );
        }
        assert_eq!(
            resolve_path(&signed_in(Role::Sysadmin), "/users"),
            GuardOutcome::Render(AppRoute::Page(PageKey::Users))
        );
    }

    #[test]
    fn test_resident_and_staff_areas_are_separate() {
        assert_eq!(
            resolve_path(&signed_in(Role::Resident), "/dashboard"),
            GuardOutcome::AccessRestricted(PageKey::Dashboard)
        );
        assert_eq!(
            resolve_path(&signed_in(Role::Clerk), "/resident/permits"),
            GuardOutcome::AccessRestricted(PageKey::ResidentPermits)
        );
    }

    #[test]
    fn test_surveillance_visibility() {
        for role in [Role::Bhw, Role::Bsi] {
            assert_eq!(
                resolve_path(&signed_in(role), "/surveillance"),
                GuardOutcome::AccessRestricted(PageKey::Surveillance)
            );
        }
        for role in [Role::Clerk, Role::Captain, Role::Sysadmin] {
            assert_eq!(
                resolve_path(&signed_in(role), "/surveillance"),
                GuardOutcome::Render(AppRoute::Page(PageKey::Surveillance))
            );
        }
    }

    #[test]
    fn test_unknown_path_is_not_found_for_everyone() {
        assert_eq!(resolve_path(&SessionState::Unauthenticated, "/nope"), GuardOutcome::NotFound);
        assert_eq!(resolve_path(&signed_in(Role::Sysadmin), "/nope"), GuardOutcome::NotFound);
    }
}
