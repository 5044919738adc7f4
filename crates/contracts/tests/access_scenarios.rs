//! End-to-end walks through login, navigation and page rendering decisions.

use contracts::shared::cancel::CancelToken;
use contracts::shared::delay::RecordingDelay;
use contracts::shared::error::AuthError;
use contracts::shared::view_model::PageAccess;
use contracts::system::access::{allowed_nav, compose_nav, Action, PageKey};
use contracts::system::auth::{AuthClient, LoginRequest, MockAuthClient, Role, SessionStore};
use contracts::system::routing::{resolve_path, AppRoute, GuardOutcome};
use futures::executor::block_on;

fn login(store: &mut SessionStore, email: &str, password: &str, role: Role) -> Result<(), AuthError> {
    let client = MockAuthClient::new(RecordingDelay::new(), 500);
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        role,
    };
    let outcome = block_on(client.login(request, &CancelToken::new()));
    store.complete_login(outcome).map(|_| ())
}

#[test]
fn bhw_can_add_patients_but_captain_only_views() {
    let mut store = SessionStore::new(true);
    login(&mut store, "maria.santos@barangay.gov.ph", "password", Role::Bhw).unwrap();

    assert_eq!(
        resolve_path(store.state(), "/login"),
        GuardOutcome::Redirect("/dashboard")
    );
    let nav: Vec<_> = compose_nav(store.state()).iter().map(|e| e.page).collect();
    assert!(nav.contains(&PageKey::HealthCenter));
    assert_eq!(
        resolve_path(store.state(), "/health-center"),
        GuardOutcome::Render(AppRoute::Page(PageKey::HealthCenter))
    );
    let page = PageAccess::for_session(store.state(), PageKey::HealthCenter);
    assert!(page.can_mutate);
    assert!(page.allows(Action::CreatePatient));
    assert!(!page.description("Manage patient records").contains("View Only"));

    store.switch_role(Role::Captain).unwrap();
    assert_eq!(
        resolve_path(store.state(), "/health-center"),
        GuardOutcome::Render(AppRoute::Page(PageKey::HealthCenter))
    );
    let page = PageAccess::for_session(store.state(), PageKey::HealthCenter);
    assert!(!page.can_mutate);
    assert!(!page.allows(Action::CreatePatient));
    assert!(page.description("Manage patient records").ends_with("(View Only Mode)"));
}

#[test]
fn signed_out_visitor_is_sent_to_login_and_back_to_landing() {
    let mut store = SessionStore::new(true);
    assert_eq!(
        resolve_path(store.state(), "/resident/health"),
        GuardOutcome::Redirect("/login")
    );

    login(&mut store, "juan.delacruz@email.com", "password", Role::Resident).unwrap();
    assert_eq!(
        resolve_path(store.state(), "/login"),
        GuardOutcome::Redirect("/resident")
    );
    assert_eq!(
        resolve_path(store.state(), "/resident/health"),
        GuardOutcome::Render(AppRoute::Page(PageKey::ResidentHealth))
    );
}

#[test]
fn failed_login_keeps_session_signed_out() {
    let mut store = SessionStore::new(true);
    let err = login(&mut store, "", "password", Role::Sysadmin).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(!store.is_authenticated());
    assert!(compose_nav(store.state()).is_empty());
}

#[test]
fn logout_twice_is_harmless() {
    let mut store = SessionStore::new(true);
    login(&mut store, "admin@barangay.gov.ph", "password", Role::Sysadmin).unwrap();
    store.logout();
    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(resolve_path(store.state(), "/users"), GuardOutcome::Redirect("/login"));
}

#[test]
fn every_menu_entry_resolves_to_a_rendered_page() {
    for role in Role::ALL {
        let mut store = SessionStore::new(true);
        store.switch_role(role).unwrap();
        for entry in allowed_nav(role) {
            assert_eq!(
                resolve_path(store.state(), entry.path()),
                GuardOutcome::Render(AppRoute::Page(entry.page)),
                "{role} menu entry {}",
                entry.label
            );
        }
    }
}

#[test]
fn role_switch_is_refused_outside_demo_mode() {
    let mut store = SessionStore::new(false);
    login(&mut store, "ana.garcia@barangay.gov.ph", "password", Role::Clerk).unwrap();
    assert_eq!(store.switch_role(Role::Sysadmin), Err(AuthError::RoleSwitchDisabled));
    assert_eq!(store.identity().map(|i| i.role), Some(Role::Clerk));
}

#[test]
fn health_worker_controls_stay_on_their_own_pages() {
    let mut store = SessionStore::new(true);
    login(&mut store, "maria.santos@barangay.gov.ph", "password", Role::Bhw).unwrap();

    for page in [PageKey::Dashboard, PageKey::Settings] {
        let access = PageAccess::for_session(store.state(), page);
        assert!(!access.can_mutate);
        for action in Action::ALL.into_iter().filter(|a| a.is_mutation()) {
            assert!(!access.allows(action), "{:?} offered on {}", action, page);
        }
    }
    let settings = PageAccess::for_session(store.state(), PageKey::Settings);
    assert!(settings.allows(Action::SavePreferences));

    let immunization = PageAccess::for_session(store.state(), PageKey::Immunization);
    assert!(immunization.allows(Action::RecordVaccination));
    assert!(immunization.allows(Action::GenerateReport));
}
