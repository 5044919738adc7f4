use crate::shared::error::AuthError;

use super::{demo_identity, Identity, Role};

/// Whether someone is signed in, and as whom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Unauthenticated => None,
            SessionState::Authenticated(identity) => Some(identity),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|i| i.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Sole owner of the active session. Readers get `&SessionState`; only the
/// transition methods below change it.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: SessionState,
    demo_mode: bool,
}

impl SessionStore {
    pub fn new(demo_mode: bool) -> Self {
        Self {
            state: SessionState::Unauthenticated,
            demo_mode,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Applies the outcome of an `AuthClient::login` call. A failed login
    /// leaves the current state untouched.
    pub fn complete_login(
        &mut self,
        outcome: Result<Identity, AuthError>,
    ) -> Result<Identity, AuthError> {
        match outcome {
            Ok(identity) => {
                log::info!("Session started for {} ({})", identity.email, identity.role);
                self.state = SessionState::Authenticated(identity.clone());
                Ok(identity)
            }
            Err(e) => {
                log::warn!("Login rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Demo affordance: become the canned user of `role` without
    /// credentials. Refused outside demo mode.
    pub fn switch_role(&mut self, role: Role) -> Result<Identity, AuthError> {
        if !self.demo_mode {
            log::warn!("Role switch to {} refused: demo mode is off", role);
            return Err(AuthError::RoleSwitchDisabled);
        }
        log::info!("Switching demo session to role {}", role);
        let identity = demo_identity(role);
        self.state = SessionState::Authenticated(identity.clone());
        Ok(identity)
    }

    /// Ends the session. Calling it with no session is a no-op.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(identity) = &self.state {
            log::info!("Session ended for {}", identity.email);
        }
        self.state = SessionState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_unauthenticated() {
        let store = SessionStore::new(true);
        assert!(!store.is_authenticated());
        assert_eq!(store.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn test_successful_login_replaces_session() {
        let mut store = SessionStore::new(true);
        store.complete_login(Ok(demo_identity(Role::Bhw))).unwrap();
        store.complete_login(Ok(demo_identity(Role::Clerk))).unwrap();
        assert_eq!(store.state().role(), Some(Role::Clerk));
    }

    #[test]
    fn test_failed_login_keeps_state() {
        let mut store = SessionStore::new(true);
        let err = store.complete_login(Err(AuthError::InvalidCredentials));
        assert_eq!(err, Err(AuthError::InvalidCredentials));
        assert!(!store.is_authenticated());

        store.complete_login(Ok(demo_identity(Role::Bsi))).unwrap();
        let _ = store.complete_login(Err(AuthError::InvalidCredentials));
        assert_eq!(store.state().role(), Some(Role::Bsi));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut store = SessionStore::new(true);
        store.switch_role(Role::Captain).unwrap();
        store.logout();
        assert_eq!(store.state(), &SessionState::Unauthenticated);
        store.logout();
        assert_eq!(store.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn test_switch_role_requires_demo_mode() {
        let mut store = SessionStore::new(false);
        assert_eq!(store.switch_role(Role::Sysadmin), Err(AuthError::RoleSwitchDisabled));
        assert!(!store.is_authenticated());

        let mut demo = SessionStore::new(true);
        let identity = demo.switch_role(Role::Sysadmin).unwrap();
        assert_eq!(identity.name, "System Admin");
    }
}
