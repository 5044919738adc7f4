use contracts::shared::cancel::CancelToken;
use contracts::shared::error::{AuthError, ServiceError};
use contracts::shared::view_model::PageAccess;
use contracts::system::access::PageKey;
use contracts::system::auth::{
    AuthClient, Identity, LoginRequest, MockAuthClient, Role, SessionState, SessionStore,
};
use leptos::prelude::*;

use super::delay::GlooDelay;
use crate::layout::global_context::use_global_context;

/// Handle to the one session store of the app.
///
/// Everything outside this module reads the session through [`Self::state`]
/// and friends; only `login`, `logout` and `switch_role` change it.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore>,
    login_ms: StoredValue<u32>,
}

impl SessionContext {
    fn new(demo_mode: bool, login_ms: u32) -> Self {
        Self {
            store: RwSignal::new(SessionStore::new(demo_mode)),
            login_ms: StoredValue::new(login_ms),
        }
    }

    pub fn state(&self) -> SessionState {
        self.store.with(|s| s.state().clone())
    }

    pub fn identity(&self) -> Option<Identity> {
        self.store.with(|s| s.identity().cloned())
    }

    pub fn role(&self) -> Option<Role> {
        self.store.with(|s| s.state().role())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(|s| s.is_authenticated())
    }

    pub fn demo_mode(&self) -> bool {
        self.store.with_untracked(|s| s.demo_mode())
    }

    /// Reactive access facts for one page.
    pub fn page_access(&self, page: PageKey) -> Memo<PageAccess> {
        let store = self.store;
        Memo::new(move |_| store.with(|s| PageAccess::for_session(s.state(), page)))
    }

    /// Run the login round-trip and apply its outcome. A rejected login
    /// leaves the session as it was.
    pub async fn login(&self, request: LoginRequest) -> Result<Identity, AuthError> {
        let client = MockAuthClient::new(GlooDelay, self.login_ms.get_value());
        let outcome = client.login(request, &CancelToken::new()).await;
        self.store
            .try_update(|s| s.complete_login(outcome))
            .unwrap_or(Err(AuthError::Service(ServiceError::Cancelled)))
    }

    pub fn logout(&self) {
        self.store.update(|s| s.logout());
    }

    pub fn switch_role(&self, role: Role) -> Result<Identity, AuthError> {
        self.store
            .try_update(|s| s.switch_role(role))
            .unwrap_or(Err(AuthError::Service(ServiceError::Cancelled)))
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let config = ctx.config();

    provide_context(SessionContext::new(config.demo_mode, config.delays.login_ms));

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
