use async_trait::async_trait;

use crate::shared::cancel::CancelToken;
use crate::shared::delay::{cancellable_sleep, Delay};
use crate::shared::error::AuthError;

use super::{demo_identity, Identity, LoginRequest};

/// Login port. A real deployment would put an HTTP client behind it.
#[async_trait(?Send)]
pub trait AuthClient {
    async fn login(&self, request: LoginRequest, cancel: &CancelToken)
        -> Result<Identity, AuthError>;
}

/// Simulated login: waits `latency_ms`, then signs in as the canned user of
/// the claimed role. Blank email or password is rejected.
pub struct MockAuthClient<D> {
    delay: D,
    latency_ms: u32,
}

impl<D: Delay> MockAuthClient<D> {
    pub fn new(delay: D, latency_ms: u32) -> Self {
        Self { delay, latency_ms }
    }
}

#[async_trait(?Send)]
impl<D: Delay> AuthClient for MockAuthClient<D> {
    async fn login(
        &self,
        request: LoginRequest,
        cancel: &CancelToken,
    ) -> Result<Identity, AuthError> {
        log::debug!("Mock login for {} as {}", request.email, request.role);
        cancellable_sleep(&self.delay, self.latency_ms, cancel).await?;

        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(demo_identity(request.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::delay::RecordingDelay;
    use crate::shared::error::ServiceError;
    use crate::system::auth::Role;
    use futures::executor::block_on;

    fn request(email: &str, password: &str, role: Role) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[test]
    fn test_login_waits_then_returns_canned_identity() {
        let delay = RecordingDelay::new();
        let client = MockAuthClient::new(delay.clone(), 500);

        let identity = block_on(client.login(
            request("demo@barangay.gov.ph", "demo123", Role::Bsi),
            &CancelToken::new(),
        ))
        .unwrap();

        assert_eq!(identity.name, "Pedro Reyes");
        assert_eq!(delay.calls(), vec![500]);
    }

    #[test]
    fn test_blank_credentials_are_rejected() {
        let client = MockAuthClient::new(RecordingDelay::new(), 0);
        let result = block_on(client.login(request("", "x", Role::Clerk), &CancelToken::new()));
        assert_eq!(result, Err(AuthError::InvalidCredentials));

        let result = block_on(client.login(request("a@b.c", "", Role::Clerk), &CancelToken::new()));
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_cancelled_login() {
        let client = MockAuthClient::new(RecordingDelay::new(), 500);
        let cancel = CancelToken::new();
        cancel.cancel();
        let result = block_on(client.login(request("a@b.c", "pw", Role::Bhw), &cancel));
        assert_eq!(result, Err(AuthError::Service(ServiceError::Cancelled)));
    }
}
