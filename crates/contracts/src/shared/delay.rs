use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::cancel::CancelToken;
use super::error::ServiceError;

/// Timer port the simulated services wait on. The web build backs it with
/// `gloo_timers`; tests use [`RecordingDelay`].
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, ms: u32);
}

/// Sleeps for `ms`, checking the token on both sides of the wait.
pub async fn cancellable_sleep<D: Delay + ?Sized>(
    delay: &D,
    ms: u32,
    cancel: &CancelToken,
) -> Result<(), ServiceError> {
    cancel.check()?;
    delay.sleep(ms).await;
    cancel.check()
}

/// Returns immediately and remembers every requested duration.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    calls: Arc<Mutex<Vec<u32>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl Delay for RecordingDelay {
    async fn sleep(&self, ms: u32) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_cancelled_token_skips_the_wait() {
        let delay = RecordingDelay::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = block_on(cancellable_sleep(&delay, 100, &cancel));
        assert_eq!(result, Err(ServiceError::Cancelled));
        assert!(delay.calls().is_empty());
    }

    #[test]
    fn test_sleep_is_recorded() {
        let delay = RecordingDelay::new();
        block_on(cancellable_sleep(&delay, 250, &CancelToken::new())).unwrap();
        assert_eq!(delay.calls(), vec![250]);
    }
}
