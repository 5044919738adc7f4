use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::error::ServiceError;

/// Cooperative cancellation flag shared between a caller and a running
/// simulated operation. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Checkpoint used between the stages of an operation.
    pub fn check(&self) -> Result<(), ServiceError> {
        if self.is_cancelled() {
            Err(ServiceError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_flag() {
        let token = CancelToken::new();
        let held_by_task = token.clone();
        assert!(held_by_task.check().is_ok());

        token.cancel();
        assert!(held_by_task.is_cancelled());
        assert_eq!(held_by_task.check(), Err(ServiceError::Cancelled));
    }
}
