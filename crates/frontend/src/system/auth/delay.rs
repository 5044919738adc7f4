use async_trait::async_trait;
use contracts::shared::delay::Delay;
use gloo_timers::future::TimeoutFuture;

/// Browser timer behind the simulated services.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
