use async_trait::async_trait;

use crate::shared::cancel::CancelToken;
use crate::shared::delay::{cancellable_sleep, Delay};
use crate::shared::error::ServiceError;
use crate::usecases::common::UseCaseMetadata;

use super::request::{ReportArtifact, ReportRequest, ReportStage, REPORT_STAGES};
use super::FhsisReport;

#[async_trait(?Send)]
pub trait ReportService {
    /// Generates the monthly report, calling `on_progress` once per stage.
    async fn generate(
        &self,
        request: ReportRequest,
        on_progress: &mut dyn FnMut(ReportStage),
        cancel: &CancelToken,
    ) -> Result<ReportArtifact, ServiceError>;
}

/// Walks through the fixed stages with a delay before each one, then
/// waits one more tick before the report is ready.
pub struct MockReportService<D> {
    delay: D,
    stage_ms: u32,
}

impl<D: Delay> MockReportService<D> {
    pub fn new(delay: D, stage_ms: u32) -> Self {
        Self { delay, stage_ms }
    }
}

#[async_trait(?Send)]
impl<D: Delay> ReportService for MockReportService<D> {
    async fn generate(
        &self,
        request: ReportRequest,
        on_progress: &mut dyn FnMut(ReportStage),
        cancel: &CancelToken,
    ) -> Result<ReportArtifact, ServiceError> {
        log::info!("{}: generating {}", FhsisReport::full_name(), request.period_label());
        for stage in REPORT_STAGES {
            if let Err(e) = cancellable_sleep(&self.delay, self.stage_ms, cancel).await {
                log::info!("{}: cancelled before {}%", FhsisReport::full_name(), stage.progress);
                return Err(e);
            }
            log::debug!("{}: {}% {}", FhsisReport::full_name(), stage.progress, stage.message);
            on_progress(stage);
        }
        if let Err(e) = cancellable_sleep(&self.delay, self.stage_ms, cancel).await {
            log::info!("{}: cancelled before the report was ready", FhsisReport::full_name());
            return Err(e);
        }
        Ok(ReportArtifact {
            file_name: request.file_name(),
            period: request.period_label(),
            size_label: "2.4 MB".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::delay::RecordingDelay;
    use futures::executor::block_on;

    #[test]
    fn test_stages_fire_in_order_with_configured_delay() {
        let delay = RecordingDelay::new();
        let service = MockReportService::new(delay.clone(), 800);
        let mut seen = Vec::new();

        let artifact = block_on(service.generate(
            ReportRequest::new(12, 2025),
            &mut |stage| seen.push(stage.progress),
            &CancelToken::new(),
        ))
        .unwrap();

        assert_eq!(seen, vec![20, 40, 60, 80, 100]);
        assert_eq!(delay.calls(), vec![800; 6]);
        assert_eq!(artifact.file_name, "FHSIS_Report_December_2025.pdf");
    }

    #[test]
    fn test_cancellation_stops_progress() {
        let service = MockReportService::new(RecordingDelay::new(), 800);
        let cancel = CancelToken::new();
        let mut seen = Vec::new();

        let result = block_on(service.generate(
            ReportRequest::new(12, 2025),
            &mut |stage| {
                seen.push(stage.progress);
                if stage.progress == 40 {
                    cancel.cancel();
                }
            },
            &cancel,
        ));

        assert_eq!(result, Err(ServiceError::Cancelled));
        assert_eq!(seen, vec![20, 40]);
    }

    #[test]
    fn test_ready_tick_follows_final_stage() {
        let delay = RecordingDelay::new();
        let service = MockReportService::new(delay.clone(), 800);
        let cancel = CancelToken::new();

        let result = block_on(service.generate(
            ReportRequest::new(12, 2025),
            &mut |stage| {
                if stage.progress == 100 {
                    cancel.cancel();
                }
            },
            &cancel,
        ));

        assert_eq!(result, Err(ServiceError::Cancelled));
        assert_eq!(delay.calls(), vec![800; 5]);
    }
}
