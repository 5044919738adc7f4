pub mod request;
pub mod service;

pub use request::{ReportArtifact, ReportRequest, ReportStage, REPORT_HIGHLIGHTS, REPORT_STAGES};
pub use service::{MockReportService, ReportService};

use crate::usecases::common::UseCaseMetadata;

pub struct FhsisReport;

impl UseCaseMetadata for FhsisReport {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "fhsis_report"
    }

    fn display_name() -> &'static str {
        "One-Click Report Generator"
    }

    fn description() -> &'static str {
        "Generate official FHSIS report for the City Health Department"
    }
}
