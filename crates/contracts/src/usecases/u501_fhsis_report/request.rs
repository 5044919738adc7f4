use chrono::Month;
use serde::{Deserialize, Serialize};

/// Progress checkpoint of report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportStage {
    pub progress: u8,
    pub message: &'static str,
}

/// Emitted strictly in this order.
pub const REPORT_STAGES: [ReportStage; 5] = [
    ReportStage { progress: 20, message: "Fetching consultation records..." },
    ReportStage { progress: 40, message: "Compiling vaccination data..." },
    ReportStage { progress: 60, message: "Aggregating nutrition records..." },
    ReportStage { progress: 80, message: "Calculating statistics..." },
    ReportStage { progress: 100, message: "Generating PDF..." },
];

/// Figures previewed before generation.
pub const REPORT_HIGHLIGHTS: [(&str, u32); 4] = [
    ("Total Consultations", 342),
    ("Vaccinations Administered", 156),
    ("Nutrition Assessments", 89),
    ("Maternal Care Visits", 45),
];

/// Reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub month: u32,
    pub year: i32,
}

impl ReportRequest {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// English month name; out-of-range months fall back to the number.
    pub fn month_name(&self) -> String {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| self.month.to_string())
    }

    pub fn period_label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    pub fn file_name(&self) -> String {
        format!("FHSIS_Report_{}_{}.pdf", self.month_name(), self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub file_name: String,
    pub period: String,
    pub size_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_uses_month_name() {
        let request = ReportRequest::new(12, 2025);
        assert_eq!(request.file_name(), "FHSIS_Report_December_2025.pdf");
        assert_eq!(request.period_label(), "December 2025");
    }

    #[test]
    fn test_invalid_month_falls_back_to_number() {
        assert_eq!(ReportRequest::new(13, 2025).file_name(), "FHSIS_Report_13_2025.pdf");
    }

    #[test]
    fn test_stages_are_increasing() {
        assert!(REPORT_STAGES.windows(2).all(|w| w[0].progress < w[1].progress));
        assert_eq!(REPORT_STAGES[4].progress, 100);
    }
}
