use serde::{Deserialize, Serialize};

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Info,
    Pending,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Success => "status-badge status-success",
            StatusTone::Warning => "status-badge status-warning",
            StatusTone::Danger => "status-badge status-danger",
            StatusTone::Info => "status-badge status-info",
            StatusTone::Pending => "status-badge status-pending",
        }
    }

    /// Tone for the status labels used across the record tables.
    pub fn for_label(label: &str) -> StatusTone {
        match label {
            "Active" | "Approved" | "Passed" | "Completed" | "Normal" | "Healthy" | "In Stock"
            | "Resolved" | "Confirmed" | "Low" | "Stable" => StatusTone::Success,
            "Follow-up" | "Low Stock" | "Due Soon" | "Underweight" | "Under Monitoring"
            | "In Progress" | "Medium" | "Moderate" | "Rising" | "High" => StatusTone::Warning,
            "Critical" | "Out of Stock" | "Failed" | "Open" | "Inactive" => StatusTone::Danger,
            "Scheduled" | "Upcoming" => StatusTone::Info,
            _ => StatusTone::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(StatusTone::for_label("Approved"), StatusTone::Success);
        assert_eq!(StatusTone::for_label("Low Stock"), StatusTone::Warning);
        assert_eq!(StatusTone::for_label("Failed"), StatusTone::Danger);
        assert_eq!(StatusTone::for_label("Scheduled"), StatusTone::Info);
    }

    #[test]
    fn test_unknown_label_is_pending() {
        assert_eq!(StatusTone::for_label("Pending Inspection"), StatusTone::Pending);
        assert_eq!(StatusTone::for_label("Under Review").css_class(), "status-badge status-pending");
    }
}
