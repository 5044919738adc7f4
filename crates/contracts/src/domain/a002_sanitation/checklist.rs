//! Digital inspection checklist filled in on site by the sanitary inspector.

use serde::{Deserialize, Serialize};

use crate::shared::error::ValidationErrors;

/// `(label, category)` of every item, in display order.
pub const CHECKLIST_TEMPLATE: [(&str, &str); 10] = [
    ("Waste Segregation (Biodegradable/Non-biodegradable)", "Waste Management"),
    ("Proper Waste Storage Containers", "Waste Management"),
    ("Regular Waste Collection Schedule", "Waste Management"),
    ("Pest Control Measures in Place", "Pest Control"),
    ("No Visible Pest Infestation", "Pest Control"),
    ("Clean Food Preparation Areas", "Food Safety"),
    ("Proper Food Storage Temperature", "Food Safety"),
    ("Staff Health Certificates Valid", "Personnel"),
    ("Adequate Ventilation", "Facility"),
    ("Functional Handwashing Facilities", "Sanitation"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub label: String,
    pub category: String,
    /// `None` until the inspector marks the item.
    pub compliant: Option<bool>,
    pub photo: Option<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecklistSummary {
    pub compliant: usize,
    pub non_compliant: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionChecklist {
    pub business_name: String,
    pub items: Vec<ChecklistItem>,
    pub notes: String,
}

impl InspectionChecklist {
    pub fn new(business_name: impl Into<String>) -> Self {
        let items = CHECKLIST_TEMPLATE
            .iter()
            .zip(1..)
            .map(|((label, category), id)| ChecklistItem {
                id,
                label: label.to_string(),
                category: category.to_string(),
                compliant: None,
                photo: None,
                notes: String::new(),
            })
            .collect();
        Self {
            business_name: business_name.into(),
            items,
            notes: String::new(),
        }
    }

    pub fn mark(&mut self, id: u32, compliant: bool) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.compliant = Some(compliant);
        }
    }

    /// Attach evidence; the file name is supplied by the capturing widget.
    pub fn attach_photo(&mut self, id: u32, file_name: impl Into<String>) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.photo = Some(file_name.into());
        }
    }

    pub fn summary(&self) -> ChecklistSummary {
        self.items.iter().fold(ChecklistSummary::default(), |mut acc, item| {
            match item.compliant {
                Some(true) => acc.compliant += 1,
                Some(false) => acc.non_compliant += 1,
                None => acc.pending += 1,
            }
            acc
        })
    }

    /// Items grouped by category, categories in first-seen order.
    pub fn grouped(&self) -> Vec<(String, Vec<ChecklistItem>)> {
        let mut groups: Vec<(String, Vec<ChecklistItem>)> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|(category, _)| *category == item.category) {
                Some((_, items)) => items.push(item.clone()),
                None => groups.push((item.category.clone(), vec![item.clone()])),
            }
        }
        groups
    }

    /// Refused while any item is still pending.
    pub fn submit(&self) -> Result<ChecklistSummary, ValidationErrors> {
        let summary = self.summary();
        if summary.pending > 0 {
            let mut errors = ValidationErrors::new();
            errors.push(
                "checklist",
                format!("Please complete all {} remaining items", summary.pending),
            );
            return Err(errors);
        }
        log::info!(
            "Inspection of {} submitted: {} compliant, {} non-compliant",
            self.business_name,
            summary.compliant,
            summary.non_compliant
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checklist_is_all_pending() {
        let checklist = InspectionChecklist::new("Santos Carinderia");
        assert_eq!(checklist.items.len(), 10);
        assert_eq!(
            checklist.summary(),
            ChecklistSummary { compliant: 0, non_compliant: 0, pending: 10 }
        );
        let categories: Vec<_> = checklist.grouped().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            ["Waste Management", "Pest Control", "Food Safety", "Personnel", "Facility", "Sanitation"]
        );
    }

    #[test]
    fn test_submit_blocked_while_pending() {
        let mut checklist = InspectionChecklist::new("Santos Carinderia");
        for id in 1..=8 {
            checklist.mark(id, true);
        }
        checklist.mark(9, false);
        let errors = checklist.submit().unwrap_err();
        assert_eq!(
            errors.for_field("checklist"),
            Some("Please complete all 1 remaining items")
        );

        checklist.mark(10, true);
        assert_eq!(
            checklist.submit().unwrap(),
            ChecklistSummary { compliant: 9, non_compliant: 1, pending: 0 }
        );
    }

    #[test]
    fn test_remarking_and_photos() {
        let mut checklist = InspectionChecklist::new("Reyes Bakery");
        checklist.mark(4, false);
        checklist.mark(4, true);
        checklist.attach_photo(4, "photo-4.jpg");
        checklist.mark(99, true);
        assert_eq!(checklist.items[3].compliant, Some(true));
        assert_eq!(checklist.items[3].photo.as_deref(), Some("photo-4.jpg"));
        assert_eq!(checklist.summary().compliant, 1);
    }
}
