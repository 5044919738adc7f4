//! Operation Timbang: the monthly weighing of children, scheduled per purok.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimbangStatus {
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimbangSlot {
    pub id: u32,
    pub week: String,
    pub purok: String,
    #[serde(rename = "childrenDue")]
    pub children_due: u32,
    pub status: TimbangStatus,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimbangSchedule {
    pub slots: Vec<TimbangSlot>,
}

const TBD: &str = "TBD";

impl Default for TimbangSchedule {
    fn default() -> Self {
        let rows = [
            ("Week 1", "Purok 1", 12, Some("Dec 9-10, 2025")),
            ("Week 1", "Purok 2", 8, Some("Dec 11-12, 2025")),
            ("Week 2", "Purok 3", 15, None),
            ("Week 2", "Purok 4", 10, None),
            ("Week 3", "Purok 5", 18, None),
            ("Week 3", "Purok 6", 14, None),
            ("Week 4", "Purok 7", 9, None),
        ];
        let slots = rows
            .into_iter()
            .zip(1..)
            .map(|((week, purok, children_due, date), id)| TimbangSlot {
                id,
                week: week.to_string(),
                purok: purok.to_string(),
                children_due,
                status: if date.is_some() {
                    TimbangStatus::Confirmed
                } else {
                    TimbangStatus::Pending
                },
                date: date.map(str::to_string),
            })
            .collect();
        Self { slots }
    }
}

impl TimbangSchedule {
    pub fn total_children(&self) -> u32 {
        self.slots.iter().map(|s| s.children_due).sum()
    }

    pub fn confirmed_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.status == TimbangStatus::Confirmed)
            .count()
    }

    /// Confirms one slot; its date is set later by the health center.
    pub fn confirm(&mut self, id: u32) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) {
            slot.status = TimbangStatus::Confirmed;
            slot.date = Some(TBD.to_string());
        }
    }

    /// Confirms every slot, keeping dates already set.
    pub fn confirm_all(&mut self) {
        for slot in &mut self.slots {
            slot.status = TimbangStatus::Confirmed;
            if slot.date.is_none() {
                slot.date = Some(TBD.to_string());
            }
        }
    }

    pub fn by_week(&self) -> Vec<(String, Vec<TimbangSlot>)> {
        let mut weeks: Vec<(String, Vec<TimbangSlot>)> = Vec::new();
        for slot in &self.slots {
            match weeks.iter_mut().find(|(week, _)| *week == slot.week) {
                Some((_, slots)) => slots.push(slot.clone()),
                None => weeks.push((slot.week.clone(), vec![slot.clone()])),
            }
        }
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_totals() {
        let schedule = TimbangSchedule::default();
        assert_eq!(schedule.total_children(), 86);
        assert_eq!(schedule.confirmed_count(), 2);
        assert_eq!(schedule.by_week().len(), 4);
    }

    #[test]
    fn test_confirm_one_then_all() {
        let mut schedule = TimbangSchedule::default();
        schedule.confirm(3);
        assert_eq!(schedule.slots[2].date.as_deref(), Some("TBD"));
        assert_eq!(schedule.confirmed_count(), 3);

        schedule.confirm_all();
        assert_eq!(schedule.confirmed_count(), 7);
        assert_eq!(schedule.slots[0].date.as_deref(), Some("Dec 9-10, 2025"));
    }
}
