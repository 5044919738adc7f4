use std::cell::Cell;

use async_trait::async_trait;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::cancel::CancelToken;
use crate::shared::delay::{cancellable_sleep, Delay};
use crate::shared::error::ServiceError;
use crate::shared::mock::ymd;
use crate::usecases::common::UseCaseMetadata;

use super::QrLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrKind {
    Resident,
    Business,
}

impl QrKind {
    pub fn label(self) -> &'static str {
        match self {
            QrKind::Resident => "Resident",
            QrKind::Business => "Business",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: QrKind,
    pub address: String,
    #[serde(rename = "lastVisit")]
    pub last_visit: NaiveDate,
}

pub static QR_REGISTRY: Lazy<Vec<ScannedRecord>> = Lazy::new(|| {
    [
        ("RES-001", "Juan Dela Cruz", QrKind::Resident, "Zone 1, Purok 3", ymd(2025, 12, 1)),
        ("RES-002", "Maria Santos", QrKind::Resident, "Zone 2, Purok 1", ymd(2025, 11, 28)),
        ("BUS-001", "Dela Cruz Sari-Sari Store", QrKind::Business, "Zone 1, Purok 3", ymd(2025, 11, 20)),
    ]
    .into_iter()
    .map(|(id, name, kind, address, last_visit)| ScannedRecord {
        id: id.into(),
        name: name.into(),
        kind,
        address: address.into(),
        last_visit,
    })
    .collect()
});

#[async_trait(?Send)]
pub trait QrLookupService {
    /// Camera scan; `kind` narrows which codes the scanner accepts.
    async fn scan(
        &self,
        kind: Option<QrKind>,
        cancel: &CancelToken,
    ) -> Result<ScannedRecord, ServiceError>;

    /// Manual entry of a printed id, case-insensitive.
    async fn lookup(&self, id: &str, cancel: &CancelToken) -> Result<ScannedRecord, ServiceError>;
}

/// Serves [`QR_REGISTRY`], rotating through matching entries on each scan.
pub struct MockQrLookup<D> {
    delay: D,
    scan_ms: u32,
    next: Cell<usize>,
}

impl<D: Delay> MockQrLookup<D> {
    pub fn new(delay: D, scan_ms: u32) -> Self {
        Self {
            delay,
            scan_ms,
            next: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl<D: Delay> QrLookupService for MockQrLookup<D> {
    async fn scan(
        &self,
        kind: Option<QrKind>,
        cancel: &CancelToken,
    ) -> Result<ScannedRecord, ServiceError> {
        cancellable_sleep(&self.delay, self.scan_ms, cancel).await?;
        let candidates: Vec<&ScannedRecord> = QR_REGISTRY
            .iter()
            .filter(|r| kind.map_or(true, |k| r.kind == k))
            .collect();
        if candidates.is_empty() {
            return Err(ServiceError::NotFound(
                kind.map(|k| k.label().to_string()).unwrap_or_default(),
            ));
        }
        let index = self.next.get() % candidates.len();
        self.next.set(index + 1);
        let record = candidates[index].clone();
        log::info!("{}: scanned {}", QrLookup::full_name(), record.id);
        Ok(record)
    }

    async fn lookup(&self, id: &str, cancel: &CancelToken) -> Result<ScannedRecord, ServiceError> {
        cancel.check()?;
        let wanted = id.trim().to_uppercase();
        match QR_REGISTRY.iter().find(|r| r.id == wanted) {
            Some(record) => Ok(record.clone()),
            None => {
                log::warn!("{}: no record for {}", QrLookup::full_name(), wanted);
                Err(ServiceError::NotFound(id.trim().to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::delay::RecordingDelay;
    use futures::executor::block_on;

    #[test]
    fn test_scan_rotates_within_kind() {
        let delay = RecordingDelay::new();
        let lookup = MockQrLookup::new(delay.clone(), 1500);
        let cancel = CancelToken::new();

        let ids: Vec<String> = (0..3)
            .map(|_| block_on(lookup.scan(Some(QrKind::Resident), &cancel)).unwrap().id)
            .collect();
        assert_eq!(ids, ["RES-001", "RES-002", "RES-001"]);
        assert_eq!(delay.calls(), vec![1500; 3]);

        let business = block_on(lookup.scan(Some(QrKind::Business), &cancel)).unwrap();
        assert_eq!(business.id, "BUS-001");
    }

    #[test]
    fn test_manual_lookup_is_case_insensitive() {
        let lookup = MockQrLookup::new(RecordingDelay::new(), 1500);
        let record = block_on(lookup.lookup(" bus-001 ", &CancelToken::new())).unwrap();
        assert_eq!(record.name, "Dela Cruz Sari-Sari Store");
    }

    #[test]
    fn test_manual_lookup_not_found() {
        let lookup = MockQrLookup::new(RecordingDelay::new(), 1500);
        let err = block_on(lookup.lookup("RES-999", &CancelToken::new())).unwrap_err();
        assert_eq!(err, ServiceError::NotFound("RES-999".to_string()));
    }

    #[test]
    fn test_cancelled_scan() {
        let lookup = MockQrLookup::new(RecordingDelay::new(), 1500);
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(
            block_on(lookup.scan(None, &cancel)),
            Err(ServiceError::Cancelled)
        );
    }
}
