pub mod pattern;
pub mod service;

pub use pattern::{qr_pattern, resident_qr_id, QrPattern, QR_SIZE};
pub use service::{MockQrLookup, QrKind, QrLookupService, ScannedRecord, QR_REGISTRY};

use crate::usecases::common::UseCaseMetadata;

pub struct QrLookup;

impl UseCaseMetadata for QrLookup {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "qr_lookup"
    }

    fn display_name() -> &'static str {
        "QR Code Scanner"
    }

    fn description() -> &'static str {
        "Scan a resident or business QR code, or enter the ID manually"
    }
}
