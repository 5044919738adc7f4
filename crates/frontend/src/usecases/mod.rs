pub mod u501_fhsis_report;
pub mod u502_qr_lookup;
