//! # Service Request Dispatcher
//!
//! Maps an alert type to its service-request code and marks the record
//! under investigation. Escalation is an explicit operator action — the
//! store never dispatches on its own.

use crate::record::{AlertType, BadgeRecord};

/// Code recorded when the alert type has no service-request mapping.
pub const NO_SERVICE_REQUEST: &str = "No service request";

/// The service-request code for an alert type.
///
/// The mapping is single-sourced here; adding a recognized alert type
/// forces this match to handle it.
pub fn sr_code_for(alert_type: Option<&AlertType>) -> &'static str {
    match alert_type {
        Some(AlertType::Leakage) => "LKTC",
        Some(AlertType::HighConsumption) => "HCN-LT",
        Some(AlertType::NoConsumption) => "SMIN",
        Some(AlertType::LowBattery) => "SMRP",
        Some(AlertType::Other(_)) | None => NO_SERVICE_REQUEST,
    }
}

/// Create a service request for the record's alert.
///
/// Sets `under_investigation` and writes the mapped SR code, returning
/// the code. Idempotent in effect — dispatching the same alert type
/// again yields the same code — but not side-effect-free: both fields
/// are always overwritten.
pub fn dispatch(record: &mut BadgeRecord) -> &'static str {
    let code = sr_code_for(record.alert_type.as_ref());
    record.under_investigation = true;
    record.sr_code = code.to_string();
    code
}

// ─── Tests ───────────────────────────────────────────────────────────
