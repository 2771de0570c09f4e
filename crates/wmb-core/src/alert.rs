//! # Alert Processor
//!
//! Derives the operator-facing status message for a badge's current alert
//! fields. Used both for single-record display (`wmb show`) and for the
//! bulk sweep across the whole store (`wmb alerts`).
//!
//! Branch order is fixed and the branches are mutually exclusive:
//! an investigation in progress wins over everything, then a raised alert
//! is worded by its type, then the quiet no-alert case.

use serde::Serialize;

use crate::record::{AlertFlag, AlertType, BadgeId, BadgeRecord};

/// The derived status payload for one badge: the alert fields carried
/// back alongside the derived message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertAssessment {
    /// The badge the assessment is for.
    pub badge: BadgeId,
    /// Alert flag at assessment time.
    pub alert_present: AlertFlag,
    /// Alert type at assessment time.
    #[serde(with = "crate::record::alert_type_label")]
    pub alert_type: Option<AlertType>,
    /// Whether a service request is open for the alert.
    pub under_investigation: bool,
    /// The assigned SR code, empty if none.
    pub sr_code: String,
    /// The derived operator-facing message.
    pub message: String,
}

/// Assess a badge record's alert status.
pub fn assess(record: &BadgeRecord) -> AlertAssessment {
    let badge = &record.badge;

    let message = if record.under_investigation {
        format!(
            "Badge {badge}: Under investigation (SR Code: {}).",
            record.sr_code
        )
    } else if record.alert_present.is_raised() {
        match record.alert_type {
            Some(AlertType::Leakage) => {
                format!("Badge {badge}: Immediate action required for leakage.")
            }
            Some(AlertType::NoConsumption) => {
                format!("Badge {badge}: Investigate no consumption issue.")
            }
            Some(AlertType::HighConsumption) => {
                format!("Badge {badge}: Investigate high consumption alert.")
            }
            Some(AlertType::LowBattery) => {
                format!("Badge {badge}: Battery needs replacement.")
            }
            // Unrecognized free text and a missing type read the same to
            // the operator.
            Some(AlertType::Other(_)) | None => {
                format!("Badge {badge}: Alert present but type not recognised.")
            }
        }
    } else {
        format!("Badge {badge}: No alerts present, no action needed.")
    };

    AlertAssessment {
        badge: record.badge.clone(),
        alert_present: record.alert_present,
        alert_type: record.alert_type.clone(),
        under_investigation: record.under_investigation,
        sr_code: record.sr_code.clone(),
        message,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
