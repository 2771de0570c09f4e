//! # Candidate Badge Input
//!
//! A [`BadgeDraft`] holds the raw operator-supplied values for a new badge
//! before validation. Most fields are plain text, but two arrive in more
//! than one dynamic form and the business rules are sensitive to which:
//!
//! - the service point may be typed as text or as a number, and either
//!   form is acceptable when its textual representation is ten characters;
//! - the DMA factor must be a *float*; an integer-typed value is rejected
//!   even when it is numerically inside the valid range.
//!
//! [`ServicePointInput`] and [`DmaInput`] carry that distinction through
//! deserialization (`#[serde(untagged)]` — a JSON number lands in the
//! numeric variant, a JSON string in the text variant) so the Validator
//! can enforce it.

use serde::{Deserialize, Serialize};

use crate::record::{AlertFlag, AlertType, BadgeId, BadgeRecord};
use crate::validate::Violation;

// ─── Dynamic Field Forms ─────────────────────────────────────────────

/// A service-point identifier as supplied: numeric or text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServicePointInput {
    /// Supplied as a number (loses leading zeros).
    Number(u64),
    /// Supplied as text (preserves leading zeros).
    Text(String),
}

impl ServicePointInput {
    /// The textual representation whose length the shape rule checks,
    /// and which is stored canonically on an accepted record.
    pub fn as_string(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// A DMA factor as supplied: float or integer form.
///
/// The integer form never validates, regardless of value. The variant
/// order matters for `untagged` deserialization: a whole JSON number
/// must land in `Integer` so the type rule can see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DmaInput {
    /// Supplied as an integer. Always a violation.
    Integer(i64),
    /// Supplied as a float.
    Float(f64),
}

impl DmaInput {
    /// The float value, if the input was float-typed.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(_) => None,
        }
    }
}

// ─── Draft ───────────────────────────────────────────────────────────

/// Raw field values for a badge record candidate, as collected from the
/// operator. Validated by [`validate`](crate::validate::validate) and
/// converted into a [`BadgeRecord`] only when no violations are found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeDraft {
    /// Candidate badge identifier.
    pub badge: String,
    /// Install date text, expected as `DD/MM/YYYY`.
    pub install_date: String,
    /// Service point in whichever form it was supplied.
    pub service_point: ServicePointInput,
    /// DMA factor in whichever form it was supplied.
    pub dma: DmaInput,
    /// Postcode text.
    pub postcode: String,
    /// Free-text region name.
    pub region: String,
    /// Alert flag text, expected as `Y` or `N`.
    pub alert_present: String,
    /// Alert type label; empty when no alert is being reported.
    pub alert_type: String,
}

impl TryFrom<BadgeDraft> for BadgeRecord {
    type Error = Violation;

    /// Build the record from a draft, parsing the date and canonicalizing
    /// the dynamic fields. Fails with the matching [`Violation`] on the
    /// structurally unconvertible fields (unparseable date, integer DMA,
    /// unknown alert flag) — a draft that passed validation converts
    /// infallibly.
    fn try_from(draft: BadgeDraft) -> Result<Self, Self::Error> {
        let install_date = chrono::NaiveDate::parse_from_str(
            &draft.install_date,
            crate::record::install_date_format::FORMAT,
        )
        .map_err(|_| Violation::InstallDateFormat)?;

        let dma = draft.dma.as_float().ok_or(Violation::DmaRange)?;

        let alert_present = match draft.alert_present.as_str() {
            "Y" => AlertFlag::Y,
            "N" => AlertFlag::N,
            _ => return Err(Violation::AlertPresentFlag),
        };

        Ok(BadgeRecord {
            badge: BadgeId::new(draft.badge),
            install_date,
            service_point: draft.service_point.as_string(),
            dma,
            postcode: draft.postcode,
            region: draft.region,
            alert_present,
            alert_type: AlertType::parse(&draft.alert_type),
            under_investigation: false,
            sr_code: String::new(),
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
