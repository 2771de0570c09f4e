//! # Badge Record Model
//!
//! The persisted representation of one installed water meter: install
//! metadata plus the current alert status. Records are created by the
//! Validator accepting a [`BadgeDraft`](crate::draft::BadgeDraft), mutated
//! in place by the Dispatcher (escalation) and by `clear_alert` (operator
//! update), and never deleted.
//!
//! ## Alert Lifecycle
//!
//! ```text
//! NO_ALERT ──(created with alert_present=Y)──▶ ALERT_RAISED
//!                                                   │
//!                                              dispatch()
//!                                                   │
//!                                                   ▼
//!                                          UNDER_INVESTIGATION
//!                                                   │
//!                                             clear_alert()
//!                                                   │
//!                                                   ▼
//!                                               NO_ALERT
//! ```
//!
//! Clearing resets all four alert fields; a cleared record is
//! indistinguishable from one that never raised an alert. The transition
//! into `UNDER_INVESTIGATION` only happens on explicit operator action,
//! never automatically.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Identifiers ─────────────────────────────────────────────────────

/// Unique identifier for a badge (a physical meter installation).
///
/// Itron meters carry 10-character identifiers, Sensus meters 12. The
/// length rule is enforced by the Validator, not by this constructor —
/// a `BadgeId` inside an accepted record always satisfies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BadgeId(pub String);

impl BadgeId {
    /// Wrap a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BadgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Alert Flag ──────────────────────────────────────────────────────

/// Whether an alert is currently flagged against the badge.
///
/// Serialized as the literal `"Y"` / `"N"` the field has always carried
/// in the meter data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertFlag {
    /// An alert is present.
    Y,
    /// No alert.
    N,
}

impl AlertFlag {
    /// The wire representation of the flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Y => "Y",
            Self::N => "N",
        }
    }

    /// Whether an alert is raised.
    pub fn is_raised(&self) -> bool {
        matches!(self, Self::Y)
    }
}

impl std::fmt::Display for AlertFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Alert Type ──────────────────────────────────────────────────────

/// The kind of condition reported against a badge.
///
/// One closed enum with an `Other` fallback for free text the field
/// devices may report but the toolchain does not recognize. Both the
/// Alert Processor's message selection and the Dispatcher's SR-code
/// mapping match on this type exhaustively, so the recognized set is
/// single-sourced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertType {
    /// Water escaping the network at or near the installation.
    Leakage,
    /// The meter has registered no flow over the reporting window.
    NoConsumption,
    /// Consumption anomalously high for the installation.
    HighConsumption,
    /// The meter's battery is near end of life.
    LowBattery,
    /// Unrecognized free-text alert type.
    Other(String),
}

impl AlertType {
    /// Parse an alert-type label. Empty input means no alert type is
    /// recorded; unrecognized non-empty input becomes [`AlertType::Other`].
    ///
    /// Matching is exact and case-sensitive — the labels are wire values
    /// from the metering head-end, not human prose.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "" => None,
            "Leakage" => Some(Self::Leakage),
            "No consumption" => Some(Self::NoConsumption),
            "High consumption" => Some(Self::HighConsumption),
            "Low battery" => Some(Self::LowBattery),
            other => Some(Self::Other(other.to_string())),
        }
    }

    /// The label as it appears on the wire and in operator output.
    pub fn label(&self) -> &str {
        match self {
            Self::Leakage => "Leakage",
            Self::NoConsumption => "No consumption",
            Self::HighConsumption => "High consumption",
            Self::LowBattery => "Low battery",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Derived Alert State ─────────────────────────────────────────────

/// The lifecycle state of a badge's alert, derived from the record's
/// alert fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertState {
    /// No alert flagged (includes records whose alert was cleared).
    NoAlert,
    /// An alert is flagged but not yet escalated.
    AlertRaised,
    /// A service request has been created for the alert.
    UnderInvestigation,
}

impl AlertState {
    /// Canonical state name for operator output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoAlert => "NO_ALERT",
            Self::AlertRaised => "ALERT_RAISED",
            Self::UnderInvestigation => "UNDER_INVESTIGATION",
        }
    }
}

impl std::fmt::Display for AlertState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Badge Record ────────────────────────────────────────────────────

/// One installed meter: install metadata plus current alert status.
///
/// Field naming is `snake_case` uniformly in both the struct and the
/// persisted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeRecord {
    /// Unique badge identifier (10 or 12 characters).
    pub badge: BadgeId,
    /// Date the meter was installed. Wire format `DD/MM/YYYY`.
    #[serde(with = "install_date_format")]
    pub install_date: NaiveDate,
    /// Ten-character identifier of the physical connection point.
    pub service_point: String,
    /// District metering area factor, in [38.0, 90.0].
    pub dma: f64,
    /// Postcode of the installation (NR/IP/CM prefix).
    pub postcode: String,
    /// Free-text region name.
    pub region: String,
    /// Whether an alert is currently flagged.
    pub alert_present: AlertFlag,
    /// The flagged condition, if an alert type is recorded.
    #[serde(with = "alert_type_label")]
    pub alert_type: Option<AlertType>,
    /// Whether a service request has been raised for the alert.
    pub under_investigation: bool,
    /// Service-request code assigned on escalation; empty until then.
    pub sr_code: String,
}

impl BadgeRecord {
    /// The derived lifecycle state of this record's alert.
    ///
    /// Investigation takes precedence over the raw alert flag, matching
    /// the Alert Processor's branch order.
    pub fn alert_state(&self) -> AlertState {
        if self.under_investigation {
            AlertState::UnderInvestigation
        } else if self.alert_present.is_raised() {
            AlertState::AlertRaised
        } else {
            AlertState::NoAlert
        }
    }

    /// Clear the record's alert: flag to `N`, type removed, investigation
    /// flag and SR code reset.
    ///
    /// Returns `true` if there was an active alert to clear. A record
    /// whose alert flag is already `N` is left untouched and reported as
    /// `false` — a normal negative outcome, not an error.
    pub fn clear_alert(&mut self) -> bool {
        if !self.alert_present.is_raised() {
            return false;
        }
        self.alert_present = AlertFlag::N;
        self.alert_type = None;
        self.under_investigation = false;
        self.sr_code = String::new();
        true
    }
}

/// Serde adapter for the `DD/MM/YYYY` install-date wire format.
pub(crate) mod install_date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    /// The wire format the meter data has always used.
    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter mapping `Option<AlertType>` to its label string, with
/// the empty string standing for "no alert type recorded".
pub(crate) mod alert_type_label {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::AlertType;

    pub fn serialize<S>(value: &Option<AlertType>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(alert_type) => serializer.serialize_str(alert_type.label()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<AlertType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(AlertType::parse(&label))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_alert() -> BadgeRecord {
        BadgeRecord {
            badge: BadgeId::new("24PA99417050"),
            install_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            service_point: "1234567890".to_string(),
            dma: 50.0,
            postcode: "CM7".to_string(),
            region: "Braintree".to_string(),
            alert_present: AlertFlag::Y,
            alert_type: Some(AlertType::Leakage),
            under_investigation: false,
            sr_code: String::new(),
        }
    }

    // ── Alert type parsing ───────────────────────────────────────────

    #[test]
    fn parse_recognized_labels() {
        assert_eq!(AlertType::parse("Leakage"), Some(AlertType::Leakage));
        assert_eq!(
            AlertType::parse("No consumption"),
            Some(AlertType::NoConsumption)
        );
        assert_eq!(
            AlertType::parse("High consumption"),
            Some(AlertType::HighConsumption)
        );
        assert_eq!(AlertType::parse("Low battery"), Some(AlertType::LowBattery));
    }

    #[test]
    fn parse_empty_is_none() {
        assert_eq!(AlertType::parse(""), None);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            AlertType::parse("leakage"),
            Some(AlertType::Other("leakage".to_string()))
        );
    }

    #[test]
    fn label_roundtrips() {
        for label in ["Leakage", "No consumption", "High consumption", "Low battery", "Sensor fault"] {
            assert_eq!(AlertType::parse(label).unwrap().label(), label);
        }
    }

    // ── Derived state ────────────────────────────────────────────────

    #[test]
    fn state_alert_raised() {
        let r = record_with_alert();
        assert_eq!(r.alert_state(), AlertState::AlertRaised);
    }

    #[test]
    fn state_investigation_takes_precedence() {
        let mut r = record_with_alert();
        r.under_investigation = true;
        r.sr_code = "LKTC".to_string();
        assert_eq!(r.alert_state(), AlertState::UnderInvestigation);
    }

    #[test]
    fn state_no_alert() {
        let mut r = record_with_alert();
        r.alert_present = AlertFlag::N;
        r.alert_type = None;
        assert_eq!(r.alert_state(), AlertState::NoAlert);
    }

    // ── Clearing ─────────────────────────────────────────────────────

    #[test]
    fn clear_resets_all_alert_fields() {
        let mut r = record_with_alert();
        r.under_investigation = true;
        r.sr_code = "LKTC".to_string();

        assert!(r.clear_alert());
        assert_eq!(r.alert_present, AlertFlag::N);
        assert_eq!(r.alert_type, None);
        assert!(!r.under_investigation);
        assert_eq!(r.sr_code, "");
        assert_eq!(r.alert_state(), AlertState::NoAlert);
    }

    #[test]
    fn clear_without_active_alert_is_a_no_op() {
        let mut r = record_with_alert();
        assert!(r.clear_alert());
        assert!(!r.clear_alert());
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn serde_roundtrip() {
        let r = record_with_alert();
        let json = serde_json::to_string(&r).unwrap();
        let parsed: BadgeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }

    #[test]
    fn install_date_wire_format() {
        let r = record_with_alert();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["install_date"], "01/05/2024");
        assert_eq!(json["alert_present"], "Y");
        assert_eq!(json["alert_type"], "Leakage");
    }

    #[test]
    fn cleared_alert_type_serializes_as_empty() {
        let mut r = record_with_alert();
        r.clear_alert();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["alert_type"], "");
        assert_eq!(json["sr_code"], "");
    }
}
