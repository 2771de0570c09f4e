//! # Badge Field Validation
//!
//! Maps a candidate record's raw fields to an ordered list of violations.
//! Empty list ⇒ the draft is acceptable.
//!
//! Every rule is evaluated — there is no short-circuiting — so a draft
//! can accumulate one violation per rule in a single pass, and the output
//! order always follows the fixed check sequence. The function is pure:
//! the existing-identifier snapshot and today's date are supplied by the
//! caller, which keeps the future-date rule deterministic under test.
//!
//! The store's `append` re-checks identifier uniqueness on insert; the
//! duplicate rule here is advisory against the snapshot the caller took.

use chrono::NaiveDate;
use thiserror::Error;

use crate::draft::BadgeDraft;
use crate::record::{install_date_format, BadgeId};

/// One violated field rule.
///
/// `Display` output is the exact operator-facing message text; the CLI
/// and the tests compare against it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Badge identifier is not 10 or 12 characters long.
    #[error("Itron meters consist of 10 digits and Sensus are 12.")]
    BadgeShape,

    /// Badge identifier already exists in the store snapshot.
    #[error("Badge {0} already exists.")]
    DuplicateBadge(String),

    /// Install date does not parse as `DD/MM/YYYY`.
    #[error("Invalid Install Date format.")]
    InstallDateFormat,

    /// Install date parses but lies strictly after today.
    #[error("Install Date cannot be in the future.")]
    InstallDateInFuture,

    /// Service point's textual representation is not ten characters.
    #[error("Service Point must be a valid ten-digit integer or string.")]
    ServicePointShape,

    /// DMA is not a float in [38.0, 90.0]. An integer-typed value fails
    /// this rule even when numerically in range.
    #[error("DMA must be a float between 38.0 and 90.0.")]
    DmaRange,

    /// Postcode does not start with NR, IP, or CM.
    #[error("Invalid Postcode format (must start with NR, IP, or CM).")]
    PostcodePrefix,

    /// Alert flag is neither `Y` nor `N`.
    #[error("Alert Present must be 'Y' or 'N'.")]
    AlertPresentFlag,

    /// Alert flag is `Y` but no alert type was supplied.
    #[error("Alert Type must be provided if Alert Present is 'Y'.")]
    AlertTypeMissing,
}

/// Inclusive DMA bounds.
const DMA_MIN: f64 = 38.0;
const DMA_MAX: f64 = 90.0;

/// Accepted postcode prefixes.
const POSTCODE_PREFIXES: [&str; 3] = ["NR", "IP", "CM"];

/// Validate a candidate badge draft against the field rules.
///
/// `existing` is the snapshot of identifiers already in the store;
/// `today` anchors the future-date rule (the CLI passes the current
/// local date).
pub fn validate(draft: &BadgeDraft, existing: &[BadgeId], today: NaiveDate) -> Vec<Violation> {
    let mut violations = Vec::new();

    // 1. Badge identifier shape.
    let badge_len = draft.badge.chars().count();
    if badge_len != 10 && badge_len != 12 {
        violations.push(Violation::BadgeShape);
    }

    // 2. Uniqueness against the caller's snapshot.
    if existing.iter().any(|id| id.as_str() == draft.badge) {
        violations.push(Violation::DuplicateBadge(draft.badge.clone()));
    }

    // 3. Install date: parse failure and future date are mutually
    //    exclusive outcomes of the one parse attempt.
    match NaiveDate::parse_from_str(&draft.install_date, install_date_format::FORMAT) {
        Ok(date) => {
            if date > today {
                violations.push(Violation::InstallDateInFuture);
            }
        }
        Err(_) => violations.push(Violation::InstallDateFormat),
    }

    // 4. Service point shape. Length of the textual representation only,
    //    not digit content.
    if draft.service_point.as_string().chars().count() != 10 {
        violations.push(Violation::ServicePointShape);
    }

    // 5. DMA: float-typed and in range.
    match draft.dma.as_float() {
        Some(dma) if (DMA_MIN..=DMA_MAX).contains(&dma) => {}
        _ => violations.push(Violation::DmaRange),
    }

    // 6. Postcode prefix.
    if !POSTCODE_PREFIXES
        .iter()
        .any(|prefix| draft.postcode.starts_with(prefix))
    {
        violations.push(Violation::PostcodePrefix);
    }

    // 7. Alert flag enumeration.
    if draft.alert_present != "Y" && draft.alert_present != "N" {
        violations.push(Violation::AlertPresentFlag);
    }

    // 8. Alert type required when an alert is flagged.
    if draft.alert_present == "Y" && draft.alert_type.is_empty() {
        violations.push(Violation::AlertTypeMissing);
    }

    violations
}

// ─── Tests ───────────────────────────────────────────────────────────
