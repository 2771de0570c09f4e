//! End-to-end validation scenarios over the public API: one row per
//! field rule, driven through `validate` exactly as the CLI drives it.

use chrono::NaiveDate;
use wmb_core::{validate, BadgeDraft, BadgeId, DmaInput, ServicePointInput};

/// Reference date for the future-install rule: any fixed date after the
/// table's install dates and before its deliberately-future one.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn draft(
    badge: &str,
    install_date: &str,
    service_point: ServicePointInput,
    dma: DmaInput,
    postcode: &str,
    alert_present: &str,
    alert_type: &str,
) -> BadgeDraft {
    BadgeDraft {
        badge: badge.to_string(),
        install_date: install_date.to_string(),
        service_point,
        dma,
        postcode: postcode.to_string(),
        region: "Braintree".to_string(),
        alert_present: alert_present.to_string(),
        alert_type: alert_type.to_string(),
    }
}

/// One scenario: validate the draft against `existing` and compare the
/// rendered messages.
fn expect_messages(draft: BadgeDraft, existing: &[BadgeId], expected: &[&str]) {
    let messages: Vec<String> = validate(&draft, existing, today())
        .iter()
        .map(|v| v.to_string())
        .collect();
    assert_eq!(messages, expected, "draft: {draft:?}");
}

#[test]
fn scenario_table() {
    let sp = || ServicePointInput::Number(1234567890);

    // Fully valid row — unrecognized alert type text is still valid input.
    expect_messages(
        draft("24PA99417050", "01/05/2024", sp(), DmaInput::Float(50.0), "CM7", "Y", "Leak"),
        &[],
        &[],
    );

    // Badge shape.
    expect_messages(
        draft("24PA9", "01/05/2024", sp(), DmaInput::Float(50.0), "CM7", "Y", "Leak"),
        &[],
        &["Itron meters consist of 10 digits and Sensus are 12."],
    );

    // Duplicate badge.
    expect_messages(
        draft("24PA99417050", "01/05/2024", sp(), DmaInput::Float(50.0), "CM7", "Y", "Leak"),
        &[BadgeId::new("24PA99417050")],
        &["Badge 24PA99417050 already exists."],
    );

    // Unparseable install date.
    expect_messages(
        draft("24PA99417050", "32/13/2024", sp(), DmaInput::Float(50.0), "CM7", "Y", "Leak"),
        &[],
        &["Invalid Install Date format."],
    );

    // Future install date.
    expect_messages(
        draft("24PA99417050", "01/05/2030", sp(), DmaInput::Float(50.0), "CM7", "Y", "Leak"),
        &[],
        &["Install Date cannot be in the future."],
    );

    // Short service point.
    expect_messages(
        draft(
            "24PA99417050",
            "01/05/2024",
            ServicePointInput::Number(12345678),
            DmaInput::Float(50.0),
            "CM7",
            "Y",
            "Leak",
        ),
        &[],
        &["Service Point must be a valid ten-digit integer or string."],
    );

    // DMA out of range.
    expect_messages(
        draft("24PA99417050", "01/05/2024", sp(), DmaInput::Float(100.0), "CM7", "Y", "Leak"),
        &[],
        &["DMA must be a float between 38.0 and 90.0."],
    );

    // Postcode prefix.
    expect_messages(
        draft("24PA99417050", "01/05/2024", sp(), DmaInput::Float(50.0), "AB7", "Y", "Leak"),
        &[],
        &["Invalid Postcode format (must start with NR, IP, or CM)."],
    );

    // Alert flag enumeration.
    expect_messages(
        draft("24PA99417050", "01/05/2024", sp(), DmaInput::Float(50.0), "CM7", "X", "Leak"),
        &[],
        &["Alert Present must be 'Y' or 'N'."],
    );

    // Missing alert type.
    expect_messages(
        draft("24PA99417050", "01/05/2024", sp(), DmaInput::Float(50.0), "CM7", "Y", ""),
        &[],
        &["Alert Type must be provided if Alert Present is 'Y'."],
    );
}

#[test]
fn text_service_point_preserves_leading_zero() {
    expect_messages(
        draft(
            "24LU987654",
            "05/05/2024",
            ServicePointInput::Text("0987654321".to_string()),
            DmaInput::Float(50.0),
            "CM7",
            "N",
            "",
        ),
        &[],
        &[],
    );
}
