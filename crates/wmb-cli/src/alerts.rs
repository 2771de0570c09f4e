//! # Display Subcommands
//!
//! Read-only views over the store: the bulk alert sweep (`alerts`), a
//! single badge's assessment and fields (`show`), and the one-line-per-
//! badge listing (`list`). None of these mutate or persist.

use anyhow::Result;
use clap::Args;

use wmb_core::assess;
use wmb_store::BadgeStore;

/// Arguments for the `wmb show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Badge identifier to show.
    #[arg(long)]
    pub badge: String,
}

/// Execute the alerts subcommand: derived message for every badge, in
/// store order.
pub fn run_alerts(store: &BadgeStore) -> Result<u8> {
    if store.is_empty() {
        println!("No badges in the store.");
        return Ok(0);
    }

    for record in store.records() {
        println!("{}", assess(record).message);
    }
    Ok(0)
}

/// Execute the show subcommand: one badge's assessment plus its fields.
pub fn run_show(args: &ShowArgs, store: &BadgeStore) -> Result<u8> {
    let Some(record) = store.find(&args.badge) else {
        println!("Badge {} not found.", args.badge);
        return Ok(0);
    };

    let assessment = assess(record);
    println!("{}", assessment.message);
    println!("  Install Date: {}", record.install_date.format("%d/%m/%Y"));
    println!("  Service Point: {}", record.service_point);
    println!("  DMA: {}", record.dma);
    println!("  Postcode: {}", record.postcode);
    println!("  Region: {}", record.region);
    println!("  Alert Present: {}", record.alert_present);
    println!(
        "  Alert Type: {}",
        record.alert_type.as_ref().map(|t| t.label()).unwrap_or("")
    );
    println!("  State: {}", record.alert_state());
    Ok(0)
}

/// Execute the list subcommand.
pub fn run_list(store: &BadgeStore) -> Result<u8> {
    if store.is_empty() {
        println!("No badges found.");
        return Ok(0);
    }

    println!("Badges ({}):", store.len());
    for record in store.records() {
        println!("  {}: {}", record.badge, record.alert_state());
    }
    Ok(0)
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wmb_core::{AlertFlag, AlertType, BadgeId, BadgeRecord};

    fn record(badge: &str) -> BadgeRecord {
        BadgeRecord {
            badge: BadgeId::new(badge),
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

    #[test]
    fn display_subcommands_succeed_on_populated_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = BadgeStore::load(dir.path().join("badges.json")).unwrap();
        store.append(record("24PA99417050")).unwrap();

        assert_eq!(run_alerts(&store).unwrap(), 0);
        assert_eq!(run_list(&store).unwrap(), 0);
        assert_eq!(
            run_show(&ShowArgs { badge: "24PA99417050".to_string() }, &store).unwrap(),
            0
        );
    }

    #[test]
    fn display_subcommands_succeed_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = BadgeStore::load(dir.path().join("badges.json")).unwrap();

        assert_eq!(run_alerts(&store).unwrap(), 0);
        assert_eq!(run_list(&store).unwrap(), 0);
        assert_eq!(
            run_show(&ShowArgs { badge: "missing".to_string() }, &store).unwrap(),
            0
        );
    }
}
