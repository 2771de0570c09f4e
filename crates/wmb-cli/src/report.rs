//! # Report Subcommand
//!
//! Summary report over the store: record count and how many badges sit in
//! each alert lifecycle state.

use anyhow::Result;

use wmb_core::AlertState;
use wmb_store::BadgeStore;

/// Execute the report subcommand.
pub fn run_report(store: &BadgeStore) -> Result<u8> {
    let mut no_alert = 0usize;
    let mut alert_raised = 0usize;
    let mut under_investigation = 0usize;

    for record in store.records() {
        match record.alert_state() {
            AlertState::NoAlert => no_alert += 1,
            AlertState::AlertRaised => alert_raised += 1,
            AlertState::UnderInvestigation => under_investigation += 1,
        }
    }

    println!("Badge report");
    println!("  Records: {}", store.len());
    println!("  No alert: {no_alert}");
    println!("  Alert raised: {alert_raised}");
    println!("  Under investigation: {under_investigation}");
    Ok(0)
}

// ─── Tests ───────────────────────────────────────────────────────────
