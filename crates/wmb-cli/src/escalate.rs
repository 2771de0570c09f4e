//! # Escalate and Clear Subcommands
//!
//! The two alert mutations: escalating an active alert into a service
//! request, and clearing an alert after resolution. Both persist the
//! store after a successful mutation. A badge without the required alert
//! state is a normal negative outcome — reported on stdout, exit 0.

use anyhow::{Context, Result};
use clap::Args;

use wmb_core::dispatch;
use wmb_store::BadgeStore;

/// Arguments for the `wmb escalate` subcommand.
#[derive(Args, Debug)]
pub struct EscalateArgs {
    /// Badge identifier to escalate.
    #[arg(long)]
    pub badge: String,
}

/// Arguments for the `wmb clear` subcommand.
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Badge identifier to clear.
    #[arg(long)]
    pub badge: String,
}

/// Execute the escalate subcommand: create a service request for a badge
/// whose alert flag is raised.
pub fn run_escalate(args: &EscalateArgs, store: &mut BadgeStore) -> Result<u8> {
    let Some(record) = store.find_mut(&args.badge) else {
        println!("Badge {} not found.", args.badge);
        return Ok(0);
    };

    if !record.alert_present.is_raised() {
        println!("No alerts for badge {}.", args.badge);
        return Ok(0);
    }

    println!("Alert found for badge {}.", args.badge);

    let alert_label = record
        .alert_type
        .as_ref()
        .map(|t| t.label().to_string())
        .unwrap_or_default();
    let region = record.region.clone();
    let code = dispatch(record);

    store.persist().context("failed to persist badge store")?;

    tracing::info!(badge = %args.badge, sr_code = code, "service request created");
    println!(
        "Created Service Request for Badge {} in {}: {} (SR Code: {})",
        args.badge, region, alert_label, code
    );
    Ok(0)
}

/// Execute the clear subcommand: reset a badge's alert fields.
pub fn run_clear(args: &ClearArgs, store: &mut BadgeStore) -> Result<u8> {
    let Some(record) = store.find_mut(&args.badge) else {
        println!("Badge {} not found.", args.badge);
        return Ok(0);
    };

    if !record.clear_alert() {
        println!("No active alerts for Badge {}.", args.badge);
        return Ok(0);
    }

    store.persist().context("failed to persist badge store")?;

    tracing::info!(badge = %args.badge, "alert cleared");
    println!(
        "Badge {} alert cleared (Alert present set to 'N', Alert Type cleared).",
        args.badge
    );
    Ok(0)
}

// ─── Tests ───────────────────────────────────────────────────────────
