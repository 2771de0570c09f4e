//! # Add Subcommand
//!
//! Collects the raw field values for a new badge, runs them through the
//! Validator, and appends the record to the store only when no violations
//! are found. The store is persisted immediately after a successful
//! append.

use anyhow::{Context, Result};
use clap::Args;

use wmb_core::{validate, BadgeDraft, BadgeRecord, DmaInput, ServicePointInput};
use wmb_store::BadgeStore;

/// Arguments for the `wmb add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Badge identifier (10 characters for Itron, 12 for Sensus).
    #[arg(long)]
    pub badge: String,

    /// Install date.
    #[arg(long, value_name = "DD/MM/YYYY")]
    pub install_date: String,

    /// Ten-character service point identifier.
    #[arg(long)]
    pub service_point: String,

    /// District metering area factor (38.0 to 90.0).
    #[arg(long)]
    pub dma: f64,

    /// Postcode (must start with NR, IP, or CM).
    #[arg(long)]
    pub postcode: String,

    /// Region name.
    #[arg(long, default_value = "")]
    pub region: String,

    /// Whether an alert is present (Y or N).
    #[arg(long, value_name = "Y|N")]
    pub alert_present: String,

    /// Alert type; leave blank if none.
    #[arg(long, default_value = "")]
    pub alert_type: String,
}

impl AddArgs {
    /// The candidate draft as the Validator sees it. The service point
    /// keeps its text form (leading zeros are significant); the DMA value
    /// arrives float-typed from argument parsing.
    fn to_draft(&self) -> BadgeDraft {
        BadgeDraft {
            badge: self.badge.clone(),
            install_date: self.install_date.clone(),
            service_point: ServicePointInput::Text(self.service_point.clone()),
            dma: DmaInput::Float(self.dma),
            postcode: self.postcode.clone(),
            region: self.region.clone(),
            alert_present: self.alert_present.clone(),
            alert_type: self.alert_type.clone(),
        }
    }
}

/// Execute the add subcommand.
///
/// Returns exit code 0 on success, 1 when validation rejects the draft.
pub fn run_add(args: &AddArgs, store: &mut BadgeStore) -> Result<u8> {
    let draft = args.to_draft();
    let today = chrono::Local::now().date_naive();

    let violations = validate(&draft, &store.badge_ids(), today);
    if !violations.is_empty() {
        println!("Validation failed for badge {}:", args.badge);
        for violation in &violations {
            println!("  FAIL: {violation}");
        }
        return Ok(1);
    }

    let record = BadgeRecord::try_from(draft).context("draft conversion after validation")?;

    store
        .append(record)
        .context("failed to append validated badge")?;
    store.persist().context("failed to persist badge store")?;

    tracing::info!(badge = %args.badge, "badge added");
    println!("OK: added badge {}", args.badge);
    Ok(0)
}

// ─── Tests ───────────────────────────────────────────────────────────
