//! # wmb-cli — CLI Tool for the WMB Stack
//!
//! Provides the `wmb` command-line interface for operating on a badge
//! record store. Each operator action from the dashboard workflow is a
//! named subcommand.
//!
//! ## Subcommands
//!
//! - `wmb alerts` — Derived alert message for every badge in the store.
//! - `wmb report` — Summary report: record count and lifecycle-state counts.
//! - `wmb add` — Validate and append a new badge, then persist.
//! - `wmb escalate` — Create a service request for a badge's active alert.
//! - `wmb clear` — Clear a badge's alert fields.
//! - `wmb show` — Single-badge assessment and field dump.
//! - `wmb list` — One line per badge with its lifecycle state.
//!
//! Mutating subcommands persist the whole store on success. Normal
//! negative outcomes (badge not found, no active alert) print a message
//! and exit 0; validation failures and operational errors exit 1.

pub mod alerts;
pub mod badge;
pub mod escalate;
pub mod report;
