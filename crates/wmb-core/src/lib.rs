//! # wmb-core — Domain Types and Rules for Water-Meter Badges
//!
//! This crate is the bedrock of the WMB Stack. It defines the badge record
//! model and the three rule engines that operate on it:
//!
//! - **Validator** (`validate.rs`): maps a candidate record's raw fields to
//!   an ordered list of violations. Pure — no store access, no clock access;
//!   the caller supplies the existing-identifier snapshot and today's date.
//!
//! - **Alert Processor** (`alert.rs`): derives the operator-facing message
//!   for a badge's current alert status.
//!
//! - **Service Request Dispatcher** (`dispatch.rs`): maps an alert type to
//!   a service-request code and marks the record under investigation.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for dynamic strings.** `AlertType` is a single enum
//!    with an `Other` fallback; message selection and SR-code mapping both
//!    match on it exhaustively. There are no scattered string comparisons.
//!
//! 2. **Candidate input is typed, not stringly.** `BadgeDraft` carries the
//!    dynamic forms a field can arrive in (`ServicePointInput`, `DmaInput`)
//!    so the type-sensitive checks are expressible and testable.
//!
//! 3. **Violations are values.** Validation never aborts; it accumulates
//!    `Violation` values whose `Display` output is the exact operator-facing
//!    message text.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wmb-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod alert;
pub mod dispatch;
pub mod draft;
pub mod record;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use alert::{assess, AlertAssessment};
pub use dispatch::{dispatch, sr_code_for, NO_SERVICE_REQUEST};
pub use draft::{BadgeDraft, DmaInput, ServicePointInput};
pub use record::{AlertFlag, AlertState, AlertType, BadgeId, BadgeRecord};
pub use validate::{validate, Violation};
