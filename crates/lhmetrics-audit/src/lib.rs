//! lhmetrics audit library entry.
//!
//! This crate wires the audit contract, the timing-summary provider boundary,
//! the per-run computed cache, and the built-in `metrics` audit into one
//! stack. A host framework builds an `AuditContext` per run (optionally from
//! YAML config), hands each audit its artifact bundle, and collects the
//! products for report assembly.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod audit;
pub mod audits;
pub mod computed;
pub mod config;
pub mod context;

pub use audit::{ensure_required_artifacts, Audit, AuditMeta, ScoreDisplayMode};
pub use audits::MetricsAudit;
pub use computed::{ComputedCache, ComputedTimingSummary, TimingInput, TimingSummaryProvider};
pub use context::AuditContext;
