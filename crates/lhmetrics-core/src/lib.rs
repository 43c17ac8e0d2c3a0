//! lhmetrics core: artifact, timing-summary, and audit-product data model.
//!
//! This crate defines the values exchanged between the metrics audit, the
//! external timing-summary provider, and the report stage, together with the
//! shared error surface. It carries no runtime dependencies so the same types
//! can be used by providers, hosts, and tooling alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `AuditError`/`ComputeError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod artifacts;
pub mod error;
pub mod metrics;
pub mod product;
pub mod summary;

/// Shared result type.
pub use error::{AuditError, ComputeError, Result};

pub use artifacts::{ArtifactName, Artifacts, DevtoolsLog, ProtocolMessage, Trace, DEFAULT_PASS};
pub use metrics::{round_metric, MetricValue, Metrics};
pub use product::{AuditProduct, Details};
pub use summary::{DebugInfo, TimingSummary};
