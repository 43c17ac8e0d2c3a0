//! Built-in audits.

pub mod metrics;

pub use metrics::MetricsAudit;
