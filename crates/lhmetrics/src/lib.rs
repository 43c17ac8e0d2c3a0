//! Top-level facade crate for lhmetrics.
//!
//! Re-exports the core data model and the audit library so users can depend on a single crate.

pub mod core {
    pub use lhmetrics_core::*;
}

pub mod audit {
    pub use lhmetrics_audit::*;
}
