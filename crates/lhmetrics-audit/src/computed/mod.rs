//! Computed artifacts: values derived from raw artifacts on demand and
//! memoized per run.
//!
//! Re-exports the provider boundary and the cache so downstream consumers can
//! depend on this module directly.

pub mod cache;
pub mod timing_summary;

pub use cache::{CacheKey, ComputedCache};
pub use timing_summary::{ComputedTimingSummary, TimingInput, TimingSummaryProvider};
