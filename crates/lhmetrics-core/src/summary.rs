//! Timing-summary value returned by the metrics provider.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metrics::Metrics;

/// Diagnostic name -> arbitrary payload. Troubleshooting only, never scored.
pub type DebugInfo = BTreeMap<String, Value>;

/// Metrics computed from one trace + devtools log pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSummary {
    pub metrics: Metrics,
    #[serde(default)]
    pub debug_info: DebugInfo,
}
