//! Audit product handed to report assembly.
//!
//! JSON shape:
//! `{"score": 1, "numericValue": 1235, "details": {"type": "debugdata", "items": [metrics, debugInfo]}}`

use serde::{Deserialize, Serialize};

use crate::metrics::{serialize_number, Metrics};
use crate::summary::DebugInfo;

/// Report detail block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Details {
    /// Diagnostic payload instead of a scored table. Consumers index `items`
    /// positionally: metrics first, debug info second.
    #[serde(rename = "debugdata")]
    DebugData { items: (Metrics, DebugInfo) },
}

impl Details {
    pub fn debug_data(metrics: Metrics, debug_info: DebugInfo) -> Self {
        Details::DebugData {
            items: (metrics, debug_info),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditProduct {
    #[serde(serialize_with = "serialize_number")]
    pub score: f64,
    #[serde(serialize_with = "serialize_number")]
    pub numeric_value: f64,
    pub details: Details,
}

impl AuditProduct {
    /// Score of an informative audit: always 1.
    pub const INFORMATIVE_SCORE: f64 = 1.0;

    pub fn informative(numeric_value: f64, details: Details) -> Self {
        Self {
            score: Self::INFORMATIVE_SCORE,
            numeric_value,
            details,
        }
    }
}
