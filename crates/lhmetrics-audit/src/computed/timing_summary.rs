use std::sync::Arc;

use async_trait::async_trait;

use lhmetrics_core::artifacts::{DevtoolsLog, Trace};
use lhmetrics_core::error::ComputeError;
use lhmetrics_core::summary::TimingSummary;

use crate::context::AuditContext;

/// Borrowed inputs of one timing-summary computation. Shared handles so the
/// cache can keep the pair it memoized.
#[derive(Debug, Clone, Copy)]
pub struct TimingInput<'a> {
    pub trace: &'a Arc<Trace>,
    pub devtools_log: &'a Arc<DevtoolsLog>,
}

/// Metric engine boundary. Must be deterministic per input pair.
#[async_trait]
pub trait TimingSummaryProvider: Send + Sync {
    async fn compute(
        &self,
        input: TimingInput<'_>,
        ctx: &AuditContext,
    ) -> Result<TimingSummary, ComputeError>;
}

/// Timing summary requested through the run's computed cache.
pub struct ComputedTimingSummary;

impl ComputedTimingSummary {
    pub async fn request(
        provider: &dyn TimingSummaryProvider,
        input: TimingInput<'_>,
        ctx: &AuditContext,
    ) -> Result<Arc<TimingSummary>, ComputeError> {
        let Some(cache) = ctx.cache() else {
            return provider.compute(input, ctx).await.map(Arc::new);
        };

        let cell = cache.timing_cell(&input);
        if let Some(hit) = cell.get() {
            tracing::debug!(run = ctx.run(), "timing summary cache hit");
            return Ok(Arc::clone(hit));
        }

        cell.get_or_try_init(|| async {
            tracing::debug!(run = ctx.run(), "timing summary cache miss");
            provider.compute(input, ctx).await.map(Arc::new)
        })
        .await
        .cloned()
    }
}
