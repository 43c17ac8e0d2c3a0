//! `metrics` audit: surfaces every computed timing metric, rounded, with the
//! provider's debug info, for report consumers.

use std::sync::Arc;

use async_trait::async_trait;

use lhmetrics_core::artifacts::{ArtifactName, Artifacts, DEFAULT_PASS};
use lhmetrics_core::error::{AuditError, Result};
use lhmetrics_core::product::{AuditProduct, Details};

use crate::audit::{Audit, AuditMeta, ScoreDisplayMode};
use crate::computed::{ComputedTimingSummary, TimingInput, TimingSummaryProvider};
use crate::config::AuditSection;
use crate::context::AuditContext;

/// Metric reported as the headline `numericValue`.
pub const HEADLINE_METRIC: &str = "interactive";

const REQUIRED: &[ArtifactName] = &[ArtifactName::Traces, ArtifactName::DevtoolsLogs];

pub struct MetricsAudit {
    pass: String,
    provider: Arc<dyn TimingSummaryProvider>,
}

impl MetricsAudit {
    /// Audit reading the conventional default pass.
    pub fn new(provider: Arc<dyn TimingSummaryProvider>) -> Self {
        Self::with_pass(DEFAULT_PASS, provider)
    }

    pub fn with_pass(pass: impl Into<String>, provider: Arc<dyn TimingSummaryProvider>) -> Self {
        Self {
            pass: pass.into(),
            provider,
        }
    }

    pub fn from_config(cfg: &AuditSection, provider: Arc<dyn TimingSummaryProvider>) -> Self {
        Self::with_pass(cfg.default_pass.clone(), provider)
    }

    pub fn pass(&self) -> &str {
        &self.pass
    }
}

#[async_trait]
impl Audit for MetricsAudit {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: "metrics",
            title: "Metrics",
            description: "Collects all available metrics.",
            score_display_mode: ScoreDisplayMode::Informative,
        }
    }

    fn required_artifacts(&self) -> &'static [ArtifactName] {
        REQUIRED
    }

    async fn audit(&self, artifacts: &Artifacts, ctx: &AuditContext) -> Result<AuditProduct> {
        let pass = self.pass.as_str();
        tracing::debug!(run = ctx.run(), pass, "metrics audit start");

        let trace = artifacts.trace(pass).ok_or_else(|| missing(ArtifactName::Traces, pass))?;
        let devtools_log = artifacts
            .devtools_log(pass)
            .ok_or_else(|| missing(ArtifactName::DevtoolsLogs, pass))?;

        let input = TimingInput {
            trace,
            devtools_log,
        };
        let summary = ComputedTimingSummary::request(self.provider.as_ref(), input, ctx).await?;

        let metrics = summary.metrics.rounded();
        let numeric_value = metrics
            .number(HEADLINE_METRIC)
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);

        tracing::debug!(
            run = ctx.run(),
            metrics = metrics.len(),
            interactive = numeric_value,
            "metrics audit done"
        );

        let details = Details::debug_data(metrics, summary.debug_info.clone());
        Ok(AuditProduct::informative(numeric_value, details))
    }
}

fn missing(artifact: ArtifactName, pass: &str) -> AuditError {
    tracing::warn!(%artifact, pass, "metrics audit missing artifact");
    AuditError::missing(artifact, pass)
}
