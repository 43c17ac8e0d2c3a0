use async_trait::async_trait;
use serde::Serialize;

use lhmetrics_core::artifacts::{ArtifactName, Artifacts};
use lhmetrics_core::error::{AuditError, Result};
use lhmetrics_core::product::AuditProduct;

use crate::context::AuditContext;

/// How the report presents an audit's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    Numeric,
    Binary,
    /// Never pass/fail; the score is fixed.
    Informative,
}

/// Static description of an audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub score_display_mode: ScoreDisplayMode,
}

/// One report audit. Stateless between invocations.
#[async_trait]
pub trait Audit: Send + Sync {
    fn meta(&self) -> AuditMeta;

    /// Artifact collections the host must provide before `audit` runs.
    fn required_artifacts(&self) -> &'static [ArtifactName];

    async fn audit(&self, artifacts: &Artifacts, ctx: &AuditContext) -> Result<AuditProduct>;
}

/// Host-side check that every declared collection is present.
pub fn ensure_required_artifacts(audit: &dyn Audit, artifacts: &Artifacts) -> Result<()> {
    for &name in audit.required_artifacts() {
        if !artifacts.has(name) {
            tracing::warn!(audit = audit.meta().id, artifact = %name, "required artifact collection missing");
            return Err(AuditError::MissingArtifact {
                artifact: name,
                pass: None,
            });
        }
    }
    Ok(())
}
