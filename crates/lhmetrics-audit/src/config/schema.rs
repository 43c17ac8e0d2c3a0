use serde::Deserialize;

use lhmetrics_core::artifacts::DEFAULT_PASS;
use lhmetrics_core::error::{AuditError, Result};

use crate::context::AuditContext;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    pub version: u32,

    #[serde(default)]
    pub audit: AuditSection,

    #[serde(default)]
    pub computed_cache: ComputedCacheSection,
}

impl AuditConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AuditError::UnsupportedVersion);
        }
        self.audit.validate()?;
        Ok(())
    }

    /// Context for one run, honoring `computed_cache.enabled`.
    pub fn context(&self, run: &str) -> AuditContext {
        let ctx = if self.computed_cache.enabled {
            AuditContext::new()
        } else {
            AuditContext::uncached()
        };
        ctx.with_run(run)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSection {
    #[serde(default = "default_pass")]
    pub default_pass: String,
}

impl Default for AuditSection {
    fn default() -> Self {
        Self {
            default_pass: default_pass(),
        }
    }
}

impl AuditSection {
    pub fn validate(&self) -> Result<()> {
        if self.default_pass.is_empty() {
            return Err(AuditError::Config("audit.default_pass must not be empty".into()));
        }
        if self.default_pass.trim() != self.default_pass {
            return Err(AuditError::Config(
                "audit.default_pass must not have surrounding whitespace".into(),
            ));
        }
        Ok(())
    }
}

fn default_pass() -> String {
    DEFAULT_PASS.into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComputedCacheSection {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
}

impl Default for ComputedCacheSection {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}
