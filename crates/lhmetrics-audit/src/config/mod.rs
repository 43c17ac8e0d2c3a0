//! Audit config loader (strict parsing).

pub mod schema;

use std::fs;

use lhmetrics_core::error::{AuditError, Result};

pub use schema::{AuditConfig, AuditSection, ComputedCacheSection};

pub fn load_from_file(path: &str) -> Result<AuditConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AuditError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AuditConfig> {
    let cfg: AuditConfig = serde_yaml::from_str(s)
        .map_err(|e| AuditError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
