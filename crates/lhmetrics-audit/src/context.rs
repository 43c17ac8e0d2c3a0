//! Per-run execution context handed to audits and forwarded to providers.

use std::sync::Arc;

use crate::computed::ComputedCache;

/// Cheap to clone; clones share the computed cache.
#[derive(Clone)]
pub struct AuditContext {
    run: Arc<str>,
    cache: Option<Arc<ComputedCache>>,
}

impl AuditContext {
    /// Fresh context with its own computed cache.
    pub fn new() -> Self {
        Self {
            run: Arc::from("run"),
            cache: Some(Arc::new(ComputedCache::new())),
        }
    }

    /// Context without memoization: every request reaches the provider.
    pub fn uncached() -> Self {
        Self {
            run: Arc::from("run"),
            cache: None,
        }
    }

    /// Label used in log fields.
    pub fn with_run(mut self, run: impl Into<Arc<str>>) -> Self {
        self.run = run.into();
        self
    }

    pub fn run(&self) -> &str {
        &self.run
    }

    pub fn cache(&self) -> Option<&ComputedCache> {
        self.cache.as_deref()
    }
}

impl Default for AuditContext {
    fn default() -> Self {
        Self::new()
    }
}
