//! Stub timing-summary providers shared by audit tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use lhmetrics_audit::{AuditContext, TimingInput, TimingSummaryProvider};
use lhmetrics_core::{Artifacts, ComputeError, DevtoolsLog, Metrics, TimingSummary, Trace};

pub fn load_artifacts(name: &str) -> Artifacts {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

pub fn trace(ts: u64) -> Trace {
    Trace {
        trace_events: vec![json!({ "name": "navigationStart", "ph": "R", "ts": ts })],
    }
}

pub fn summary(metrics: Metrics) -> TimingSummary {
    let mut debug_info = lhmetrics_core::DebugInfo::new();
    debug_info.insert("lcpInvalidated".into(), json!(false));
    TimingSummary {
        metrics,
        debug_info,
    }
}

/// Returns a fixed outcome and counts calls.
pub struct StubProvider {
    outcome: Result<TimingSummary, ComputeError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn ok(summary: TimingSummary) -> Self {
        Self {
            outcome: Ok(summary),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: ComputeError) -> Self {
        Self {
            outcome: Err(err),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TimingSummaryProvider for StubProvider {
    async fn compute(
        &self,
        _input: TimingInput<'_>,
        _ctx: &AuditContext,
    ) -> Result<TimingSummary, ComputeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}

/// Fails on the first call, succeeds afterwards.
pub struct FlakyProvider {
    summary: TimingSummary,
    calls: AtomicUsize,
}

impl FlakyProvider {
    pub fn new(summary: TimingSummary) -> Self {
        Self {
            summary,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TimingSummaryProvider for FlakyProvider {
    async fn compute(
        &self,
        _input: TimingInput<'_>,
        _ctx: &AuditContext,
    ) -> Result<TimingSummary, ComputeError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(ComputeError::Internal("transient".into()));
        }
        Ok(self.summary.clone())
    }
}

pub fn empty_log() -> DevtoolsLog {
    DevtoolsLog::default()
}
