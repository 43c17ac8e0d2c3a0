//! Captured page-load artifacts, grouped by pass.
//!
//! Trace events and protocol params are kept as raw JSON values: the audit
//! never looks inside them, only the timing-summary provider does.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conventional name of the pass whose artifacts audits read by default.
pub const DEFAULT_PASS: &str = "defaultPass";

/// Artifact collections an audit can declare as required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactName {
    Traces,
    DevtoolsLogs,
}

impl ArtifactName {
    /// Name of the collection in a saved artifact bundle.
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactName::Traces => "traces",
            ArtifactName::DevtoolsLogs => "devtoolsLogs",
        }
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browser trace for one page load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    pub trace_events: Vec<Value>,
}

/// One protocol message (`Network.requestWillBeSent`, `Page.frameNavigated`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolMessage {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// Ordered protocol messages for one page load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DevtoolsLog(pub Vec<ProtocolMessage>);

impl DevtoolsLog {
    pub fn messages(&self) -> &[ProtocolMessage] {
        &self.0
    }
}

/// Artifacts captured for one page, keyed by pass id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifacts {
    #[serde(default)]
    pub traces: HashMap<String, Arc<Trace>>,
    #[serde(default)]
    pub devtools_logs: HashMap<String, Arc<DevtoolsLog>>,
}

impl Artifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add both artifacts of one pass.
    pub fn with_pass(mut self, pass: impl Into<String>, trace: Trace, log: DevtoolsLog) -> Self {
        let pass = pass.into();
        self.traces.insert(pass.clone(), Arc::new(trace));
        self.devtools_logs.insert(pass, Arc::new(log));
        self
    }

    pub fn trace(&self, pass: &str) -> Option<&Arc<Trace>> {
        self.traces.get(pass)
    }

    pub fn devtools_log(&self, pass: &str) -> Option<&Arc<DevtoolsLog>> {
        self.devtools_logs.get(pass)
    }

    /// Whether the named collection holds at least one pass.
    pub fn has(&self, name: ArtifactName) -> bool {
        match name {
            ArtifactName::Traces => !self.traces.is_empty(),
            ArtifactName::DevtoolsLogs => !self.devtools_logs.is_empty(),
        }
    }
}
