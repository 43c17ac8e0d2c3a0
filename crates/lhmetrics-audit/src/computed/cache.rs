use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::OnceCell;

use lhmetrics_core::artifacts::{DevtoolsLog, Trace};
use lhmetrics_core::summary::TimingSummary;

use super::timing_summary::TimingInput;

/// Content hash of one trace + devtools log pair. Bucket selector only:
/// equal inputs share a key, unequal inputs may collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u64);

impl CacheKey {
    pub fn of(input: &TimingInput<'_>) -> Self {
        let mut h = DefaultHasher::new();
        h.write_usize(input.trace.trace_events.len());
        for event in &input.trace.trace_events {
            hash_value(event, &mut h);
        }
        h.write_usize(input.devtools_log.messages().len());
        for msg in input.devtools_log.messages() {
            msg.method.hash(&mut h);
            hash_value(&msg.params, &mut h);
        }
        Self(h.finish())
    }
}

/// Hash a JSON value so that `a == b` implies equal hashes.
fn hash_value<H: Hasher>(v: &Value, h: &mut H) {
    match v {
        Value::Null => h.write_u8(0),
        Value::Bool(b) => {
            h.write_u8(1);
            b.hash(h);
        }
        Value::Number(n) => {
            h.write_u8(2);
            if let Some(u) = n.as_u64() {
                h.write_u8(0);
                h.write_u64(u);
            } else if let Some(i) = n.as_i64() {
                h.write_u8(1);
                h.write_i64(i);
            } else if let Some(f) = n.as_f64() {
                h.write_u8(2);
                h.write_u64(f.to_bits());
            }
        }
        Value::String(s) => {
            h.write_u8(3);
            s.hash(h);
        }
        Value::Array(items) => {
            h.write_u8(4);
            h.write_usize(items.len());
            for item in items {
                hash_value(item, h);
            }
        }
        Value::Object(map) => {
            // serde_json::Map iterates in key order
            h.write_u8(5);
            h.write_usize(map.len());
            for (k, item) in map {
                k.hash(h);
                hash_value(item, h);
            }
        }
    }
}

type TimingCell = Arc<OnceCell<Arc<TimingSummary>>>;

/// One memoized pair. The inputs are kept so a bucket hit can be confirmed.
struct TimingEntry {
    trace: Arc<Trace>,
    devtools_log: Arc<DevtoolsLog>,
    cell: TimingCell,
}

impl TimingEntry {
    fn matches(&self, input: &TimingInput<'_>) -> bool {
        (Arc::ptr_eq(&self.trace, input.trace) || *self.trace == **input.trace)
            && (Arc::ptr_eq(&self.devtools_log, input.devtools_log)
                || *self.devtools_log == **input.devtools_log)
    }
}

/// Run-scoped memo of timing summaries:
/// - `CacheKey -> [(trace, log, OnceCell<summary>)...]`
///
/// Callers racing on one pair share the same cell, so the provider runs once.
/// Failed computations leave the cell empty.
#[derive(Default)]
pub struct ComputedCache {
    timing: DashMap<CacheKey, Vec<TimingEntry>>,
}

impl ComputedCache {
    pub fn new() -> Self {
        Self {
            timing: DashMap::new(),
        }
    }

    /// Cell for `input`, created empty on first use.
    pub fn timing_cell(&self, input: &TimingInput<'_>) -> TimingCell {
        self.timing_cell_in(CacheKey::of(input), input)
    }

    /// Entries in the bucket are compared against `input` before reuse. The
    /// map guard is released before returning so callers may await on the cell.
    fn timing_cell_in(&self, key: CacheKey, input: &TimingInput<'_>) -> TimingCell {
        let mut bucket = self.timing.entry(key).or_default();
        if let Some(entry) = bucket.iter().find(|e| e.matches(input)) {
            return Arc::clone(&entry.cell);
        }
        let cell = Arc::new(OnceCell::new());
        bucket.push(TimingEntry {
            trace: Arc::clone(input.trace),
            devtools_log: Arc::clone(input.devtools_log),
            cell: Arc::clone(&cell),
        });
        cell
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.timing
            .iter()
            .map(|b| b.value().iter().filter(|e| e.cell.initialized()).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
