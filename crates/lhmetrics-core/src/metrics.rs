//! Named metric values and their report-side rounding.
//!
//! Rounding policy: nearest whole number, ties away from zero (`f64::round`).
//! 2.5 rounds to 3, -2.5 rounds to -3. NaN and infinities round to themselves.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Largest integer an f64 (and a JSON consumer) represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// One metric: a millisecond value, or a placeholder such as `null` for
/// "not determined".
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Number(f64),
    Other(Value),
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(v) => Some(*v),
            MetricValue::Other(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, MetricValue::Number(_))
    }

    /// Numbers are rounded; placeholders come back untouched.
    pub fn rounded(&self) -> MetricValue {
        match self {
            MetricValue::Number(v) => MetricValue::Number(round_metric(*v)),
            MetricValue::Other(v) => MetricValue::Other(v.clone()),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Number(v)
    }
}

impl From<Value> for MetricValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Number(n) => match n.as_f64() {
                Some(f) => MetricValue::Number(f),
                None => MetricValue::Other(Value::Number(n)),
            },
            other => MetricValue::Other(other),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Number(v) => serialize_number(v, s),
            MetricValue::Other(v) => v.serialize(s),
        }
    }
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Value::deserialize(d).map(MetricValue::from)
    }
}

/// Round a metric to the nearest whole millisecond, ties away from zero.
pub fn round_metric(v: f64) -> f64 {
    v.round()
}

/// Write whole numbers as JSON integers, everything else as floats.
/// Non-finite values come out as `null` through serde_json.
pub fn serialize_number<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
        s.serialize_i64(*v as i64)
    } else {
        s.serialize_f64(*v)
    }
}

/// Metric name -> value, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, MetricValue>);

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<MetricValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetricValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// New map with every numeric entry rounded.
    pub fn rounded(&self) -> Metrics {
        self.iter()
            .map(|(name, value)| (name.clone(), value.rounded()))
            .collect()
    }

    /// Numeric value of `name`, if present and numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(MetricValue::as_f64)
    }
}

impl FromIterator<(String, MetricValue)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (String, MetricValue)>>(iter: I) -> Self {
        Metrics(iter.into_iter().collect())
    }
}
