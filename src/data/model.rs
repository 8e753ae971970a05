use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DiscreteValue – one level of a discrete filter dimension
// ---------------------------------------------------------------------------

/// A numeric parameter value used as a filter level (C-rate, temperature).
///
/// `f64` is not `Ord`, so levels are wrapped and compared with
/// [`f64::total_cmp`] to live in a `BTreeSet`.  `-0.0` is folded into `0.0`
/// on construction so that equality follows the numeric value.
#[derive(Debug, Clone, Copy)]
pub struct DiscreteValue(f64);

impl DiscreteValue {
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            DiscreteValue(0.0)
        } else {
            DiscreteValue(value)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for DiscreteValue {
    fn from(value: f64) -> Self {
        DiscreteValue::new(value)
    }
}

impl PartialEq for DiscreteValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DiscreteValue {}

impl PartialOrd for DiscreteValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DiscreteValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for DiscreteValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for DiscreteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{}` on f64 already prints `1` for 1.0 and `0.5` for 0.5
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Value – one entry of a record namespace
// ---------------------------------------------------------------------------

/// A named value of a record: a single number or a series of samples.
///
/// Any namespace may hold either shape; a metric stored as a list or an
/// output stored as a bare number still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl Value {
    /// Samples of the value.  A scalar is a one-element series; this is the
    /// only place that coercion happens.
    pub fn values(&self) -> &[f64] {
        match self {
            Value::Scalar(v) => std::slice::from_ref(v),
            Value::Sequence(vs) => vs,
        }
    }

    /// The number, if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Sequence(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::Sequence(values)
    }
}

// ---------------------------------------------------------------------------
// Record – one simulation result
// ---------------------------------------------------------------------------

/// A single simulation result as stored in `results.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Input parameters, normally scalars.
    #[serde(default)]
    pub parameters: BTreeMap<String, Value>,
    /// Time series produced by the simulation, normally sequences.
    #[serde(default)]
    pub outputs: BTreeMap<String, Value>,
    /// Summary metrics, normally scalars.
    #[serde(default)]
    pub metrics: BTreeMap<String, Value>,
}

impl Record {
    /// The record's level for a discrete dimension.  A missing key or a
    /// sequence gives `None`.
    pub fn discrete(&self, key: &str) -> Option<DiscreteValue> {
        self.parameters
            .get(key)
            .and_then(Value::as_scalar)
            .map(DiscreteValue::new)
    }

    /// A scalar metric, e.g. for a table cell.
    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).and_then(Value::as_scalar)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded result set
// ---------------------------------------------------------------------------

/// All records of a results file, in file order.  Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DiscreteDims – which parameters act as filter dimensions
// ---------------------------------------------------------------------------

/// Parameter keys of the two discrete filter dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteDims {
    pub c_rate: String,
    pub temperature: String,
}

impl Default for DiscreteDims {
    fn default() -> Self {
        Self {
            c_rate: "C-rate".to_string(),
            temperature: "Temperature [°C]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn discrete_values_dedupe_by_value() {
        let set: BTreeSet<DiscreteValue> = [1.0, 0.5, 1.0, -0.0, 0.0]
            .into_iter()
            .map(DiscreteValue::new)
            .collect();
        let values: Vec<f64> = set.into_iter().map(DiscreteValue::get).collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn discrete_value_display_is_compact() {
        assert_eq!(DiscreteValue::new(25.0).to_string(), "25");
        assert_eq!(DiscreteValue::new(0.5).to_string(), "0.5");
    }

    #[test]
    fn record_namespaces_default_to_empty() {
        let rec: Record = serde_json::from_str(r#"{"parameters": {"C-rate": 1}}"#).unwrap();
        assert!(rec.outputs.is_empty());
        assert!(rec.metrics.is_empty());
        assert_eq!(rec.discrete("C-rate"), Some(DiscreteValue::new(1.0)));
        assert_eq!(rec.discrete("Temperature [°C]"), None);
    }

    #[test]
    fn namespaces_accept_either_shape() {
        let rec: Record = serde_json::from_str(
            r#"{
                "parameters": {"C-rate": [1, 2], "Temperature [°C]": 25},
                "outputs": {"V": 2.8, "t": [0, 1]},
                "metrics": {"cap": [1.0], "E": 7.5}
            }"#,
        )
        .unwrap();
        assert_eq!(rec.outputs["V"], Value::Scalar(2.8));
        assert_eq!(rec.outputs["V"].values(), &[2.8]);
        assert_eq!(rec.outputs["t"].values(), &[0.0, 1.0]);
        assert_eq!(rec.metric("E"), Some(7.5));
        assert_eq!(rec.metric("cap"), None);
        // A sequence is never a filter level.
        assert_eq!(rec.discrete("C-rate"), None);
        assert_eq!(rec.discrete("Temperature [°C]"), Some(DiscreteValue::new(25.0)));
    }
}
