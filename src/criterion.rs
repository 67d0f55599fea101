//! Sorting criteria.
//!
//! A criterion is a proxy to a value of a brick, whether the brick holds a
//! single record or an ordered list of records. Evaluating a criterion
//! never fails: a missing property falls back to the criterion's default.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::record::{Record, RecordRef};

/// Reduction turning per-record values into one value for a list brick.
pub type Aggregator = Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>;

/// Fallback value used when a property is missing, when a list brick has
/// no aggregator, or when the record set is empty.
#[derive(Clone)]
pub enum CriterionDefault {
    /// A plain value.
    Value(Value),
    /// Computed on demand; the resolved result is used, never the closure.
    Computed(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl CriterionDefault {
    /// Resolves the default to a concrete value.
    pub fn resolve(&self) -> Value {
        match self {
            CriterionDefault::Value(value) => value.clone(),
            CriterionDefault::Computed(compute) => compute(),
        }
    }
}

impl Default for CriterionDefault {
    fn default() -> Self {
        CriterionDefault::Value(Value::Null)
    }
}

impl fmt::Debug for CriterionDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionDefault::Value(value) => write!(f, "Value({})", value),
            CriterionDefault::Computed(_) => write!(f, "Computed"),
        }
    }
}

/// A named, defaulted, optionally-aggregating value accessor used as a
/// sort key.
#[derive(Clone)]
pub struct Criterion {
    name: String,
    aggregator: Option<Aggregator>,
    default: CriterionDefault,
}

impl Criterion {
    /// Creates a criterion reading the named property, with a null default
    /// and no aggregator.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aggregator: None,
            default: CriterionDefault::default(),
        }
    }

    /// Sets the reduction applied to per-record values on list bricks.
    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = Some(aggregator);
        self
    }

    /// Sets the fallback value.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = CriterionDefault::Value(default);
        self
    }

    /// Sets a fallback computed on demand.
    pub fn with_computed_default<F>(mut self, compute: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = CriterionDefault::Computed(Arc::new(compute));
        self
    }

    /// The property name this criterion reads.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the named property on a record, or the
    /// resolved default if the record does not have it.
    pub fn value_for_single(&self, record: &dyn Record) -> Value {
        match record.get(&self.name) {
            Some(value) => value,
            None => self.default.resolve(),
        }
    }

    /// Returns a single value for a list of records, reducing the
    /// per-record values through the aggregator.
    ///
    /// Without an aggregator, or with an empty record set, the resolved
    /// default is returned instead. The aggregator is never invoked on an
    /// empty set, so reducers like `max` that reject empty input are safe.
    pub fn value_for_many(&self, records: &[RecordRef]) -> Value {
        if let Some(aggregator) = &self.aggregator {
            if !records.is_empty() {
                let values: Vec<Value> = records
                    .iter()
                    .map(|record| self.value_for_single(record.as_ref()))
                    .collect();
                return aggregator(values);
            }
        }
        self.default.resolve()
    }
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Criterion({})", self.name)
    }
}

/// Ready-made aggregators for common reductions.
pub mod aggregators {
    use std::sync::Arc;

    use serde_json::{Number, Value};

    use super::Aggregator;
    use crate::value::compare_values;

    /// Largest value under the engine ordering.
    pub fn max() -> Aggregator {
        Arc::new(|values: Vec<Value>| {
            values
                .into_iter()
                .max_by(|a, b| compare_values(a, b))
                .unwrap_or(Value::Null)
        })
    }

    /// Smallest value under the engine ordering.
    pub fn min() -> Aggregator {
        Arc::new(|values: Vec<Value>| {
            values
                .into_iter()
                .min_by(|a, b| compare_values(a, b))
                .unwrap_or(Value::Null)
        })
    }

    /// Numeric sum; non-numeric values are ignored.
    pub fn sum() -> Aggregator {
        Arc::new(|values: Vec<Value>| {
            number(values.iter().filter_map(Value::as_f64).sum())
        })
    }

    /// Numeric mean over the numeric values; null when none are numeric.
    pub fn mean() -> Aggregator {
        Arc::new(|values: Vec<Value>| {
            let numbers: Vec<f64> = values.iter().filter_map(Value::as_f64).collect();
            if numbers.is_empty() {
                return Value::Null;
            }
            number(numbers.iter().sum::<f64>() / numbers.len() as f64)
        })
    }

    fn number(n: f64) -> Value {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
