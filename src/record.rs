//! Record access capability.
//!
//! The engine never assumes a storage or query mechanism: a record is
//! anything that can answer a name-based property lookup. Properties that
//! act as methods on the underlying object are computed inside [`Record::get`],
//! so the engine always sees a plain value.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Name-based property access over an arbitrary domain object.
pub trait Record: fmt::Debug + Send + Sync {
    /// Returns the value of the named property, or `None` if the record
    /// does not have it.
    fn get(&self, name: &str) -> Option<Value>;
}

/// Shared handle to a record, allowing bricks over mixed record types.
pub type RecordRef = Arc<dyn Record>;

/// Wraps a JSON object into a record handle.
pub fn from_json(value: Value) -> RecordRef {
    Arc::new(value)
}

impl Record for Value {
    fn get(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|body| body.get(name)).cloned()
    }
}
