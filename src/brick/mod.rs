//! Brick containers.
//!
//! A brick is a uniform wrapper around a single record or an ordered list
//! of records, so mixed record types can be compared through the same
//! criteria and handed to the same renderer.

mod builder;

pub use builder::{BrickKind, BrickSpec};

use std::collections::HashMap;

use serde_json::Value;

use crate::criterion::Criterion;
use crate::errors::{WallError, WallResult};
use crate::record::RecordRef;

/// Context key a single brick exposes its record under.
pub const OBJECT_KEY: &str = "object";

/// Context key a list brick exposes its records under.
pub const OBJECT_LIST_KEY: &str = "object_list";

/// Content handed to the rendering collaborator.
#[derive(Debug, Clone)]
pub enum ContextValue {
    Record(RecordRef),
    RecordList(Vec<RecordRef>),
}

#[derive(Debug, Clone)]
enum BrickContent {
    Single(RecordRef),
    List(Vec<RecordRef>),
}

/// Uniform wrapper around one record or an ordered list of records.
#[derive(Debug, Clone)]
pub struct Brick {
    content: BrickContent,
    template_name: Option<String>,
}

impl Brick {
    /// Brick for a single record.
    pub fn single(record: RecordRef) -> Self {
        Self {
            content: BrickContent::Single(record),
            template_name: None,
        }
    }

    /// Brick for an ordered list of records (insertion order is kept).
    pub fn list(records: Vec<RecordRef>) -> Self {
        Self {
            content: BrickContent::List(records),
            template_name: None,
        }
    }

    /// Sets the template file identifier used by the renderer.
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template_name = Some(name.into());
        self
    }

    /// The template identifier, if one was set.
    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    /// The template identifier required for rendering.
    pub fn template(&self) -> WallResult<&str> {
        self.template_name.as_deref().ok_or(WallError::MissingTemplate)
    }

    /// Returns the criterion value for this brick.
    ///
    /// A single brick reads the property off its record, a list brick
    /// reduces its records through the criterion's aggregator.
    pub fn evaluate(&self, criterion: &Criterion) -> Value {
        match &self.content {
            BrickContent::Single(record) => criterion.value_for_single(record.as_ref()),
            BrickContent::List(records) => criterion.value_for_many(records),
        }
    }

    /// The record of a single brick.
    pub fn single_record(&self) -> Option<&RecordRef> {
        match &self.content {
            BrickContent::Single(record) => Some(record),
            BrickContent::List(_) => None,
        }
    }

    /// The records of a list brick.
    pub fn record_list(&self) -> Option<&[RecordRef]> {
        match &self.content {
            BrickContent::Single(_) => None,
            BrickContent::List(records) => Some(records),
        }
    }

    /// Number of records held.
    pub fn record_count(&self) -> usize {
        match &self.content {
            BrickContent::Single(_) => 1,
            BrickContent::List(records) => records.len(),
        }
    }

    /// Returns the context to be passed on to the template: a single brick
    /// exposes its record under `"object"`, a list brick its records under
    /// `"object_list"`.
    pub fn render_context(&self) -> HashMap<&'static str, ContextValue> {
        let mut context = HashMap::new();
        match &self.content {
            BrickContent::Single(record) => {
                context.insert(OBJECT_KEY, ContextValue::Record(record.clone()));
            }
            BrickContent::List(records) => {
                context.insert(OBJECT_LIST_KEY, ContextValue::RecordList(records.clone()));
            }
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criterion::{aggregators, Criterion};
    use crate::record::from_json;
    use serde_json::json;

    #[test]
    fn test_single_brick_evaluate() {
        let brick = Brick::single(from_json(json!({"popularity": 5})));
        assert_eq!(brick.evaluate(&Criterion::new("popularity")), json!(5));
    }

    #[test]
    fn test_list_brick_evaluate() {
        let brick = Brick::list(vec![
            from_json(json!({"popularity": 20})),
            from_json(json!({"popularity": 19})),
        ]);
        let criterion = Criterion::new("popularity").with_aggregator(aggregators::max());
        assert_eq!(brick.evaluate(&criterion), json!(20));
    }

    #[test]
    fn test_list_brick_without_aggregator_evaluates_to_default() {
        let brick = Brick::list(vec![from_json(json!({"popularity": 20}))]);
        let criterion = Criterion::new("popularity").with_default(json!(0));
        assert_eq!(brick.evaluate(&criterion), json!(0));
    }

    #[test]
    fn test_single_brick_context() {
        let brick = Brick::single(from_json(json!({"name": "objectA1"})));
        let context = brick.render_context();
        assert_eq!(context.len(), 1);
        match context.get(OBJECT_KEY) {
            Some(ContextValue::Record(record)) => {
                assert_eq!(record.get("name"), Some(json!("objectA1")));
            }
            other => panic!("expected a record under 'object', got {:?}", other),
        }
    }

    #[test]
    fn test_list_brick_context() {
        let brick = Brick::list(vec![
            from_json(json!({"name": "objectC1"})),
            from_json(json!({"name": "objectC2"})),
        ]);
        let context = brick.render_context();
        assert_eq!(context.len(), 1);
        match context.get(OBJECT_LIST_KEY) {
            Some(ContextValue::RecordList(records)) => assert_eq!(records.len(), 2),
            other => panic!("expected records under 'object_list', got {:?}", other),
        }
    }

    #[test]
    fn test_template_lookup() {
        let brick =
            Brick::single(from_json(json!({}))).with_template("single_brick.html");
        assert_eq!(brick.template_name(), Some("single_brick.html"));
        assert_eq!(brick.template().unwrap(), "single_brick.html");
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let brick = Brick::single(from_json(json!({})));
        assert_eq!(brick.template_name(), None);
        assert!(matches!(brick.template(), Err(WallError::MissingTemplate)));
    }
}
