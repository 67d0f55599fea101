//! Value ordering for the comparator.
//!
//! Criterion values are compared deterministically, with no coercion.
//! Callers are expected to keep a criterion's values mutually comparable
//! across bricks (all numeric, all temporal strings, all boolean); when
//! they are not, the type rank below decides instead of failing.
//!
//! Ordering rules:
//! - null < bool < number < string < array < object
//! - For same types, natural ordering

use std::cmp::Ordering;

use serde_json::Value;

/// Compares two criterion values for sorting.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    let a_type = type_order(a);
    let b_type = type_order(b);

    if a_type != b_type {
        return a_type.cmp(&b_type);
    }

    // Same type, compare values
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
        (Value::Number(a_n), Value::Number(b_n)) => {
            let a_f = a_n.as_f64().unwrap_or(0.0);
            let b_f = b_n.as_f64().unwrap_or(0.0);
            a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
        }
        (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
        _ => Ordering::Equal, // Arrays and objects not compared
    }
}

fn type_order(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
