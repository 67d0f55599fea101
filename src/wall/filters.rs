//! Predicate filtering over the sorted view.
//!
//! Filtering never re-sorts: predicates run against an already sorted
//! sequence and survivors keep that order.

use serde::{Deserialize, Serialize};

use crate::brick::Brick;

/// How multiple predicates combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Keep a brick iff every predicate accepts it.
    #[default]
    And,
    /// Keep a brick iff at least one predicate accepts it.
    Or,
}

/// Applies the predicates over a sorted sequence, preserving its order.
pub(crate) fn apply(
    sorted: &[Brick],
    predicates: &[&dyn Fn(&Brick) -> bool],
    mode: FilterMode,
) -> Vec<Brick> {
    let keep = |brick: &Brick| match mode {
        FilterMode::And => predicates.iter().all(|predicate| predicate(brick)),
        FilterMode::Or => predicates.iter().any(|predicate| predicate(brick)),
    };
    sorted
        .iter()
        .filter(|brick| keep(brick))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::from_json;
    use serde_json::json;

    fn bricks() -> Vec<Brick> {
        (0..4)
            .map(|i| Brick::single(from_json(json!({"n": i}))))
            .collect()
    }

    fn value_of(brick: &Brick) -> i64 {
        brick
            .single_record()
            .and_then(|record| record.get("n"))
            .and_then(|value| value.as_i64())
            .unwrap_or(-1)
    }

    #[test]
    fn test_and_requires_every_predicate() {
        let even = |brick: &Brick| value_of(brick) % 2 == 0;
        let positive = |brick: &Brick| value_of(brick) > 0;
        let kept = apply(&bricks(), &[&even, &positive], FilterMode::And);
        assert_eq!(kept.len(), 1);
        assert_eq!(value_of(&kept[0]), 2);
    }

    #[test]
    fn test_or_requires_any_predicate() {
        let even = |brick: &Brick| value_of(brick) % 2 == 0;
        let three = |brick: &Brick| value_of(brick) == 3;
        let kept = apply(&bricks(), &[&even, &three], FilterMode::Or);
        let values: Vec<i64> = kept.iter().map(value_of).collect();
        assert_eq!(values, vec![0, 2, 3]);
    }

    #[test]
    fn test_order_is_preserved() {
        let odd = |brick: &Brick| value_of(brick) % 2 == 1;
        let kept = apply(&bricks(), &[&odd], FilterMode::And);
        let values: Vec<i64> = kept.iter().map(value_of).collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_no_predicates() {
        // And over nothing keeps everything, Or over nothing keeps nothing
        assert_eq!(apply(&bricks(), &[], FilterMode::And).len(), 4);
        assert_eq!(apply(&bricks(), &[], FilterMode::Or).len(), 0);
    }
}
