//! Multi-criteria brick comparison.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::brick::Brick;
use crate::criterion::Criterion;
use crate::value::compare_values;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Applies the direction to a comparison result.
    ///
    /// Descending flips the result sign, never the inputs, so a descending
    /// criterion still short-circuits on the first non-equal criterion.
    pub(crate) fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A criterion paired with its direction.
#[derive(Debug, Clone)]
pub struct SortKey {
    pub criterion: Criterion,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(criterion: Criterion) -> Self {
        Self {
            criterion,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(criterion: Criterion) -> Self {
        Self {
            criterion,
            direction: SortDirection::Desc,
        }
    }
}

/// Compares two bricks under the ordered criteria list: the first
/// non-equal criterion decides. All criteria equal (or an empty list)
/// compares equal, and the stable sort keeps the input order for such
/// pairs.
pub(crate) fn compare_bricks(left: &Brick, right: &Brick, criteria: &[SortKey]) -> Ordering {
    for key in criteria {
        let ordering = compare_values(
            &left.evaluate(&key.criterion),
            &right.evaluate(&key.criterion),
        );
        if ordering != Ordering::Equal {
            return key.direction.apply(ordering);
        }
    }
    Ordering::Equal
}
