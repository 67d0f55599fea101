//! Wall assembly from record batches.

use crate::brick::BrickSpec;
use crate::errors::WallResult;
use crate::record::RecordRef;
use crate::wall::{SortKey, Wall};

/// Assembles a wall from several (brick spec, record batch) pairs,
/// preserving batch order and within-batch record order.
#[derive(Debug)]
pub struct WallFactory {
    criteria: Vec<SortKey>,
    batches: Vec<(BrickSpec, Vec<RecordRef>)>,
}

impl WallFactory {
    pub fn new(criteria: Vec<SortKey>) -> Self {
        Self {
            criteria,
            batches: Vec::new(),
        }
    }

    /// Adds a record batch built with the given spec.
    pub fn add_batch(mut self, spec: BrickSpec, records: Vec<RecordRef>) -> Self {
        self.batches.push((spec, records));
        self
    }

    /// Builds the bricks batch by batch and assembles the wall.
    pub fn build(self) -> WallResult<Wall> {
        let mut bricks = Vec::new();
        for (spec, records) in self.batches {
            bricks.extend(spec.build_from(records)?);
        }
        Ok(Wall::new(bricks, self.criteria))
    }
}

/// Convenience for the common case of one brick spec shared by several
/// record batches.
pub fn wall_of(
    batches: Vec<Vec<RecordRef>>,
    spec: BrickSpec,
    criteria: Vec<SortKey>,
) -> WallResult<Wall> {
    let mut factory = WallFactory::new(criteria);
    for records in batches {
        factory = factory.add_batch(spec.clone(), records);
    }
    factory.build()
}
