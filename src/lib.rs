//! brickwall - heterogeneous collection sorting
//!
//! Items of different underlying record types are wrapped in uniform
//! brick containers and ordered by a shared sequence of named criteria,
//! each independently ascending or descending. Single bricks hold one
//! record, list bricks hold many and are judged through an aggregator.
//! A wall is the lazily-sorted, filterable view over the bricks.

pub mod brick;
pub mod criterion;
pub mod errors;
pub mod factory;
pub mod record;
pub mod value;
pub mod wall;

pub use brick::{Brick, BrickKind, BrickSpec, ContextValue};
pub use criterion::{aggregators, Aggregator, Criterion, CriterionDefault};
pub use errors::{WallError, WallResult};
pub use factory::{wall_of, WallFactory};
pub use record::{from_json, Record, RecordRef};
pub use wall::{FilterMode, SortDirection, SortKey, Wall};
