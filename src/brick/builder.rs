//! Build strategies turning record batches into bricks.
//!
//! A [`BrickSpec`] is injected wherever bricks are mass-produced from a
//! record source, instead of overriding construction behaviour on the
//! bricks themselves.

use serde::{Deserialize, Serialize};

use super::Brick;
use crate::errors::{WallError, WallResult};
use crate::record::RecordRef;

/// How a record batch maps onto bricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickKind {
    /// One brick per record.
    Single,
    /// One brick wrapping the whole batch.
    List,
    /// One list brick per consecutive chunk of the given size; the last
    /// chunk may be shorter.
    Chunked(usize),
}

/// Injectable build strategy: a brick kind plus the template its bricks
/// render with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickSpec {
    kind: BrickKind,
    template_name: Option<String>,
}

impl BrickSpec {
    /// One brick per record.
    pub fn single() -> Self {
        Self {
            kind: BrickKind::Single,
            template_name: None,
        }
    }

    /// One brick wrapping the whole batch.
    pub fn list() -> Self {
        Self {
            kind: BrickKind::List,
            template_name: None,
        }
    }

    /// One list brick per chunk of `chunk_size` records.
    pub fn chunked(chunk_size: usize) -> Self {
        Self {
            kind: BrickKind::Chunked(chunk_size),
            template_name: None,
        }
    }

    /// Sets the template identifier applied to every built brick.
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template_name = Some(name.into());
        self
    }

    /// The brick kind this spec builds.
    pub fn kind(&self) -> BrickKind {
        self.kind
    }

    /// Builds the bricks for a record batch, preserving record order.
    /// No record is dropped or duplicated.
    pub fn build_from(&self, records: Vec<RecordRef>) -> WallResult<Vec<Brick>> {
        let bricks: Vec<Brick> = match self.kind {
            BrickKind::Single => records.into_iter().map(Brick::single).collect(),
            BrickKind::List => vec![Brick::list(records)],
            BrickKind::Chunked(0) => {
                return Err(WallError::InvalidArgument(
                    "chunk size must be greater than zero".into(),
                ))
            }
            BrickKind::Chunked(chunk_size) => records
                .chunks(chunk_size)
                .map(|chunk| Brick::list(chunk.to_vec()))
                .collect(),
        };

        Ok(match &self.template_name {
            Some(name) => bricks
                .into_iter()
                .map(|brick| brick.with_template(name.clone()))
                .collect(),
            None => bricks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::from_json;
    use serde_json::json;

    fn numbered_records(count: usize) -> Vec<RecordRef> {
        (0..count).map(|i| from_json(json!({"n": i}))).collect()
    }

    #[test]
    fn test_single_spec_builds_one_brick_per_record() {
        let bricks = BrickSpec::single()
            .build_from(numbered_records(4))
            .unwrap();
        assert_eq!(bricks.len(), 4);
        for (i, brick) in bricks.iter().enumerate() {
            let record = brick.single_record().unwrap();
            assert_eq!(record.get("n"), Some(json!(i)));
        }
    }

    #[test]
    fn test_list_spec_wraps_whole_batch() {
        let bricks = BrickSpec::list().build_from(numbered_records(4)).unwrap();
        assert_eq!(bricks.len(), 1);
        assert_eq!(bricks[0].record_count(), 4);
    }

    #[test]
    fn test_chunked_spec_sizes_and_order() {
        let bricks = BrickSpec::chunked(5)
            .build_from(numbered_records(12))
            .unwrap();
        // ceil(12 / 5) bricks, all but the last hold exactly 5 records
        assert_eq!(bricks.len(), 3);
        assert_eq!(bricks[0].record_count(), 5);
        assert_eq!(bricks[1].record_count(), 5);
        assert_eq!(bricks[2].record_count(), 2);

        let mut seen = Vec::new();
        for brick in &bricks {
            for record in brick.record_list().unwrap() {
                seen.push(record.get("n").unwrap());
            }
        }
        let expected: Vec<_> = (0..12).map(|i| json!(i)).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_chunked_spec_exact_multiple() {
        let bricks = BrickSpec::chunked(3)
            .build_from(numbered_records(6))
            .unwrap();
        assert_eq!(bricks.len(), 2);
        assert!(bricks.iter().all(|b| b.record_count() == 3));
    }

    #[test]
    fn test_zero_chunk_size_is_invalid() {
        let result = BrickSpec::chunked(0).build_from(numbered_records(3));
        assert!(matches!(result, Err(WallError::InvalidArgument(_))));
    }

    #[test]
    fn test_template_applied_to_every_brick() {
        let bricks = BrickSpec::single()
            .with_template("single_brick.html")
            .build_from(numbered_records(2))
            .unwrap();
        assert!(bricks
            .iter()
            .all(|b| b.template_name() == Some("single_brick.html")));
    }
}
