//! Line-level parsing for map files.

use roadnet_core::{EdgeId, Road, Weight};
use thiserror::Error;

/// Why a road line was left out of the map.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SkipReason {
    /// The line does not hold exactly four tab-separated fields.
    #[error("expected 4 tab-separated fields, found {found}")]
    FieldCount {
        /// Number of fields present.
        found: usize,
    },
    /// The weight is not a non-negative integer.
    #[error("weight `{raw}` is not a non-negative integer")]
    InvalidWeight {
        /// The offending field.
        raw: String,
    },
    /// The id is not an integer.
    #[error("id `{raw}` is not an integer")]
    InvalidId {
        /// The offending field.
        raw: String,
    },
}

/// A road line that was skipped, with where it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// The trimmed line.
    pub content: String,
    /// What was wrong with it.
    pub reason: SkipReason,
}

pub(crate) fn route_pair(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split('\t');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(start), Some(end), None) if !start.is_empty() && !end.is_empty() => {
            Some((start, end))
        }
        _ => None,
    }
}

pub(crate) fn road(line: &str) -> Result<Road, SkipReason> {
    let fields: Vec<&str> = line.split('\t').collect();
    let &[source, target, weight, id] = fields.as_slice() else {
        return Err(SkipReason::FieldCount {
            found: fields.len(),
        });
    };
    let weight: Weight = weight.trim().parse().map_err(|_| SkipReason::InvalidWeight {
        raw: weight.to_owned(),
    })?;
    let id: i64 = id.trim().parse().map_err(|_| SkipReason::InvalidId { raw: id.to_owned() })?;
    Ok(Road::new(source, target, weight, EdgeId::new(id)))
}
