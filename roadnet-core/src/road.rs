//! Edge records describing the roads of a map.

use std::{fmt, sync::Arc};

/// Length of a road, in kilometres.
pub type Weight = u64;

/// Identifier tying a road back to its input record.
///
/// Ids are unique among the roads supplied by the caller. Derived structures
/// (reversed lanes, rebuilt graphs) reuse the id of the road they came from.
///
/// # Examples
/// ```
/// use roadnet_core::EdgeId;
///
/// let id = EdgeId::new(7);
/// assert_eq!(id.get(), 7);
/// assert!(EdgeId::new(2) < id);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(i64);

impl EdgeId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected road between two points, as recorded in the input.
///
/// The `source`/`target` order is the natural orientation of the record and is
/// preserved through every transformation so reports can print roads the way
/// they were supplied.
///
/// # Examples
/// ```
/// use roadnet_core::{EdgeId, Road};
///
/// let road = Road::new("A", "B", 5, EdgeId::new(1));
/// assert_eq!(road.source(), "A");
/// assert_eq!(road.target(), "B");
/// assert_eq!(road.weight(), 5);
/// assert_eq!(road.id(), EdgeId::new(1));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Road {
    source: Arc<str>,
    target: Arc<str>,
    weight: Weight,
    id: EdgeId,
}

impl Road {
    /// Creates a road record.
    #[must_use]
    pub fn new(
        source: impl Into<Arc<str>>,
        target: impl Into<Arc<str>>,
        weight: Weight,
        id: EdgeId,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            id,
        }
    }

    /// Returns the first endpoint as recorded.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &str { &self.source }

    /// Returns the second endpoint as recorded.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> &str { &self.target }

    /// Returns the road length.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns the road identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> EdgeId { self.id }

    pub(crate) fn source_label(&self) -> &Arc<str> {
        &self.source
    }

    pub(crate) fn target_label(&self) -> &Arc<str> {
        &self.target
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} ({} KM, id {})",
            self.source, self.target, self.weight, self.id
        )
    }
}
