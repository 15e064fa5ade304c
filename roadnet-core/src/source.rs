//! Road source abstractions for the roadnet core.

use std::sync::Arc;

use crate::road::Road;

/// Anything that can describe a road map to analyse: a route request and the
/// roads of the map.
///
/// # Examples
/// ```
/// use roadnet_core::{EdgeId, Road, RoadSource};
///
/// struct Corridor(Vec<Road>);
///
/// impl RoadSource for Corridor {
///     fn name(&self) -> &str { "corridor" }
///     fn start(&self) -> &str { "A" }
///     fn end(&self) -> &str { "C" }
///     fn roads(&self) -> &[Road] { &self.0 }
/// }
///
/// let source = Corridor(vec![
///     Road::new("A", "B", 1, EdgeId::new(1)),
///     Road::new("B", "C", 1, EdgeId::new(2)),
/// ]);
/// assert_eq!(source.roads().len(), 2);
/// assert_eq!(source.name(), "corridor");
/// ```
pub trait RoadSource {
    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns the label of the point the route starts from.
    fn start(&self) -> &str;

    /// Returns the label of the point the route should reach.
    fn end(&self) -> &str;

    /// Returns the roads of the map in their original order.
    fn roads(&self) -> &[Road];
}

/// In-memory [`RoadSource`].
///
/// # Examples
/// ```
/// use roadnet_core::{EdgeId, Road, RoadMap, RoadSource};
///
/// let map = RoadMap::new("inline", "A", "B", vec![Road::new("A", "B", 5, EdgeId::new(1))]);
/// assert_eq!((map.start(), map.end()), ("A", "B"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoadMap {
    name: Arc<str>,
    start: Arc<str>,
    end: Arc<str>,
    roads: Vec<Road>,
}

impl RoadMap {
    /// Creates a map from a route request and its roads.
    #[must_use]
    pub fn new(
        name: impl Into<Arc<str>>,
        start: impl Into<Arc<str>>,
        end: impl Into<Arc<str>>,
        roads: Vec<Road>,
    ) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
            roads,
        }
    }

    /// Consumes the map and returns its roads.
    #[must_use]
    pub fn into_roads(self) -> Vec<Road> {
        self.roads
    }
}

impl RoadSource for RoadMap {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }

    fn roads(&self) -> &[Road] {
        &self.roads
    }
}
