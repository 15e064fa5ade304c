//! The outcome of one map analysis.

use std::sync::Arc;

use crate::{
    ratio::Ratio, road::Weight, shortest_path::Route, spanning::SpanningSubgraph,
};

/// Everything [`crate::MapAnalyzer`] measured for one map.
///
/// "Original" values describe the map as supplied; "reduced" values describe
/// its barely connected map rooted at the start point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnalysisReport {
    pub(crate) start: Arc<str>,
    pub(crate) end: Arc<str>,
    pub(crate) original_route: Route,
    pub(crate) original_total: Weight,
    pub(crate) barely_connected: SpanningSubgraph,
    pub(crate) reduced_route: Route,
    pub(crate) reduced_total: Weight,
    pub(crate) material_ratio: Ratio,
    pub(crate) route_ratio: Ratio,
}

impl AnalysisReport {
    /// Returns the label of the start point.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> &str { &self.start }

    /// Returns the label of the end point.
    #[must_use]
    #[rustfmt::skip]
    pub fn end(&self) -> &str { &self.end }

    /// Returns the fastest route on the original map.
    #[must_use]
    #[rustfmt::skip]
    pub fn original_route(&self) -> &Route { &self.original_route }

    /// Returns the total road length of the original map.
    #[must_use]
    #[rustfmt::skip]
    pub fn original_total(&self) -> Weight { self.original_total }

    /// Returns the barely connected map rooted at the start point.
    #[must_use]
    #[rustfmt::skip]
    pub fn barely_connected(&self) -> &SpanningSubgraph { &self.barely_connected }

    /// Returns the fastest route on the barely connected map.
    #[must_use]
    #[rustfmt::skip]
    pub fn reduced_route(&self) -> &Route { &self.reduced_route }

    /// Returns the total road length of the barely connected map.
    #[must_use]
    #[rustfmt::skip]
    pub fn reduced_total(&self) -> Weight { self.reduced_total }

    /// Returns reduced total length over original total length.
    #[must_use]
    #[rustfmt::skip]
    pub fn material_ratio(&self) -> Ratio { self.material_ratio }

    /// Returns reduced route length over original route length.
    #[must_use]
    #[rustfmt::skip]
    pub fn route_ratio(&self) -> Ratio { self.route_ratio }
}
